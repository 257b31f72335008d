//! The generic rule chain: mandatory, length, URL shape, numeric bounds
//! and cross-field comparison, in that order, first failure wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::messages::{self, MessageKey};
use crate::response::{PageResponse, QuestionResponse};
use crate::richtext::{self, RichTextError};
use crate::spec::definition::Page;
use crate::spec::question::{ComparedTo, Question, ResponseType};

/// A field path plus the message to show against it.
pub(crate) type Violation = (String, String);

static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(http|https)://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{2,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*$",
    )
    .expect("url pattern compiles")
});

/// Domains that hide the real destination behind a redirect. Links to
/// these are rejected even though they match the URL shape.
const LINK_SHORTENERS: [&str; 3] = ["bit.ly", "tinyurl", "ow.ly"];

/// Runs the full chain for one question, returning its violation if any.
pub(crate) fn evaluate(
    page: &Page,
    submission: &PageResponse,
    question: &Question,
    response: &QuestionResponse,
) -> Result<Option<Violation>, RichTextError> {
    if is_empty(question, response) {
        if question.validation.mandatory {
            let message =
                messages::resolve(question, MessageKey::Mandatory, messages::MANDATORY.into());
            return Ok(Some(violation(question, message)));
        }
        // Optional and unanswered: no further rules apply.
        return Ok(None);
    }

    if let Some(found) = check_length(question, response)? {
        return Ok(Some(found));
    }

    if question.validation.is_url
        && let Some(found) = check_url(question, response)
    {
        return Ok(Some(found));
    }

    if question.response_type.is_numeric() {
        let Some(value) = parse_whole_number(response.answer_text()) else {
            // Fixed message: a parse failure is not customisable and
            // applies whether or not any bound rule is set.
            return Ok(Some(violation(question, messages::NUMBERS_ONLY.into())));
        };
        if let Some(found) = check_bounds(question, value) {
            return Ok(Some(found));
        }
        if let Some(rule) = &question.validation.compared_to {
            return compare(page, submission, question, rule, value);
        }
    }

    Ok(None)
}

fn violation(question: &Question, message: String) -> Violation {
    (question.id.clone(), message)
}

fn is_empty(question: &Question, response: &QuestionResponse) -> bool {
    if question.response_type == ResponseType::RichText {
        // Slot 1 is the internally generated markdown copy; emptiness is
        // judged on the HTML body alone.
        return response.slot(0).trim().is_empty();
    }
    let single_blank = response.answer_text().trim().is_empty();
    let multi_blank = response
        .multi_answer
        .as_deref()
        .is_none_or(|slots| slots.iter().all(|slot| slot.trim().is_empty()));
    single_blank && multi_blank
}

fn check_length(
    question: &Question,
    response: &QuestionResponse,
) -> Result<Option<Violation>, RichTextError> {
    let rules = &question.validation;
    if rules.min_length.is_none() && rules.max_length.is_none() {
        return Ok(None);
    }

    // Rich text is measured on the visible text, not the markup.
    let measured = if question.response_type == ResponseType::RichText {
        richtext::html_to_plain(response.slot(0))?
    } else {
        response.answer_text().to_string()
    };
    let length = measured.chars().count();

    if let Some(min) = rules.min_length
        && length < min
    {
        let message = messages::resolve(
            question,
            MessageKey::MinLength,
            messages::min_length_default(min),
        );
        return Ok(Some(violation(question, message)));
    }
    if let Some(max) = rules.max_length
        && length > max
    {
        let message = messages::resolve(
            question,
            MessageKey::MaxLength,
            messages::max_length_default(max),
        );
        return Ok(Some(violation(question, message)));
    }
    Ok(None)
}

fn check_url(question: &Question, response: &QuestionResponse) -> Option<Violation> {
    let answer = response.answer_text().trim();
    if !URL_SHAPE.is_match(answer) {
        let message = messages::resolve(question, MessageKey::Url, messages::VALID_LINK.into());
        return Some(violation(question, message));
    }
    if is_shortened(answer) {
        // Always the fixed message; custom overrides do not apply here.
        return Some(violation(question, messages::FULL_LINK.into()));
    }
    None
}

fn is_shortened(url: &str) -> bool {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let host = rest.split(['/', '?']).next().unwrap_or(rest);
    let host = host.to_ascii_lowercase();
    LINK_SHORTENERS.iter().any(|name| host.contains(name))
}

/// Whole numbers only: decimals and separators are rejected.
fn parse_whole_number(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

fn check_bounds(question: &Question, value: i64) -> Option<Violation> {
    let rules = &question.validation;
    if let Some(bound) = rules.greater_than
        && value <= bound
    {
        let message = messages::resolve(
            question,
            MessageKey::GreaterThan,
            messages::greater_than_default(bound),
        );
        return Some(violation(question, message));
    }
    if let Some(bound) = rules.less_than
        && value >= bound
    {
        let message = messages::resolve(
            question,
            MessageKey::LessThan,
            messages::less_than_default(bound),
        );
        return Some(violation(question, message));
    }
    None
}

/// Follows the chain of linked questions starting from `question`. A
/// repeated id means the comparisons loop instead of forming a DAG, which
/// is a form-authoring bug the recursive evaluation must not walk into.
fn has_comparison_cycle(page: &Page, question: &Question, rule: &ComparedTo) -> bool {
    let mut seen = vec![question.id.as_str()];
    let mut next = Some(rule.question_id.as_str());
    while let Some(id) = next {
        if seen.contains(&id) {
            return true;
        }
        seen.push(id);
        next = page
            .question(id)
            .and_then(|linked| linked.validation.compared_to.as_ref())
            .map(|linked_rule| linked_rule.question_id.as_str());
    }
    false
}

fn compare(
    page: &Page,
    submission: &PageResponse,
    question: &Question,
    rule: &ComparedTo,
    value: i64,
) -> Result<Option<Violation>, RichTextError> {
    let Some(target) = page.question(&rule.question_id) else {
        // Bad form authoring, reported against the referencing question.
        return Ok(Some(violation(
            question,
            messages::LINKED_QUESTION_MISSING.into(),
        )));
    };

    if has_comparison_cycle(page, question, rule) {
        return Ok(Some(violation(
            question,
            messages::LINKED_QUESTION_CYCLE.into(),
        )));
    }

    let Some(target_response) = submission
        .questions
        .iter()
        .find(|candidate| candidate.id == rule.question_id)
    else {
        return Ok(None);
    };

    // The target must hold up under its own rules before it can anchor a
    // comparison; otherwise the comparison is skipped rather than
    // compounding errors.
    if evaluate(page, submission, target, target_response)?.is_some() {
        return Ok(None);
    }

    // A blank or non-numeric target (an optional question, say) makes the
    // comparison inapplicable, not wrong.
    let Some(target_value) = parse_whole_number(target_response.answer_text()) else {
        return Ok(None);
    };

    let raw = target_response.answer_text().trim();
    if rule.greater_than && value <= target_value {
        let message = rule
            .custom_message
            .clone()
            .unwrap_or_else(|| messages::greater_than_default(raw));
        return Ok(Some(violation(question, message)));
    }
    if rule.less_than && value >= target_value {
        let message = rule
            .custom_message
            .clone()
            .unwrap_or_else(|| messages::less_than_default(raw));
        return Ok(Some(violation(question, message)));
    }
    Ok(None)
}
