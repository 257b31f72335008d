//! The application-dates page: per-field day/month/year checks plus the
//! opening/closing ordering check.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::messages::{self, MessageKey};
use crate::response::{PageResponse, QuestionResponse};
use crate::spec::definition::Page;
use crate::spec::question::{Question, ResponseType};

const PART_NAMES: [&str; 3] = ["day", "month", "year"];

enum DateOutcome {
    Valid(NaiveDate),
    Violation(String, String),
    Unanswered,
}

/// Checks both date questions individually, then their relative order.
/// The ordering check only runs once neither question has a violation of
/// its own, so one bad date never produces two errors.
pub(crate) fn check_page(
    page: &Page,
    submission: &PageResponse,
    violations: &mut HashMap<String, String>,
) {
    let mut parsed: Vec<(&str, NaiveDate)> = Vec::new();
    for response in &submission.questions {
        let Some(question) = page.question(&response.id) else {
            continue;
        };
        if question.response_type != ResponseType::Date {
            continue;
        }
        match check_date(question, response) {
            DateOutcome::Valid(date) => parsed.push((question.id.as_str(), date)),
            DateOutcome::Violation(field, message) => {
                violations.insert(field, message);
            }
            DateOutcome::Unanswered => {}
        }
    }

    if !violations.is_empty() {
        return;
    }

    // Opening first, closing second, in definition order.
    let (Some(opening_q), Some(closing_q)) = (page.questions.first(), page.questions.get(1))
    else {
        return;
    };
    let find = |id: &str| {
        parsed
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, date)| *date)
    };
    let (Some(opening), Some(closing)) = (find(&opening_q.id), find(&closing_q.id)) else {
        return;
    };

    // Applications open at one minute past midnight and close at one
    // minute to midnight.
    if let (Some(opens_at), Some(closes_at)) = (
        opening.and_hms_opt(0, 1, 0),
        closing.and_hms_opt(23, 59, 0),
    ) && closes_at <= opens_at
    {
        violations.insert(
            part_field(closing_q, "day"),
            messages::CLOSING_BEFORE_OPENING.into(),
        );
    }
}

fn check_date(question: &Question, response: &QuestionResponse) -> DateOutcome {
    let day_text = response.slot(0).trim();
    let month_text = response.slot(1).trim();
    let year_text = response.slot(2).trim();
    let parts = [day_text, month_text, year_text];

    let blanks: Vec<&str> = PART_NAMES
        .iter()
        .zip(parts)
        .filter_map(|(name, text)| text.is_empty().then_some(*name))
        .collect();

    if blanks.len() == PART_NAMES.len() {
        if question.validation.mandatory {
            let message = messages::resolve(
                question,
                MessageKey::Mandatory,
                messages::MANDATORY_DATE.into(),
            );
            return DateOutcome::Violation(part_field(question, "day"), message);
        }
        return DateOutcome::Unanswered;
    }
    if let Some(first) = blanks.first() {
        let message = messages::resolve(
            question,
            MessageKey::MissingField,
            messages::missing_date_parts_default(&blanks),
        );
        return DateOutcome::Violation(part_field(question, first), message);
    }

    let day = day_text.parse::<u32>().ok().filter(|day| (1..=31).contains(day));
    let month = month_text
        .parse::<u32>()
        .ok()
        .filter(|month| (1..=12).contains(month));
    let year = (year_text.len() == 4 && year_text.bytes().all(|byte| byte.is_ascii_digit()))
        .then(|| year_text.parse::<i32>().ok())
        .flatten();

    let (Some(day), Some(month), Some(year)) = (day, month, year) else {
        let mut invalid = Vec::new();
        if day.is_none() {
            invalid.push("day");
        }
        if month.is_none() {
            invalid.push("month");
        }
        if year.is_none() {
            invalid.push("year");
        }
        let first = invalid.first().copied().unwrap_or("day");
        let message = messages::resolve(
            question,
            MessageKey::Invalid,
            messages::invalid_date_parts_default(&invalid),
        );
        return DateOutcome::Violation(part_field(question, first), message);
    };

    if day > days_in_month(month, year) {
        let message = messages::resolve(
            question,
            MessageKey::Invalid,
            messages::invalid_date_parts_default(&["day"]),
        );
        return DateOutcome::Violation(part_field(question, "day"), message);
    }

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => DateOutcome::Valid(date),
        None => {
            let message = messages::resolve(
                question,
                MessageKey::Invalid,
                messages::invalid_date_parts_default(&["day"]),
            );
            DateOutcome::Violation(part_field(question, "day"), message)
        }
    }
}

fn part_field(question: &Question, part: &str) -> String {
    format!("{}-{part}", question.id)
}

fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, is_leap_year};

    #[test]
    fn leap_years_follow_the_gregorian_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(1, 2023), 31);
        assert_eq!(days_in_month(4, 2023), 30);
        assert_eq!(days_in_month(2, 2023), 28);
        assert_eq!(days_in_month(2, 2024), 29);
    }
}
