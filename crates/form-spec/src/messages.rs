//! Built-in error messages and the per-question override lookup.

use crate::spec::question::{CustomMessages, Question};

pub const MANDATORY: &str = "You must enter an answer";
pub const MANDATORY_DATE: &str = "You must enter a date";
pub const VALID_LINK: &str = "You must enter a valid link";
pub const FULL_LINK: &str = "You must enter the full link, not a shortened link";
pub const NUMBERS_ONLY: &str = "You must only enter numbers";
pub const LINKED_QUESTION_MISSING: &str = "Unable to find the question this answer is compared to";
pub const LINKED_QUESTION_CYCLE: &str = "The questions this answer is compared to form a loop";
pub const PAGE_NOT_COMPLETED: &str = "Select yes if you have completed this page";
pub const CLOSING_BEFORE_OPENING: &str =
    "The closing date must be later than the opening date";

/// Identifies the rule family a message belongs to, used to pick the
/// matching `CustomMessages` override slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Mandatory,
    MinLength,
    MaxLength,
    Url,
    GreaterThan,
    LessThan,
    MissingField,
    Invalid,
}

impl CustomMessages {
    fn get(&self, key: MessageKey) -> Option<&str> {
        match key {
            MessageKey::Mandatory => self.mandatory.as_deref(),
            MessageKey::MinLength => self.min_length.as_deref(),
            MessageKey::MaxLength => self.max_length.as_deref(),
            MessageKey::Url => self.url.as_deref(),
            MessageKey::GreaterThan => self.greater_than.as_deref(),
            MessageKey::LessThan => self.less_than.as_deref(),
            MessageKey::MissingField => self.missing_field.as_deref(),
            MessageKey::Invalid => self.invalid.as_deref(),
        }
    }
}

/// Resolves the message for a rule family: the question's override if one
/// is attached and populated, otherwise the supplied default.
pub(crate) fn resolve(question: &Question, key: MessageKey, default: String) -> String {
    question
        .custom_messages
        .as_ref()
        .and_then(|messages| messages.get(key))
        .map(str::to_owned)
        .unwrap_or(default)
}

pub(crate) fn min_length_default(min: usize) -> String {
    format!("Answer must be {min} characters or more")
}

pub(crate) fn max_length_default(max: usize) -> String {
    format!("Answer must be {max} characters or less")
}

pub(crate) fn greater_than_default(bound: impl std::fmt::Display) -> String {
    format!("Answer must be higher than {bound}")
}

pub(crate) fn less_than_default(bound: impl std::fmt::Display) -> String {
    format!("Answer must be lower than {bound}")
}

pub(crate) fn missing_date_parts_default(parts: &[&str]) -> String {
    format!("Date must include a {}", join_parts(parts))
}

pub(crate) fn invalid_date_parts_default(parts: &[&str]) -> String {
    format!("Date must include a valid {}", join_parts(parts))
}

/// Joins sub-field names with commas and "and", each with its article:
/// `["day", "month"]` becomes `day and a month`.
fn join_parts(parts: &[&str]) -> String {
    match parts {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and a {last}", init.join(", a ")),
    }
}
