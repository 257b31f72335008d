use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Completion state a caller attaches to a submitted page. A submission
/// with no status at all fails the page-level completion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// A single submitted answer.
///
/// Exactly one of `answer`/`multi_answer` is meaningful for a given
/// question type: date, list and rich-text answers arrive as slots in
/// `multi_answer`, everything else as the single `answer` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_answer: Option<Vec<String>>,
}

impl QuestionResponse {
    /// Answer with a single value.
    pub fn single(id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            answer: Some(answer.into()),
            multi_answer: None,
        }
    }

    /// Answer with multiple value slots.
    pub fn multi(id: impl Into<String>, slots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            answer: None,
            multi_answer: Some(slots.into_iter().map(Into::into).collect()),
        }
    }

    /// The single answer, or `""` when absent.
    pub fn answer_text(&self) -> &str {
        self.answer.as_deref().unwrap_or("")
    }

    /// The multi-answer slot at `index`, or `""` when absent.
    pub fn slot(&self, index: usize) -> &str {
        self.multi_answer
            .as_deref()
            .and_then(|slots| slots.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One submitted page of answers plus its completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PageResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PageStatus>,
    #[serde(default)]
    pub questions: Vec<QuestionResponse>,
}

/// A single field violation, addressable by the input it belongs to.
///
/// `field` is a bare question id, a `"{id}-{day|month|year}"` composite for
/// date sub-fields, or the literal `"completed"` for the page-level check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Result returned from `validate_page`. `field_errors` is ordered to match
/// the submission's question order, with `"completed"` last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}
