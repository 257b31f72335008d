use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Supported answer data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    ShortText,
    LongText,
    RichText,
    Integer,
    Currency,
    Link,
    Date,
    List,
}

impl ResponseType {
    /// Types whose answers are parsed as whole numbers before any bound or
    /// comparison rule applies.
    pub fn is_numeric(self) -> bool {
        matches!(self, ResponseType::Integer | ResponseType::Currency)
    }

    /// Types whose answers arrive in `multi_answer` slots rather than the
    /// single `answer` string. Dates use day/month/year slots; rich text
    /// carries the HTML body in slot 0 and a markdown copy in slot 1.
    pub fn uses_multi_answer(self) -> bool {
        matches!(
            self,
            ResponseType::RichText | ResponseType::Date | ResponseType::List
        )
    }
}

/// A rule tying one question's valid range to another answer on the same
/// page. `question_id` must name a question on the same page; the engine
/// does not search other pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComparedTo {
    pub question_id: String,
    #[serde(default)]
    pub greater_than: bool,
    #[serde(default)]
    pub less_than: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

/// Rules that can be enforced per question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ValidationRules {
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub is_url: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compared_to: Option<ComparedTo>,
}

/// Author-supplied overrides for the built-in error messages, one slot per
/// rule family. A `None` slot falls back to the hard-coded default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct CustomMessages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid: Option<String>,
}

/// Definition of a single question inside a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Question {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    #[serde(default)]
    pub validation: ValidationRules,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_messages: Option<CustomMessages>,
}
