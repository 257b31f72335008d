#![allow(missing_docs)]

pub mod messages;
pub mod response;
pub mod richtext;
pub mod spec;
pub mod validate;

pub use messages::MessageKey;
pub use response::{FieldError, PageResponse, PageStatus, QuestionResponse, ValidationResult};
pub use richtext::{RichTextError, html_to_plain};
pub use spec::{
    ComparedTo, CustomMessages, Definition, Page, Question, ResponseType, Section, ValidationRules,
};
pub use validate::{APPLICATION_DATES_SECTION, ValidateError, validate_page};
