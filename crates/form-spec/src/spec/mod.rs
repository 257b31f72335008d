pub mod definition;
pub mod question;

pub use definition::{Definition, Page, Section};
pub use question::{ComparedTo, CustomMessages, Question, ResponseType, ValidationRules};
