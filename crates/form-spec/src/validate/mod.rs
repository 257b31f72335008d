//! Page-level validation: resolves the submitted page against the
//! definition, runs the rule chain over every answered question and
//! returns the violations in submission order.

mod date;
mod order;
mod rules;

use std::collections::HashMap;

use thiserror::Error;

use crate::messages;
use crate::response::{PageResponse, ValidationResult};
use crate::richtext::RichTextError;
use crate::spec::definition::Definition;

/// The one section whose page holds the two linked application-date
/// questions (opening first, closing second, in definition order).
pub const APPLICATION_DATES_SECTION: &str = "applicationDates";

/// Field path of the page-level completion violation.
pub(crate) const COMPLETED_FIELD: &str = "completed";

/// Failures that abort a validation call outright. Field violations are
/// never surfaced here; they are data in the `ValidationResult`.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("unknown page `{page}` in section `{section}`")]
    UnknownPage { section: String, page: String },
    #[error("rich text conversion failed: {0}")]
    RichText(#[from] RichTextError),
}

/// Validates one submitted page against the definition.
///
/// Answers whose id matches no question on the page are ignored. Each
/// question reports at most one violation: the rule chain short-circuits
/// on the first failure. A submission with no completion status gains a
/// final violation at the `"completed"` field.
pub fn validate_page(
    definition: &Definition,
    section_id: &str,
    submission: &PageResponse,
) -> Result<ValidationResult, ValidateError> {
    let section = definition
        .section(section_id)
        .ok_or_else(|| ValidateError::UnknownSection(section_id.to_string()))?;
    let page = section
        .page(&submission.id)
        .ok_or_else(|| ValidateError::UnknownPage {
            section: section_id.to_string(),
            page: submission.id.clone(),
        })?;

    // Phase 1: collect violations keyed by field path. The map is
    // unordered; submission order is restored in phase 2.
    let mut violations: HashMap<String, String> = HashMap::new();

    if section_id == APPLICATION_DATES_SECTION {
        date::check_page(page, submission, &mut violations);
    } else {
        for response in &submission.questions {
            let Some(question) = page.question(&response.id) else {
                continue;
            };
            if let Some((field, message)) = rules::evaluate(page, submission, question, response)? {
                violations.insert(field, message);
            }
        }
    }

    if submission.status.is_none() {
        violations.insert(COMPLETED_FIELD.into(), messages::PAGE_NOT_COMPLETED.into());
    }

    let field_errors = order::sequence(submission, violations);
    Ok(ValidationResult {
        valid: field_errors.is_empty(),
        field_errors,
    })
}
