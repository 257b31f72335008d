//! Re-sequences collected violations to match submission order.
//!
//! Phase 1 collects into a map keyed by field path, which keeps the rule
//! chain free of ordering concerns but loses insertion order. This walk of
//! the submission's own question list restores a deterministic,
//! user-meaningful order, with the page-level completion violation last.

use std::collections::HashMap;

use crate::response::{FieldError, PageResponse};

use super::COMPLETED_FIELD;

const DATE_PARTS: [&str; 3] = ["day", "month", "year"];

pub(crate) fn sequence(
    submission: &PageResponse,
    mut violations: HashMap<String, String>,
) -> Vec<FieldError> {
    let mut ordered = Vec::with_capacity(violations.len());
    let completed = violations.remove(COMPLETED_FIELD);

    for response in &submission.questions {
        if let Some(message) = violations.remove(&response.id) {
            ordered.push(FieldError {
                field: response.id.clone(),
                message,
            });
        }
        for part in DATE_PARTS {
            let field = format!("{}-{part}", response.id);
            if let Some(message) = violations.remove(&field) {
                ordered.push(FieldError { field, message });
            }
        }
    }

    // Anything left matched no submitted question; keep it, sorted, so
    // nothing is silently dropped.
    let mut leftovers: Vec<_> = violations.into_iter().collect();
    leftovers.sort();
    ordered.extend(
        leftovers
            .into_iter()
            .map(|(field, message)| FieldError { field, message }),
    );

    if let Some(message) = completed {
        ordered.push(FieldError {
            field: COMPLETED_FIELD.into(),
            message,
        });
    }

    ordered
}
