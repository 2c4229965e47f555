//! Bridging `validator` results into [`AppError`].

use backoffice_core::AppError;
use backoffice_core::AppResult;
use validator::{Validate, ValidationErrors};

/// Run the derived field rules, turning the first failure into a
/// validation error.
pub fn check<T: Validate>(form: &T) -> AppResult<()> {
    form.validate().map_err(|errors| first_error(&errors))
}

/// Pick one message from a set of failures.
///
/// Fields are visited in name order so the same input always reports the
/// same message.
pub fn first_error(errors: &ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    for field in fields {
        if let Some(error) = field_errors.get(field).and_then(|list| list.first()) {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            return AppError::validation(message);
        }
    }

    AppError::validation("Form is invalid")
}

/// Whether a text field has non-whitespace content.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Field rule: reject empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("blank"))
    }
}
