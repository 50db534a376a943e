//! Input validation rules for tryout and question payloads.
//!
//! Payload types implement [`Validate`] so the HTTP layer can reject bad
//! input before any store call or lock check happens.

use crate::error::CoreError;

/// Shortest allowed tryout, in minutes.
pub const MIN_DURATION_MINUTES: i32 = 1;

/// Implemented by every inbound payload that carries field-level rules.
pub trait Validate {
    fn validate(&self) -> Result<(), CoreError>;
}

/// Validate that a required text field is present and not just whitespace.
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that a tryout duration is at least [`MIN_DURATION_MINUTES`].
pub fn validate_duration(duration: i32) -> Result<(), CoreError> {
    if duration < MIN_DURATION_MINUTES {
        return Err(CoreError::Validation(format!(
            "duration must be >= {MIN_DURATION_MINUTES}, got {duration}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- validate_required_text ---------------------------------------------

    #[test]
    fn accepts_non_empty_text() {
        assert!(validate_required_text("title", "Quiz").is_ok());
    }

    #[test]
    fn rejects_empty_text() {
        assert_matches!(
            validate_required_text("title", ""),
            Err(CoreError::Validation(msg)) if msg == "title must not be empty"
        );
    }

    #[test]
    fn rejects_whitespace_only_text() {
        assert!(validate_required_text("category", "  \t ").is_err());
    }

    // -- validate_duration ---------------------------------------------------

    #[test]
    fn duration_one_accepted() {
        assert!(validate_duration(1).is_ok());
    }

    #[test]
    fn duration_zero_rejected() {
        assert_matches!(validate_duration(0), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_duration_rejected() {
        assert!(validate_duration(-15).is_err());
    }

    #[test]
    fn large_duration_accepted() {
        assert!(validate_duration(600).is_ok());
    }
}
