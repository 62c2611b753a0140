//! Email, password and form validation for the intake flows

use std::fmt;

mod email;
mod form;
mod password;
mod validators;

pub use email::{EmailRejection, EmailValidator, MAX_EMAIL_LENGTH, MAX_LOCAL_PART_LENGTH};
pub use form::{FormField, FormFields, FormReport, FormValidator, PASSWORDS_DO_NOT_MATCH};
pub use password::{
    PasswordCheck, PasswordRejection, PasswordStrength, PasswordValidator, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use validators::FieldValidator;

use crate::error::CommonError;

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    /// Failed fields in the order they were added
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Add a field error with code
    pub fn add_error_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors.push(FieldError::new(field, message).with_code(code));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "Validation failed: {}", self.errors[0].message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for CommonError {
    fn from(err: ValidationError) -> Self {
        match err.errors.as_slice() {
            [single] => CommonError::validation(single.field.clone(), single.message.clone()),
            _ => CommonError::validation("form", err.to_string()),
        }
    }
}

/// One rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field, e.g. `confirmPassword`
    pub field: String,
    /// Human-readable reason shown next to the field
    pub message: String,
    /// Stable machine-readable code, e.g. `email_consecutive_dots`
    pub code: Option<String>,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), code: None }
    }

    /// Set error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for validation.
    use super::*;

    /// Validates the multi-error display format.
    ///
    /// Assertions:
    /// - Ensures every failed field is listed with its message.
    #[test]
    fn display_lists_every_field_when_several_fail() {
        let mut err = ValidationError::new();
        err.add_field_error("email", "email cannot be empty");
        err.add_field_error("password", "password cannot be empty");

        assert_eq!(
            err.to_string(),
            "Validation failed with 2 errors: email: email cannot be empty; password: password \
             cannot be empty"
        );
    }

    #[test]
    fn single_field_error_converts_to_field_scoped_common_error() {
        let mut err = ValidationError::new();
        err.add_field_error("email", "email format is not valid");
        let common = CommonError::from(err);

        assert_eq!(common, CommonError::validation("email", "email format is not valid"));
    }

    #[test]
    fn codes_are_kept_in_insertion_order() {
        let mut err = ValidationError::new();
        err.add_field_error("email", "bad");
        err.add_error_with_code("password", "short", "password_too_short");

        assert_eq!(err.error_count(), 2);
        assert_eq!(err.errors[0].code, None);
        assert_eq!(err.errors[1].code.as_deref(), Some("password_too_short"));
    }

    #[test]
    fn empty_error_has_generic_display() {
        let err = ValidationError::new();
        assert!(err.is_empty());
        assert_eq!(err.to_string(), "Validation error with no specific field errors");
    }
}
