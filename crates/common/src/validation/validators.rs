// Field Validators - the shared trait the concrete validators plug into
use super::email::EmailValidator;
use super::password::PasswordValidator;

/// Trait for field validators
///
/// The error string is the human-readable reason shown next to the field.
pub trait FieldValidator<T> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        self.check(value.as_str()).map_err(|rejection| rejection.to_string())
    }
}

impl FieldValidator<&str> for EmailValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        self.check(*value).map_err(|rejection| rejection.to_string())
    }
}

impl FieldValidator<String> for PasswordValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        self.check(value.as_str()).map(|_| ()).map_err(|rejection| rejection.to_string())
    }
}

impl FieldValidator<&str> for PasswordValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        self.check(*value).map(|_| ()).map_err(|rejection| rejection.to_string())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for validation::validators.
    use super::*;

    /// Validates the email validator through the generic trait.
    ///
    /// Assertions:
    /// - Ensures a well-formed address passes for both `String` and `&str`.
    /// - Ensures the rejection reason is surfaced as the error string.
    #[test]
    fn email_validator_through_field_validator() {
        let validator = EmailValidator::new();

        assert!(validator.validate(&"user@example.com".to_string()).is_ok());
        assert!(validator.validate(&"user.name+tag@example.co.uk").is_ok());
        assert_eq!(
            validator.validate(&"user..name@example.com"),
            Err("email cannot contain consecutive dots".to_string())
        );
    }

    /// Validates the password validator through the generic trait.
    ///
    /// Assertions:
    /// - Ensures a six-character password passes.
    /// - Ensures a short password reports the minimum length.
    #[test]
    fn password_validator_through_field_validator() {
        let validator = PasswordValidator::new();

        assert!(validator.validate(&"abcdef".to_string()).is_ok());
        assert_eq!(
            validator.validate(&"abc"),
            Err("password must be at least 6 characters".to_string())
        );
    }

    /// Validates that validators can be used as trait objects.
    #[test]
    fn validators_are_object_safe() {
        let validators: Vec<Box<dyn FieldValidator<String>>> =
            vec![Box::new(EmailValidator::new()), Box::new(PasswordValidator::new())];

        let failures = validators
            .iter()
            .filter(|v| v.validate(&"ok@ok.com".to_string()).is_err())
            .count();
        assert_eq!(failures, 0);
    }
}
