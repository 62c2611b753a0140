// Form Validation - aggregate checks for the login and registration forms
use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::email::EmailValidator;
use super::password::{PasswordCheck, PasswordValidator};
use super::{ValidationError, ValidationResult};

/// Message reported when the confirmation differs from the password
pub const PASSWORDS_DO_NOT_MATCH: &str = "passwords do not match";

const PASSWORDS_DO_NOT_MATCH_CODE: &str = "passwords_do_not_match";

/// A field the form validator knows how to check
///
/// Ordering follows the on-screen order, which is also the order
/// [`FormReport::first_error`] walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// `email`
    Email,
    /// `password`
    Password,
    /// `confirmPassword`
    ConfirmPassword,
}

impl FormField {
    /// Wire name of the field
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submitted form values
///
/// `None` means the form has no such field and it is skipped. `Some("")`
/// means the field exists but was left blank, which is checked and rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    /// Email address as typed
    pub email: Option<String>,
    /// Password as typed
    pub password: Option<String>,
    /// Password confirmation as typed
    pub confirm_password: Option<String>,
}

impl FormFields {
    /// Form with no fields
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Login form: email and password
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new().with_email(email).with_password(password)
    }

    /// Registration form: email, password and its confirmation
    pub fn registration(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self::login(email, password).with_confirm_password(confirm_password)
    }

    /// Set the email field
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the password field
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the confirmation field
    #[must_use]
    pub fn with_confirm_password(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = Some(confirm_password.into());
        self
    }
}

/// Outcome of [`FormValidator::validate_form`]
///
/// Holds one message per failed field; fields that passed or were omitted
/// have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    errors: BTreeMap<FormField, String>,
    codes: BTreeMap<FormField, &'static str>,
}

impl FormReport {
    fn reject(&mut self, field: FormField, message: impl Into<String>, code: &'static str) {
        self.errors.insert(field, message.into());
        self.codes.insert(field, code);
    }

    /// True when no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed fields and their messages, in field order
    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }

    /// Message for `field`, if it failed
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether `field` failed
    pub fn has_error(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Message for the first failed field in on-screen order
    pub fn first_error(&self) -> Option<&str> {
        self.errors.values().next().map(String::as_str)
    }

    /// Number of failed fields
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Convert into the shared validation result so callers can use `?`
    ///
    /// # Errors
    /// Returns a [`ValidationError`] with one coded entry per failed field.
    pub fn into_result(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }

        let mut err = ValidationError::new();
        for (field, message) in self.errors {
            match self.codes.get(&field) {
                Some(code) => err.add_error_with_code(field.as_str(), message, *code),
                None => err.add_field_error(field.as_str(), message),
            }
        }
        Err(err)
    }
}

impl Serialize for FormReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormReport", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

/// Validates passwords and whole forms
///
/// ```rust
/// use anamnese_common::validation::{FormField, FormFields, FormValidator};
///
/// let validator = FormValidator::new();
/// let report = validator.validate_form(&FormFields::registration("a@b.co", "abc123", "abc124"));
///
/// assert!(!report.is_valid());
/// assert_eq!(report.error(FormField::ConfirmPassword), Some("passwords do not match"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator {
    email: EmailValidator,
    password: PasswordValidator,
}

impl FormValidator {
    /// Validator with the default email and password rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a differently configured password validator
    #[must_use]
    pub fn with_password_validator(mut self, password: PasswordValidator) -> Self {
        self.password = password;
        self
    }

    /// The email validator used for the `email` field
    pub fn email_validator(&self) -> &EmailValidator {
        &self.email
    }

    /// Check a single password
    pub fn validate_password<'a>(&self, password: impl Into<Option<&'a str>>) -> PasswordCheck {
        self.password.evaluate(password)
    }

    /// Strict equality, no trimming or case folding
    pub fn passwords_match(&self, password: &str, confirm_password: &str) -> bool {
        password == confirm_password
    }

    /// Check every present field and collect the failures
    ///
    /// The confirmation is only compared when the password is present too.
    pub fn validate_form(&self, fields: &FormFields) -> FormReport {
        let mut report = FormReport::default();

        if let Some(email) = fields.email.as_deref() {
            if let Err(rejection) = self.email.check(email) {
                report.reject(FormField::Email, rejection.to_string(), rejection.code());
            }
        }

        if let Some(password) = fields.password.as_deref() {
            if let Err(rejection) = self.password.check(password) {
                report.reject(FormField::Password, rejection.to_string(), rejection.code());
            }
        }

        if let (Some(password), Some(confirm)) =
            (fields.password.as_deref(), fields.confirm_password.as_deref())
        {
            if !self.passwords_match(password, confirm) {
                report.reject(
                    FormField::ConfirmPassword,
                    PASSWORDS_DO_NOT_MATCH,
                    PASSWORDS_DO_NOT_MATCH_CODE,
                );
            }
        }

        report
    }
}
