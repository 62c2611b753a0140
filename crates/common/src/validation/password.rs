//! Password length checks with an advisory strength rating.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest password accepted by default
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest password accepted by default
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Advisory strength of an accepted password. Never a reason to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// Long enough, but lacks either a letter or a digit
    Medium,
    /// Contains at least one ASCII letter and one ASCII digit
    Strong,
}

impl PasswordStrength {
    fn classify(password: &str) -> Self {
        let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if has_letter && has_digit {
            Self::Strong
        } else {
            Self::Medium
        }
    }

    /// Lowercase label, as shown to users
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a password was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PasswordRejection {
    /// Absent or empty
    #[error("password cannot be empty")]
    Empty,
    /// Fewer characters than the configured minimum
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Configured minimum length
        min: usize,
    },
    /// More characters than the configured maximum
    #[error("password is too long (max {max} characters)")]
    TooLong {
        /// Configured maximum length
        max: usize,
    },
}

impl PasswordRejection {
    /// Stable machine-readable code for the rejection
    pub const fn code(self) -> &'static str {
        match self {
            Self::Empty => "password_empty",
            Self::TooShort { .. } => "password_too_short",
            Self::TooLong { .. } => "password_too_long",
        }
    }
}

/// Outcome of a password check, ready to hand to the form layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCheck {
    /// Whether the password was accepted
    pub is_valid: bool,
    /// Rejection reason, or `"password is valid"`
    pub message: String,
    /// Advisory strength, present only when accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<PasswordStrength>,
}

impl PasswordCheck {
    fn rejected(rejection: PasswordRejection) -> Self {
        Self { is_valid: false, message: rejection.to_string(), strength: None }
    }

    fn accepted(strength: PasswordStrength) -> Self {
        Self { is_valid: true, message: "password is valid".to_string(), strength: Some(strength) }
    }
}

/// Password validator with configurable length bounds
///
/// ```rust
/// use anamnese_common::validation::{PasswordStrength, PasswordValidator};
///
/// let validator = PasswordValidator::new();
/// assert_eq!(validator.check("abc123"), Ok(PasswordStrength::Strong));
/// assert!(!validator.evaluate("abc").is_valid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordValidator {
    min_length: usize,
    max_length: usize,
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordValidator {
    /// Create a validator with the default 6..=128 character bounds
    #[must_use]
    pub fn new() -> Self {
        Self { min_length: MIN_PASSWORD_LENGTH, max_length: MAX_PASSWORD_LENGTH }
    }

    /// Set minimum length
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Set maximum length
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Check a password, returning its strength when accepted
    ///
    /// Length is counted in characters and the value is not trimmed.
    ///
    /// # Errors
    /// Returns a [`PasswordRejection`] when the password is absent, empty or
    /// outside the length bounds.
    pub fn check<'a>(
        &self,
        password: impl Into<Option<&'a str>>,
    ) -> Result<PasswordStrength, PasswordRejection> {
        let password = match password.into() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(PasswordRejection::Empty),
        };

        let length = password.chars().count();
        if length < self.min_length {
            return Err(PasswordRejection::TooShort { min: self.min_length });
        }
        if length > self.max_length {
            return Err(PasswordRejection::TooLong { max: self.max_length });
        }

        Ok(PasswordStrength::classify(password))
    }

    /// Check a password and package the outcome as a [`PasswordCheck`]
    pub fn evaluate<'a>(&self, password: impl Into<Option<&'a str>>) -> PasswordCheck {
        match self.check(password) {
            Ok(strength) => PasswordCheck::accepted(strength),
            Err(rejection) => PasswordCheck::rejected(rejection),
        }
    }
}
