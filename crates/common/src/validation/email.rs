//! Pragmatic email address validation.
//!
//! The rule set is deliberately simpler than RFC 5322: it rejects the
//! mistakes people actually make in a sign-up form (missing `@`, stray dots,
//! missing or one-letter TLD, absurd lengths) and accepts everything else.
//!
//! [`EmailValidator::is_valid`] and [`EmailValidator::error_message`] are both
//! projections of [`EmailValidator::check`], so they can never disagree about
//! validity.

use once_cell::sync::Lazy;
use thiserror::Error;

/// Maximum accepted length of a normalized address (RFC 5321)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum accepted length of the part before `@`
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

const MIN_TLD_LENGTH: usize = 2;

/// Structural shape: one `@`, no whitespace, at least one dot after the `@`.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("EMAIL_PATTERN pattern is valid and well-formed")
});

/// The first rule an address broke, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EmailRejection {
    /// Absent, empty or whitespace only
    #[error("email cannot be empty")]
    Empty,
    /// Longer than [`MAX_EMAIL_LENGTH`] characters
    #[error("email is too long (max 254 characters)")]
    TooLong,
    /// No `@`, or nothing before or after it
    #[error("email must contain a valid @")]
    MissingAt,
    /// Local part longer than [`MAX_LOCAL_PART_LENGTH`] characters
    #[error("the part of the email before @ is too long")]
    LocalPartTooLong,
    /// Local part starts or ends with `.`
    #[error("email cannot start or end with a dot")]
    DotAtBoundary,
    /// Local part contains `..`
    #[error("email cannot contain consecutive dots")]
    ConsecutiveDots,
    /// Whitespace, a second `@`, or no dot after the `@`
    #[error("email format is not valid")]
    InvalidFormat,
    /// Domain has a single label
    #[error("domain must contain at least one dot")]
    DomainMissingDot,
    /// Top-level domain shorter than two characters
    #[error("domain is not valid")]
    InvalidTld,
}

impl EmailRejection {
    /// Stable machine-readable code for the rejection
    pub const fn code(self) -> &'static str {
        match self {
            Self::Empty => "email_empty",
            Self::TooLong => "email_too_long",
            Self::MissingAt => "email_missing_at",
            Self::LocalPartTooLong => "email_local_part_too_long",
            Self::DotAtBoundary => "email_dot_at_boundary",
            Self::ConsecutiveDots => "email_consecutive_dots",
            Self::InvalidFormat => "email_invalid_format",
            Self::DomainMissingDot => "email_domain_missing_dot",
            Self::InvalidTld => "email_invalid_tld",
        }
    }
}

/// Email validator
///
/// Inputs are text or absent; absent input is treated like an empty field.
///
/// ```rust
/// use anamnese_common::validation::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.is_valid("user@example.com"));
/// assert!(!validator.is_valid(None::<&str>));
/// assert_eq!(validator.error_message("user..name@example.com"),
///            Some("email cannot contain consecutive dots".to_string()));
/// assert_eq!(validator.sanitize("  User@Example.COM "), "user@example.com");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }

    /// Check an address and report the first rule it breaks
    ///
    /// The caller's value is not modified; checks run against the trimmed,
    /// lowercased form.
    ///
    /// # Errors
    /// Returns the first [`EmailRejection`] in evaluation order.
    pub fn check<'a>(&self, email: impl Into<Option<&'a str>>) -> Result<(), EmailRejection> {
        let normalized = self.sanitize(email);
        if normalized.is_empty() {
            return Err(EmailRejection::Empty);
        }

        if normalized.chars().count() > MAX_EMAIL_LENGTH {
            return Err(EmailRejection::TooLong);
        }

        let (local_part, domain) = match normalized.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => (local, domain),
            _ => return Err(EmailRejection::MissingAt),
        };

        if local_part.chars().count() > MAX_LOCAL_PART_LENGTH {
            return Err(EmailRejection::LocalPartTooLong);
        }

        if local_part.starts_with('.') || local_part.ends_with('.') {
            return Err(EmailRejection::DotAtBoundary);
        }

        if local_part.contains("..") {
            return Err(EmailRejection::ConsecutiveDots);
        }

        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(EmailRejection::InvalidFormat);
        }

        let domain_parts: Vec<&str> = domain.split('.').collect();
        if domain_parts.len() < 2 {
            return Err(EmailRejection::DomainMissingDot);
        }

        let tld = domain_parts.last().copied().unwrap_or_default();
        if tld.chars().count() < MIN_TLD_LENGTH {
            return Err(EmailRejection::InvalidTld);
        }

        Ok(())
    }

    /// Whether the address is acceptable
    pub fn is_valid<'a>(&self, email: impl Into<Option<&'a str>>) -> bool {
        self.check(email).is_ok()
    }

    /// Human-readable reason the address is rejected, or `None` if it is valid
    pub fn error_message<'a>(&self, email: impl Into<Option<&'a str>>) -> Option<String> {
        self.check(email).err().map(|rejection| rejection.to_string())
    }

    /// Trim and lowercase; absent input becomes an empty string
    ///
    /// No validation is performed.
    pub fn sanitize<'a>(&self, email: impl Into<Option<&'a str>>) -> String {
        email.into().map(|raw| raw.trim().to_lowercase()).unwrap_or_default()
    }
}
