//! Common error types and utilities for the intake workspace
//!
//! The error handling system is built on three pieces:
//!
//! 1. **`CommonError`**: the error variants produced across the workspace
//!    (configuration, serialization, validation, sink emission, ...)
//!
//! 2. **`ErrorClassification` trait**: a standard interface for classifying
//!    errors by retryability, severity and criticality
//!
//! 3. **`ErrorSeverity` enum**: a unified severity level for monitoring
//!
//! Validation failures of user input are *not* errors in this sense: the
//! validators return values (`bool`, messages, reports). `CommonError` only
//! appears when a caller opts into `Result`-style handling, e.g. through
//! [`FormReport::into_result`](crate::validation::FormReport::into_result),
//! or when infrastructure (config loading, log export) fails.
//!
//! ## Standard Error Patterns
//!
//! | Pattern | CommonError Variant | When to Use |
//! |---------|-------------------|-------------|
//! | **Configuration** | `Config` | Invalid settings, missing config |
//! | **Serialization** | `Serialization` | JSON/TOML parsing, log export |
//! | **Validation** | `Validation` | Rejected form fields |
//! | **Sink** | `Sink` | Log output sink failed to emit |
//! | **Persistence** | `Persistence` | File I/O |
//! | **Internal** | `Internal` | Bugs, invariant violations |
//!
//! ## Examples
//!
//! ```rust
//! use anamnese_common::error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
//!
//! fn parse_capacity(raw: &str) -> CommonResult<usize> {
//!     raw.parse::<usize>()
//!         .map_err(|e| CommonError::config_field("capacity", e.to_string()))
//! }
//!
//! let err = parse_capacity("lots").unwrap_err();
//! assert_eq!(err.severity(), ErrorSeverity::Error);
//! assert!(!err.is_retryable());
//! ```

use std::fmt;
use std::time::Duration;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Common error variants that appear across the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Configuration-related errors
    Config {
        /// What is wrong
        message: String,
        /// Offending setting, if known
        field: Option<String>,
    },

    /// Serialization or deserialization errors
    Serialization {
        /// Parser or encoder message
        message: String,
        /// Format name, e.g. `JSON`
        format: Option<String>,
    },

    /// Data persistence errors (file I/O)
    Persistence {
        /// Underlying I/O message
        message: String,
        /// Operation that failed, e.g. `export_logs`
        operation: Option<String>,
    },

    /// Validation errors
    Validation {
        /// Field name, or `form` for several fields
        field: String,
        /// Human-readable reason
        message: String,
        /// Rejected value, if it is safe to show
        value: Option<String>,
    },

    /// A log output sink failed to emit an entry
    Sink {
        /// Sink name
        sink: String,
        /// Failure reason
        message: String,
    },

    /// Internal errors that shouldn't normally occur
    Internal {
        /// What went wrong
        message: String,
        /// Component or call site
        context: Option<String>,
    },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { message, field } => {
                if let Some(field) = field {
                    write!(f, "Configuration error in field '{}': {}", field, message)
                } else {
                    write!(f, "Configuration error: {}", message)
                }
            }
            Self::Serialization { message, format } => {
                if let Some(format) = format {
                    write!(f, "Serialization error ({}): {}", format, message)
                } else {
                    write!(f, "Serialization error: {}", message)
                }
            }
            Self::Persistence { message, operation } => {
                if let Some(op) = operation {
                    write!(f, "Persistence error during '{}': {}", op, message)
                } else {
                    write!(f, "Persistence error: {}", message)
                }
            }
            Self::Validation { field, message, value } => {
                if let Some(value) = value {
                    write!(
                        f,
                        "Validation error for field '{}' (value: '{}'): {}",
                        field, value, message
                    )
                } else {
                    write!(f, "Validation error for field '{}': {}", field, message)
                }
            }
            Self::Sink { sink, message } => {
                write!(f, "Log sink '{}' failed: {}", sink, message)
            }
            Self::Internal { message, context } => {
                if let Some(ctx) = context {
                    write!(f, "Internal error in '{}': {}", ctx, message)
                } else {
                    write!(f, "Internal error: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for CommonError {}

impl ErrorClassification for CommonError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Sink { .. })
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config { .. } => ErrorSeverity::Error,
            Self::Serialization { .. } => ErrorSeverity::Error,
            Self::Persistence { .. } => ErrorSeverity::Error,
            Self::Validation { .. } => ErrorSeverity::Info,
            Self::Sink { .. } => ErrorSeverity::Warning,
            Self::Internal { .. } => ErrorSeverity::Critical,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl CommonError {
    /// Create a simple configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into(), field: None }
    }

    /// Create a configuration error for a specific field
    pub fn config_field<S: Into<String>, F: Into<String>>(field: F, message: S) -> Self {
        Self::Config { message: message.into(), field: Some(field.into()) }
    }

    /// Create a simple serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization { message: message.into(), format: None }
    }

    /// Create a serialization error with format information
    pub fn serialization_format<S: Into<String>, F: Into<String>>(format: F, message: S) -> Self {
        Self::Serialization { message: message.into(), format: Some(format.into()) }
    }

    /// Create a simple persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence { message: message.into(), operation: None }
    }

    /// Create a persistence error for a specific operation
    pub fn persistence_op<S: Into<String>, O: Into<String>>(operation: O, message: S) -> Self {
        Self::Persistence { message: message.into(), operation: Some(operation.into()) }
    }

    /// Create a validation error for a field
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::Validation { field: field.into(), message: message.into(), value: None }
    }

    /// Create a validation error that also records the rejected value
    ///
    /// Callers must mask secrets before passing `value`.
    pub fn validation_with_value<F, S, V>(field: F, message: S, value: V) -> Self
    where
        F: Into<String>,
        S: Into<String>,
        V: Into<String>,
    {
        Self::Validation { field: field.into(), message: message.into(), value: Some(value.into()) }
    }

    /// Create a sink emission error
    pub fn sink<N: Into<String>, S: Into<String>>(sink: N, message: S) -> Self {
        Self::Sink { sink: sink.into(), message: message.into() }
    }

    /// Create a simple internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal { message: message.into(), context: None }
    }

    /// Create an internal error with context
    pub fn internal_with_context<S: Into<String>, C: Into<String>>(context: C, message: S) -> Self {
        Self::Internal { message: message.into(), context: Some(context.into()) }
    }

    /// Stable label for metrics and structured log fields
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Serialization { .. } => "serialization",
            Self::Persistence { .. } => "persistence",
            Self::Validation { .. } => "validation",
            Self::Sink { .. } => "sink",
            Self::Internal { .. } => "internal",
        }
    }
}

/// Standard interface for classifying errors
///
/// All error types in the workspace implement this so callers can make
/// uniform retry and alerting decisions.
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Retryable errors are transient issues that may succeed if attempted
    /// again, such as a log sink that is temporarily unavailable.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool;

    /// Get the suggested retry delay if applicable
    fn retry_after(&self) -> Option<Duration>;
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, expected conditions (e.g. rejected user input)
    Info,
    /// Degraded but operational
    Warning,
    /// Failure requiring attention
    Error,
    /// System integrity at risk
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

// Standard conversions from common error types
impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_format("JSON", err.to_string())
    }
}

impl From<std::io::Error> for CommonError {
    fn from(err: std::io::Error) -> Self {
        Self::persistence(err.to_string())
    }
}

impl From<toml::de::Error> for CommonError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization_format("TOML", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for error.
    use super::*;

    #[test]
    fn config_field_display_names_the_field() {
        let err = CommonError::config_field("capacity", "must be a number");
        assert_eq!(err.to_string(), "Configuration error in field 'capacity': must be a number");
        assert_eq!(err.label(), "config");
    }

    #[test]
    fn only_sink_errors_are_retryable() {
        assert!(CommonError::sink("tracing", "closed").is_retryable());
        assert!(!CommonError::config("bad").is_retryable());
        assert!(!CommonError::internal("oops").is_retryable());
    }

    #[test]
    fn internal_errors_are_critical() {
        let err = CommonError::internal_with_context("logger", "history lost");
        assert!(err.is_critical());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Internal error in 'logger': history lost");
    }

    #[test]
    fn severity_ordering_and_display() {
        assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }

    #[test]
    fn json_errors_convert_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("input is malformed");
        let err = CommonError::from(json_err);
        assert!(matches!(err, CommonError::Serialization { format: Some(ref f), .. } if f == "JSON"));
    }
}
