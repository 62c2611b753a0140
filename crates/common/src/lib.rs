//! Shared building blocks for the Anamnese intake application.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors, validation (email, password, form) and collections
//! - `observability`: the bounded in-memory [`Logger`] and its output sinks
//!
//! Both tiers are enabled by default.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used, clippy::panic))]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod collections;
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod validation;

// Observability tier
// --------------------------------------------------------------
#[cfg(feature = "observability")]
pub mod observability;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "observability")]
pub use observability::{
    mask_secret, FnSink, LogEntry, LogLevel, LogSink, Logger, LoggerConfig, NoopSink, TracingSink,
};
#[cfg(feature = "foundation")]
pub use validation::{
    EmailRejection, EmailValidator, FieldValidator, FormField, FormFields, FormReport,
    FormValidator, PasswordCheck, PasswordRejection, PasswordStrength, PasswordValidator,
    ValidationError, ValidationResult,
};
