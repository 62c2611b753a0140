//! Integration tests for the shared error taxonomy

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use anamnese_common::validation::{FormFields, FormValidator, ValidationError};
use anamnese_common::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};

fn load_capacity(raw: &str) -> CommonResult<usize> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    value["capacity"]
        .as_u64()
        .map(|c| c as usize)
        .ok_or_else(|| CommonError::config_field("capacity", "expected a number"))
}

/// Test `?` conversion from serde_json
#[test]
fn test_json_errors_propagate_with_question_mark() {
    assert_eq!(load_capacity(r#"{"capacity": 25}"#), Ok(25));

    let err = load_capacity("{").expect_err("truncated document");
    assert_eq!(err.label(), "serialization");
    assert!(err.to_string().starts_with("Serialization error (JSON):"));

    let err = load_capacity(r#"{"capacity": "many"}"#).expect_err("wrong type");
    assert_eq!(err, CommonError::config_field("capacity", "expected a number"));
}

/// Test TOML and IO conversions
#[test]
fn test_toml_and_io_conversions() {
    let toml_err = toml::from_str::<toml::Value>("capacity = ").expect_err("incomplete TOML");
    let err = CommonError::from(toml_err);
    assert!(matches!(err, CommonError::Serialization { format: Some(ref f), .. } if f == "TOML"));

    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = CommonError::from(io_err);
    assert_eq!(err.label(), "persistence");
    assert_eq!(err.severity(), ErrorSeverity::Error);
}

/// Test classification of each variant
#[test]
fn test_classification_matrix() {
    let cases = [
        (CommonError::config("bad"), ErrorSeverity::Error, false, false),
        (CommonError::serialization("bad"), ErrorSeverity::Error, false, false),
        (CommonError::persistence_op("write", "denied"), ErrorSeverity::Error, false, false),
        (CommonError::validation("email", "bad"), ErrorSeverity::Info, false, false),
        (CommonError::sink("tracing", "closed"), ErrorSeverity::Warning, true, false),
        (CommonError::internal("oops"), ErrorSeverity::Critical, false, true),
    ];

    for (err, severity, retryable, critical) in cases {
        assert_eq!(err.severity(), severity, "{err}");
        assert_eq!(err.is_retryable(), retryable, "{err}");
        assert_eq!(err.is_critical(), critical, "{err}");
        assert_eq!(err.retry_after(), None::<Duration>);
    }
}

/// Test that multi-field validation failures collapse into one form error
#[test]
fn test_multi_field_validation_error_conversion() {
    let validation: ValidationError = FormValidator::new()
        .validate_form(&FormFields::login("bad", "123"))
        .into_result()
        .expect_err("both fields fail");
    let err = CommonError::from(validation);

    match err {
        CommonError::Validation { field, message, value } => {
            assert_eq!(field, "form");
            assert!(message.contains("email: email must contain a valid @"));
            assert!(message.contains("password: password must be at least 6 characters"));
            assert_eq!(value, None);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Test that a rejected value is shown in the message
#[test]
fn test_validation_with_value_display() {
    let err = CommonError::validation_with_value("level", "unknown log level", "VERBOSE");
    assert_eq!(
        err.to_string(),
        "Validation error for field 'level' (value: 'VERBOSE'): unknown log level"
    );
}
