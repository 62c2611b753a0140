//! Log entry and severity level types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// Severity of a diagnostic log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Something unexpected that was handled
    Warn,
    /// An operation failed
    Error,
}

impl LogLevel {
    /// Uppercase label used in formatted lines and in exports
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            other => Err(CommonError::validation_with_value("level", "unknown log level", other)),
        }
    }
}

/// One recorded log call
///
/// Entries are created by the logger and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was recorded, serialized as RFC 3339
    pub timestamp: DateTime<Utc>,
    /// Severity
    pub level: LogLevel,
    /// Free-form message
    pub message: String,
    /// Optional structured payload
    pub data: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    ///
    /// A JSON `null` payload is stored as no payload. Other falsy values
    /// (`0`, `""`, `false`) are kept as given.
    pub fn new(level: LogLevel, message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self::at(Utc::now(), level, message, data)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Utc>,
        level: LogLevel,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        let data = data.filter(|value| !value.is_null());
        Self { timestamp, level, message: message.into(), data }
    }

    /// `[<timestamp>] [<LEVEL>] <message>`
    pub fn formatted(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.message
        )
    }
}
