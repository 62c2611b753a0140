//! Diagnostic logging for the intake application
//!
//! - **[`Logger`]**: leveled logger with a bounded in-memory history and
//!   pretty JSON export
//! - **[`LogSink`]**: pluggable output; [`TracingSink`] by default
//! - **[`mask_secret`]**: credential masking for log payloads
//!
//! One logger instance is meant to be shared behind an `Arc`.

mod config;
mod entry;
mod logger;
mod redact;
mod sink;

pub use config::{LoggerConfig, DEFAULT_LOG_CAPACITY};
pub use entry::{LogEntry, LogLevel};
pub use logger::Logger;
pub use redact::mask_secret;
pub use sink::{FnSink, LogSink, NoopSink, TracingSink};
