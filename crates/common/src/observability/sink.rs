//! Output sinks for the diagnostic logger.
//!
//! A sink receives every entry the logger records while emission is enabled.
//! Sinks may fail or even panic; the logger absorbs both and keeps the entry
//! in history regardless.

use std::fmt;

use super::entry::{LogEntry, LogLevel};
use crate::error::CommonResult;

/// Destination for formatted log entries
pub trait LogSink: Send + Sync {
    /// Emit one entry; `formatted` is [`LogEntry::formatted`]
    ///
    /// # Errors
    /// Returns an error when the destination rejects the entry. The logger
    /// discards it.
    fn emit(&self, entry: &LogEntry, formatted: &str) -> CommonResult<()>;

    /// Short name used when reporting sink failures
    fn name(&self) -> &'static str {
        "sink"
    }
}

/// Forwards entries to the process `tracing` subscriber
///
/// The level maps one to one onto the `tracing` level and the payload is
/// attached as the structured `data` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, entry: &LogEntry, formatted: &str) -> CommonResult<()> {
        let data = match &entry.data {
            Some(value) => serde_json::to_string(value)?,
            None => String::new(),
        };

        match entry.level {
            LogLevel::Debug => tracing::debug!(target: "anamnese", data = %data, "{}", formatted),
            LogLevel::Info => tracing::info!(target: "anamnese", data = %data, "{}", formatted),
            LogLevel::Warn => tracing::warn!(target: "anamnese", data = %data, "{}", formatted),
            LogLevel::Error => tracing::error!(target: "anamnese", data = %data, "{}", formatted),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn emit(&self, _entry: &LogEntry, _formatted: &str) -> CommonResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Adapts a closure into a sink
///
/// ```rust
/// use std::sync::Arc;
///
/// use anamnese_common::error::CommonResult;
/// use anamnese_common::observability::{FnSink, LogEntry, Logger, LoggerConfig};
///
/// let sink = FnSink::new(|_entry: &LogEntry, line: &str| -> CommonResult<()> {
///     println!("{line}");
///     Ok(())
/// });
/// let logger = Logger::with_sink(&LoggerConfig::default(), Arc::new(sink));
/// logger.info("ready", None);
/// ```
pub struct FnSink<F> {
    func: F,
}

impl<F> FnSink<F>
where
    F: Fn(&LogEntry, &str) -> CommonResult<()> + Send + Sync,
{
    /// Wrap `func` as a sink
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> LogSink for FnSink<F>
where
    F: Fn(&LogEntry, &str) -> CommonResult<()> + Send + Sync,
{
    fn emit(&self, entry: &LogEntry, formatted: &str) -> CommonResult<()> {
        (self.func)(entry, formatted)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}
