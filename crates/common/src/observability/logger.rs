// Diagnostic Logger - bounded in-memory history with a best-effort sink

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, trace};

use super::config::LoggerConfig;
use super::entry::{LogEntry, LogLevel};
use super::sink::{LogSink, TracingSink};
use crate::collections::RingBuffer;
use crate::error::{CommonError, CommonResult};

struct History {
    entries: RingBuffer<LogEntry>,
    evicted: u64,
}

/// Leveled diagnostic logger
///
/// Every call is recorded in a bounded history, oldest first out. While
/// enabled, each entry is also handed to the sink. Sink failures and panics
/// are swallowed and never affect the recorded history or the caller.
///
/// ```rust
/// use anamnese_common::observability::{Logger, LoggerConfig};
/// use serde_json::json;
///
/// let logger = Logger::new(&LoggerConfig::default().with_capacity(2));
/// logger.info("login attempt", Some(json!({ "email": "***" })));
/// logger.warn("login failed", None);
/// logger.error("login failed again", None);
///
/// let history = logger.history();
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[0].message, "login failed");
/// ```
pub struct Logger {
    history: Mutex<History>,
    enabled: AtomicBool,
    sink: Arc<dyn LogSink>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(&LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("enabled", &self.is_enabled())
            .field("sink", &self.sink.name())
            .finish()
    }
}

impl Logger {
    /// Create a logger that forwards to `tracing`
    pub fn new(config: &LoggerConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a logger with an explicit sink
    pub fn with_sink(config: &LoggerConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            history: Mutex::new(History {
                entries: RingBuffer::new(config.effective_capacity()),
                evicted: 0,
            }),
            enabled: AtomicBool::new(config.console_enabled),
            sink,
        }
    }

    /// Record an entry and, if enabled, emit it
    pub fn log(&self, level: LogLevel, message: impl Into<String>, data: Option<Value>) {
        let entry = LogEntry::new(level, message, data);

        {
            let mut history = self.history.lock();
            if history.entries.push(entry.clone()).is_some() {
                history.evicted += 1;
            }
        }

        if self.is_enabled() {
            self.emit(&entry);
        }
    }

    fn emit(&self, entry: &LogEntry) {
        let formatted = entry.formatted();
        let sink = &self.sink;

        match panic::catch_unwind(AssertUnwindSafe(|| sink.emit(entry, &formatted))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                trace!(sink = sink.name(), error = %err, "log sink rejected entry");
            }
            Err(_) => {
                trace!(sink = sink.name(), "log sink panicked");
            }
        }
    }

    /// Record at [`LogLevel::Debug`]
    pub fn debug(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Debug, message, data);
    }

    /// Record at [`LogLevel::Info`]
    pub fn info(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Info, message, data);
    }

    /// Record at [`LogLevel::Warn`]
    pub fn warn(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Warn, message, data);
    }

    /// Record at [`LogLevel::Error`]
    pub fn error(&self, message: impl Into<String>, data: Option<Value>) {
        self.log(LogLevel::Error, message, data);
    }

    /// Turn sink emission on or off; history is recorded either way
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Whether entries are currently emitted to the sink
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Chronological copy of the history
    pub fn history(&self) -> Vec<LogEntry> {
        self.history.lock().entries.snapshot()
    }

    /// Entries matching `filter`, oldest first, at most `limit` of them
    pub fn query(
        &self,
        filter: impl Fn(&LogEntry) -> bool,
        limit: Option<usize>,
    ) -> Vec<LogEntry> {
        let history = self.history.lock();
        let matching = history.entries.iter().filter(|entry| filter(entry)).cloned();

        match limit {
            Some(n) => matching.take(n).collect(),
            None => matching.collect(),
        }
    }

    /// Number of entries in history
    pub fn len(&self) -> usize {
        self.history.lock().entries.len()
    }

    /// Whether history is empty
    pub fn is_empty(&self) -> bool {
        self.history.lock().entries.is_empty()
    }

    /// Maximum number of entries kept
    pub fn capacity(&self) -> usize {
        self.history.lock().entries.capacity()
    }

    /// Entries dropped to make room since construction or the last clear
    pub fn evicted_count(&self) -> u64 {
        self.history.lock().evicted
    }

    /// Drop every entry; capacity and the enabled flag are unchanged
    pub fn clear_history(&self) {
        let mut history = self.history.lock();
        history.entries.clear();
        history.evicted = 0;
    }

    /// Pretty-printed JSON array of the history
    ///
    /// # Errors
    /// Returns `CommonError::Serialization` if a payload cannot be encoded.
    pub fn export_logs(&self) -> CommonResult<String> {
        let entries = self.history();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    /// Write [`Logger::export_logs`] output to `path`
    ///
    /// # Errors
    /// Returns `CommonError::Persistence` if the file cannot be written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> CommonResult<()> {
        let path = path.as_ref();
        let json = self.export_logs()?;
        std::fs::write(path, json).map_err(|err| {
            CommonError::persistence_op("export_logs", format!("{}: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "exported log history");
        Ok(())
    }
}
