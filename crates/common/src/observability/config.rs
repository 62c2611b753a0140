//! Logger settings.

use serde::{Deserialize, Serialize};

/// Default number of entries kept in memory
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// Logger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Maximum number of entries kept in history; 0 is treated as 1
    pub capacity: usize,
    /// Whether entries are forwarded to the sink at startup
    pub console_enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_LOG_CAPACITY, console_enabled: true }
    }
}

impl LoggerConfig {
    /// Set the history capacity
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set whether sink emission starts enabled
    #[must_use]
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }

    /// Capacity actually applied to the history
    pub fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_partial_documents() {
        let config: LoggerConfig = serde_json::from_str(r#"{"capacity": 5}"#).expect("parses");
        assert_eq!(config.capacity, 5);
        assert!(config.console_enabled);
        assert_eq!(LoggerConfig::default().capacity, 100);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        assert_eq!(LoggerConfig::default().with_capacity(0).effective_capacity(), 1);
    }
}
