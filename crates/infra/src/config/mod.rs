//! Configuration loading and management
//!
//! This module provides [`AppConfig`] and utilities for loading it from
//! environment variables and files.

use anamnese_common::LoggerConfig;
use serde::{Deserialize, Serialize};

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, probe_config_paths};

/// Application configuration
///
/// Every section has defaults, so an empty document is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Diagnostic logger settings
    pub logger: LoggerConfig,
}
