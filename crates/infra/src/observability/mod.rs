//! Process-wide `tracing` subscriber setup
//!
//! The diagnostic [`Logger`](anamnese_common::Logger) forwards to `tracing`
//! through its default sink, so this is where its output ends up.
//!
//! ## Environment Variables
//! - `RUST_LOG`: filter directives (default `info`)
//! - `ANAMNESE_LOG_JSON`: emit JSON lines instead of human-readable text

use anamnese_common::{CommonError, CommonResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::loader::env_bool;

const ENV_LOG_JSON: &str = "ANAMNESE_LOG_JSON";

/// Output format of the subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Format selected by `ANAMNESE_LOG_JSON`
    #[must_use]
    pub fn from_env() -> Self {
        if env_bool(ENV_LOG_JSON, false) {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Install the global subscriber using the format from the environment
///
/// # Errors
/// Returns `CommonError::Internal` if a global subscriber is already set.
pub fn init_tracing() -> CommonResult<()> {
    init_tracing_with(LogFormat::from_env())
}

/// Install the global subscriber with an explicit format
///
/// # Errors
/// Returns `CommonError::Internal` if a global subscriber is already set.
pub fn init_tracing_with(format: LogFormat) -> CommonResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    result.map_err(|e| CommonError::internal_with_context("tracing", e.to_string()))?;
    tracing::debug!(format = ?format, "tracing subscriber installed");
    Ok(())
}
