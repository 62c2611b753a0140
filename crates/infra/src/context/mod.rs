//! Application context - dependency injection container
//!
//! Build one [`AppContext`] at startup and hand it (or its parts) to the code
//! that needs them. For call sites that cannot be reached by injection, the
//! context's logger can be bound process-wide with [`install_global`].

use std::sync::Arc;

use anamnese_common::{CommonError, CommonResult, FormValidator, LogSink, Logger, TracingSink};
use once_cell::sync::OnceCell;

use crate::config::{self, AppConfig};

static GLOBAL_LOGGER: OnceCell<Arc<Logger>> = OnceCell::new();

/// Application context - holds the shared services
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Configuration the context was built from
    pub config: AppConfig,
    /// Shared diagnostic logger; clones of the context share it
    pub logger: Arc<Logger>,
    /// Validator for the login and registration forms
    pub form_validator: FormValidator,
}

impl AppContext {
    /// Load configuration with [`config::load`] and build the context
    ///
    /// # Errors
    /// Returns `CommonError::Config` if the configuration is invalid.
    pub fn from_env() -> CommonResult<Self> {
        Ok(Self::new(config::load()?))
    }

    /// Build a context whose logger forwards to `tracing`
    pub fn new(config: AppConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Build a context with an explicit log sink
    pub fn with_sink(config: AppConfig, sink: Arc<dyn LogSink>) -> Self {
        let logger = Arc::new(Logger::with_sink(&config.logger, sink));
        tracing::debug!(
            capacity = logger.capacity(),
            console_enabled = logger.is_enabled(),
            "application context created"
        );
        Self { config, logger, form_validator: FormValidator::new() }
    }

    /// Bind this context's logger as the process-wide logger
    ///
    /// # Errors
    /// Returns `CommonError::Internal` if a logger is already bound.
    pub fn install_global_logger(&self) -> CommonResult<()> {
        install_global(Arc::clone(&self.logger))
    }
}

/// Bind `logger` as the process-wide logger
///
/// # Errors
/// Returns `CommonError::Internal` if a logger is already bound.
pub fn install_global(logger: Arc<Logger>) -> CommonResult<()> {
    GLOBAL_LOGGER.set(logger).map_err(|_| {
        CommonError::internal_with_context("install_global", "a global logger is already installed")
    })
}

/// The process-wide logger, if one has been bound
pub fn global_logger() -> Option<&'static Arc<Logger>> {
    GLOBAL_LOGGER.get()
}
