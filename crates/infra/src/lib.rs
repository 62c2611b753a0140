//! # Anamnese Infrastructure
//!
//! Process-level wiring for the shared building blocks in
//! `anamnese-common`.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - `tracing` subscriber initialisation
//! - The application context and the process-wide logger binding
//!
//! ## Architecture
//! - Depends on `anamnese-common`
//! - Contains all "impure" code (environment, file system, global state)

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used, clippy::panic))]

pub mod config;
pub mod context;
pub mod observability;

// Re-export commonly used items
pub use config::AppConfig;
pub use context::{global_logger, install_global, AppContext};
pub use observability::{init_tracing, init_tracing_with, LogFormat};
