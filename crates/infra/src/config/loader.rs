//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `ANAMNESE_LOG_CAPACITY` is unset, falls back to a config file
//! 3. Probes multiple paths for config files
//! 4. If no file exists, uses defaults
//!
//! ## Environment Variables
//! - `ANAMNESE_LOG_CAPACITY`: Number of log entries kept in memory
//! - `ANAMNESE_LOG_CONSOLE`: Whether entries are emitted to the sink
//!   (true/false, default true)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./anamnese.json` or `./anamnese.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use anamnese_common::{CommonError, CommonResult};

use super::AppConfig;

pub(crate) const ENV_LOG_CAPACITY: &str = "ANAMNESE_LOG_CAPACITY";
pub(crate) const ENV_LOG_CONSOLE: &str = "ANAMNESE_LOG_CONSOLE";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["anamnese.json", "anamnese.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// Environment first, then the first config file found, then defaults.
/// Environment values that are set always win over file values, even when
/// `ANAMNESE_LOG_CAPACITY` is absent.
///
/// # Errors
/// Returns `CommonError::Config` if an environment value or the config file
/// that was found is invalid. A missing file is not an error.
pub fn load() -> CommonResult<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) if std::env::var_os(ENV_LOG_CAPACITY).is_some() => Err(e),
        Err(e) => {
            tracing::debug!(error = %e, "Environment incomplete, trying file");
            let config = match probe_config_paths() {
                Some(path) => load_from_file(Some(path))?,
                None => {
                    tracing::info!("No config file found, using defaults");
                    AppConfig::default()
                }
            };
            Ok(apply_env_overrides(config))
        }
    }
}

/// Overlay the optional environment variables on a file or default config
fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    config.logger.console_enabled = env_bool(ENV_LOG_CONSOLE, config.logger.console_enabled);
    config
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `CommonError::Config` if `ANAMNESE_LOG_CAPACITY` is missing or
/// not a number.
pub fn load_from_env() -> CommonResult<AppConfig> {
    let capacity = env_var(ENV_LOG_CAPACITY)?.trim().parse::<usize>().map_err(|e| {
        CommonError::config_field("logger.capacity", format!("Invalid log capacity: {}", e))
    })?;
    let console_enabled = env_bool(ENV_LOG_CONSOLE, true);

    let mut config = AppConfig::default();
    config.logger.capacity = capacity;
    config.logger.console_enabled = console_enabled;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. JSON and TOML are
/// supported (detected by file extension).
///
/// # Errors
/// Returns `CommonError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> CommonResult<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CommonError::config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CommonError::config("No config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CommonError::config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension
fn parse_config(contents: &str, path: &Path) -> CommonResult<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CommonError::config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CommonError::config(format!("Invalid JSON format: {}", e))),
        _ => Err(CommonError::config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a config file
///
/// Returns the first existing candidate, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> CommonResult<String> {
    std::env::var(key).map_err(|_| {
        CommonError::config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Returns `default` if the variable is not set.
pub(crate) fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn write_temp(contents: &str, extension: &str) -> (NamedTempFile, PathBuf) {
        let mut temp_file = NamedTempFile::new().expect("temp file");
        temp_file.write_all(contents.as_bytes()).expect("write temp file");
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).expect("copy temp file");
        (temp_file, path)
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        let truthy = [("ANAMNESE_TEST_B1", "1"), ("ANAMNESE_TEST_B2", "YES"), ("ANAMNESE_TEST_B3", "on")];
        for (key, value) in truthy {
            std::env::set_var(key, value);
            assert!(env_bool(key, false), "{value} should parse as true");
            std::env::remove_var(key);
        }

        let falsy = [("ANAMNESE_TEST_B4", "0"), ("ANAMNESE_TEST_B5", "off"), ("ANAMNESE_TEST_B6", "nope")];
        for (key, value) in falsy {
            std::env::set_var(key, value);
            assert!(!env_bool(key, true), "{value} should parse as false");
            std::env::remove_var(key);
        }

        std::env::remove_var("ANAMNESE_TEST_MISSING");
        assert!(env_bool("ANAMNESE_TEST_MISSING", true));
        assert!(!env_bool("ANAMNESE_TEST_MISSING", false));
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_LOG_CAPACITY, "250");
        std::env::set_var(ENV_LOG_CONSOLE, "false");

        let config = load_from_env().expect("env config loads");
        assert_eq!(config.logger.capacity, 250);
        assert!(!config.logger.console_enabled);

        std::env::remove_var(ENV_LOG_CAPACITY);
        std::env::remove_var(ENV_LOG_CONSOLE);
    }

    #[test]
    fn test_load_from_env_missing_capacity() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::remove_var(ENV_LOG_CAPACITY);

        let err = load_from_env().expect_err("capacity is required");
        assert!(matches!(err, CommonError::Config { .. }));
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_LOG_CAPACITY, "lots");

        let err = load_from_env().expect_err("capacity must be numeric");
        assert!(matches!(err, CommonError::Config { field: Some(ref f), .. } if f == "logger.capacity"));

        // an invalid env value is not silently replaced by file or defaults
        assert!(load().is_err());

        std::env::remove_var(ENV_LOG_CAPACITY);
    }

    #[test]
    fn test_load_applies_console_override_without_capacity() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::remove_var(ENV_LOG_CAPACITY);
        std::env::set_var(ENV_LOG_CONSOLE, "false");

        let config = load().expect("falls back to file or defaults");
        assert!(!config.logger.console_enabled, "ANAMNESE_LOG_CONSOLE must be honoured");

        std::env::remove_var(ENV_LOG_CONSOLE);
    }

    #[test]
    fn test_env_overrides_keep_file_values_when_unset() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::remove_var(ENV_LOG_CONSOLE);

        let mut from_file = AppConfig::default();
        from_file.logger.capacity = 9;
        from_file.logger.console_enabled = false;

        let config = apply_env_overrides(from_file.clone());
        assert_eq!(config, from_file);

        std::env::set_var(ENV_LOG_CONSOLE, "on");
        assert!(apply_env_overrides(from_file).logger.console_enabled);
        std::env::remove_var(ENV_LOG_CONSOLE);
    }

    #[test]
    fn test_load_from_file_json() {
        let (_temp, path) =
            write_temp(r#"{ "logger": { "capacity": 40, "console_enabled": false } }"#, "json");

        let config = load_from_file(Some(path.clone())).expect("JSON config loads");
        assert_eq!(config.logger.capacity, 40);
        assert!(!config.logger.console_enabled);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml_partial() {
        let (_temp, path) = write_temp("[logger]\ncapacity = 12\n", "toml");

        let config = load_from_file(Some(path.clone())).expect("TOML config loads");
        assert_eq!(config.logger.capacity, 12);
        assert!(config.logger.console_enabled);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/anamnese.json")))
            .expect_err("file does not exist");
        assert!(matches!(err, CommonError::Config { .. }));
    }

    #[test]
    fn test_parse_config_invalid_json() {
        let err = parse_config(r#"{ "logger": "#, Path::new("bad.json")).expect_err("invalid");
        assert!(err.to_string().contains("Invalid JSON format"));
    }

    #[test]
    fn test_parse_config_empty_documents_use_defaults() {
        assert_eq!(parse_config("{}", Path::new("a.json")).ok(), Some(AppConfig::default()));
        assert_eq!(parse_config("", Path::new("a.toml")).ok(), Some(AppConfig::default()));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let err = parse_config("logger: {}", Path::new("config.yaml")).expect_err("yaml");
        assert!(err.to_string().contains("Unsupported config format: yaml"));
    }
}
