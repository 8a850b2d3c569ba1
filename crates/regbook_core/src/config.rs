//! Process-wide application configuration.
//!
//! # Responsibility
//! - Hold the storage DSN and optional logging settings for the process.
//! - Guarantee configuration is set exactly once before first use.
//!
//! # Invariants
//! - `init_config` with an identical config is idempotent.
//! - Re-initialization with a different config is rejected.
//! - Repository code must treat a missing config as a precondition
//!   failure, not a storage failure.

use log::info;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Application configuration shared by the whole process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite DSN: a database file path, or `:memory:`.
    pub dsn: String,
    /// Log level override; `None` falls back to the build-mode default.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Directory for rolling log files; `None` disables file logging setup.
    #[serde(default)]
    pub log_dir: Option<String>,
}

/// Installs the process-wide configuration.
///
/// # Invariants
/// - Calling this repeatedly with an equal `Config` is idempotent.
/// - Calling this with a different `Config` after initialization is
///   rejected with a human-readable error.
pub fn init_config(config: Config) -> Result<(), String> {
    let installed = CONFIG.get_or_init(|| {
        info!(
            "event=config_init module=config status=ok dsn={}",
            config.dsn
        );
        config.clone()
    });

    if *installed != config {
        return Err(format!(
            "config already initialized with dsn `{}`; refusing to switch to `{}`",
            installed.dsn, config.dsn
        ));
    }

    Ok(())
}

/// Loads configuration from a JSON file and installs it process-wide.
///
/// # Errors
/// - Returns an error when the file cannot be read or parsed.
/// - Returns an error when a different config is already installed.
pub fn init_config_from_file(path: impl AsRef<Path>) -> Result<(), String> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read config file `{}`: {err}", path.display()))?;
    let config: Config = serde_json::from_str(&raw)
        .map_err(|err| format!("failed to parse config file `{}`: {err}", path.display()))?;
    init_config(config)
}

/// Returns the installed configuration, or `None` before initialization.
pub fn app() -> Option<&'static Config> {
    CONFIG.get()
}
