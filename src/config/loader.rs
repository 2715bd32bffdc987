//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/invdash/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default page size for the listing.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Interval between simulated presence events, in seconds.
    #[serde(default)]
    pub presence_interval_secs: Option<i64>,

    /// Presence annotation time-to-live, in seconds.
    #[serde(default)]
    pub presence_ttl_secs: Option<i64>,

    /// Seed for the simulated presence and mock-data generators.
    #[serde(default)]
    pub presence_seed: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub page_size: usize,
    pub presence_interval_secs: i64,
    pub presence_ttl_secs: i64,
    pub presence_seed: u64,
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: crate::query::DEFAULT_PAGE_SIZE,
            presence_interval_secs: 5,
            presence_ttl_secs: crate::presence::DEFAULT_PRESENCE_TTL_SECS,
            presence_seed: 0,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/invdash/invdash.log` on Unix-like systems. If
/// the state directory cannot be determined, falls back to the current
/// directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("invdash").join("invdash.log")
    } else {
        PathBuf::from("invdash.log")
    }
}

/// Resolve default config file path (`~/.config/invdash/config.toml`).
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("invdash").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `INVDASH_CONFIG` environment variable
/// 3. Default path `~/.config/invdash/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("INVDASH_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a config file over the hardcoded defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(file) = file else {
        return defaults;
    };
    ResolvedConfig {
        page_size: file.page_size.unwrap_or(defaults.page_size),
        presence_interval_secs: file
            .presence_interval_secs
            .unwrap_or(defaults.presence_interval_secs),
        presence_ttl_secs: file.presence_ttl_secs.unwrap_or(defaults.presence_ttl_secs),
        presence_seed: file.presence_seed.unwrap_or(defaults.presence_seed),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `INVDASH_PAGE_SIZE` and `INVDASH_LOG_FILE`. Unparseable values
/// are ignored rather than fatal.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("INVDASH_PAGE_SIZE") {
        if let Ok(size) = raw.parse::<usize>() {
            config.page_size = size;
        }
    }
    if let Ok(raw) = std::env::var("INVDASH_LOG_FILE") {
        config.log_file_path = PathBuf::from(raw);
    }
    config
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size: Option<usize>,
    log_file: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(size) = page_size {
        config.page_size = size;
    }
    if let Some(path) = log_file {
        config.log_file_path = path;
    }
    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
