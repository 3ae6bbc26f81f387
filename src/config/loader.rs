//! Configuration file loading with precedence handling.

use crate::model::DimensionError;
use crate::view_state::VirtualizerConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "VLIST_CONFIG";

/// Environment variable overriding the overscan.
pub const OVERSCAN_ENV_VAR: &str = "VLIST_OVERSCAN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, directory instead of file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// Corresponds to `~/.config/vlist/config.toml`.
///
/// Dimensions are signed so that `item_height = -1` parses and is then
/// rejected by validation with a precise message.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of demo items to generate.
    #[serde(default)]
    pub item_count: Option<usize>,

    /// Fixed height of each item in rows.
    #[serde(default)]
    pub item_height: Option<i64>,

    /// Cap on the list viewport height in rows.
    #[serde(default)]
    pub max_height: Option<i64>,

    /// Rows rendered beyond each viewport edge.
    #[serde(default)]
    pub overscan: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Number of demo items.
    pub item_count: usize,
    /// Item height (validated when building the virtualizer config).
    pub item_height: i64,
    /// Viewport cap (validated when building the virtualizer config).
    pub max_height: i64,
    /// Overscan rows.
    pub overscan: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            item_count: 10_000,
            item_height: 3,
            max_height: 30,
            overscan: crate::model::DEFAULT_OVERSCAN,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate dimensions and build the container configuration.
    ///
    /// # Errors
    /// [`DimensionError`] if `item_height` or `max_height` is not positive.
    pub fn virtualizer_config(&self) -> Result<VirtualizerConfig, DimensionError> {
        VirtualizerConfig::builder(self.item_height, self.max_height)
            .overscan(self.overscan)
            .test_id("vlist")
            .build()
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vlist/vlist.log` on Linux, or the platform state
/// directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vlist").join("vlist.log")
    } else {
        PathBuf::from("vlist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
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

/// Resolve default config file path.
///
/// Returns `~/.config/vlist/config.toml` on Linux, the platform config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vlist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VLIST_CONFIG` environment variable
/// 3. Default path `~/.config/vlist/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        item_count: config.item_count.unwrap_or(defaults.item_count),
        item_height: config.item_height.unwrap_or(defaults.item_height),
        max_height: config.max_height.unwrap_or(defaults.max_height),
        overscan: config.overscan.unwrap_or(defaults.overscan),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `VLIST_OVERSCAN`. An unparsable value is logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(OVERSCAN_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(overscan) => config.overscan = overscan,
            Err(err) => warn!(value = %raw, error = %err, "ignoring invalid VLIST_OVERSCAN"),
        }
    }

    config
}

/// Overrides supplied on the command line. `None` means "flag not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--items`
    pub item_count: Option<usize>,
    /// `--item-height`
    pub item_height: Option<i64>,
    /// `--max-height`
    pub max_height: Option<i64>,
    /// `--overscan`
    pub overscan: Option<usize>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags that were explicitly set
/// override.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(item_count) = cli.item_count {
        config.item_count = item_count;
    }
    if let Some(item_height) = cli.item_height {
        config.item_height = item_height;
    }
    if let Some(max_height) = cli.max_height {
        config.max_height = max_height;
    }
    if let Some(overscan) = cli.overscan {
        config.overscan = overscan;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
