//! Configuration file support for wafguard-monitor.
//!
//! Provides YAML-based configuration through `wafguard-monitor.config.yml`
//! files, including data structures, file loading, validation, and merging
//! with command-line options.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::{HttpWafApi, DEFAULT_API_BASE};
use crate::application::use_cases::{
    SyncOptions, DEFAULT_EVENT_LIMIT, DEFAULT_POLL_INTERVAL, MAX_POLL_INTERVAL_SECS,
};
use crate::cli::Args;
use crate::shared::error::MonitorError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "wafguard-monitor.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub event_limit: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub discard_stale_responses: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| MonitorError::ConfigReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    // An empty file deserializes as YAML null
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).map_err(|e| MonitorError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.poll_interval_secs == Some(0) {
        return Err(MonitorError::InvalidConfig {
            field: "poll_interval_secs".to_string(),
            reason: "must be at least 1".to_string(),
            hint: "The reference dashboard polls every 3 seconds.".to_string(),
        }
        .into());
    }

    if let Some(secs) = config.poll_interval_secs.filter(|&s| s > MAX_POLL_INTERVAL_SECS) {
        return Err(MonitorError::InvalidConfig {
            field: "poll_interval_secs".to_string(),
            reason: format!("must be at most {} (got {})", MAX_POLL_INTERVAL_SECS, secs),
            hint: "The reference dashboard polls every 3 seconds.".to_string(),
        }
        .into());
    }

    if config.request_timeout_secs == Some(0) {
        return Err(MonitorError::InvalidConfig {
            field: "request_timeout_secs".to_string(),
            reason: "must be at least 1".to_string(),
            hint: "Remove the field to disable the request timeout.".to_string(),
        }
        .into());
    }

    if let Some(ref api_base) = config.api_base {
        HttpWafApi::normalize_base_url(api_base)?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings after merging CLI options, config file and defaults.
///
/// Precedence: CLI flag > config file > built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSettings {
    pub api_base: String,
    pub poll_interval: Duration,
    pub event_limit: usize,
    pub request_timeout: Option<Duration>,
    pub discard_stale_responses: bool,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            event_limit: DEFAULT_EVENT_LIMIT,
            request_timeout: None,
            discard_stale_responses: false,
        }
    }
}

impl MonitorSettings {
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        let defaults = Self::default();

        Self {
            api_base: args
                .api_base
                .clone()
                .or_else(|| config.and_then(|c| c.api_base.clone()))
                .unwrap_or(defaults.api_base),
            poll_interval: args
                .interval
                .or_else(|| config.and_then(|c| c.poll_interval_secs))
                .map(Duration::from_secs)
                .unwrap_or(defaults.poll_interval),
            event_limit: args
                .limit
                .or_else(|| config.and_then(|c| c.event_limit))
                .unwrap_or(defaults.event_limit),
            request_timeout: args
                .timeout
                .or_else(|| config.and_then(|c| c.request_timeout_secs))
                .map(Duration::from_secs),
            discard_stale_responses: args.strict_ordering
                || config
                    .and_then(|c| c.discard_stale_responses)
                    .unwrap_or(defaults.discard_stale_responses),
        }
    }

    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            poll_interval: self.poll_interval,
            event_limit: self.event_limit,
            discard_stale_responses: self.discard_stale_responses,
        }
    }
}
