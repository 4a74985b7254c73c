//! Launch configuration, read from a JSON file beside the executable.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "sine_plot_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Window and logging settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_true")]
    pub show_legend: bool,
}

fn default_window_title() -> String {
    "Sine Plot".to_string()
}

fn default_window_size() -> [f32; 2] {
    [1000.0, 600.0]
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            window_size: default_window_size(),
            log_filter: default_log_filter(),
            show_legend: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Locates and reads [`AppConfig`].
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(Self::exe_directory().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    fn exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `Ok(None)` when no file exists.
    pub fn try_load(&self) -> Result<Option<AppConfig>, ConfigError> {
        if !self.config_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        })?;
        let config = AppConfig::from_json(&content, &self.config_path)?;
        tracing::debug!(path = %self.config_path.display(), "loaded configuration");
        Ok(Some(config))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
