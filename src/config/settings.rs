//! Application settings

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Non-secret runtime settings, persisted as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Address the HTTP surface listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Per-request timeout for TMS calls
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Used when `TMS_BASE_URL` is not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Default export directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_directory: Option<String>,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: None,
            export_directory: None,
        }
    }
}

impl Settings {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "tmsbridge", "tms-bridge")
            .ok_or_else(|| AppError::Config("Could not determine config directory".into()))?;

        Ok(dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from a file; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
