//! Settings file management

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DashboardError;
use crate::logs::LogLevel;

/// Dashboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[serde(default)]
    pub log_json: bool,

    /// Backend configuration
    #[serde(default)]
    pub backend: BackendSettings,

    /// Tab shown on startup: "repositories" or "deployments"
    #[serde(default = "default_initial_tab")]
    pub initial_tab: String,
}

fn default_initial_tab() -> String {
    "repositories".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_json: false,
            backend: BackendSettings::default(),
            initial_tab: default_initial_tab(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. A missing file is not an error; the
    /// defaults apply.
    pub async fn load(path: &Path) -> Result<Self, DashboardError> {
        match tokio::fs::read_to_string(path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                DashboardError::ConfigError(format!("{}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL for the backend API
    #[serde(default = "default_backend_url")]
    pub base_url: String,
}

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
        }
    }
}
