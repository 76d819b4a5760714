//! TOML-based runtime configuration.
//!
//! Holds everything static for a run:
//! - Roster: shift assignments and day-off exceptions
//! - Sheet: worksheet name and cell range to fetch
//! - Alert: companion image path
//!
//! Loaded from `~/.config/dockwatch/config.toml` (or an explicit path); a
//! missing file yields the defaults. Secrets never live in the file -- the
//! webhook URL, spreadsheet id and sheet credentials come from environment
//! variables, so they can be injected by CI secret stores.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::roster::Roster;

/// Environment variable holding the chat webhook URL.
pub const ENV_WEBHOOK_URL: &str = "DOCKWATCH_WEBHOOK_URL";
/// Environment variable holding the spreadsheet id.
pub const ENV_SPREADSHEET_ID: &str = "DOCKWATCH_SPREADSHEET_ID";
/// Environment variable holding the sheet credentials, as JSON or
/// base64-encoded JSON.
pub const ENV_SHEET_CREDENTIALS: &str = "DOCKWATCH_SHEET_CREDENTIALS";

/// Worksheet selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    #[serde(default = "default_range")]
    pub range: String,
}

/// Alert delivery extras.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Companion image posted alongside the text alert when present on disk.
    #[serde(default = "default_image_path")]
    pub image_path: PathBuf,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roster: Roster,
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub alert: AlertConfig,
}

fn default_worksheet() -> String {
    "Base Pending Tratado".into()
}
fn default_range() -> String {
    "A:F".into()
}
fn default_image_path() -> PathBuf {
    "alerta.gif".into()
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            worksheet: default_worksheet(),
            range: default_range(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            image_path: default_image_path(),
        }
    }
}

impl Config {
    fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("dockwatch").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file is not an error: the defaults apply (empty roster,
    /// standard worksheet). An unreadable or malformed file is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Effective configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeFailed(e.to_string()))
    }
}

/// Read a required environment variable.
pub fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name.to_string()))
}
