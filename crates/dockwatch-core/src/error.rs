//! Core error types for dockwatch-core.
//!
//! One thiserror enum per external concern, rolled up into [`CoreError`].
//! The alert engine itself never fails: "no report" is an `Option::None`,
//! not an error. These types cover the I/O edges only.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dockwatch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential decoding errors
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// Spreadsheet retrieval errors
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Webhook delivery errors
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but cannot be parsed
    #[error("Failed to parse configuration at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Config cannot be serialized back to TOML
    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(String),

    /// No user config directory on this platform
    #[error("No config directory available on this platform")]
    NoConfigDir,

    /// Required environment variable is unset
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
}

/// Credential decoding errors.
///
/// The credential env var must hold JSON, either raw or base64-wrapped.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Value is neither plain JSON nor base64-encoded JSON
    #[error("Credentials are neither plain JSON nor base64-encoded JSON: {0}")]
    Undecodable(String),
}

/// Spreadsheet retrieval errors.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the sheet API
    #[error("Sheet API returned HTTP {status}")]
    Api { status: u16 },

    /// Fetched range has no data rows
    #[error("No data rows in the fetched range")]
    EmptyRange,

    /// Header row is missing a required column
    #[error("Required column '{0}' not found in header row")]
    MissingColumn(String),
}

/// Webhook delivery errors.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the webhook endpoint
    #[error("Webhook returned HTTP {0}")]
    Status(u16),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
