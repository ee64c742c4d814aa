//! Error type for the fallible edges of the crate: configuration loading and export.
//!
//! Geometry and scoring never fail; only the layers that touch the file system or
//! a serializer return [`Result`].

use thiserror::Error;

/// Errors raised while loading configuration or exporting session data.
#[derive(Debug, Error)]
pub enum PointLogicError {
    /// Reading a file or writing to an output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML configuration file could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is outside its accepted range.
    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl PointLogicError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PointLogicError>;
