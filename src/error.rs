//! Error types for Omni
//!
//! The ranking core never fails; these cover config and snapshot I/O.

use thiserror::Error;

/// Errors that can occur in Omni
#[derive(Debug, Error)]
pub enum OmniError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Omni operations
pub type OmniResult<T> = Result<T, OmniError>;
