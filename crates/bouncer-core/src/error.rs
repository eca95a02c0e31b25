//! Error types for Bouncer

use thiserror::Error;

/// The main error type for Bouncer operations
#[derive(Debug, Error)]
pub enum BouncerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Dictionary load error: {0}")]
    DictionaryLoadError(String),

    #[error("Config load error: {0}")]
    ConfigLoadError(String),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Scene load error: {0}")]
    SceneLoadError(String),

    #[error("Malformed shader graph in material '{material}': {reason}")]
    MalformedGraph { material: String, reason: String },
}

/// Result type alias for Bouncer operations
pub type Result<T> = std::result::Result<T, BouncerError>;

impl From<toml::de::Error> for BouncerError {
    fn from(err: toml::de::Error) -> Self {
        BouncerError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for BouncerError {
    fn from(err: toml::ser::Error) -> Self {
        BouncerError::TomlSerError(err.to_string())
    }
}
