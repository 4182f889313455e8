//! Domain error types

use thiserror::Error;

/// Error when parsing a colour string
#[derive(Debug, Clone, Error)]
#[error("Invalid color: \"{input}\". Expected format: #RRGGBB or #RRGGBBAA (e.g., #ff3b30)")]
pub struct ColorParseError {
    pub input: String,
}

/// Error when parsing a haptics mode string
#[derive(Debug, Clone, Error)]
#[error("Invalid haptics mode: \"{input}\". Valid modes are: none, selection, highlight, highlight:<0.0-1.0>")]
pub struct HapticsModeParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
