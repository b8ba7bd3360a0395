//! Domain error types

use thiserror::Error;

/// Error when parsing a linger duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>ms, <number>s, <number>m or a combination (e.g., 250ms, 2s, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown delivery backend is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid backend: \"{input}\". Valid backends are: native, notify-rust, notify-send")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Error when a bundle identifier is not in reverse-DNS form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid bundle id '{input}'. Expected reverse-DNS form, e.g. com.apple.Terminal")]
pub struct InvalidBundleIdError {
    pub input: String,
}

/// Error when notification content is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Notification title must not be empty")]
    EmptyTitle,

    #[error("Sound name must not be empty")]
    EmptySoundName,
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
