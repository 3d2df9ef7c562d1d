//! Error types for configuration and value parsing
//!
//! The search engine itself has no failure modes: empty results and stale
//! sessions are states, not errors. Everything fallible around it (loading
//! configuration, parsing colors) reports through [`Error`].

use std::fmt;

/// Errors raised while loading configuration or parsing values
#[derive(Debug)]
pub enum Error {
    /// IO error while reading a configuration file
    IoError(std::io::Error),

    /// YAML (de)serialization error
    YamlError(serde_yaml::Error),

    /// JSON (de)serialization error
    JsonError(serde_json::Error),

    /// Configuration parsed but holds unusable values
    InvalidConfig(String),

    /// Color string that is neither a name, a palette index nor `#rrggbb`
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "IO error: {}", err),
            Error::YamlError(err) => write!(f, "YAML error: {}", err),
            Error::JsonError(err) => write!(f, "JSON error: {}", err),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidColor(value) => write!(f, "Invalid color: {:?}", value),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::YamlError(err) => Some(err),
            Error::JsonError(err) => Some(err),
            Error::InvalidConfig(_) | Error::InvalidColor(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::YamlError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::JsonError(err)
    }
}

/// Result type for fallible crate operations
pub type Result<T> = std::result::Result<T, Error>;
