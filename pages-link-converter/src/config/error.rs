//! Settings file error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No settings file exists at the given path.
    #[error("Settings file '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The settings file exists but could not be read.
    #[error("Cannot read settings file '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has unknown or mistyped keys.
    #[error("Settings file '{}' is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A setting has a value the front end cannot use.
    #[error("Setting '{key}' in '{}' is invalid: {reason}", .path.display())]
    InvalidValue {
        path: PathBuf,
        key: &'static str,
        reason: &'static str,
    },
}
