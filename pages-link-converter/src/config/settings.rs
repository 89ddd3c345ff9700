//! Front end settings deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Settings read from a `config.toml` file.
///
/// Every key is optional; missing keys take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Copy every converted link to the clipboard.
    pub auto_copy: bool,

    /// Open every converted link in the browser.
    pub auto_open: bool,

    /// Fall back to a terminal escape sequence when the system clipboard fails.
    pub terminal_fallback: bool,

    /// Prompt shown in interactive mode.
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_copy: false,
            auto_open: false,
            terminal_fallback: true,
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if there is no file at `path`, and
    /// the other [`ConfigError`] variants if it cannot be read, parsed or used.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading settings");

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let settings = Self::parse(&content, path)?;
        debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    /// Loads settings from `path` when given, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a path is given and loading it fails.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses and validates settings from TOML text. `path` is only used in errors.
    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates settings.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.prompt.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidValue {
                path: path.to_path_buf(),
                key: "prompt",
                reason: "must not contain line breaks",
            });
        }

        Ok(())
    }
}
