//! TOML options file parsing.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::OptionsError;

/// Root structure of an options file.
///
/// All fields are optional; missing ones keep their built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    /// Base directory for relative `Include` paths in system configuration
    pub system_config_dir: Option<PathBuf>,

    /// Home directory used for `~` expansion
    pub home_dir: Option<PathBuf>,
}

impl OptionsFile {
    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path).map_err(|e| OptionsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, OptionsError> {
        toml::from_str(content).map_err(OptionsError::from)
    }
}
