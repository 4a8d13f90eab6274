//! Options controlling how configuration text is parsed.
//!
//! This module provides:
//! - Explicit path settings ([`ParseOptions`]) in place of process-wide defaults
//! - TOML options file parsing ([`OptionsFile`])
//! - Default values ([`defaults`])
//!
//! # Relative `Include` paths
//!
//! A relative `Include` directive resolves against:
//!
//! 1. **System configuration** - [`ParseOptions::system_config_dir`] when
//!    [`ParseOptions::system`] is set
//! 2. **Loaded file** - the directory of the file containing the directive
//! 3. **Parsed text** - `~/.ssh` when there is no file, or `.` without a home directory

pub mod defaults;
mod error;
mod toml;


use std::path::{Path, PathBuf};

pub use error::OptionsError;
pub use toml::OptionsFile;

/// Paths and flags consulted while parsing and expanding includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Base directory for relative includes in system configuration
    pub system_config_dir: PathBuf,

    /// Home directory for `~` expansion, if known
    pub home_dir: Option<PathBuf>,

    /// Whether the text being parsed is the system-wide configuration
    pub system: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            system_config_dir: defaults::system_config_dir(),
            home_dir: dirs::home_dir(),
            system: false,
        }
    }
}

impl ParseOptions {
    /// Creates options with hermetic paths, ignoring the environment.
    #[must_use]
    pub fn with_dirs(system_config_dir: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            system_config_dir: system_config_dir.into(),
            home_dir,
            system: false,
        }
    }

    /// Returns a copy of these options for system configuration.
    #[must_use]
    pub fn system(&self) -> Self {
        Self {
            system: true,
            ..self.clone()
        }
    }

    /// Builds options from a TOML string, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or has unknown fields.
    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        OptionsFile::parse(content).map(Self::from)
    }

    /// Builds options from a TOML file, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        OptionsFile::load(path).map(Self::from)
    }

    /// The per-user configuration directory (`~/.ssh`), if the home is known.
    #[must_use]
    pub fn user_config_dir(&self) -> Option<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|home| home.join(defaults::USER_CONFIG_DIR))
    }

    /// Path of the per-user configuration file (`~/.ssh/config`).
    #[must_use]
    pub fn user_config_file(&self) -> Option<PathBuf> {
        self.user_config_dir()
            .map(|dir| dir.join(defaults::USER_CONFIG_FILE))
    }

    /// Path of the system-wide configuration file.
    #[must_use]
    pub fn system_config_file(&self) -> PathBuf {
        self.system_config_dir.join(defaults::SYSTEM_CONFIG_FILE)
    }

    /// Expands a leading `~` or `~/` against the home directory.
    ///
    /// Paths without a tilde, and tildes with no home directory configured,
    /// are returned unchanged.
    #[must_use]
    pub fn expand_tilde(&self, path: &str) -> PathBuf {
        let Some(home) = &self.home_dir else {
            return PathBuf::from(path);
        };
        if path == "~" {
            return home.clone();
        }
        path.strip_prefix("~/")
            .map_or_else(|| PathBuf::from(path), |rest| home.join(rest))
    }

    /// Directory that relative `Include` directives resolve against.
    #[must_use]
    pub fn include_base(&self, origin: Option<&Path>) -> PathBuf {
        if self.system {
            return self.system_config_dir.clone();
        }
        origin
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .or_else(|| self.user_config_dir())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl From<OptionsFile> for ParseOptions {
    fn from(file: OptionsFile) -> Self {
        let defaults = Self::default();
        Self {
            system_config_dir: file
                .system_config_dir
                .unwrap_or(defaults.system_config_dir),
            home_dir: file.home_dir.or(defaults.home_dir),
            system: false,
        }
    }
}
