//! Error types for loading parse options.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for options file operations.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Failed to read the options file.
    #[error("Failed to read options file '{}': {source}", path.display())]
    FileRead {
        /// Path to the options file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML options.
    #[error("Failed to parse TOML options: {0}")]
    TomlParse(#[from] toml::de::Error),
}
