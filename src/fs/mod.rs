//! Filesystem access for loading files and expanding `Include` globs.
//!
//! The parser never touches the filesystem directly. It goes through
//! [`FileSystem`] so that include expansion can be exercised without disk
//! access and embedding applications can supply their own storage.

use std::path::{Path, PathBuf};

use glob::MatchOptions;

use crate::error::{Result, SshConfigError};

/// Glob behaviour shared by every implementation.
///
/// `*` does not cross `/` and does not match hidden files.
pub const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Source of configuration files.
///
/// # Contract
///
/// - `glob` returns matching file paths sorted lexicographically; zero
///   matches is an empty vector, not an error, but a directory that cannot
///   be listed is a [`SshConfigError::FileRead`]
/// - `read_to_string` returns the full contents or a [`SshConfigError::FileRead`]
pub trait FileSystem {
    /// Expands an absolute glob pattern into matching file paths.
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::InvalidGlob`] if the pattern is malformed,
    /// or [`SshConfigError::FileRead`] if a directory on the way cannot be read.
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>>;

    /// Reads a whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::FileRead`] if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// [`FileSystem`] backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let entries =
            glob::glob_with(pattern, GLOB_OPTIONS).map_err(|e| SshConfigError::InvalidGlob {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => tracing::debug!("Skipping non-file include match {}", path.display()),
                Err(e) => {
                    let path = e.path().to_path_buf();
                    return Err(SshConfigError::FileRead {
                        path,
                        source: e.into_error(),
                    });
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| SshConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
