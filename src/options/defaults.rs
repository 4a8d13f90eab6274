//! Default values for parse options.
//!
//! Centralized constants to avoid magic paths scattered across the codebase.

use std::path::PathBuf;

/// Directory holding the system-wide client configuration.
pub const SYSTEM_CONFIG_DIR: &str = "/etc/ssh";

/// File name of the system-wide client configuration.
pub const SYSTEM_CONFIG_FILE: &str = "ssh_config";

/// Per-user configuration directory, relative to the home directory.
pub const USER_CONFIG_DIR: &str = ".ssh";

/// File name of the per-user client configuration.
pub const USER_CONFIG_FILE: &str = "config";

/// Deepest allowed chain of nested `Include` expansions.
pub const MAX_INCLUDE_DEPTH: u8 = 5;

/// Default system configuration directory as a path.
#[must_use]
pub fn system_config_dir() -> PathBuf {
    PathBuf::from(SYSTEM_CONFIG_DIR)
}
