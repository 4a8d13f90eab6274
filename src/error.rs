//! Error types for parsing, querying and validating ssh configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::{Position, TokenKind};

/// Error type for every fallible document operation.
///
/// All variants are terminal for the operation that raised them.
/// Nothing is retried and no partial document is returned.
#[derive(Debug, Error)]
pub enum SshConfigError {
    /// A `Host` or alias pattern was empty.
    #[error("Pattern must not be empty")]
    EmptyPattern,

    /// The parser met a token that is illegal where it appeared.
    #[error("Unexpected {kind} token at {position}")]
    UnexpectedToken {
        /// Kind of the offending token
        kind: TokenKind,
        /// Where the token starts
        position: Position,
    },

    /// The token stream ended inside a key/value pair.
    #[error("Expected a token but the input ended")]
    ExpectedToken,

    /// A `Match` block or a `matches` lookup was encountered.
    #[error("The Match directive is not supported")]
    MatchUnsupported,

    /// Nested `Include` expansion went deeper than allowed.
    #[error("Include depth {depth} exceeds the maximum of {max}")]
    IncludeDepthExceeded {
        /// Depth of the rejected expansion
        depth: u8,
        /// Configured maximum
        max: u8,
    },

    /// A yes/no directive carried some other value.
    #[error("{key} must be 'yes' or 'no', got '{value}'")]
    MustBeYesOrNo {
        /// Directive name as written
        key: String,
        /// Offending value
        value: String,
    },

    /// An unsigned-integer directive carried a non-numeric value.
    #[error("{key} must be an unsigned integer, got '{value}'")]
    MustBeUInt {
        /// Directive name as written
        key: String,
        /// Offending value
        value: String,
    },

    /// Failed to read a configuration file.
    #[error("Failed to read '{}': {source}", path.display())]
    FileRead {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An `Include` directive was not a usable glob.
    #[error("Invalid include pattern '{pattern}': {reason}")]
    InvalidGlob {
        /// The resolved glob pattern
        pattern: String,
        /// Reason reported by the glob engine
        reason: String,
    },

    /// A host pattern failed to compile into a matcher.
    #[error("Invalid host pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SshConfigError> = std::result::Result<T, E>;
