//! sshconf: OpenSSH client configuration, parsed without losing formatting
//!
//! A library for reading `ssh_config` files into a document model that
//! keeps comments, blank lines, indentation and separators, answering
//! per-alias queries with OpenSSH merge rules, editing `Host` blocks and
//! writing the result back out.
//!
//! # Example
//!
//! ```
//! use sshconf::{Document, Value};
//!
//! let text = "\
//! Host has2identity
//!   IdentityFile f1
//!   IdentityFile f2
//!   Port 22
//! ";
//! let doc = Document::parse(text).unwrap();
//!
//! let resolved = doc.resolve("has2identity").unwrap();
//! assert_eq!(
//!     resolved["identityfile"],
//!     Value::Multi(vec!["f1".to_string(), "f2".to_string()])
//! );
//! assert_eq!(resolved["port"], Value::Single("22".to_string()));
//! assert_eq!(doc.to_string(), text);
//! ```

pub mod directives;
pub mod document;
mod error;
pub mod fs;
pub mod options;
mod parser;
pub mod pattern;
pub mod syntax;


pub use directives::DirectiveValue;
pub use document::{Document, Empty, Host, Include, KeyValue, Node, Resolved, Value};
pub use error::{Result, SshConfigError};
pub use fs::{FileSystem, OsFileSystem};
pub use options::ParseOptions;
pub use pattern::Pattern;
