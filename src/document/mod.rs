//! Format-preserving document model.
//!
//! This module provides:
//! - The parsed file ([`Document`]) and its blocks ([`Host`])
//! - Line-level nodes ([`Node`], [`Empty`], [`KeyValue`], [`Include`])
//! - Alias-scoped resolution results ([`Value`], [`Resolved`])
//!
//! # Ownership
//!
//! A [`Document`] owns its hosts, a [`Host`] owns its nodes, and an
//! [`Include`] owns the documents of the files it matched. The structure is
//! a plain tree with no shared nodes.
//!
//! # Rendering
//!
//! [`Document`], [`Host`] and [`Node`] implement [`Display`](std::fmt::Display).
//! Rendering a freshly parsed document reproduces its input, with these
//! normalizations:
//!
//! - `=` separators are written as ` = `
//! - indentation is written as spaces
//! - blanks at the end of a value are dropped
//! - `\r\n` line ends are written as `\n`
//! - whitespace-only lines are written empty
//!
//! A source whose last line has no terminator renders without one, so a
//! trailing `\r` stays content on the next parse.

mod host;
mod include;
mod node;
mod resolve;

#[cfg(test)]
mod host_tests;
#[cfg(test)]
mod mod_tests;

use std::fmt::{self, Write};
use std::io::ErrorKind;
use std::path::Path;

pub use host::Host;
pub use node::{Empty, Include, KeyValue, Node};
pub use resolve::{Resolved, Value};

use crate::directives::DirectiveValue;
use crate::error::{Result, SshConfigError};
use crate::fs::{FileSystem, OsFileSystem};
use crate::options::ParseOptions;
use crate::parser::{self, ParseContext};
use crate::pattern::Pattern;

/// A parsed `ssh_config` file.
///
/// Always holds at least one [`Host`]: the implicit block collecting
/// directives that precede the first `Host` line.
///
/// # Examples
///
/// ```
/// use sshconf::Document;
///
/// let doc = Document::parse("Host web\n  User deploy\n").unwrap();
/// assert_eq!(doc.get("web", "user").unwrap(), "deploy");
/// assert_eq!(doc.get("db", "user").unwrap(), "");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    hosts: Vec<Host>,
    /// The source ended in the middle of its last line
    unterminated: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            hosts: vec![Host::implicit()],
            unterminated: false,
        }
    }
}

impl Document {
    /// Creates a document holding only the implicit block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses text using the OS filesystem and default options.
    ///
    /// # Errors
    ///
    /// Returns the first syntax, include or pattern error encountered.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, None, &OsFileSystem, &ParseOptions::default())
    }

    /// Parses text with an explicit filesystem and options.
    ///
    /// `origin` is the path the text came from, if any; its directory is
    /// the base for relative `Include` directives.
    ///
    /// # Errors
    ///
    /// Returns the first syntax, include or pattern error encountered.
    pub fn parse_with(
        text: &str,
        origin: Option<&Path>,
        fs: &dyn FileSystem,
        options: &ParseOptions,
    ) -> Result<Self> {
        let ctx = ParseContext {
            fs,
            options,
            origin,
            depth: 0,
        };
        parser::parse(text, &ctx)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::FileRead`] if the file cannot be read,
    /// or any parse error.
    pub fn load(path: &Path, fs: &dyn FileSystem, options: &ParseOptions) -> Result<Self> {
        let text = fs.read_to_string(path)?;
        Self::parse_with(&text, Some(path), fs, options)
    }

    /// Loads `~/.ssh/config`, falling back to the system configuration.
    ///
    /// The system file is parsed with [`ParseOptions::system`] set. Returns
    /// an empty document when neither file exists.
    ///
    /// # Errors
    ///
    /// Returns read errors other than "not found", and any parse error.
    pub fn load_default(fs: &dyn FileSystem, options: &ParseOptions) -> Result<Self> {
        if let Some(user) = options.user_config_file() {
            if let Some(document) = load_if_present(&user, fs, options)? {
                return Ok(document);
            }
        }

        let system = options.system();
        let path = system.system_config_file();
        Ok(load_if_present(&path, fs, &system)?.unwrap_or_default())
    }

    /// Blocks of the document, in order.
    #[must_use]
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    /// Mutable access to the blocks of the document.
    ///
    /// The implicit block at index 0 should stay in place.
    pub fn hosts_mut(&mut self) -> &mut [Host] {
        &mut self.hosts
    }

    /// Appends a new `Host` block for `alias` with the given directives.
    ///
    /// The block starts with a blank line that ends up after the directives,
    /// separating it from whatever is appended next.
    ///
    /// # Examples
    ///
    /// ```
    /// use sshconf::{Document, DirectiveValue};
    ///
    /// let mut doc = Document::new();
    /// doc.add(
    ///     "office",
    ///     [
    ///         ("Hostname", DirectiveValue::from("1.2.3.4")),
    ///         ("Compression", DirectiveValue::from(true)),
    ///     ],
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     doc.to_string(),
    ///     "Host office\n  Hostname 1.2.3.4\n  Compression yes\n\n"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::EmptyPattern`] if `alias` is empty.
    pub fn add<K, V>(
        &mut self,
        alias: &str,
        directives: impl IntoIterator<Item = (K, V)>,
        comment: Option<&str>,
    ) -> Result<()>
    where
        K: AsRef<str>,
        V: Into<DirectiveValue>,
    {
        let mut host = Host::new(vec![Pattern::compile(alias)?])?;
        host.set_comment(comment.map(str::to_string));
        host.push(Node::blank());
        for (key, value) in directives {
            host.set(key.as_ref(), value);
        }
        self.hosts.push(host);
        self.unterminated = false;
        Ok(())
    }

    /// Opens a new block; following lines go into it.
    pub(crate) fn push_host(&mut self, host: Host) {
        self.hosts.push(host);
    }

    /// Records whether the source text lacked a final line terminator.
    pub(crate) const fn set_unterminated(&mut self, unterminated: bool) {
        self.unterminated = unterminated;
    }

    /// Appends a line to the most recently opened block.
    pub(crate) fn push_node(&mut self, node: Node) {
        if let Some(host) = self.hosts.last_mut() {
            host.push(node);
        }
    }
}

/// Loads `path`, treating a missing file as absent.
fn load_if_present(
    path: &Path,
    fs: &dyn FileSystem,
    options: &ParseOptions,
) -> Result<Option<Document>> {
    match Document::load(path, fs, options) {
        Ok(document) => Ok(Some(document)),
        Err(SshConfigError::FileRead {
            path: missing,
            source,
        }) if missing.as_path() == path && source.kind() == ErrorKind::NotFound => {
            tracing::debug!("No configuration at {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.unterminated {
            for host in &self.hosts {
                write!(f, "{host}")?;
            }
            return Ok(());
        }

        let mut text = String::new();
        for host in &self.hosts {
            write!(text, "{host}")?;
        }
        f.write_str(text.strip_suffix('\n').unwrap_or(&text))
    }
}
