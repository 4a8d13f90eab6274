//! Line-level nodes inside a `Host` block.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::syntax::Position;

use super::Document;

/// One line of a `Host` block.
#[derive(Debug, Clone)]
pub enum Node {
    /// Blank or comment-only line
    Empty(Empty),
    /// A directive occurrence
    KeyValue(KeyValue),
    /// An `Include` directive and the documents it loaded
    Include(Include),
}

impl Node {
    /// Creates a true blank line.
    #[must_use]
    pub const fn blank() -> Self {
        Self::Empty(Empty {
            comment: None,
            leading_space: 0,
            position: Position::START,
        })
    }

    /// Where the node started in its source text.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Empty(empty) => empty.position,
            Self::KeyValue(kv) => kv.position,
            Self::Include(include) => include.position,
        }
    }

    /// Returns the directive if this node is one.
    #[must_use]
    pub const fn as_key_value(&self) -> Option<&KeyValue> {
        match self {
            Self::KeyValue(kv) => Some(kv),
            _ => None,
        }
    }

    /// Returns `true` for a directive whose name equals `key`, ignoring case.
    #[must_use]
    pub fn is_key(&self, key: &str) -> bool {
        self.as_key_value()
            .is_some_and(|kv| kv.key.eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(empty) => fmt::Display::fmt(empty, f),
            Self::KeyValue(kv) => fmt::Display::fmt(kv, f),
            Self::Include(include) => fmt::Display::fmt(include, f),
        }
    }
}

/// A blank line (`comment` is `None`) or a comment-only line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Empty {
    /// Text after `#`
    pub comment: Option<String>,
    /// Columns of indentation before `#`
    pub leading_space: usize,
    /// Source location
    pub position: Position,
}

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.comment {
            None => Ok(()),
            Some(comment) => write!(f, "{:indent$}#{comment}", "", indent = self.leading_space),
        }
    }
}

/// A single directive line such as `Port 22` or `User = root # admin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Directive name as written
    pub key: String,
    /// Value with surrounding blanks removed
    pub value: String,
    /// Trailing comment text after `#`
    pub comment: Option<String>,
    /// Whether the line used `=` as separator
    pub uses_equals: bool,
    /// Columns of indentation before the key
    pub leading_space: usize,
    /// Source location of the key
    pub position: Position,
}

impl KeyValue {
    /// Creates a directive with no comment, positioned at the start.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, leading_space: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
            uses_equals: false,
            leading_space,
            position: Position::START,
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.key, indent = self.leading_space)?;
        write_value(f, self.uses_equals, &self.value)?;
        write_comment(f, self.comment.as_deref())
    }
}

/// An `Include` line.
///
/// Owns the parsed documents of every matched file, keyed and ordered by
/// path. Rendering reproduces only the directive line itself.
#[derive(Debug, Clone)]
pub struct Include {
    /// Keyword as written, usually `Include`
    pub keyword: String,
    /// Glob directives as written
    pub directives: Vec<String>,
    /// Trailing comment text after `#`
    pub comment: Option<String>,
    /// Whether the line used `=` as separator
    pub uses_equals: bool,
    /// Columns of indentation before the keyword
    pub leading_space: usize,
    /// Source location of the keyword
    pub position: Position,
    /// Nesting level, 1 for an include in the root document
    pub depth: u8,
    pub(crate) files: BTreeMap<PathBuf, Document>,
}

impl Include {
    /// Paths of the matched files, in resolution order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Parsed documents of the matched files, in resolution order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.files.values()
    }

    /// The parsed document of one matched file.
    #[must_use]
    pub fn document(&self, path: &Path) -> Option<&Document> {
        self.files.get(path)
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.keyword, indent = self.leading_space)?;
        write_value(f, self.uses_equals, &self.directives.join(" "))?;
        write_comment(f, self.comment.as_deref())
    }
}

/// Writes the separator and value of a directive line.
pub(super) fn write_value(f: &mut fmt::Formatter<'_>, uses_equals: bool, value: &str) -> fmt::Result {
    if uses_equals {
        f.write_str(" =")?;
    }
    if value.is_empty() {
        Ok(())
    } else {
        write!(f, " {value}")
    }
}

/// Writes a trailing ` #comment`, if any.
pub(super) fn write_comment(f: &mut fmt::Formatter<'_>, comment: Option<&str>) -> fmt::Result {
    match comment {
        Some(comment) => write!(f, " #{comment}"),
        None => Ok(()),
    }
}
