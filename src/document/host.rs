//! `Host` blocks: a pattern set plus the lines beneath it.

use std::fmt;

use crate::directives::{self, DirectiveValue};
use crate::error::{Result, SshConfigError};
use crate::pattern::{self, Pattern};
use crate::syntax::Position;

use super::node::{KeyValue, Node, write_comment, write_value};

/// Indentation added to directives created through [`Host::set`].
const SET_INDENT: usize = 2;

/// A `Host` block.
///
/// The first block of every document is implicit: it matches every alias,
/// holds the lines before the first `Host` header, and renders no header.
#[derive(Debug, Clone)]
pub struct Host {
    keyword: String,
    patterns: Vec<Pattern>,
    nodes: Vec<Node>,
    uses_equals: bool,
    leading_space: usize,
    implicit: bool,
    comment: Option<String>,
    position: Position,
}

impl Host {
    /// Creates an explicit block for the given patterns.
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::EmptyPattern`] if `patterns` is empty.
    pub fn new(patterns: Vec<Pattern>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(SshConfigError::EmptyPattern);
        }
        Ok(Self {
            keyword: "Host".to_string(),
            patterns,
            nodes: Vec::new(),
            uses_equals: false,
            leading_space: 0,
            implicit: false,
            comment: None,
            position: Position::START,
        })
    }

    /// Creates the match-all block that opens every document.
    #[must_use]
    pub fn implicit() -> Self {
        Self {
            keyword: "Host".to_string(),
            patterns: vec![Pattern::match_all()],
            nodes: Vec::new(),
            uses_equals: false,
            leading_space: 0,
            implicit: true,
            comment: None,
            position: Position::START,
        }
    }

    /// Sets how the header line is written.
    pub(crate) fn set_header(
        &mut self,
        keyword: &str,
        uses_equals: bool,
        comment: Option<String>,
        position: Position,
    ) {
        self.keyword = keyword.to_string();
        self.uses_equals = uses_equals;
        self.comment = comment;
        self.leading_space = position.indent();
        self.position = position;
    }

    /// Patterns from the header line.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Lines of the block, in order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to the lines of the block.
    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    /// Returns `true` for the implicit top-of-file block.
    #[must_use]
    pub const fn is_implicit(&self) -> bool {
        self.implicit
    }

    /// Trailing comment of the header line.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replaces the trailing comment of the header line.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    /// Where the header line starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if this block applies to `alias`.
    #[must_use]
    pub fn matches(&self, alias: &str) -> bool {
        pattern::matches_all(&self.patterns, alias)
    }

    /// Appends a line to the end of the block.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Sets a directive on this block.
    ///
    /// For a single-valued directive the first existing line with that name
    /// is rewritten in place. Otherwise a new line goes right after the last
    /// non-blank, non-comment line so trailing spacing stays at the end.
    pub fn set(&mut self, key: &str, value: impl Into<DirectiveValue>) {
        let value = value.into().to_string();

        if !directives::is_plural(key) {
            let existing = self.nodes.iter_mut().find_map(|node| match node {
                Node::KeyValue(kv) if kv.key.eq_ignore_ascii_case(key) => Some(kv),
                _ => None,
            });
            if let Some(kv) = existing {
                kv.value = value;
                return;
            }
        }

        let at = self
            .nodes
            .iter()
            .rposition(|node| !matches!(node, Node::Empty(_)))
            .map_or(0, |i| i + 1);
        let kv = KeyValue::new(key, value, self.leading_space + SET_INDENT);
        self.nodes.insert(at, Node::KeyValue(kv));
    }

    /// Removes every line setting `key`.
    pub fn remove_value(&mut self, key: &str) {
        self.nodes.retain(|node| !node.is_key(key));
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.implicit {
            let patterns: Vec<&str> = self.patterns.iter().map(Pattern::as_str).collect();
            write!(f, "{:indent$}{}", "", self.keyword, indent = self.leading_space)?;
            write_value(f, self.uses_equals, &patterns.join(" "))?;
            write_comment(f, self.comment.as_deref())?;
            writeln!(f)?;
        }
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}
