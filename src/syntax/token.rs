//! Position and token value types.

use std::fmt;

/// A 1-based `(line, column)` location in the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1
    pub line: usize,
    /// Column number, starting at 1
    pub col: usize,
}

impl Position {
    /// The first character of any input.
    pub const START: Self = Self { line: 1, col: 1 };

    /// Creates a position from a line and column.
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Number of columns before this position on its line.
    #[must_use]
    pub const fn indent(self) -> usize {
        self.col.saturating_sub(1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input, emitted exactly once.
    Eof,
    /// A line holding nothing but whitespace.
    EmptyLine,
    /// Text after `#` up to the end of the line.
    Comment,
    /// A directive name.
    Key,
    /// The optional `=` separator.
    Equals,
    /// The value right of a key.
    String,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "end-of-file",
            Self::EmptyLine => "empty-line",
            Self::Comment => "comment",
            Self::Key => "key",
            Self::Equals => "equals",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

/// A typed token with the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Where the token starts
    pub position: Position,
    /// What the token is
    pub kind: TokenKind,
    /// Token text; empty for `Eof`, `EmptyLine` and `Equals`
    pub text: String,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, position: Position, text: impl Into<String>) -> Self {
        Self {
            position,
            kind,
            text: text.into(),
        }
    }
}
