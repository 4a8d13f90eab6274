//! Recursive-descent parser from tokens to a [`Document`].
//!
//! # Productions
//!
//! - **Start**: dispatches on the kind of the next token
//! - **Comment**: turns a `Comment` or `EmptyLine` token into an [`Empty`] line
//! - **KeyValue**: reads `key [=] value [#comment]` and dispatches on the key:
//!   `Match` is rejected, `Host` opens a new block, `Include` expands files,
//!   anything else becomes a [`KeyValue`] line of the current block
//!
//! Lines always go to the most recently opened block, which is the implicit
//! block until the first `Host` line.

use std::iter::Peekable;
use std::path::Path;

use crate::document::{Document, Empty, Host, Include, KeyValue, Node};
use crate::error::{Result, SshConfigError};
use crate::fs::FileSystem;
use crate::options::ParseOptions;
use crate::pattern::Pattern;
use crate::syntax::{Lexer, Token, TokenKind};

/// Everything a parse needs besides the text itself.
#[derive(Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    pub fs: &'a dyn FileSystem,
    pub options: &'a ParseOptions,
    /// File the text was read from
    pub origin: Option<&'a Path>,
    /// Number of `Include` expansions above this document
    pub depth: u8,
}

/// Parses `text` into a document.
pub(crate) fn parse(text: &str, ctx: &ParseContext<'_>) -> Result<Document> {
    let mut document = Parser::new(Lexer::new(text), *ctx).parse()?;
    document.set_unterminated(!text.is_empty() && !text.ends_with('\n'));
    Ok(document)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Production {
    Start,
    Comment,
    KeyValue,
    Done,
}

/// Parser over any token stream.
pub(crate) struct Parser<'a, I: Iterator<Item = Token>> {
    tokens: Peekable<I>,
    ctx: ParseContext<'a>,
    document: Document,
}

impl<'a, I: Iterator<Item = Token>> Parser<'a, I> {
    pub(crate) fn new(tokens: I, ctx: ParseContext<'a>) -> Self {
        Self {
            tokens: tokens.peekable(),
            ctx,
            document: Document::new(),
        }
    }

    /// Runs productions until the stream is exhausted.
    pub(crate) fn parse(mut self) -> Result<Document> {
        let mut production = Production::Start;
        loop {
            production = match production {
                Production::Start => self.start()?,
                Production::Comment => self.comment()?,
                Production::KeyValue => self.key_value()?,
                Production::Done => return Ok(self.document),
            };
        }
    }

    fn start(&mut self) -> Result<Production> {
        let Some(token) = self.tokens.peek() else {
            return Ok(Production::Done);
        };
        match token.kind {
            TokenKind::Eof => Ok(Production::Done),
            TokenKind::Comment | TokenKind::EmptyLine => Ok(Production::Comment),
            TokenKind::Key => Ok(Production::KeyValue),
            kind => Err(SshConfigError::UnexpectedToken {
                kind,
                position: token.position,
            }),
        }
    }

    fn comment(&mut self) -> Result<Production> {
        let token = self.tokens.next().ok_or(SshConfigError::ExpectedToken)?;
        let empty = match token.kind {
            TokenKind::Comment => Empty {
                comment: Some(token.text),
                leading_space: token.position.indent(),
                position: token.position,
            },
            _ => Empty {
                comment: None,
                leading_space: 0,
                position: token.position,
            },
        };
        self.document.push_node(Node::Empty(empty));
        Ok(Production::Start)
    }

    fn key_value(&mut self) -> Result<Production> {
        let key = self.tokens.next().ok_or(SshConfigError::ExpectedToken)?;
        if key.text.is_empty() {
            return Err(SshConfigError::UnexpectedToken {
                kind: key.kind,
                position: key.position,
            });
        }
        let mut value = self.tokens.next().ok_or(SshConfigError::ExpectedToken)?;

        let uses_equals = value.kind == TokenKind::Equals;
        if uses_equals {
            value = self.tokens.next().ok_or(SshConfigError::ExpectedToken)?;
        }
        match value.kind {
            TokenKind::String => {}
            TokenKind::Eof => return Err(SshConfigError::ExpectedToken),
            kind => {
                return Err(SshConfigError::UnexpectedToken {
                    kind,
                    position: value.position,
                });
            }
        }

        let comment = self
            .tokens
            .next_if(|t| t.kind == TokenKind::Comment && t.position.line == value.position.line)
            .map(|t| t.text);

        match key.text.to_ascii_lowercase().as_str() {
            "match" => return Err(SshConfigError::MatchUnsupported),
            "host" => {
                let patterns = value
                    .text
                    .split_whitespace()
                    .map(Pattern::compile)
                    .collect::<Result<Vec<_>>>()?;
                let mut host = Host::new(patterns)?;
                host.set_header(&key.text, uses_equals, comment, key.position);
                tracing::debug!("Opened Host block '{}' at {}", value.text, key.position);
                self.document.push_host(host);
            }
            "include" => {
                let directives = value.text.split_whitespace().map(str::to_string).collect();
                let include = Include {
                    keyword: key.text,
                    comment,
                    uses_equals,
                    leading_space: key.position.indent(),
                    position: key.position,
                    ..Include::expand(directives, &self.ctx)?
                };
                self.document.push_node(Node::Include(include));
            }
            _ => {
                let kv = KeyValue {
                    leading_space: key.position.indent(),
                    position: key.position,
                    key: key.text,
                    value: value.text,
                    comment,
                    uses_equals,
                };
                self.document.push_node(Node::KeyValue(kv));
            }
        }
        Ok(Production::Start)
    }
}
