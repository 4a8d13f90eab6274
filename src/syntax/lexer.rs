//! Streaming tokenizer for `ssh_config` text.
//!
//! # Design
//!
//! The lexer is an explicit state machine driven by a single loop:
//! each step inspects the input, may emit tokens, and returns the next
//! [`State`]. A call to [`Lexer::next_tokens`] runs steps until at least one
//! token has been emitted, so callers receive tokens in small batches.
//!
//! ```text
//! Void ──non-space──▶ Key ──▶ Equals ──'='──▶ RightSpace ──▶ RightValue
//!  ▲  ╲                          ╲────────────────────────────▶ │
//!  │   '#'──▶ Comment ◀──────────────────'#'────────────────────┤
//!  └──────────────────────────── line end ──────────────────────┘
//! ```
//!
//! A line ends at `\n` or `\r\n`. A lone `\r` is ordinary content.

use std::collections::VecDeque;

use super::{Position, Token, TokenKind};

/// States of the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between directives: skips whitespace, emits blank lines.
    Void,
    /// Inside a directive name.
    Key,
    /// After a key, before its value.
    Equals,
    /// After `=`, skipping whitespace.
    RightSpace,
    /// Inside a value.
    RightValue,
    /// Inside a `#` comment. Always resumes at `Void`.
    Comment,
    /// `Eof` has been emitted.
    Done,
}

/// Tokenizer over a complete input text.
///
/// Implements [`Iterator`] over the flattened token stream, which always
/// ends with exactly one [`TokenKind::Eof`] token.
#[derive(Debug)]
pub struct Lexer {
    input: Vec<char>,
    offset: usize,
    line: usize,
    col: usize,
    state: State,
    pending: VecDeque<Token>,
}

impl Lexer {
    /// Creates a lexer over the given text.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            offset: 0,
            line: 1,
            col: 1,
            state: State::Void,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next batch of one or more tokens.
    ///
    /// Returns an empty batch only once `Eof` has already been produced.
    pub fn next_tokens(&mut self) -> Vec<Token> {
        let mut batch = Vec::new();
        while batch.is_empty() && self.state != State::Done {
            self.state = self.step(&mut batch);
        }
        batch
    }

    fn step(&mut self, out: &mut Vec<Token>) -> State {
        match self.state {
            State::Void => self.lex_void(out),
            State::Key => self.lex_key(out),
            State::Equals => self.lex_equals(out),
            State::RightSpace => self.lex_right_space(),
            State::RightValue => self.lex_right_value(out),
            State::Comment => self.lex_comment(out),
            State::Done => State::Done,
        }
    }

    fn lex_void(&mut self, out: &mut Vec<Token>) -> State {
        loop {
            if let Some(len) = self.terminator_len() {
                out.push(Token::new(TokenKind::EmptyLine, self.cursor(), ""));
                self.advance(len);
                return State::Void;
            }

            match self.peek() {
                None => {
                    out.push(Token::new(TokenKind::Eof, self.cursor(), ""));
                    return State::Done;
                }
                Some('#') => return State::Comment,
                Some(c) if c.is_whitespace() => self.advance(1),
                Some(_) => return State::Key,
            }
        }
    }

    fn lex_key(&mut self, out: &mut Vec<Token>) -> State {
        let start = self.cursor();
        let mut text = String::new();

        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '=' {
                break;
            }
            text.push(c);
            self.advance(1);
        }

        out.push(Token::new(TokenKind::Key, start, text));
        State::Equals
    }

    fn lex_equals(&mut self, out: &mut Vec<Token>) -> State {
        while self.terminator_len().is_none() {
            match self.peek() {
                Some('=') => {
                    out.push(Token::new(TokenKind::Equals, self.cursor(), ""));
                    self.advance(1);
                    return State::RightSpace;
                }
                Some(c) if c.is_whitespace() => self.advance(1),
                _ => break,
            }
        }
        State::RightValue
    }

    fn lex_right_space(&mut self) -> State {
        while self.terminator_len().is_none() {
            match self.peek() {
                Some(c) if c.is_whitespace() => self.advance(1),
                _ => break,
            }
        }
        State::RightValue
    }

    fn lex_right_value(&mut self, out: &mut Vec<Token>) -> State {
        let start = self.cursor();
        let mut text = String::new();

        loop {
            if let Some(len) = self.terminator_len() {
                out.push(value_token(start, &text));
                self.advance(len);
                return State::Void;
            }

            match self.peek() {
                None => {
                    out.push(value_token(start, &text));
                    return State::Void;
                }
                Some('#') => {
                    out.push(value_token(start, &text));
                    return State::Comment;
                }
                Some(c) => {
                    text.push(c);
                    self.advance(1);
                }
            }
        }
    }

    fn lex_comment(&mut self, out: &mut Vec<Token>) -> State {
        let start = self.cursor();
        // The '#' itself is not part of the token text.
        self.advance(1);

        let mut text = String::new();
        loop {
            if let Some(len) = self.terminator_len() {
                out.push(Token::new(TokenKind::Comment, start, text));
                self.advance(len);
                return State::Void;
            }
            match self.peek() {
                None => {
                    out.push(Token::new(TokenKind::Comment, start, text));
                    return State::Void;
                }
                Some(c) => {
                    text.push(c);
                    self.advance(1);
                }
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.offset).copied()
    }

    /// Length of the line terminator at the cursor, if any.
    fn terminator_len(&self) -> Option<usize> {
        match (self.peek(), self.input.get(self.offset + 1)) {
            (Some('\n'), _) => Some(1),
            (Some('\r'), Some('\n')) => Some(2),
            _ => None,
        }
    }

    fn advance(&mut self, count: usize) {
        for _ in 0..count {
            let Some(c) = self.peek() else { return };
            self.offset += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    const fn cursor(&self) -> Position {
        Position::new(self.line, self.col)
    }
}

/// Builds a value token, dropping the blanks that separate it from a comment.
fn value_token(start: Position, text: &str) -> Token {
    Token::new(
        TokenKind::String,
        start,
        text.trim_end_matches([' ', '\t']),
    )
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pending.is_empty() {
            let batch = self.next_tokens();
            self.pending.extend(batch);
        }
        self.pending.pop_front()
    }
}
