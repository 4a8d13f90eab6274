//! Lexical layer for the `ssh_config` dialect.
//!
//! This module provides:
//! - Source locations ([`Position`])
//! - Typed lexical tokens ([`Token`], [`TokenKind`])
//! - The streaming tokenizer ([`Lexer`])

mod lexer;
mod token;

#[cfg(test)]
mod lexer_tests;

pub use lexer::Lexer;
pub use token::{Position, Token, TokenKind};
