//! Host alias patterns.
//!
//! A pattern is a glob over host aliases where `*` matches any run of
//! characters (including none) and `?` matches exactly one character.
//! A single leading `!` negates the pattern. Matching is case-sensitive.
//!
//! # Pattern sets
//!
//! A `Host` line carries several patterns. The set matches an alias when
//! at least one positive pattern matches and no negated pattern does.
//! A matching negated pattern wins regardless of its position in the set.

use std::fmt;

use regex::Regex;

use crate::error::{Result, SshConfigError};

/// A compiled host pattern.
///
/// # Examples
///
/// ```
/// use sshconf::Pattern;
///
/// let pattern = Pattern::compile("web?.example.com").unwrap();
/// assert!(pattern.is_match("web1.example.com"));
/// assert!(!pattern.is_match("web10.example.com"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    original: String,
    matcher: Matcher,
    negated: bool,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// A bare `*`.
    Any,
    Glob(Regex),
}

impl Pattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::EmptyPattern`] if `pattern` is empty.
    pub fn compile(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(SshConfigError::EmptyPattern);
        }

        let (negated, body) = pattern
            .strip_prefix('!')
            .map_or((false, pattern), |rest| (true, rest));

        if body == "*" {
            return Ok(Self {
                original: pattern.to_string(),
                matcher: Matcher::Any,
                negated,
            });
        }

        let mut source = String::with_capacity(body.len() + 8);
        source.push_str("(?s)^");
        for c in body.chars() {
            match c {
                '*' => source.push_str(".*"),
                '?' => source.push('.'),
                _ => source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|source| SshConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            original: pattern.to_string(),
            matcher: Matcher::Glob(regex),
            negated,
        })
    }

    /// The pattern that matches every alias.
    #[must_use]
    pub fn match_all() -> Self {
        Self {
            original: "*".to_string(),
            matcher: Matcher::Any,
            negated: false,
        }
    }

    /// The pattern as written, including any leading `!`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns `true` for a `!`-prefixed pattern.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns `true` if the glob body matches `alias`, ignoring negation.
    #[must_use]
    pub fn is_match(&self, alias: &str) -> bool {
        match &self.matcher {
            Matcher::Any => true,
            Matcher::Glob(regex) => regex.is_match(alias),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.original == other.original
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Matches `alias` against an ordered pattern set.
///
/// Returns `false` as soon as a negated pattern matches, otherwise `true`
/// if any positive pattern matched.
#[must_use]
pub fn matches_all(patterns: &[Pattern], alias: &str) -> bool {
    let mut found = false;
    for pattern in patterns.iter().filter(|p| p.is_match(alias)) {
        if pattern.negated {
            return false;
        }
        found = true;
    }
    found
}
