//! Alias-scoped queries: `get`, `get_all` and `resolve`.
//!
//! # Traversal
//!
//! Every query walks the `Host` blocks matching the alias in document
//! order and, inside each, its lines in order. An `Include` line is
//! descended into where it appears, so included files take part exactly
//! at their point of inclusion.
//!
//! # Merge policy
//!
//! - **Plural directives** (see [`directives::is_plural`]) accumulate every
//!   value in encounter order.
//! - **All other directives** keep the first value encountered; later
//!   occurrences for the same alias are ignored.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Serialize;

use crate::directives;
use crate::error::{Result, SshConfigError};

use super::Document;
use super::node::{KeyValue, Node};

/// Directive name that is rejected on lookup.
const MATCHES: &str = "matches";

/// The resolved value of one directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Value of a single-valued directive
    Single(String),
    /// Accumulated values of a plural directive
    Multi(Vec<String>),
}

impl Value {
    /// Returns the value of a single-valued directive.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multi(_) => None,
        }
    }

    /// Returns the values of a plural directive.
    #[must_use]
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multi(values) => Some(values),
        }
    }
}

/// Directive name (lower-cased) to resolved value.
pub type Resolved = BTreeMap<String, Value>;

impl Document {
    /// Returns the first value of `key` that applies to `alias`.
    ///
    /// Returns an empty string when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::MatchUnsupported`] when `key` or a visited
    /// directive is `matches`.
    pub fn get(&self, alias: &str, key: &str) -> Result<String> {
        reject_matches(key)?;

        for node in self.nodes_for(alias) {
            match node {
                Node::KeyValue(kv) => {
                    reject_matches(&kv.key)?;
                    if kv.key.eq_ignore_ascii_case(key) {
                        return Ok(kv.value.clone());
                    }
                }
                Node::Include(include) => {
                    for document in include.documents() {
                        let value = document.get(alias, key)?;
                        if !value.is_empty() {
                            return Ok(value);
                        }
                    }
                }
                Node::Empty(_) => {}
            }
        }
        Ok(String::new())
    }

    /// Returns every value of `key` that applies to `alias`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::MatchUnsupported`] as [`Document::get`] does.
    pub fn get_all(&self, alias: &str, key: &str) -> Result<Vec<String>> {
        reject_matches(key)?;

        let mut all = Vec::new();
        for node in self.nodes_for(alias) {
            match node {
                Node::KeyValue(kv) => {
                    reject_matches(&kv.key)?;
                    if kv.key.eq_ignore_ascii_case(key) {
                        all.push(kv.value.clone());
                    }
                }
                Node::Include(include) => {
                    for document in include.documents() {
                        all.extend(document.get_all(alias, key)?);
                    }
                }
                Node::Empty(_) => {}
            }
        }
        Ok(all)
    }

    /// Resolves every directive that applies to `alias`.
    ///
    /// # Errors
    ///
    /// Propagates failures from included documents.
    pub fn resolve(&self, alias: &str) -> Result<Resolved> {
        let mut resolved = Resolved::new();
        for node in self.nodes_for(alias) {
            match node {
                Node::KeyValue(kv) => absorb(&mut resolved, kv),
                Node::Include(include) => {
                    for document in include.documents() {
                        merge(&mut resolved, document.resolve(alias)?);
                    }
                }
                Node::Empty(_) => {}
            }
        }
        Ok(resolved)
    }

    /// Checks yes/no and integer directives throughout the document.
    ///
    /// # Errors
    ///
    /// Returns the first [`SshConfigError::MustBeYesOrNo`] or
    /// [`SshConfigError::MustBeUInt`] found, in document order.
    pub fn validate(&self) -> Result<()> {
        for node in self.hosts.iter().flat_map(|host| host.nodes()) {
            match node {
                Node::KeyValue(kv) => directives::validate(&kv.key, &kv.value)?,
                Node::Include(include) => {
                    for document in include.documents() {
                        document.validate()?;
                    }
                }
                Node::Empty(_) => {}
            }
        }
        Ok(())
    }

    /// Lines of every block matching `alias`, in document order.
    fn nodes_for<'a>(&'a self, alias: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.hosts
            .iter()
            .filter(move |host| host.matches(alias))
            .flat_map(|host| host.nodes())
    }
}

fn reject_matches(key: &str) -> Result<()> {
    if key.eq_ignore_ascii_case(MATCHES) {
        return Err(SshConfigError::MatchUnsupported);
    }
    Ok(())
}

/// Adds one directive occurrence to the accumulator.
fn absorb(resolved: &mut Resolved, kv: &KeyValue) {
    let key = kv.key.to_ascii_lowercase();
    if directives::is_plural(&key) {
        match resolved.entry(key).or_insert_with(|| Value::Multi(Vec::new())) {
            Value::Multi(values) => values.push(kv.value.clone()),
            Value::Single(_) => {}
        }
    } else {
        resolved
            .entry(key)
            .or_insert_with(|| Value::Single(kv.value.clone()));
    }
}

/// Merges an included document's resolution into the accumulator.
///
/// Plural values append after what is already there; anything else is
/// adopted only if not yet present.
fn merge(resolved: &mut Resolved, included: Resolved) {
    for (key, value) in included {
        match resolved.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => {
                if let (Value::Multi(ours), Value::Multi(theirs)) = (slot.get_mut(), value) {
                    ours.extend(theirs);
                }
            }
        }
    }
}
