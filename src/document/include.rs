//! Expansion of `Include` directives into nested documents.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{Result, SshConfigError};
use crate::options::defaults::MAX_INCLUDE_DEPTH;
use crate::parser::{self, ParseContext};
use crate::syntax::Position;

use super::node::Include;

impl Include {
    /// Resolves `directives` and parses every matched file.
    ///
    /// Matches from all directives are merged into one set, so a file hit by
    /// two globs is loaded once, and parsed in sorted path order. A glob that
    /// matches nothing contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SshConfigError::IncludeDepthExceeded`] when this include
    /// would sit deeper than [`MAX_INCLUDE_DEPTH`], and propagates glob,
    /// read and parse failures of the included files.
    pub(crate) fn expand(directives: Vec<String>, ctx: &ParseContext<'_>) -> Result<Self> {
        let depth = ctx.depth.saturating_add(1);
        if depth > MAX_INCLUDE_DEPTH {
            return Err(SshConfigError::IncludeDepthExceeded {
                depth,
                max: MAX_INCLUDE_DEPTH,
            });
        }

        let base = ctx.options.include_base(ctx.origin);
        let mut matched = BTreeSet::new();
        for directive in &directives {
            let expanded = ctx.options.expand_tilde(directive);
            let pattern = absolute_pattern(&base, &expanded);
            let found = ctx.fs.glob(&pattern)?;
            if found.is_empty() {
                tracing::debug!("Include pattern '{pattern}' matched no files");
            }
            matched.extend(found);
        }

        let mut files = BTreeMap::new();
        for path in matched {
            tracing::debug!("Parsing included file {} at depth {depth}", path.display());
            let text = ctx.fs.read_to_string(&path)?;
            let child = ParseContext {
                origin: Some(&path),
                depth,
                ..*ctx
            };
            let document = parser::parse(&text, &child)?;
            files.insert(path, document);
        }

        Ok(Self {
            keyword: "Include".to_string(),
            directives,
            comment: None,
            uses_equals: false,
            leading_space: 0,
            position: Position::START,
            depth,
            files,
        })
    }
}

/// Anchors a relative directive at `base`.
fn absolute_pattern(base: &Path, directive: &Path) -> String {
    if directive.is_absolute() {
        directive.to_string_lossy().into_owned()
    } else {
        base.join(directive).to_string_lossy().into_owned()
    }
}
