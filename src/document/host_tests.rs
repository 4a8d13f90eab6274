//! Tests for `Host` blocks.

use std::path::PathBuf;

use crate::document::{Document, Host, Node};
use crate::error::SshConfigError;
use crate::fs::mock::MemoryFileSystem;
use crate::options::ParseOptions;
use crate::pattern::Pattern;

fn parse(text: &str) -> Document {
    let options = ParseOptions::with_dirs("/etc/ssh", Some(PathBuf::from("/home/alice")));
    Document::parse_with(text, None, &MemoryFileSystem::new(), &options).unwrap()
}

fn host(patterns: &[&str]) -> Host {
    let patterns = patterns
        .iter()
        .map(|p| Pattern::compile(p).unwrap())
        .collect();
    Host::new(patterns).unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn requires_at_least_one_pattern() {
        assert!(matches!(Host::new(vec![]), Err(SshConfigError::EmptyPattern)));
    }

    #[test]
    fn implicit_block_matches_everything_and_renders_no_header() {
        let mut implicit = Host::implicit();
        assert!(implicit.is_implicit());
        assert!(implicit.matches("anything"));

        implicit.set("User", "root");
        assert_eq!(implicit.to_string(), "  User root\n");
    }

    #[test]
    fn explicit_block_renders_header() {
        let mut block = host(&["a", "!b"]);
        block.set_comment(Some(" note".to_string()));
        assert_eq!(block.to_string(), "Host a !b # note\n");
    }
}

mod matching {
    use super::*;

    #[test]
    fn any_pattern_selects_the_block() {
        let block = host(&["web*", "db"]);
        assert!(block.matches("web01"));
        assert!(block.matches("db"));
        assert!(!block.matches("cache"));
    }

    #[test]
    fn negation_excludes_even_when_others_match() {
        let block = host(&["*.example.com", "!bad.example.com"]);
        assert!(block.matches("good.example.com"));
        assert!(!block.matches("bad.example.com"));
    }
}

mod set {
    use super::*;

    #[test]
    fn overwrites_single_valued_directive_in_place() {
        let mut doc = parse("Host a\n  port 22 # keep\n  User x\n");
        doc.hosts_mut()[1].set("Port", 2200_u32);
        assert_eq!(doc.to_string(), "Host a\n  port 2200 # keep\n  User x\n");
    }

    #[test]
    fn appends_plural_directive_before_trailing_blank_lines() {
        let mut doc = parse("Host a\n  IdentityFile k1\n\n# next\n");
        doc.hosts_mut()[1].set("IdentityFile", "k2");
        assert_eq!(
            doc.to_string(),
            "Host a\n  IdentityFile k1\n  IdentityFile k2\n\n# next\n"
        );
    }

    #[test]
    fn new_directive_is_indented_below_header() {
        let mut doc = parse("  Host a\n");
        doc.hosts_mut()[1].set("Compression", false);
        assert_eq!(doc.to_string(), "  Host a\n    Compression no\n");
    }

    #[test]
    fn into_block_of_only_blank_lines_goes_first() {
        let mut block = host(&["a"]);
        block.push(Node::blank());
        block.set("Hostname", "10.0.0.1");
        assert_eq!(block.to_string(), "Host a\n  Hostname 10.0.0.1\n\n");
    }
}

mod remove_value {
    use super::*;

    #[test]
    fn drops_every_occurrence_ignoring_case() {
        let mut doc = parse("Host a\n  IdentityFile k1\n  # keys\n  identityfile k2\n  User x\n");
        doc.hosts_mut()[1].remove_value("IDENTITYFILE");
        assert_eq!(doc.to_string(), "Host a\n  # keys\n  User x\n");
    }

    #[test]
    fn missing_key_is_a_no_op() {
        let text = "Host a\n  User x\n";
        let mut doc = parse(text);
        doc.hosts_mut()[1].remove_value("Port");
        assert_eq!(doc.to_string(), text);
    }
}
