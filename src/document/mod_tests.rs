//! Tests for parsing, rendering and building whole documents.

use std::path::{Path, PathBuf};

use crate::directives::DirectiveValue;
use crate::document::{Document, Node};
use crate::error::SshConfigError;
use crate::fs::OsFileSystem;
use crate::fs::mock::MemoryFileSystem;
use crate::options::ParseOptions;

fn options() -> ParseOptions {
    ParseOptions::with_dirs("/etc/ssh", Some(PathBuf::from("/home/alice")))
}

fn parse(text: &str) -> Document {
    Document::parse_with(text, None, &MemoryFileSystem::new(), &options()).unwrap()
}

const SAMPLE: &str = "\
# Global defaults
User root
ServerAliveInterval 60

Host bastion # jump box
  Hostname 203.0.113.7
  Port = 2222
  # keys
  IdentityFile ~/.ssh/bastion

host *.internal !db.internal
    ProxyJump bastion
\tForwardAgent yes
";

mod round_trip {
    use super::*;

    #[test]
    fn unmodified_document_renders_its_input() {
        let text = "\
# top comment

Host a b # both
  User x
  # inner
  Port 22 # default

Host = c
  Hostname c.example.com
";
        assert_eq!(parse(text).to_string(), text);
    }

    #[test]
    fn render_is_idempotent() {
        let once = parse(SAMPLE).to_string();
        let twice = parse(&once).to_string();
        assert_eq!(once, twice);
    }

    #[test]
    fn keyword_case_is_preserved() {
        let text = "HOST web\n  include nothing/*\n";
        assert_eq!(parse(text).to_string(), text);
    }

    #[test]
    fn normalizations_are_stable() {
        let doc = parse("Port=22\r\nUser bob   \n  \t\nHost x#c\n");
        let once = doc.to_string();
        assert_eq!(once, "Port = 22\nUser bob\n\nHost x #c\n");
        assert_eq!(parse(&once).to_string(), once);
    }

    #[test]
    fn missing_final_terminator_stays_missing() {
        let text = "Host a\n  Port 22";
        assert_eq!(parse(text).to_string(), text);
    }

    #[test]
    fn trailing_carriage_return_survives_re_parsing() {
        let once = parse("Port 22\r").to_string();
        assert_eq!(once, "Port 22\r");

        let doc = parse(&once);
        assert_eq!(doc.get("x", "port").unwrap(), "22\r");
        assert_eq!(doc.to_string(), once);
    }

    #[test]
    fn added_block_after_unterminated_source_is_terminated() {
        let mut doc = parse("User root");
        doc.add("a", [("Port", "22")], None).unwrap();
        assert_eq!(doc.to_string(), "User root\nHost a\n  Port 22\n\n");
    }

    #[test]
    fn empty_comment_keeps_its_hash() {
        let text = "#\nPort 22 #\n";
        assert_eq!(parse(text).to_string(), text);
    }

    #[test]
    fn empty_value_renders_bare_key() {
        let text = "Host a\n  _EmptyValue\n";
        let doc = parse(text);
        assert_eq!(doc.get("a", "_emptyvalue").unwrap(), "");
        assert_eq!(doc.to_string(), text);
    }
}

mod building {
    use super::*;

    #[test]
    fn add_renders_a_new_block() {
        let mut doc = Document::new();
        doc.add(
            "office",
            [
                ("Hostname", DirectiveValue::from("1.2.3.4")),
                ("Compression", true.into()),
            ],
            None,
        )
        .unwrap();

        assert_eq!(
            doc.to_string(),
            "Host office\n  Hostname 1.2.3.4\n  Compression yes\n\n"
        );
    }

    #[test]
    fn add_with_comment_and_mixed_values() {
        let mut doc = Document::new();
        doc.add(
            "office",
            [
                ("Hostname", DirectiveValue::from("192.168.135.2")),
                ("user", "yury korolev".into()),
                ("port", 33_u16.into()),
                ("Compression", true.into()),
            ],
            Some(" Blink Host"),
        )
        .unwrap();
        doc.add(
            "office2",
            [
                ("Hostname", "192.168.135.3"),
                ("user", "yury korolev"),
                ("identityfile", "id_rsa"),
            ],
            Some(" Blink Host"),
        )
        .unwrap();

        assert_eq!(
            doc.to_string(),
            "\
Host office # Blink Host
  Hostname 192.168.135.2
  user yury korolev
  port 33
  Compression yes

Host office2 # Blink Host
  Hostname 192.168.135.3
  user yury korolev
  identityfile id_rsa

"
        );
    }

    #[test]
    fn add_rejects_empty_alias() {
        let mut doc = Document::new();
        let result = doc.add("", [("Port", "22")], None);
        assert!(matches!(result, Err(SshConfigError::EmptyPattern)));
        assert_eq!(doc.hosts().len(), 1);
    }

    #[test]
    fn added_block_is_queryable() {
        let mut doc = parse(SAMPLE);
        doc.add("10.1.1.1", [("LocalForward", "8080:localhost:8080")], None)
            .unwrap();
        doc.add("10.1.1.1", [("LocalForward", "8081:localhost:8081")], None)
            .unwrap();

        assert_eq!(
            doc.get_all("10.1.1.1", "localforward").unwrap(),
            vec!["8080:localhost:8080", "8081:localhost:8081"]
        );
    }

    #[test]
    fn edits_through_hosts_mut_show_in_output() {
        let mut doc = parse("Host a\n  Port 22\n");
        doc.hosts_mut()[1].set("Port", 2222_u16);
        assert_eq!(doc.to_string(), "Host a\n  Port 2222\n");
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_through_the_filesystem() {
        let fs = MemoryFileSystem::new().with_file("/srv/ssh/config", "Host a\n  User u\n");
        let doc = Document::load(Path::new("/srv/ssh/config"), &fs, &options()).unwrap();
        assert_eq!(doc.get("a", "User").unwrap(), "u");
    }

    #[test]
    fn load_missing_file_fails() {
        let result = Document::load(Path::new("/nope"), &MemoryFileSystem::new(), &options());
        assert!(matches!(result, Err(SshConfigError::FileRead { .. })));
    }

    #[test]
    fn load_default_prefers_user_config() {
        let fs = MemoryFileSystem::new()
            .with_file("/home/alice/.ssh/config", "User alice\n")
            .with_file("/etc/ssh/ssh_config", "User system\n");
        let doc = Document::load_default(&fs, &options()).unwrap();
        assert_eq!(doc.get("any", "user").unwrap(), "alice");
    }

    #[test]
    fn load_default_falls_back_to_system_config() {
        let fs = MemoryFileSystem::new()
            .with_file("/etc/ssh/ssh_config", "Include conf.d/*\n")
            .with_file("/etc/ssh/conf.d/10-user", "User system\n");
        let doc = Document::load_default(&fs, &options()).unwrap();
        assert_eq!(doc.get("any", "user").unwrap(), "system");
    }

    #[test]
    fn load_default_without_files_is_empty() {
        let doc = Document::load_default(&MemoryFileSystem::new(), &options()).unwrap();
        assert_eq!(doc.hosts().len(), 1);
        assert_eq!(doc.to_string(), "");
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, SAMPLE).unwrap();

        let doc = Document::load(&path, &OsFileSystem, &options()).unwrap();
        assert_eq!(doc.get("bastion", "port").unwrap(), "2222");
        assert_eq!(doc.to_string(), parse(SAMPLE).to_string());
    }
}

mod validation {
    use super::*;

    #[test]
    fn valid_document_passes() {
        assert!(parse(SAMPLE).validate().is_ok());
    }

    #[test]
    fn bad_boolean_is_reported() {
        let doc = parse("Host a\n  Compression maybe\n");
        assert!(matches!(
            doc.validate(),
            Err(SshConfigError::MustBeYesOrNo { .. })
        ));
    }

    #[test]
    fn bad_integer_is_reported() {
        let doc = parse("Port twenty\n");
        assert!(matches!(
            doc.validate(),
            Err(SshConfigError::MustBeUInt { .. })
        ));
    }

    #[test]
    fn parsing_does_not_validate() {
        let doc = parse("Port twenty\n");
        assert!(matches!(doc.hosts()[0].nodes()[0], Node::KeyValue(_)));
    }
}
