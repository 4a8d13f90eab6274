//! Tests for the tokenizer.

use super::{Lexer, Position, Token, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input).map(|t| t.kind).collect()
}

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

mod stream {
    use super::*;

    #[test]
    fn empty_input_yields_only_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn eof_is_emitted_exactly_once() {
        let mut lexer = Lexer::new("Port 22\n");
        let all: Vec<Token> = lexer.by_ref().collect();

        assert_eq!(
            all.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
        assert!(lexer.next().is_none());
        assert!(lexer.next_tokens().is_empty());
    }

    #[test]
    fn batches_are_never_empty_before_eof() {
        let mut lexer = Lexer::new("# c\n\nHost a\n  Port 22 # x\n");
        let mut seen = Vec::new();
        loop {
            let batch = lexer.next_tokens();
            if batch.is_empty() {
                break;
            }
            seen.extend(batch);
        }
        assert_eq!(seen.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn iteration_matches_batches() {
        let input = "Host a\n  Port = 22 # x\n\n#end";
        let mut batched = Vec::new();
        let mut lexer = Lexer::new(input);
        loop {
            let batch = lexer.next_tokens();
            if batch.is_empty() {
                break;
            }
            batched.extend(batch);
        }

        let iterated = tokens(input);
        assert_eq!(iterated, batched);
        assert_eq!(iterated[3].kind, TokenKind::Equals);
        assert_eq!(iterated[3].position, Position::new(2, 8));
    }
}

mod key_value {
    use super::*;

    #[test]
    fn space_separated_pair() {
        let toks = tokens("Port 22\n");
        assert_eq!(
            toks,
            vec![
                Token::new(TokenKind::Key, Position::new(1, 1), "Port"),
                Token::new(TokenKind::String, Position::new(1, 6), "22"),
                Token::new(TokenKind::Eof, Position::new(2, 1), ""),
            ]
        );
    }

    #[test]
    fn equals_separated_pair() {
        let toks = tokens("Port = 22\n");
        assert_eq!(
            toks.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Key,
                TokenKind::Equals,
                TokenKind::String,
                TokenKind::Eof
            ]
        );
        assert_eq!(toks[1].position, Position::new(1, 6));
        assert_eq!(toks[2].text, "22");
        assert_eq!(toks[2].position, Position::new(1, 8));
    }

    #[test]
    fn equals_without_spaces() {
        let toks = tokens("Port=22");
        assert_eq!(toks[0].text, "Port");
        assert_eq!(toks[1].kind, TokenKind::Equals);
        assert_eq!(toks[2].text, "22");
    }

    #[test]
    fn value_keeps_inner_spaces() {
        let toks = tokens("ProxyCommand ssh -W %h:%p bastion\n");
        assert_eq!(toks[1].text, "ssh -W %h:%p bastion");
    }

    #[test]
    fn indented_key_reports_its_column() {
        let toks = tokens("    User root\n");
        assert_eq!(toks[0].position, Position::new(1, 5));
    }

    #[test]
    fn missing_trailing_newline_keeps_value() {
        let toks = tokens("Host a\n  Port 22");
        let last_value = toks
            .iter()
            .rev()
            .find(|t| t.kind == TokenKind::String)
            .unwrap();
        assert_eq!(last_value.text, "22");
        assert_eq!(toks.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn key_without_value_yields_empty_string() {
        let toks = tokens("Port\n");
        assert_eq!(toks[1], Token::new(TokenKind::String, Position::new(1, 5), ""));
    }
}

mod comments {
    use super::*;

    #[test]
    fn comment_line_excludes_hash() {
        let toks = tokens("  # hello\n");
        assert_eq!(
            toks[0],
            Token::new(TokenKind::Comment, Position::new(1, 3), " hello")
        );
        assert_eq!(toks[1].kind, TokenKind::Eof);
    }

    #[test]
    fn trailing_comment_follows_value_on_same_line() {
        let toks = tokens("Port 22 # ssh\n");
        assert_eq!(toks[1].text, "22");
        assert_eq!(toks[2].kind, TokenKind::Comment);
        assert_eq!(toks[2].text, " ssh");
        assert_eq!(toks[2].position.line, toks[1].position.line);
    }

    #[test]
    fn comment_at_end_of_input() {
        assert_eq!(kinds("#last"), vec![TokenKind::Comment, TokenKind::Eof]);
    }
}

mod line_endings {
    use super::*;

    #[test]
    fn blank_lines_emit_empty_line_tokens() {
        assert_eq!(
            kinds("\n\nPort 22\n"),
            vec![
                TokenKind::EmptyLine,
                TokenKind::EmptyLine,
                TokenKind::Key,
                TokenKind::String,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn crlf_is_a_single_line_end() {
        let lf: Vec<(TokenKind, String)> = tokens("Host a\n\n  Port 22\n")
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect();
        let crlf: Vec<(TokenKind, String)> = tokens("Host a\r\n\r\n  Port 22\r\n")
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect();
        assert_eq!(lf, crlf);
    }

    #[test]
    fn lone_carriage_return_is_content() {
        let toks = tokens("User a\rb\n");
        assert_eq!(toks[1].text, "a\rb");
        assert_eq!(toks[2].kind, TokenKind::Eof);
    }

    #[test]
    fn positions_advance_across_lines() {
        let toks = tokens("A 1\r\nB 2\n");
        assert_eq!(toks[2].position, Position::new(2, 1));
        assert_eq!(toks[3].position, Position::new(2, 3));
    }
}
