//! Integration tests for end-to-end tokenization.
//!
//! These tests verify the complete lexer pipeline over whole programs,
//! from a line source through scanning, claim resolution and EOL/EOF
//! placement, including file-backed input.

use std::{env, fs, fs::File, io::BufReader};

use plaintalk::lexer::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_lex_two_line_program() {
    let source = "x should be 5\nsay <<ok>>";
    let tokens = tokenize(source.as_bytes()).unwrap();

    let summary: Vec<(usize, usize, TokenKind, &str)> = tokens
        .iter()
        .map(|token| {
            (
                token.position.line,
                token.position.column,
                token.kind,
                token.value.as_str(),
            )
        })
        .collect();

    // Within a line, tokens are batched by pass priority, not sorted by
    // column; lines themselves appear strictly in order.
    assert_eq!(
        summary,
        vec![
            (1, 13, TokenKind::Integer, "5"),
            (1, 3, TokenKind::Assign, ""),
            (1, 1, TokenKind::Identifier, "x"),
            (1, 2, TokenKind::WS, ""),
            (1, 12, TokenKind::WS, ""),
            (1, 14, TokenKind::EOL, ""),
            (2, 5, TokenKind::String, "ok"),
            (2, 1, TokenKind::Say, ""),
            (2, 4, TokenKind::WS, ""),
            (2, 11, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_lex_comment_only_file() {
    let tokens = tokenize("\"just a note".as_bytes()).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, "just a note");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_lex_full_program() {
    let source = "\"greeting program\nname should be <<world>>\nsay <<hello>> name\nthe answer is 0";
    let tokens = tokenize(source.as_bytes()).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            // "greeting program
            TokenKind::Comment,
            TokenKind::EOL,
            // name should be <<world>>
            TokenKind::String,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::WS,
            TokenKind::WS,
            TokenKind::EOL,
            // say <<hello>> name
            TokenKind::String,
            TokenKind::Say,
            TokenKind::Identifier,
            TokenKind::WS,
            TokenKind::WS,
            TokenKind::EOL,
            // the answer is 0
            TokenKind::Integer,
            TokenKind::Answer,
            TokenKind::WS,
            TokenKind::EOF,
        ]
    );

    assert_eq!(tokens[2].value, "world");
    assert_eq!(tokens[8].value, "hello");
    assert_eq!(tokens[10].value, "name");
    assert_eq!(tokens[14].value, "0");
}

#[test]
fn test_lex_program_from_file() {
    let path = env::temp_dir().join("plaintalk_lex_from_file.pt");
    fs::write(&path, "x should be 1\nsay x\n").unwrap();

    let file = File::open(&path).unwrap();
    let tokens = tokenize(BufReader::new(file)).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::WS,
            TokenKind::WS,
            TokenKind::EOL,
            TokenKind::Say,
            TokenKind::Identifier,
            TokenKind::WS,
            TokenKind::EOF,
        ]
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_lex_token_display_format() {
    let tokens = tokenize("say <<ok>>".as_bytes()).unwrap();

    let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();

    assert_eq!(
        rendered,
        vec!["1:5 STRING ok", "1:1 SAY", "1:4 WS", "1:11 EOF"]
    );
}
