//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifier runs (words, numbers, mixed)
//! - Punctuation
//! - Whitespace and line break handling
//! - Illegal characters

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("node abc123", Some("test.doc".to_string()));

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "node");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc123");
}

#[test]
fn test_tokenize_numbers_are_identifiers() {
    // Numbers are not a distinct class at this stage
    let tokens = tokenize("42 100 007", Some("test.doc".to_string()));

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "100");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "007");
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("= { } ( ) \\ ;", Some("test.doc".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Equals);
    assert_eq!(tokens[1].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[2].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[3].kind, TokenKind::OpenParen);
    assert_eq!(tokens[4].kind, TokenKind::CloseParen);
    assert_eq!(tokens[5].kind, TokenKind::Backslash);
    assert_eq!(tokens[6].kind, TokenKind::Semicolon);
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_tokenize_adjacent_punctuation() {
    let tokens = tokenize("{}();=", Some("test.doc".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[1].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::CloseParen);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Equals);
    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_tokenize_annotated_property() {
    let tokens = tokenize("person (u8)age=5", Some("test.doc".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "person");
    assert_eq!(tokens[1].kind, TokenKind::OpenParen);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "u8");
    assert_eq!(tokens[3].kind, TokenKind::CloseParen);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "age");
    assert_eq!(tokens[5].kind, TokenKind::Equals);
    assert_eq!(tokens[6].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].value, "5");
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  node \t a \x0B b \x0C ", Some("test.doc".to_string()));

    // Horizontal whitespace is consumed, never emitted
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].value, "node");
    assert_eq!(tokens[1].value, "a");
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn test_tokenize_newline_run_collapses() {
    let tokens = tokenize("a\n\n\nb", Some("test.doc".to_string()));

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::EndOfLine);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_crlf_is_one_line_break() {
    let tokens = tokenize("a\r\nb", Some("test.doc".to_string()));

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::EndOfLine);
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn test_tokenize_mixed_line_breaks() {
    let tokens = tokenize("a\r\n\n\rb", Some("test.doc".to_string()));

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::EndOfLine);
}

#[test]
fn test_tokenize_line_continuation_tokens() {
    // The lexer emits backslash and line break separately; the parser
    // recognizes the continuation idiom.
    let tokens = tokenize("a \\\nb", Some("test.doc".to_string()));

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Backslash);
    assert_eq!(tokens[2].kind, TokenKind::EndOfLine);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_illegal_character() {
    let tokens = tokenize("a @ b", Some("test.doc".to_string()));

    // The lexer reports the character and keeps scanning
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_illegal_multibyte_character() {
    let tokens = tokenize("café", Some("test.doc".to_string()));

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "caf");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "é");
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("", Some("test.doc".to_string()));

    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("ab c", Some("test.doc".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[1].span.end.0, 4);
}

#[test]
fn test_tokenize_identifier_payloads_borrow_source() {
    let source = String::from("node abc123");
    let tokens = tokenize(&source, Some("test.doc".to_string()));

    // Payloads are slices of the original buffer, not copies
    assert!(std::ptr::eq(tokens[0].value.as_ptr(), source[0..].as_ptr()));
    assert!(std::ptr::eq(tokens[1].value.as_ptr(), source[5..].as_ptr()));
}

#[test]
fn test_tokenize_identifier_runs_reproduce_source() {
    let source = "person name=Zevin {\n  age 5; note x2y\n}";
    let tokens = tokenize(source, Some("test.doc".to_string()));

    let identifiers: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Identifier)
        .map(|token| token.value)
        .collect();

    assert_eq!(
        identifiers,
        vec!["person", "name", "Zevin", "age", "5", "note", "x2y"]
    );
}

#[test]
fn test_tokenize_full_document() {
    let source = "group {\n  person name=Zevin\n}";
    let tokens = tokenize(source, Some("test.doc".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::OpenCurly,
            TokenKind::EndOfLine,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::EndOfLine,
            TokenKind::CloseCurly,
        ]
    );
}
