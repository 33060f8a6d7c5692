//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Number literals
//! - Operators and punctuation
//! - Lookahead behaviour
//! - Line/column tracking
//! - Invalid characters and end of input

use super::lexer::{Lexer, StringSource};
use super::tokens::{Token, TokenKind};

fn lexer(source: &str) -> Lexer<StringSource> {
    Lexer::new(StringSource::new(source))
}

#[test]
fn test_tokenize_keywords() {
    let mut lexer = lexer("let if then end");

    assert_eq!(lexer.read().kind, TokenKind::Let);
    assert_eq!(lexer.read().kind, TokenKind::If);
    assert_eq!(lexer.read().kind, TokenKind::Then);
    assert_eq!(lexer.read().kind, TokenKind::End);
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_identifiers() {
    let mut lexer = lexer("foo bar baz_123 CamelCase");

    let token = lexer.read();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text.as_deref(), Some("foo"));
    let token = lexer.read();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text.as_deref(), Some("bar"));
    let token = lexer.read();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text.as_deref(), Some("baz_123"));
    let token = lexer.read();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text.as_deref(), Some("CamelCase"));
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_numbers() {
    let mut lexer = lexer("42 0 100");

    let token = lexer.read();
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.text.as_deref(), Some("42"));
    assert_eq!(token.length, 2);
    let token = lexer.read();
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.text.as_deref(), Some("0"));
    let token = lexer.read();
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.text.as_deref(), Some("100"));
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_decimal_as_three_tokens() {
    // Number literals are integer-digit-only at this layer; the parser
    // assembles `4.2` from the Number/Dot/Number sequence.
    let mut lexer = lexer("4.2");

    let number = lexer.read();
    assert_eq!(number.kind, TokenKind::Number);
    assert_eq!(number.text.as_deref(), Some("4"));
    let separator = lexer.read();
    assert_eq!(separator.kind, TokenKind::Dot);
    let fraction = lexer.read();
    assert_eq!(fraction.kind, TokenKind::Number);
    assert_eq!(fraction.text.as_deref(), Some("2"));
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_operators() {
    let mut lexer = lexer("+ - * / == = < > <= >=");

    assert_eq!(lexer.read().kind, TokenKind::Plus);
    assert_eq!(lexer.read().kind, TokenKind::Minus);
    assert_eq!(lexer.read().kind, TokenKind::Star);
    assert_eq!(lexer.read().kind, TokenKind::Slash);
    assert_eq!(lexer.read().kind, TokenKind::Equals);
    assert_eq!(lexer.read().kind, TokenKind::Assignment);
    assert_eq!(lexer.read().kind, TokenKind::Less);
    assert_eq!(lexer.read().kind, TokenKind::Greater);
    assert_eq!(lexer.read().kind, TokenKind::LessEquals);
    assert_eq!(lexer.read().kind, TokenKind::GreaterEquals);
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_two_character_operator_length() {
    let mut lexer = lexer(">=3");

    let operator = lexer.read();
    assert_eq!(operator.kind, TokenKind::GreaterEquals);
    assert_eq!(operator.length, 2);

    let number = lexer.read();
    assert_eq!(number.kind, TokenKind::Number);
    assert_eq!(number.column, 3);
}

#[test]
fn test_tokenize_parentheses() {
    let mut lexer = lexer("(1)");

    assert_eq!(lexer.read().kind, TokenKind::OpenParen);
    assert_eq!(lexer.read().kind, TokenKind::Number);
    assert_eq!(lexer.read().kind, TokenKind::CloseParen);
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_mixed_expression() {
    let mut lexer = lexer("x + 5 * (y - 3)");

    assert_eq!(lexer.read().kind, TokenKind::Identifier);
    assert_eq!(lexer.read().kind, TokenKind::Plus);
    assert_eq!(lexer.read().kind, TokenKind::Number);
    assert_eq!(lexer.read().kind, TokenKind::Star);
    assert_eq!(lexer.read().kind, TokenKind::OpenParen);
    assert_eq!(lexer.read().kind, TokenKind::Identifier);
    assert_eq!(lexer.read().kind, TokenKind::Minus);
    assert_eq!(lexer.read().kind, TokenKind::Number);
    assert_eq!(lexer.read().kind, TokenKind::CloseParen);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let mut lexer = lexer("let x = @");

    assert_eq!(lexer.read().kind, TokenKind::Let);
    assert_eq!(lexer.read().kind, TokenKind::Identifier);
    assert_eq!(lexer.read().kind, TokenKind::Assignment);

    let invalid = lexer.read();
    assert_eq!(invalid.kind, TokenKind::Invalid);
    assert_eq!(invalid.text.as_deref(), Some("@"));
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let mut lexer = lexer("  let   x   =   42  ");

    assert_eq!(lexer.read().kind, TokenKind::Let);
    assert_eq!(lexer.read().kind, TokenKind::Identifier);
    assert_eq!(lexer.read().kind, TokenKind::Assignment);
    assert_eq!(lexer.read().kind, TokenKind::Number);
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_position_tracking_within_line() {
    let mut lexer = lexer("12 + x");

    let number = lexer.read();
    assert_eq!(number.line, 1);
    assert_eq!(number.column, 1);

    let operator = lexer.read();
    assert_eq!(operator.line, 1);
    assert_eq!(operator.column, 4);

    let identifier = lexer.read();
    assert_eq!(identifier.line, 1);
    assert_eq!(identifier.column, 6);
}

#[test]
fn test_position_tracking_across_newline() {
    let mut lexer = lexer("1\n2");

    let first = lexer.read();
    assert_eq!(first.line, 1);
    assert_eq!(first.column, 1);

    let second = lexer.read();
    assert_eq!(second.line, 2);
    assert_eq!(second.column, 1);
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = lexer("1 + 2");

    let peeked = lexer.peek();
    let peeked_again = lexer.peek();
    assert_eq!(peeked, peeked_again);

    let read = lexer.read();
    assert_eq!(read, peeked);

    // The stream advanced past the peeked token
    assert_eq!(lexer.read().kind, TokenKind::Plus);
}

#[test]
fn test_is_at_end() {
    let mut lexer = lexer("1");

    assert!(!lexer.is_at_end());
    lexer.read();
    assert!(lexer.is_at_end());

    // EndOfFile is emitted repeatably
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
    assert_eq!(lexer.read().kind, TokenKind::EndOfFile);
}

#[test]
fn test_empty_input() {
    let mut lexer = lexer("");

    let token = lexer.read();
    assert_eq!(token.kind, TokenKind::EndOfFile);
    assert_eq!(token.line, 1);
    assert_eq!(token.column, 1);
    assert_eq!(token.length, 0);
}

#[test]
fn test_empty_token_unequal_to_real_tokens() {
    let mut lexer = lexer("1");

    assert_ne!(Token::empty(), lexer.read());
    assert_ne!(Token::empty(), lexer.read()); // EndOfFile
    assert!(Token::empty().is_empty());
}
