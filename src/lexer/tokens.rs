use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("end", TokenKind::End);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfFile,
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Dot,

    Plus,
    Minus,
    Star,
    Slash,

    // Reserved
    Let,
    If,
    Then,
    End,

    // Anything the tokenizer does not recognise
    Invalid,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical token with its kind, 1-based start position, length, and the
/// raw text for kinds that carry one (numbers, identifiers, invalid input).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
    pub length: u32,
    pub text: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} ({})", self.kind, text),
            None => write!(f, "{} ()", self.kind),
        }
    }
}

impl Token {
    /// The distinguished "no token" value. Every token the lexer produces
    /// starts at line/column 1 or later, so this compares unequal to all of
    /// them, `EndOfFile` included.
    pub fn empty() -> Token {
        Token {
            kind: TokenKind::EndOfFile,
            line: 0,
            column: 0,
            length: 0,
            text: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line == 0
    }

    pub fn start(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start(),
            length: self.length,
        }
    }
}
