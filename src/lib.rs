#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod ast;
pub mod codegen;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the first character of any input.
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A region of source text: a start position and a length in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub length: u32,
}
