//! Lexical analysis module for the evaluator.
//!
//! This module contains the lexer (tokenizer) that converts a character
//! source into a stream of tokens for parsing. It handles:
//!
//! - Single-pass tokenization with one token of lookahead
//! - Recognition of keywords, identifiers, number literals, and operators
//! - Line/column position tracking for diagnostics
//! - Whitespace and newline handling
//!
//! Unrecognised characters never abort the scan; they are emitted as
//! `Invalid` tokens and rejected later by the parser.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
