//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the token stream into
//! an Abstract Syntax Tree. It uses a Pratt parser for expressions with
//! proper operator precedence and handles:
//!
//! - Number literals (integer and real), variables, and grouping
//! - Binary operators via precedence climbing
//! - `let` bindings and `if-then` conditionals
//! - Diagnostic accumulation and error recovery
//!
//! The parser uses NUD (null denotation) and LED (left denotation)
//! functions for expression parsing with binding power for precedence
//! handling.

pub mod expr;
pub mod lookups;
pub mod parser;
