//! Error types and error handling for the evaluator.
//!
//! This module defines the error types used across the front end. It
//! includes:
//!
//! - Parse diagnostics with source span information
//! - Code generation errors for malformed trees
//! - Runtime evaluation errors
//!
//! Lexical and syntax problems are always represented as data
//! (diagnostics); only code generation and evaluation return `Result`.

pub mod errors;
