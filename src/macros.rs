//! Utility macros for the evaluator.
//!
//! This module defines helper macros used throughout the front end:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$line` - The 1-based line of the token's first character
/// * `$column` - The 1-based column of the token's first character
/// * `$length` - The token's length in characters
/// * `$text` - Optional raw text (numbers, identifiers, invalid characters)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, 1, 1, 2, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr, $column:expr, $length:expr) => {
        Token {
            kind: $kind,
            line: $line,
            column: $column,
            length: $length,
            text: None,
        }
    };
    ($kind:expr, $line:expr, $column:expr, $length:expr, $text:expr) => {
        Token {
            kind: $kind,
            line: $line,
            column: $column,
            length: $length,
            text: Some($text),
        }
    };
}
