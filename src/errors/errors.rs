use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Span};

/// A recoverable parse-time error: a kind tag, a human-readable message,
/// and the span of the offending input. The parser accumulates these
/// instead of aborting; a tree from a parse with diagnostics must not be
/// handed to the code generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Diagnostic { kind, span }
    }

    pub fn get_kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn get_kind_name(&self) -> &str {
        match &self.kind {
            DiagnosticKind::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            DiagnosticKind::ExpectedToken { .. } => "ExpectedToken",
            DiagnosticKind::ExpectedExpression { .. } => "ExpectedExpression",
            DiagnosticKind::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_message(&self) -> String {
        self.kind.to_string()
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: TokenKind },
    #[error("error parsing number: {text:?}")]
    NumberParseError { text: String },
}

/// Errors reported by the code generator before any evaluation happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("cannot generate an evaluator from a tree with parse errors")]
    MalformedTree,
    #[error("unsupported binary operator: {operator}")]
    UnsupportedOperator { operator: TokenKind },
}

/// Runtime failures surfaced when the generated evaluator is invoked,
/// distinct from parse-time diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("variable {name:?} is not defined")]
    UndefinedVariable { name: String },
    #[error("division by zero")]
    DivisionByZero,
}
