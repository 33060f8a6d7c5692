//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser uses a Pratt
//! parser approach with NUD/LED handlers for expression parsing, driven by
//! binding powers for operator precedence.
//!
//! Malformed input never aborts a parse: the parser records a diagnostic,
//! substitutes a placeholder node, and continues where plausible so a
//! single call can surface several problems. Callers must check
//! `diagnostics()` before handing the returned tree to the code generator.

use crate::{
    ast::expressions::Expr,
    errors::errors::{Diagnostic, DiagnosticKind},
    lexer::{
        lexer::{CharSource, Lexer},
        tokens::{Token, TokenKind},
    },
    Span,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BindingPower, BpLookup, LedHandler, LedLookup, NudHandler, NudLookup},
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer for the duration of the parse and maintains
/// the lookup tables for expression handlers, plus the accumulated
/// diagnostics for the current input.
pub struct Parser<S: CharSource> {
    /// The token stream being consumed
    lexer: Lexer<S>,
    /// Diagnostics accumulated so far; owned by this instance
    diagnostics: Vec<Diagnostic>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NudLookup<S>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LedLookup<S>,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BpLookup,
}

impl<S: CharSource> Parser<S> {
    /// Creates a new Parser over the given lexer with all expression
    /// handlers registered.
    pub fn new(lexer: Lexer<S>) -> Self {
        let mut parser = Parser {
            lexer,
            diagnostics: vec![],
            nud_lookup: NudLookup::default(),
            led_lookup: LedLookup::default(),
            binding_power_lookup: BpLookup::default(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses one top-level expression from the remaining token stream.
    ///
    /// The returned tree is a best-effort result: if `diagnostics()` is
    /// non-empty afterwards it may contain placeholder nodes and must not
    /// be evaluated. Consecutive calls parse consecutive independent
    /// expressions.
    pub fn parse_expression(&mut self) -> Expr {
        parse_expr(self, BindingPower::Default)
    }

    /// The diagnostics recorded so far for this parser instance.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the kind of the next token without consuming it.
    pub fn current_token_kind(&mut self) -> TokenKind {
        self.lexer.peek().kind
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Token {
        self.lexer.read()
    }

    /// Checks whether any tokens remain before the end of input.
    pub fn has_tokens(&mut self) -> bool {
        !self.lexer.is_at_end()
    }

    /// Expects a token of the specified kind.
    ///
    /// On a match the token is consumed and returned. Otherwise an
    /// `ExpectedToken` diagnostic is recorded at the offending token's
    /// span, the token is left in the stream, and `Token::empty()` is
    /// returned as a placeholder.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Token {
        let token = self.lexer.peek();
        if token.kind == expected_kind {
            self.lexer.read()
        } else {
            self.report(
                DiagnosticKind::ExpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                },
                token.span(),
            );
            Token::empty()
        }
    }

    /// Records a diagnostic at the given span.
    pub fn report(&mut self, kind: DiagnosticKind, span: Span) {
        self.diagnostics.push(Diagnostic::new(kind, span));
    }

    /// Returns the registered NUD handler for a token kind, if any.
    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NudHandler<S>> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Returns the registered LED handler for a token kind, if any.
    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LedHandler<S>> {
        self.led_lookup.get(&kind).copied()
    }

    /// Returns the binding power of a token kind. Tokens that are not
    /// infix operators bind at `Default`, so an expression ends cleanly at
    /// any non-operator token.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LedHandler<S>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// NUD tokens get no binding power entry; only infix operators take
    /// part in the precedence climb.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NudHandler<S>) {
        self.nud_lookup.insert(kind, nud_fn);
    }
}
