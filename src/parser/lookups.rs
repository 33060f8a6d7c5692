use rustc_hash::FxHashMap;

use crate::{
    ast::expressions::Expr,
    lexer::{lexer::CharSource, tokens::TokenKind},
};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
    Primary,
}

pub type NudHandler<S> = fn(&mut Parser<S>) -> Expr;
pub type LedHandler<S> = fn(&mut Parser<S>, Expr, BindingPower) -> Expr;

// Lookup tables inside parser struct, so it's easier
pub type NudLookup<S> = FxHashMap<TokenKind, NudHandler<S>>;
pub type LedLookup<S> = FxHashMap<TokenKind, LedHandler<S>>;
pub type BpLookup = FxHashMap<TokenKind, BindingPower>;

pub fn create_token_lookups<S: CharSource>(parser: &mut Parser<S>) {
    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    parser.led(
        TokenKind::LessEquals,
        BindingPower::Relational,
        parse_binary_expr,
    );
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(
        TokenKind::GreaterEquals,
        BindingPower::Relational,
        parse_binary_expr,
    );
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Minus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Expression keywords
    parser.nud(TokenKind::Let, parse_let_expr);
    parser.nud(TokenKind::If, parse_if_expr);
}
