use crate::{
    ast::expressions::{
        BinaryExpr, ErrorExpr, Expr, IfThenExpr, IntegerNumberExpr, LetExpr, RealNumberExpr,
        VariableExpr,
    },
    errors::errors::DiagnosticKind,
    lexer::{
        lexer::CharSource,
        tokens::{Token, TokenKind},
    },
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr<S: CharSource>(parser: &mut Parser<S>, bp: BindingPower) -> Expr {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_handler(token_kind) else {
        // Consume the offending token so the parse makes progress, and
        // leave a placeholder node behind.
        let token = parser.advance();
        let kind = match &token.text {
            Some(text) if token.kind == TokenKind::Invalid => DiagnosticKind::UnrecognisedCharacter {
                character: text.clone(),
            },
            _ => DiagnosticKind::ExpectedExpression { found: token.kind },
        };
        parser.report(kind, token.span());
        return Expr::Error(ErrorExpr { token });
    };

    let mut left = nud_fn(parser);

    // While the lookahead binds tighter than the current level, fold the
    // left-hand side into the next infix operator.
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = parser.get_binding_power(token_kind);
        if next_bp <= bp {
            break;
        }

        // Binding powers are only registered alongside LED handlers
        let Some(led_fn) = parser.get_led_handler(token_kind) else {
            break;
        };

        left = led_fn(parser, left, next_bp);
    }

    left
}

pub fn parse_primary_expr<S: CharSource>(parser: &mut Parser<S>) -> Expr {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let number = parser.advance();

            if parser.current_token_kind() == TokenKind::Dot {
                let separator = parser.advance();
                let fraction = parser.expect(TokenKind::Number);
                return parse_real_number(parser, number, separator, fraction);
            }

            let text = number.text.clone().unwrap_or_default();
            match text.parse::<i64>() {
                Ok(value) => Expr::IntegerNumber(IntegerNumberExpr { token: number, value }),
                Err(_) => {
                    parser.report(DiagnosticKind::NumberParseError { text }, number.span());
                    Expr::Error(ErrorExpr { token: number })
                }
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            let name = token.text.clone().unwrap_or_default();
            Expr::Variable(VariableExpr { token, name })
        }
        _ => {
            let token = parser.advance();
            parser.report(
                DiagnosticKind::ExpectedExpression { found: token.kind },
                token.span(),
            );
            Expr::Error(ErrorExpr { token })
        }
    }
}

/// Combines the number/separator/fraction tokens of a decimal literal into
/// one real-number node. The value is parsed from exactly the digit
/// sequences the lexer captured.
fn parse_real_number<S: CharSource>(
    parser: &mut Parser<S>,
    number: Token,
    separator: Token,
    fraction: Token,
) -> Expr {
    let text = format!(
        "{}.{}",
        number.text.clone().unwrap_or_default(),
        fraction.text.clone().unwrap_or_default()
    );

    let value = match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            parser.report(DiagnosticKind::NumberParseError { text }, number.span());
            0.0
        }
    };

    Expr::RealNumber(RealNumberExpr {
        number,
        separator,
        fraction,
        value,
    })
}

pub fn parse_binary_expr<S: CharSource>(
    parser: &mut Parser<S>,
    left: Expr,
    bp: BindingPower,
) -> Expr {
    let operator = parser.advance();

    // Parsing the right-hand side at the operator's own binding power makes
    // every level left-associative: 8 - 3 - 2 folds as (8 - 3) - 2.
    let right = parse_expr(parser, bp);

    Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn parse_grouping_expr<S: CharSource>(parser: &mut Parser<S>) -> Expr {
    let open_paren = parser.advance();
    let expr = parse_expr(parser, BindingPower::Default);

    // An unclosed grouping must leave a placeholder behind so the code
    // generator rejects the tree.
    let close_paren = parser.expect(TokenKind::CloseParen);
    if close_paren.is_empty() {
        return Expr::Error(ErrorExpr { token: open_paren });
    }

    expr
}

pub fn parse_let_expr<S: CharSource>(parser: &mut Parser<S>) -> Expr {
    let let_keyword = parser.advance();

    let name_token = parser.expect(TokenKind::Identifier);
    let name = name_token.text.clone().unwrap_or_default();
    let assignment = parser.expect(TokenKind::Assignment);
    let initializer = parse_expr(parser, BindingPower::Default);

    Expr::Let(LetExpr {
        let_keyword,
        name_token,
        name,
        assignment,
        initializer: Box::new(initializer),
    })
}

pub fn parse_if_expr<S: CharSource>(parser: &mut Parser<S>) -> Expr {
    let if_keyword = parser.advance();

    let condition = parse_expr(parser, BindingPower::Default);
    let then_keyword = parser.expect(TokenKind::Then);
    let then_branch = parse_expr(parser, BindingPower::Default);
    let end_keyword = parser.expect(TokenKind::End);

    Expr::IfThen(IfThenExpr {
        if_keyword,
        condition: Box::new(condition),
        then_keyword,
        then_branch: Box::new(then_branch),
        end_keyword,
    })
}
