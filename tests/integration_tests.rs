//! Integration tests for end-to-end evaluation.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization, parsing, code generation, and
//! invocation of the generated evaluator.

use expreval::{
    ast::expressions::Expr,
    codegen::codegen::generate,
    errors::errors::EvalError,
    lexer::lexer::{Lexer, StringSource},
    parser::parser::Parser,
};

fn run(source: &str) -> Result<f64, EvalError> {
    let mut parser = Parser::new(Lexer::new(StringSource::new(source)));
    let expression = parser.parse_expression();
    assert!(
        parser.diagnostics().is_empty(),
        "unexpected diagnostics for {source:?}: {:?}",
        parser.diagnostics()
    );

    let evaluator = generate(&expression).expect("generation should succeed");
    evaluator()
}

#[test]
fn test_evaluate_simple_expression() {
    assert_eq!(run("2 + 3 * 4"), Ok(14.0));
}

#[test]
fn test_evaluate_real_arithmetic() {
    assert_eq!(run("4 + 3.2"), Ok(7.2));
}

#[test]
fn test_evaluate_conditional_with_binding() {
    assert_eq!(run("if (let x = 5) > 2 then x * 2 end"), Ok(10.0));
}

#[test]
fn test_evaluate_nested_grouping() {
    assert_eq!(run("((8 - 3) - 2) * (1 + 1)"), Ok(6.0));
}

#[test]
fn test_runtime_error_surfaces_to_caller() {
    assert_eq!(run("10 / (5 - 5)"), Err(EvalError::DivisionByZero));
}

#[test]
fn test_diagnostics_prevent_evaluation() {
    let mut parser = Parser::new(Lexer::new(StringSource::new("if 1 then 2")));
    let expression = parser.parse_expression();

    assert!(!parser.diagnostics().is_empty());
    assert!(generate(&expression).is_err());
}

#[test]
fn test_multiple_expressions_from_one_source() {
    let source = "let x = 2\nif x > 2 then\n    x\nend";
    let mut parser = Parser::new(Lexer::new(StringSource::new(source)));

    let first = parser.parse_expression();
    let second = parser.parse_expression();

    assert!(parser.diagnostics().is_empty());
    assert!(matches!(first, Expr::Let(_)));
    assert!(matches!(second, Expr::IfThen(_)));
}

#[test]
fn test_diagnostic_positions_are_one_based() {
    let mut parser = Parser::new(Lexer::new(StringSource::new("#")));
    parser.parse_expression();

    let diagnostics = parser.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_span().start.line, 1);
    assert_eq!(diagnostics[0].get_span().start.column, 1);
    assert_eq!(diagnostics[0].get_span().length, 1);
}
