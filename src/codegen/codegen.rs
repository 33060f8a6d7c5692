use rustc_hash::FxHashMap;

use crate::{
    ast::expressions::{BinaryExpr, Expr, IfThenExpr, LetExpr},
    errors::errors::{EvalError, GenerateError},
    lexer::tokens::TokenKind,
};

/// A deferred, single-shot computation compiled from an AST. Invoking it
/// evaluates the tree and yields the numeric result or a runtime error.
pub type Evaluator = Box<dyn FnOnce() -> Result<f64, EvalError>>;

/// The per-node compiled form. Nodes share one scope for the duration of
/// a single evaluation.
type EvalFn = Box<dyn Fn(&mut Scope) -> Result<f64, EvalError>>;

/// Variable bindings live here for exactly one evaluation; nothing
/// persists across invocations of separately generated evaluators.
#[derive(Default)]
struct Scope {
    values: FxHashMap<String, f64>,
}

impl Scope {
    fn bind(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    fn lookup(&self, name: &str) -> Result<f64, EvalError> {
        match self.values.get(name) {
            Some(value) => Ok(*value),
            None => Err(EvalError::UndefinedVariable {
                name: name.to_string(),
            }),
        }
    }
}

/// Compiles a completed AST into a zero-argument evaluator.
///
/// Fails with `GenerateError` if the tree contains placeholder nodes left
/// behind by error recovery; such trees come from parses with diagnostics
/// and are never evaluated.
pub fn generate(expr: &Expr) -> Result<Evaluator, GenerateError> {
    let compiled = generate_expr(expr)?;

    Ok(Box::new(move || {
        let mut scope = Scope::default();
        compiled(&mut scope)
    }))
}

fn generate_expr(expr: &Expr) -> Result<EvalFn, GenerateError> {
    match expr {
        Expr::IntegerNumber(expr) => {
            let value = expr.value as f64;
            Ok(Box::new(move |_| Ok(value)))
        }
        Expr::RealNumber(expr) => {
            if expr.fraction.is_empty() {
                return Err(GenerateError::MalformedTree);
            }
            let value = expr.value;
            Ok(Box::new(move |_| Ok(value)))
        }
        Expr::Variable(expr) => {
            let name = expr.name.clone();
            Ok(Box::new(move |scope| scope.lookup(&name)))
        }
        Expr::Binary(expr) => generate_binary_expr(expr),
        Expr::IfThen(expr) => generate_if_then_expr(expr),
        Expr::Let(expr) => generate_let_expr(expr),
        Expr::Error(_) => Err(GenerateError::MalformedTree),
    }
}

fn generate_binary_expr(expr: &BinaryExpr) -> Result<EvalFn, GenerateError> {
    let left = generate_expr(&expr.left)?;
    let right = generate_expr(&expr.right)?;

    // Left operand evaluates before the right one. Comparisons yield
    // 1.0/0.0 so `if` can consume them directly.
    let compiled: EvalFn = match expr.operator.kind {
        TokenKind::Plus => Box::new(move |scope| Ok(left(scope)? + right(scope)?)),
        TokenKind::Minus => Box::new(move |scope| Ok(left(scope)? - right(scope)?)),
        TokenKind::Star => Box::new(move |scope| Ok(left(scope)? * right(scope)?)),
        TokenKind::Slash => Box::new(move |scope| {
            let dividend = left(scope)?;
            let divisor = right(scope)?;
            if divisor == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(dividend / divisor)
        }),
        TokenKind::Less => Box::new(move |scope| Ok(bool_value(left(scope)? < right(scope)?))),
        TokenKind::LessEquals => {
            Box::new(move |scope| Ok(bool_value(left(scope)? <= right(scope)?)))
        }
        TokenKind::Greater => Box::new(move |scope| Ok(bool_value(left(scope)? > right(scope)?))),
        TokenKind::GreaterEquals => {
            Box::new(move |scope| Ok(bool_value(left(scope)? >= right(scope)?)))
        }
        TokenKind::Equals => Box::new(move |scope| Ok(bool_value(left(scope)? == right(scope)?))),
        operator => return Err(GenerateError::UnsupportedOperator { operator }),
    };

    Ok(compiled)
}

fn generate_if_then_expr(expr: &IfThenExpr) -> Result<EvalFn, GenerateError> {
    // Empty keyword tokens are placeholders from error recovery
    if expr.then_keyword.is_empty() || expr.end_keyword.is_empty() {
        return Err(GenerateError::MalformedTree);
    }

    let condition = generate_expr(&expr.condition)?;
    let then_branch = generate_expr(&expr.then_branch)?;

    // There is no else form; a false condition yields 0.0
    Ok(Box::new(move |scope| {
        if condition(scope)? != 0.0 {
            then_branch(scope)
        } else {
            Ok(0.0)
        }
    }))
}

fn generate_let_expr(expr: &LetExpr) -> Result<EvalFn, GenerateError> {
    if expr.name_token.is_empty() || expr.assignment.is_empty() {
        return Err(GenerateError::MalformedTree);
    }

    let name = expr.name.clone();
    let initializer = generate_expr(&expr.initializer)?;

    // The binding is visible for the remainder of the evaluation, and the
    // let itself evaluates to the bound value.
    Ok(Box::new(move |scope| {
        let value = initializer(scope)?;
        scope.bind(&name, value);
        Ok(value)
    }))
}

fn bool_value(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}
