use crate::lexer::tokens::Token;

/// The closed set of expression nodes produced by the parser.
///
/// Every variant retains the token(s) that produced it so diagnostics and
/// runtime failures can point back into the source. Nodes are built
/// bottom-up during parsing and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerNumber(IntegerNumberExpr),
    RealNumber(RealNumberExpr),
    Binary(BinaryExpr),
    Variable(VariableExpr),
    IfThen(IfThenExpr),
    Let(LetExpr),
    Error(ErrorExpr),
}

/// An integer literal such as `42`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerNumberExpr {
    pub token: Token,
    pub value: i64,
}

/// A real literal such as `4.2`, assembled by the parser from the
/// number/separator/fraction tokens the lexer emits for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RealNumberExpr {
    pub number: Token,
    pub separator: Token,
    pub fraction: Token,
    pub value: f64,
}

/// A binary operation between two sub-expressions, such as `a + b` or
/// `a < b`. The operator token is always one of the recognised binary
/// operators once parsing succeeds without diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// A reference to a `let`-bound name.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub token: Token,
    pub name: String,
}

/// `if <condition> then <branch> end`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfThenExpr {
    pub if_keyword: Token,
    pub condition: Box<Expr>,
    pub then_keyword: Token,
    pub then_branch: Box<Expr>,
    pub end_keyword: Token,
}

/// `let <name> = <initializer>`.
#[derive(Debug, Clone, PartialEq)]
pub struct LetExpr {
    pub let_keyword: Token,
    pub name_token: Token,
    pub name: String,
    pub assignment: Token,
    pub initializer: Box<Expr>,
}

/// The placeholder node substituted during error recovery. Present only in
/// trees whose parse produced diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorExpr {
    pub token: Token,
}
