/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: The closed `Expr` enum and its per-variant node structs
pub mod expressions;
