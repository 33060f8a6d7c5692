//! Code generation module for the evaluator.
//!
//! This module contains the tree-walking code generator that compiles a
//! completed AST into a deferred, zero-argument evaluator. It handles:
//!
//! - Numeric literals and variable references
//! - Arithmetic and comparison operators
//! - `let` bindings scoped to a single evaluation
//! - `if-then` conditionals
//!
//! Generation is rejected up front for trees containing error-recovery
//! placeholder nodes; runtime failures (undefined variables, division by
//! zero) surface when the evaluator itself is invoked.

pub mod codegen;
