//! # varcalc
//!
//! varcalc is an arithmetic expression evaluation engine written in Rust.
//! It offers two cooperating strategies: a single-pass stack evaluator that
//! computes a numeric result directly from expression text, and a node-based
//! path that parses a formula once into a tree and evaluates it repeatedly
//! against different variable bindings, such as recomputing a damage or
//! scaling formula per game event.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed formulas.
///
/// This module declares the `Node` enum and related types that represent a
/// parsed expression as a tree. A tree is built once by the parser and then
/// evaluated against caller-supplied variable bindings.
///
/// # Responsibilities
/// - Defines the node variants for constants, variables, binary operations,
///   exponentiation and function calls.
/// - Implements pure, reentrant evaluation against a variable map.
/// - Declares the `VariableMap` alias used throughout the crate.
pub mod ast;
/// Orchestrates the two evaluation strategies.
///
/// This module ties together the direct stack evaluator, the lexer, the AST
/// builder and the shared function table. Callers choose the stack evaluator
/// for one-shot expressions without variables, or the parser plus node model
/// for formulas evaluated many times with differing bindings.
///
/// # Responsibilities
/// - Coordinates the core components: evaluator, lexer, parser and function
///   table.
/// - Guarantees both strategies share one priority table and one function
///   table.
pub mod engine;
/// Provides the unified error type for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// parsing, or evaluating an expression. Failures abort the current call
/// entirely; the calling layer decides whether to log, fall back to a
/// default value, or surface the failure.
///
/// # Responsibilities
/// - Defines the error enum covering every failure mode.
/// - Attaches the offending name, character or structural detail.
/// - Supports integration with standard error handling traits.
pub mod error;

pub use crate::{
    ast::{Node, VariableMap},
    error::EvalError,
};

/// Evaluates an arithmetic expression directly to a number.
///
/// This is the one-shot entry point: the expression is scanned and computed
/// in a single pass with no retained representation. State lives on the
/// call frame, so concurrent calls are safe.
///
/// # Errors
/// Returns an error if the expression is malformed, applies an unknown
/// function, or an unrecognized operator reaches a fold.
///
/// # Examples
/// ```
/// // Exponentiation binds tightest; trigonometry works in degrees.
/// assert_eq!(varcalc::evaluate("2^3 + 5").unwrap(), 13.0);
/// assert_eq!(varcalc::evaluate("-5 + 3").unwrap(), -2.0);
/// assert_eq!(varcalc::evaluate("abs(-5) + ceil(4.3)").unwrap(), 10.0);
///
/// // Malformed input fails instead of silently recovering.
/// assert!(varcalc::evaluate("(2 + 3").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    engine::evaluator::evaluate(expression)
}

/// Parses a formula into a reusable [`Node`] tree.
///
/// The tree can be retained and evaluated arbitrarily many times against
/// different variable maps without re-parsing.
///
/// # Errors
/// Returns an error if the formula is structurally malformed.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// let tree = varcalc::parse("x + 1").unwrap();
///
/// assert!(tree.evaluate(&HashMap::new()).is_err());
/// assert_eq!(tree.evaluate(&HashMap::from([("x".to_string(), 4.0)]))
///                .unwrap(),
///            5.0);
/// ```
pub fn parse(expression: &str) -> Result<Node, EvalError> {
    engine::parser::parse(expression)
}

/// Parses a formula and evaluates it once against the given bindings.
///
/// Convenience for callers that do not keep the tree around. When the same
/// formula is evaluated per event, prefer [`parse`] once and
/// [`Node::evaluate`] per event.
///
/// # Errors
/// Returns an error if parsing fails or a referenced variable is absent
/// from `variables`.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// let bindings = HashMap::from([("level".to_string(), 4.0)]);
///
/// assert_eq!(varcalc::evaluate_with("level * 2.5", &bindings).unwrap(),
///            10.0);
/// ```
pub fn evaluate_with(expression: &str, variables: &VariableMap) -> Result<f64, EvalError> {
    parse(expression)?.evaluate(variables)
}
