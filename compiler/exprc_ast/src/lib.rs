//! Abstract Syntax Tree (AST) for infix arithmetic expressions.
//!
//! This crate defines the expression tree produced by `exprc_parser`, along
//! with the printer that renders it back to minimally parenthesised text, the
//! substitution pass that splices sub-trees into variable leaves, and a
//! visitor trait for custom traversals.

pub mod ast;
pub mod print;
pub mod subst;
pub mod visit;

// Re-export commonly used types
pub use ast::{BinaryExpressionNode, BinaryOperator, ExpressionNode, NO_PRIORITY};
pub use print::print_node;
pub use subst::{replace_all_variables, replace_variable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised while building AST values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// A symbol that is not one of `+ - * /` was used as an operator.
    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),
}

/// A result type for AST serialization.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use exprc_ast::{to_json, BinaryOperator, ExpressionNode};
///
/// let expr = ExpressionNode::binary(
///     BinaryOperator::Mul,
///     ExpressionNode::constant(2.0),
///     ExpressionNode::variable('a'),
/// );
/// let json = to_json(&expr).unwrap();
///
/// assert!(json.contains(r#""type": "Binary""#));
/// assert!(json.contains(r#""operator": "Mul""#));
/// assert!(json.contains(r#""value": "a""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
///
/// # Examples
///
/// ```
/// use exprc_ast::{from_json, ExpressionNode};
///
/// let json = r#"{"type":"Constant","value":42.0}"#;
/// let expr: ExpressionNode = from_json(json).unwrap();
/// assert_eq!(expr, ExpressionNode::constant(42.0));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
