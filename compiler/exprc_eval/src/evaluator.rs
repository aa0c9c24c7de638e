use exprc_ast::visit::Visitor;
use exprc_ast::{BinaryExpressionNode, ExpressionNode};
use exprc_parser::{parse_default, ParseError};
use thiserror::Error;

use crate::env::Environment;

/// Errors that can occur while evaluating an expression.
///
/// Division by zero is not an error: it follows IEEE-754 and produces an
/// infinity or NaN.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The source text did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A variable has no value in the environment
    #[error("Variable '{0}' has no binding")]
    UnboundVariable(char),
}

/// Evaluates `node` with every variable bound to `variable_value`.
pub fn evaluate(node: &ExpressionNode, variable_value: f64) -> f64 {
    match node {
        ExpressionNode::Constant(value) => *value,
        ExpressionNode::Variable(_) => variable_value,
        ExpressionNode::Binary(bin) => {
            let left = evaluate(&bin.left, variable_value);
            let right = evaluate(&bin.right, variable_value);
            bin.operator.apply(left, right)
        }
    }
}

/// Evaluates `node`, looking each variable up by name.
pub fn evaluate_in(node: &ExpressionNode, env: &Environment) -> Result<f64, EvalError> {
    node.accept(&mut Evaluator::new(env))
}

/// Parses `text` and evaluates it with every variable bound to `variable_value`.
///
/// # Examples
///
/// ```
/// use exprc_eval::evaluate_text;
///
/// assert_eq!(evaluate_text("5 * (a + 4) - 8", 9.0).unwrap(), 57.0);
/// assert!(evaluate_text("5 *", 0.0).is_err());
/// ```
pub fn evaluate_text(text: &str, variable_value: f64) -> Result<f64, EvalError> {
    let expr = parse_default(text)?;
    let value = evaluate(&expr, variable_value);
    log::debug!("evaluated {text:?} with {variable_value} to {value}");
    Ok(value)
}

/// Environment-backed evaluator, driven through the AST visitor.
pub struct Evaluator<'e> {
    env: &'e Environment,
}

impl<'e> Evaluator<'e> {
    pub fn new(env: &'e Environment) -> Self {
        Self { env }
    }
}

impl Visitor for Evaluator<'_> {
    type Output = f64;
    type Error = EvalError;

    fn visit_constant(&mut self, value: f64) -> Result<f64, EvalError> {
        Ok(value)
    }

    fn visit_variable(&mut self, name: char) -> Result<f64, EvalError> {
        self.env.get(name).ok_or(EvalError::UnboundVariable(name))
    }

    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> Result<f64, EvalError> {
        let left = node.left.accept(self)?;
        let right = node.right.accept(self)?;
        Ok(node.operator.apply(left, right))
    }
}
