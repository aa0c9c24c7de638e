// Abstract Syntax Tree (AST) definitions for arithmetic expressions.
// Every node owns its children; a tree is either a single leaf or a fully
// formed binary node, never a node with a missing operand.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::visit::Visitor;
use crate::AstError;

/// Enclosing priority that accepts every operator.
///
/// Passed as the parser's initial floor and as the printer's top-level
/// enclosing priority, so the root is never parenthesised.
pub const NO_PRIORITY: u8 = 0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum ExpressionNode {
    Constant(f64),
    Variable(char),
    Binary(Box<BinaryExpressionNode>),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// Binding priority; higher binds tighter.
    pub fn priority(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 1,
            BinaryOperator::Mul | BinaryOperator::Div => 2,
        }
    }

    /// Operator for an infix symbol, or `None` if `symbol` is not one of
    /// `+ - * /`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Sub),
            '*' => Some(BinaryOperator::Mul),
            '/' => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }

    /// Applies the operator with IEEE-754 semantics; division by zero yields
    /// an infinity or NaN rather than an error.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = AstError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(AstError::UnknownOperator(symbol))
    }
}

impl ExpressionNode {
    pub fn constant(value: f64) -> Self {
        ExpressionNode::Constant(value)
    }

    pub fn variable(name: char) -> Self {
        ExpressionNode::Variable(name)
    }

    /// Builds a binary node, taking ownership of both operands.
    pub fn binary(operator: BinaryOperator, left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, ExpressionNode::Binary(_))
    }

    /// Total number of nodes in the tree, leaves included.
    pub fn node_count(&self) -> usize {
        match self {
            ExpressionNode::Constant(_) | ExpressionNode::Variable(_) => 1,
            ExpressionNode::Binary(bin) => 1 + bin.left.node_count() + bin.right.node_count(),
        }
    }

    /// Height of the tree; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ExpressionNode::Constant(_) | ExpressionNode::Variable(_) => 1,
            ExpressionNode::Binary(bin) => 1 + bin.left.depth().max(bin.right.depth()),
        }
    }

    /// Distinct variable names occurring in the tree, in sorted order.
    pub fn variables(&self) -> BTreeSet<char> {
        let mut collector = VariableCollector::default();
        match self.accept(&mut collector) {
            Ok(()) => collector.names,
            Err(never) => match never {},
        }
    }

    pub fn contains_variable(&self, name: char) -> bool {
        match self {
            ExpressionNode::Constant(_) => false,
            ExpressionNode::Variable(own) => *own == name,
            ExpressionNode::Binary(bin) => {
                bin.left.contains_variable(name) || bin.right.contains_variable(name)
            }
        }
    }
}

#[derive(Default)]
struct VariableCollector {
    names: BTreeSet<char>,
}

impl Visitor for VariableCollector {
    type Output = ();
    type Error = std::convert::Infallible;

    fn visit_constant(&mut self, _value: f64) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_variable(&mut self, name: char) -> Result<(), Self::Error> {
        self.names.insert(name);
        Ok(())
    }

    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> Result<(), Self::Error> {
        node.left.accept(self)?;
        node.right.accept(self)
    }
}
