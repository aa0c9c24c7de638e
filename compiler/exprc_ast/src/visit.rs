//! Visitor pattern implementation for traversing the AST.
//!
//! A `Visitor` receives one callback per node kind. Traversal order is left
//! to the visitor: `visit_binary` decides whether and when to descend into
//! the operands by calling `accept` on them.

use crate::ast::{BinaryExpressionNode, ExpressionNode};

/// A visitor for traversing expression trees.
pub trait Visitor {
    /// The value produced for each visited node.
    type Output;
    /// The error that aborts the traversal.
    type Error;

    fn visit_constant(&mut self, value: f64) -> Result<Self::Output, Self::Error>;

    fn visit_variable(&mut self, name: char) -> Result<Self::Output, Self::Error>;

    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> Result<Self::Output, Self::Error>;
}

impl ExpressionNode {
    /// Dispatches to the visitor method matching this node's variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            ExpressionNode::Constant(value) => visitor.visit_constant(*value),
            ExpressionNode::Variable(name) => visitor.visit_variable(*name),
            ExpressionNode::Binary(bin) => visitor.visit_binary(bin),
        }
    }
}
