//! Rendering of expression trees back to infix text.
//!
//! Parentheses are emitted only around a binary node whose priority is
//! strictly lower than the priority of the node enclosing it. Equal-priority
//! right operands are not parenthesised, so `a - (b - c)` renders as
//! `a - b - c`.

use std::fmt;

use crate::ast::{ExpressionNode, NO_PRIORITY};

/// Writes `node` to `out`, parenthesising it when its operator binds looser
/// than `enclosing_priority`.
pub fn print_node<W: fmt::Write + ?Sized>(
    node: &ExpressionNode,
    enclosing_priority: u8,
    out: &mut W,
) -> fmt::Result {
    match node {
        ExpressionNode::Constant(value) => write_constant(*value, out),
        ExpressionNode::Variable(name) => out.write_char(*name),
        ExpressionNode::Binary(bin) => {
            let priority = bin.operator.priority();
            let grouped = priority < enclosing_priority;
            if grouped {
                out.write_char('(')?;
            }
            print_node(&bin.left, priority, out)?;
            write!(out, " {} ", bin.operator.symbol())?;
            print_node(&bin.right, priority, out)?;
            if grouped {
                out.write_char(')')?;
            }
            Ok(())
        }
    }
}

// Very small or very large magnitudes switch to exponent form when that is
// shorter. Both forms are shortest round-trip and read back exactly.
fn write_constant<W: fmt::Write + ?Sized>(value: f64, out: &mut W) -> fmt::Result {
    let positional = value.to_string();
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-5..1e16).contains(&magnitude) {
        let exponent = format!("{value:e}");
        if exponent.len() < positional.len() {
            return out.write_str(&exponent);
        }
    }
    out.write_str(&positional)
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_node(self, NO_PRIORITY, f)
    }
}
