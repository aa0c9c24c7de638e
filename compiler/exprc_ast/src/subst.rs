//! In-place substitution of variable leaves with replacement trees.
//!
//! Every rewritten site receives its own clone of the replacement, so the
//! resulting tree never shares a node between two parents.

use crate::ast::ExpressionNode;

/// Replaces every `Variable(name)` leaf under `root` with a copy of
/// `replacement`. Variables with other names are left untouched.
///
/// Returns the number of sites rewritten.
pub fn replace_variable(root: &mut ExpressionNode, name: char, replacement: &ExpressionNode) -> usize {
    rewrite(root, &|candidate| candidate == name, replacement)
}

/// Replaces every variable leaf under `root`, whatever its name.
///
/// Returns the number of sites rewritten.
pub fn replace_all_variables(root: &mut ExpressionNode, replacement: &ExpressionNode) -> usize {
    rewrite(root, &|_| true, replacement)
}

fn rewrite(
    node: &mut ExpressionNode,
    matches: &dyn Fn(char) -> bool,
    replacement: &ExpressionNode,
) -> usize {
    match node {
        ExpressionNode::Constant(_) => 0,
        ExpressionNode::Variable(name) => {
            if matches(*name) {
                *node = replacement.clone();
                1
            } else {
                0
            }
        }
        ExpressionNode::Binary(bin) => {
            let left = rewrite(&mut bin.left, matches, replacement);
            left + rewrite(&mut bin.right, matches, replacement)
        }
    }
}

impl ExpressionNode {
    /// Returns a copy of this tree with `name` replaced by `replacement`.
    pub fn substituted(&self, name: char, replacement: &ExpressionNode) -> ExpressionNode {
        let mut copy = self.clone();
        replace_variable(&mut copy, name, replacement);
        copy
    }
}
