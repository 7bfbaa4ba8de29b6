//! Game-agnostic minimax over an opaque binary score tree.
//!
//! Reusable outside Tic-Tac-Toe: the tree carries nothing but leaf values,
//! so any two-player zero-sum game whose positions have been expanded into
//! a binary decision tree can be scored here.

use crate::error::Error;

/// A binary tree node: either a leaf carrying a value, or an internal node
/// with exactly two children.
///
/// A node with a value is treated as a leaf regardless of children. A
/// valueless node with fewer than two children is invalid input, rejected
/// by the evaluators.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub value: Option<i32>,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(value: i32) -> Self {
        Self {
            value: Some(value),
            left: None,
            right: None,
        }
    }

    pub fn branch(left: TreeNode, right: TreeNode) -> Self {
        Self {
            value: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }
}

/// Minimax without pruning.
///
/// Leaves return their value for either role; internal nodes recurse on
/// both children with the role flipped and keep the max (maximizing) or
/// min (minimizing) of the two.
pub fn minimax(node: &TreeNode, is_max: bool) -> Result<i32, Error> {
    if let Some(value) = node.value {
        return Ok(value);
    }

    let (Some(left), Some(right)) = (&node.left, &node.right) else {
        return Err(Error::MissingChild);
    };

    let left_val = minimax(left, !is_max)?;
    let right_val = minimax(right, !is_max)?;

    Ok(if is_max {
        left_val.max(right_val)
    } else {
        left_val.min(right_val)
    })
}

/// Minimax with alpha-beta pruning.
///
/// A pure cutoff: returns the same value as [`minimax`] for every valid
/// tree. `alpha`/`beta` are running lower/upper bounds on the achievable
/// score; callers start them at `i32::MIN` / `i32::MAX` (or any values
/// provably outside the true score range). Remaining children are skipped
/// the instant `alpha >= beta`.
pub fn minimax_alpha_beta(
    node: &TreeNode,
    mut alpha: i32,
    mut beta: i32,
    is_max: bool,
) -> Result<i32, Error> {
    if let Some(value) = node.value {
        return Ok(value);
    }

    let (Some(left), Some(right)) = (&node.left, &node.right) else {
        return Err(Error::MissingChild);
    };

    if is_max {
        let mut best = i32::MIN;
        for child in [left, right] {
            let child_val = minimax_alpha_beta(child, alpha, beta, !is_max)?;
            best = best.max(child_val);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = i32::MAX;
        for child in [left, right] {
            let child_val = minimax_alpha_beta(child, alpha, beta, !is_max)?;
            best = best.min(child_val);
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
