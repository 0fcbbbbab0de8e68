//! The error returned when a tree's structural invariants don't hold.

use thiserror::Error;

/// A broken invariant found by one of the `validate` methods.
///
/// Inserting and searching never fail, so nothing in this crate returns a `Violation` during
/// normal operation. It only describes what went wrong when a tree is checked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An in-order walk found a key smaller than the one before it.
    #[error("keys are out of order")]
    OutOfOrder,
    /// The root of a red-black tree is red.
    #[error("root is red")]
    RedRoot,
    /// A red link leans right.
    #[error("red link leans right")]
    RightLeaningRed,
    /// A red node has a red left child.
    #[error("two red links in a row")]
    DoubleRed,
    /// The left and right subtrees of a node have a different number of black links down to
    /// their leaves.
    #[error("black heights differ: left {left}, right {right}")]
    BlackHeightMismatch {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// A node's cached height doesn't match its children.
    #[error("cached height {cached} but subtree height is {actual}")]
    StaleHeight {
        /// The height stored in the node.
        cached: usize,
        /// The height computed from the node's children.
        actual: usize,
    },
    /// A node's subtrees differ in height by more than one.
    #[error("subtree heights too far apart: left {left}, right {right}")]
    Unbalanced {
        /// Height of the left subtree.
        left: usize,
        /// Height of the right subtree.
        right: usize,
    },
}
