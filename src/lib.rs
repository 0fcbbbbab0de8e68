//! This crate exposes three Binary Search Trees (BSTs) that differ only in how hard they work
//! to stay short, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree:
//!
//! - [`ordered::OrderedTree`] does nothing clever. Its height depends on insertion order.
//! - [`red_black::BalancedColorTree`] colors links red or black and uses rotations and
//!   color flips to keep its height under `2 * lg(N + 1)`.
//! - [`avl::HeightBalancedTree`] caches subtree heights and rotates whenever two sibling
//!   subtrees differ in height by more than one.
//!
//! Every tree requires its keys to implement [`Ord`]. A key type whose ordering isn't a
//! consistent total order won't crash a tree but will make searches return wrong answers.
//!
//! Rotations and color flips are logged at `trace` level through the [`log`] facade.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod error;
pub mod ordered;
pub mod red_black;

pub use error::Violation;
