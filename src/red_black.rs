//! A left-leaning red-black BST. Every link between a node and its child is either red or
//! black (the color is stored on the child). Red links glue nodes together into the 3-nodes of
//! a 2-3 tree and must always lean left, so a red-black tree is a binary encoding of a
//! perfectly balanced 2-3 tree.
//!
//! After an insert the tree satisfies:
//!
//! 1. The root is black.
//! 2. No red link is a right link.
//! 3. No node has two red links in a row.
//! 4. Every path from the root to an empty child slot crosses the same number of black links.
//!
//! Together these bound the height of the tree by `2 * lg(N + 1)`.
//!
//! # Examples
//!
//! ```
//! use bst::red_black::BalancedColorTree;
//!
//! let mut tree = BalancedColorTree::new();
//!
//! // Ascending inserts are the worst case for an unbalanced tree.
//! for x in 0..1023 {
//!     tree.insert(x);
//! }
//!
//! assert!(tree.search(&512));
//! assert!(!tree.search(&1023));
//! assert!(tree.height() <= 20);
//! assert_eq!(tree.validate(), Ok(()));
//! ```

use std::cmp::Ordering;

use log::trace;

use crate::error::Violation;

/// A self-balancing Binary Search Tree (specifically, a left-leaning red-black tree) supporting
/// insertion and membership checks.
#[derive(Debug)]
pub struct BalancedColorTree<T> {
    root: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

/// The color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

impl Color {
    fn flip(&mut self) {
        *self = match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        };
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    color: Color,
    left: Link<T>,
    right: Link<T>,
}

fn is_red<T>(link: &Link<T>) -> bool {
    link.as_ref().map_or(false, |node| node.color == Color::Red)
}

impl<T> Default for BalancedColorTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BalancedColorTree<T> {
    /// Generates a new, empty `BalancedColorTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if nothing has been inserted into the tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns how many keys are in the tree. Duplicates are counted once per insertion.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts the key into the tree and rebalances it. Keys equal to an existing key are
    /// inserted to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::red_black::BalancedColorTree;
    ///
    /// let mut tree = BalancedColorTree::new();
    /// tree.insert(30);
    /// tree.insert(20);
    /// tree.insert(10);
    ///
    /// // Descending inserts would make a chain of three without balancing.
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut root = Node::insert(self.root.take(), value);
        // A split may have pushed a red link all the way up.
        root.color = Color::Black;
        self.root = Some(root);
        self.len += 1;
    }

    /// Returns `true` if a key equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::red_black::BalancedColorTree;
    ///
    /// let tree: BalancedColorTree<_> = ["b", "a", "c"].into_iter().collect();
    ///
    /// assert!(tree.search(&"a"));
    /// assert!(!tree.search(&"d"));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.as_deref().map_or(false, |root| root.search(value))
    }

    /// Gets the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Checks the ordering and every red-black invariant listed in the [module docs][self],
    /// returning the first one found broken.
    pub fn validate(&self) -> Result<(), Violation>
    where
        T: Ord,
    {
        let Some(root) = self.root.as_deref() else {
            return Ok(());
        };
        if root.color == Color::Red {
            return Err(Violation::RedRoot);
        }
        root.black_height()?;

        let mut keys = Vec::with_capacity(self.len);
        root.collect_in_order(&mut keys);
        if keys.windows(2).all(|pair| pair[0] <= pair[1]) {
            Ok(())
        } else {
            Err(Violation::OutOfOrder)
        }
    }
}

impl<T: Ord> FromIterator<T> for BalancedColorTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BalancedColorTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Node<T> {
    /// New nodes are always red: they join whatever 2-3 node they land next to.
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    /// Inserts `value` into the subtree at `link` and returns the new root of that subtree,
    /// which the caller must store in place of `link`.
    fn insert(link: Link<T>, value: T) -> Box<Self>
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return Self::new_boxed(value);
        };

        if value < node.value {
            node.left = Some(Self::insert(node.left.take(), value));
        } else {
            node.right = Some(Self::insert(node.right.take(), value));
        }

        node.fix_up()
    }

    /// Restores the red-black invariants at this node after one of its subtrees changed. The
    /// three checks run in this order so that each one sets up the next.
    fn fix_up(mut self: Box<Self>) -> Box<Self> {
        if is_red(&self.right) && !is_red(&self.left) {
            self = self.rotate_left();
        }
        if is_red(&self.left) && self.left.as_ref().map_or(false, |left| is_red(&left.left)) {
            self = self.rotate_right();
        }
        if is_red(&self.left) && is_red(&self.right) {
            self.flip_colors();
        }

        debug_assert!(!is_red(&self.right), "red link leans right after fix-up");
        debug_assert!(
            !(is_red(&self.left) && self.left.as_ref().map_or(false, |left| is_red(&left.left))),
            "two left-leaning red links after fix-up"
        );

        self
    }

    /// Rotate self to the left, moving the right child up to replace it. The new root takes
    /// this node's color and this node hangs off the new root by a red link.
    ///
    /// # Diagram
    ///
    /// ```text
    ///       self                    x
    ///      /    \                  / \
    ///     a      x    rotate ->  self  c
    ///           / \              /  \
    ///          b   c            a    b
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut x) = self.right.take() else {
            return self;
        };
        trace!("red-black: rotate left");

        self.right = x.left.take();
        x.color = self.color;
        self.color = Color::Red;
        x.left = Some(self);
        x
    }

    /// Mirror image of [`Node::rotate_left`].
    ///
    /// # Diagram
    ///
    /// ```text
    ///         self              x
    ///        /    \            / \
    ///       x      c  ->      a  self
    ///      / \                   /  \
    ///     a   b                 b    c
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut x) = self.left.take() else {
            return self;
        };
        trace!("red-black: rotate right");

        self.left = x.right.take();
        x.color = self.color;
        self.color = Color::Red;
        x.right = Some(self);
        x
    }

    /// Splits a temporary 4-node by passing its middle key's red link up to the parent.
    fn flip_colors(&mut self) {
        trace!("red-black: flip colors");

        self.color.flip();
        if let Some(left) = self.left.as_mut() {
            left.color.flip();
        }
        if let Some(right) = self.right.as_mut() {
            right.color.flip();
        }
    }

    fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Equal => return true,
            Ordering::Less => &self.left,
            Ordering::Greater => &self.right,
        };
        child.as_deref().map_or(false, |child| child.search(value))
    }

    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Self::height);
        let right = self.right.as_deref().map_or(0, Self::height);
        left.max(right) + 1
    }

    /// Returns the number of black nodes on every path from this node down to an empty child
    /// slot, counting this node, or the first color rule broken below it.
    fn black_height(&self) -> Result<usize, Violation> {
        if is_red(&self.right) {
            return Err(Violation::RightLeaningRed);
        }
        if self.color == Color::Red && is_red(&self.left) {
            return Err(Violation::DoubleRed);
        }

        let left = self.left.as_deref().map_or(Ok(0), Self::black_height)?;
        let right = self.right.as_deref().map_or(Ok(0), Self::black_height)?;
        if left != right {
            return Err(Violation::BlackHeightMismatch { left, right });
        }

        Ok(left + usize::from(self.color == Color::Black))
    }

    fn collect_in_order<'a>(&'a self, keys: &mut Vec<&'a T>) {
        if let Some(left) = self.left.as_deref() {
            left.collect_in_order(keys);
        }
        keys.push(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.collect_in_order(keys);
        }
    }
}
