//! An AVL tree. Every node caches the height of the subtree rooted at it and, after each
//! insert, the nodes on the path back up to the root are rebalanced so that for every node the
//! heights of its two subtrees differ by at most one. That keeps the height of the tree under
//! roughly `1.44 * lg(N + 2)`.
//!
//! # Examples
//!
//! ```
//! use bst::avl::HeightBalancedTree;
//!
//! let mut tree = HeightBalancedTree::new();
//!
//! for x in 0..1023 {
//!     tree.insert(x);
//! }
//!
//! // A perfectly balanced tree of 1023 nodes has 10 levels. AVL gets close.
//! assert!(tree.height() <= 14);
//! assert!(tree.search(&1000));
//! assert!(!tree.search(&-1));
//! ```

use std::cmp::Ordering;

use log::trace;

use crate::error::Violation;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) supporting insertion and
/// membership checks.
#[derive(Debug)]
pub struct HeightBalancedTree<T> {
    root: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// Which way an inserted value goes when compared against a key. Equal keys go right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn of<T: Ord>(value: &T, key: &T) -> Self {
        if value < key {
            Self::Left
        } else {
            Self::Right
        }
    }
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T> Default for HeightBalancedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HeightBalancedTree<T> {
    /// Generates a new, empty `HeightBalancedTree`.
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
    /// use bst::avl::HeightBalancedTree;
    ///
    /// let mut tree = HeightBalancedTree::new();
    /// tree.insert(10);
    /// tree.insert(30);
    /// tree.insert(20);
    ///
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.root = Some(Node::insert(self.root.take(), value));
        self.len += 1;
    }

    /// Returns `true` if a key equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::avl::HeightBalancedTree;
    ///
    /// let tree: HeightBalancedTree<_> = (1..=3).collect();
    ///
    /// assert!(tree.search(&2));
    /// assert!(!tree.search(&4));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Gets the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Checks the ordering of keys, every cached height, and the balance of every node,
    /// returning the first problem found.
    pub fn validate(&self) -> Result<(), Violation>
    where
        T: Ord,
    {
        let Some(root) = self.root.as_deref() else {
            return Ok(());
        };
        root.check_heights()?;

        let mut keys = Vec::with_capacity(self.len);
        root.collect_in_order(&mut keys);
        if keys.windows(2).all(|pair| pair[0] <= pair[1]) {
            Ok(())
        } else {
            Err(Violation::OutOfOrder)
        }
    }
}

impl<T: Ord> FromIterator<T> for HeightBalancedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for HeightBalancedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
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

        // The value is moved down the tree so note now which side of the child it will land
        // on. If this node ends up unbalanced, that picks between the single and double
        // rotation. A child that gets rotated below here leaves this node balanced, so the
        // key compared against here is the one that matters.
        let child = match Side::of(&value, &node.value) {
            Side::Left => &mut node.left,
            Side::Right => &mut node.right,
        };
        let landing = child.as_deref().map(|child| Side::of(&value, &child.value));
        *child = Some(Self::insert(child.take(), value));

        node.rebalance(landing)
    }

    fn update_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Height of the left subtree minus the height of the right subtree.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Refreshes this node's height and applies whichever of the four AVL rotation cases fits.
    /// `landing` is the side of this node's child that the new value went down (`None` if that
    /// child was empty, in which case there's nothing to rotate).
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn rebalance(mut self: Box<Self>, landing: Option<Side>) -> Box<Self> {
        self.update_height();

        let balance = self.balance_factor();
        let return_node = match (balance, landing) {
            (b, Some(Side::Left)) if b > 1 => {
                trace!("avl: left-left case");
                self.rotate_right()
            }
            (b, Some(Side::Right)) if b < -1 => {
                trace!("avl: right-right case");
                self.rotate_left()
            }
            (b, Some(Side::Right)) if b > 1 => {
                trace!("avl: left-right case");
                self.left = self.left.take().map(Self::rotate_left);
                self.rotate_right()
            }
            (b, Some(Side::Left)) if b < -1 => {
                trace!("avl: right-left case");
                self.right = self.right.take().map(Self::rotate_right);
                self.rotate_left()
            }
            _ => self,
        };

        // In debug builds, after balancing, assert that we've restored/maintained the AVL
        // invariant.
        if cfg!(debug_assertions) {
            let left_height = height(&return_node.left);
            let right_height = height(&return_node.right);
            assert_eq!(return_node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        return_node
    }

    /// Rotate self to the left, moving the right child up to replace it. Heights are fixed
    /// bottom-up: the old root first, since the new root's height depends on it.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      z                      y
    ///     / \                    / \
    ///    a   y      rotate ->   z   c
    ///       / \                / \
    ///      b   c              a   b
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };
        trace!("avl: rotate left");

        self.right = new_root.left.take();
        self.update_height();

        new_root.left = Some(self);
        new_root.update_height();
        new_root
    }

    /// Mirror image of [`Node::rotate_left`].
    ///
    /// # Diagram
    ///
    /// ```text
    ///        y                  x
    ///       / \                / \
    ///      x   c    rotate -> a   y
    ///     / \                    / \
    ///    a   b                  b   c
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };
        trace!("avl: rotate right");

        self.left = new_root.right.take();
        self.update_height();

        new_root.right = Some(self);
        new_root.update_height();
        new_root
    }

    /// Returns the real height of this subtree after checking every cached height and balance
    /// factor in it.
    fn check_heights(&self) -> Result<usize, Violation> {
        let left = self.left.as_deref().map_or(Ok(0), Self::check_heights)?;
        let right = self.right.as_deref().map_or(Ok(0), Self::check_heights)?;

        let actual = left.max(right) + 1;
        if self.height != actual {
            return Err(Violation::StaleHeight {
                cached: self.height,
                actual,
            });
        }
        if left.abs_diff(right) > 1 {
            return Err(Violation::Unbalanced { left, right });
        }

        Ok(actual)
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
