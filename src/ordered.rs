//! A plain, unbalanced BST. Keys are placed where they land and never moved, so the shape of
//! the tree (and how long lookups take) depends entirely on insertion order. Inserting keys
//! in ascending order builds what is effectively a linked list.
//!
//! This tree is the baseline the self-balancing trees in this crate are measured against.
//!
//! # Examples
//!
//! ```
//! use bst::ordered::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Equal keys are stored again, to the right of the existing one.
//! tree.insert(1);
//! assert!(tree.search(&1));
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::Violation;

/// An unbalanced Binary Search Tree supporting insertion and membership checks.
///
/// Because the height of this tree is unbounded, every operation walks the tree with a loop
/// (or an explicit stack) rather than recursion.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        // The default drop would recurse once per level, which overflows the stack on the
        // degenerate trees this type happily builds.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
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

    /// Inserts the key into the tree as a new leaf. Keys equal to an existing key go to its
    /// right, so inserting the same key twice stores it twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::ordered::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    ///
    /// assert!(tree.search(&3));
    /// assert!(!tree.search(&4));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Returns `true` if a key equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::ordered::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.search(&8));
    /// assert!(!tree.search(&42));
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
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }

        height
    }

    /// Checks that an in-order walk of the tree visits keys in non-decreasing order.
    pub fn validate(&self) -> Result<(), Violation>
    where
        T: Ord,
    {
        let keys = self.in_order();
        if keys.windows(2).all(|pair| pair[0] <= pair[1]) {
            Ok(())
        } else {
            Err(Violation::OutOfOrder)
        }
    }

    /// Collects references to every key, smallest first.
    fn in_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            keys.push(&node.value);
            cursor = node.right.as_deref();
        }

        keys
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
