//! A BST that is built balanced and only rebalanced on request.
//!
//! Construction sorts and deduplicates its input then bisects it so the resulting tree has the
//! minimum possible height. After that, `insert` and `delete` keep the BST ordering but do nothing
//! to keep the tree short. A long run of ascending inserts degrades it into a linked list. Calling
//! [`Tree::rebalance`] flattens the tree back into its sorted values and builds it again.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(5));
//! assert!(tree.is_balanced());
//!
//! // Walking down the right spine unbalances it.
//! for value in [100, 101, 102] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.values(), vec![&1, &3, &4, &5, &7, &8, &9, &100, &101, &102]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::traverse::IntoIter;
use crate::util::{subtree_height, Link};

/// A Binary Search Tree of distinct values. It exclusively owns its nodes and every node
/// exclusively owns its children, so there are no parent pointers and no sharing.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // `Box`'s own drop recurses once per level which overflows the stack on a degenerate tree, so
    // unlink the nodes onto a heap allocated stack first.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree holding the distinct values of `values` with the minimum possible height.
    ///
    /// The values are sorted and deduplicated. The value at index `len / 2` becomes the root and
    /// the values on either side of it are built the same way into its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(tree.values(), vec![&1, &2, &3]);
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let len = values.len();
        let root = Node::from_sorted(&mut values.into_iter(), len);
        let tree = Self { root, len };
        debug!(len, height = subtree_height(&tree.root), "built tree");

        tree
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf. Inserting a value that is already present does nothing.
    ///
    /// The tree is not rebalanced afterwards so this costs `O(height)`, which is `O(n)` once the
    /// tree has degenerated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.values(), vec![&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    trace!("value already present, skipping insert");
                    return;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Deletes `value` from the tree. Deleting a value that isn't present does nothing.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest value in
    /// its right subtree) and the successor's node is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::build([2, 1, 3]);
    /// tree.delete(&2);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &3);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&2).is_none());
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        let before = self.len;
        self.root = Node::delete(self.root.take(), value, &mut self.len);
        if self.len == before {
            trace!("value not present, skipping delete");
        }
    }

    /// Finds the node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }

        None
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The number of edges on the longest downward path from the node holding `value` to a leaf,
    /// or `None` if `value` isn't in the tree. A leaf has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.height(&3), Some(2));
    /// assert_eq!(tree.height(&1), Some(0));
    /// assert_eq!(tree.height(&42), None);
    /// ```
    pub fn height(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(value).map(Node::height)
    }

    /// The number of edges between the root and the node holding `value`, or `None` if `value`
    /// isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.depth(&3), Some(0));
    /// assert_eq!(tree.depth(&1), Some(2));
    /// assert_eq!(tree.depth(&42), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => current = node.right.as_deref(),
            }
            depth += 1;
        }

        None
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one. An empty
    /// tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the tree from its in-order values so it has the minimum possible height, and
    /// returns the new root. The set of values is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 1..=7 {
    ///     tree.insert(value);
    /// }
    /// assert_eq!(tree.height(&1), Some(6));
    ///
    /// let root = tree.rebalance().map(|n| *n.value());
    /// assert_eq!(root, Some(4));
    /// assert_eq!(tree.height(&4), Some(2));
    /// ```
    pub fn rebalance(&mut self) -> Option<&Node<T>> {
        // The in-order walk is already sorted and duplicate free.
        let values: Vec<T> = IntoIter::new(self.root.take()).collect();
        debug_assert_eq!(values.len(), self.len);

        self.len = values.len();
        self.root = Node::from_sorted(&mut values.into_iter(), self.len);
        debug!(
            len = self.len,
            height = subtree_height(&self.root),
            "rebalanced tree"
        );

        self.root()
    }

    /// Moves the root out, leaving the tree empty.
    pub(crate) fn take_root(&mut self) -> Link<T> {
        self.len = 0;
        self.root.take()
    }
}

/// A single value in a [`Tree`] along with the subtrees of smaller and larger values.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the subtree of smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree of larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest downward path from this node to a leaf.
    pub fn height(&self) -> usize {
        self.left()
            .into_iter()
            .chain(self.right())
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Whether the subtree rooted here satisfies the AVL balance condition at every node.
    pub fn is_balanced(&self) -> bool {
        Self::balanced_height(self).is_some()
    }

    /// The height of the subtree rooted at `node`, or `None` if any node in it is unbalanced.
    /// Computed bottom up so each node is only visited once.
    fn balanced_height(node: &Self) -> Option<isize> {
        let left = node.left().map_or(Some(-1), Self::balanced_height)?;
        let right = node.right().map_or(Some(-1), Self::balanced_height)?;

        ((left - right).abs() <= 1).then(|| left.max(right) + 1)
    }

    /// Builds a minimum height subtree out of the next `len` values of `values`, which must be
    /// sorted and free of duplicates. The root takes the value at index `len / 2`.
    fn from_sorted<I>(values: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }

        let left_len = len / 2;
        let left = Self::from_sorted(values, left_len);
        let value = values.next()?;
        let right = Self::from_sorted(values, len - left_len - 1);

        Some(Box::new(Self { value, left, right }))
    }

    pub(crate) fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    /// Unpacks a node whose left subtree has already been taken.
    pub(crate) fn into_value_and_right(self: Box<Self>) -> (T, Link<T>) {
        debug_assert!(self.left.is_none());
        let Self { value, right, .. } = *self;
        (value, right)
    }

    /// Removes `value` from the subtree rooted at `link` and returns the subtree's new root,
    /// decrementing `len` if something was removed.
    fn delete(link: Link<T>, value: &T, len: &mut usize) -> Link<T>
    where
        T: Ord,
    {
        let mut node = link?;
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::delete(node.left.take(), value, len);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::delete(node.right.take(), value, len);
                Some(node)
            }
            Ordering::Equal => {
                *len -= 1;
                match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    (Some(left), Some(right)) => {
                        let (right, successor) = right.take_min();
                        node.value = successor;
                        node.left = Some(left);
                        node.right = right;
                        Some(node)
                    }
                }
            }
        }
    }

    /// Splices the leftmost node out of this subtree. Returns the subtree's new root and the
    /// removed value.
    fn take_min(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            Some(left) => {
                let (left, min) = left.take_min();
                self.left = left;
                (Some(self), min)
            }
            None => {
                let Self { value, right, .. } = *self;
                (right, value)
            }
        }
    }
}
