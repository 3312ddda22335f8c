//! Depth first and breadth first walks over a [`Tree`].
//!
//! Every walk is a lazy iterator over node references that is built fresh on each call. The
//! iterators keep their own stack or queue instead of recursing so they work on trees of any
//! shape. The `*_for_each` methods drive the same iterators with a caller supplied callback.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let tree = Tree::build([1, 2, 3, 4, 5]);
//!
//! let values = |nodes: Vec<&rebuild_bst::Node<i32>>| -> Vec<i32> {
//!     nodes.into_iter().map(|n| *n.value()).collect()
//! };
//! assert_eq!(values(tree.in_order().collect()), [1, 2, 3, 4, 5]);
//! assert_eq!(values(tree.pre_order().collect()), [3, 2, 1, 5, 4]);
//! assert_eq!(values(tree.post_order().collect()), [1, 2, 4, 5, 3]);
//! assert_eq!(values(tree.level_order().collect()), [3, 2, 5, 1, 4]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::{Traversal, TreeError};
use crate::tree::{Node, Tree};
use crate::util::Link;

impl<T> Tree<T> {
    /// Walks the tree left subtree first, then the node, then the right subtree. This visits
    /// values in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Walks the tree visiting each node before its left and then right subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Walks the tree visiting each node after its left and then right subtrees.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Walks the tree one level at a time from the root down, left to right within a level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }

    /// All the values in the tree in ascending order.
    pub fn values(&self) -> Vec<&T> {
        self.in_order().map(Node::value).collect()
    }

    /// Calls `callback` on each node in order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingCallback`] without visiting anything if `callback` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Node, Tree, TreeError};
    ///
    /// let tree = Tree::build([2, 1, 3]);
    ///
    /// let mut seen = Vec::new();
    /// tree.in_order_for_each(Some(|n: &Node<i32>| seen.push(*n.value())))?;
    /// assert_eq!(seen, [1, 2, 3]);
    ///
    /// assert!(tree.in_order_for_each(None::<fn(&Node<i32>)>).is_err());
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn in_order_for_each<F>(&self, callback: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<T>),
    {
        visit(Traversal::InOrder, self.in_order(), callback)
    }

    /// Calls `callback` on each node in pre-order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingCallback`] without visiting anything if `callback` is `None`.
    pub fn pre_order_for_each<F>(&self, callback: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<T>),
    {
        visit(Traversal::PreOrder, self.pre_order(), callback)
    }

    /// Calls `callback` on each node in post-order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingCallback`] without visiting anything if `callback` is `None`.
    pub fn post_order_for_each<F>(&self, callback: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<T>),
    {
        visit(Traversal::PostOrder, self.post_order(), callback)
    }

    /// Calls `callback` on each node in level order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingCallback`] without visiting anything if `callback` is `None`.
    pub fn level_order_for_each<F>(&self, callback: Option<F>) -> Result<(), TreeError>
    where
        F: FnMut(&Node<T>),
    {
        visit(Traversal::LevelOrder, self.level_order(), callback)
    }
}

fn visit<'a, T, I, F>(traversal: Traversal, nodes: I, callback: Option<F>) -> Result<(), TreeError>
where
    T: 'a,
    I: Iterator<Item = &'a Node<T>>,
    F: FnMut(&Node<T>),
{
    let callback = callback.ok_or(TreeError::MissingCallback { traversal })?;
    nodes.for_each(callback);
    Ok(())
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Map<InOrder<'a, T>, fn(&'a Node<T>) -> &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order().map(Node::value as fn(&'a Node<T>) -> &'a T)
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.take_root())
    }
}

/// In-order iterator over the nodes of a [`Tree`]. See [`Tree::in_order`].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being walked.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Pre-order iterator over the nodes of a [`Tree`]. See [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so left comes off first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Post-order iterator over the nodes of a [`Tree`]. See [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is pushed twice. The flag marks the second push, after its children were queued.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, children_queued) = self.stack.pop()?;
            if children_queued {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Level-order iterator over the nodes of a [`Tree`]. See [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// Consuming in-order iterator over the values of a [`Tree`]. Each node is freed as its value is
/// yielded.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.take_left();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let (value, right) = node.into_value_and_right();
        self.push_left_spine(right);
        Some(value)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    // Drain instead of letting the boxes drop recursively down a long right spine.
    fn drop(&mut self) {
        self.for_each(drop);
    }
}
