//! A Binary Search Tree that is built balanced and rebalanced on request.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. [`Tree::build`] bisects its sorted
//! input so the height starts at `O(lg N)`. Plain inserts and deletes don't
//! look after the height at all, so the tree can slide towards `O(N)` until
//! [`Tree::rebalance`] rebuilds it. [`Tree::is_balanced`] reports whether
//! every node's subtrees differ in height by at most one.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree: Tree<i32> = [9, 1, 5, 5, 3].into_iter().collect();
//! assert_eq!(tree.values(), vec![&1, &3, &5, &9]);
//!
//! tree.insert(4);
//! tree.delete(&9);
//! assert_eq!(tree.find(&4).map(|n| *n.value()), Some(4));
//! assert_eq!(tree.depth(&4), Some(2));
//!
//! print!("{tree}");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod pretty;
mod traverse;
mod tree;
mod util;

#[cfg(test)]
mod test;

pub use error::{Traversal, TreeError};
pub use traverse::{InOrder, IntoIter, LevelOrder, PostOrder, PreOrder};
pub use tree::{Node, Tree};
