//! Errors surfaced by [`Tree`][crate::Tree].
//!
//! Most "failures" on a tree are not errors at all: looking up a missing value yields `None`,
//! inserting a duplicate or deleting a missing value does nothing. The only thing a caller can
//! get wrong is asking for a callback traversal without a callback.

use std::fmt;

use thiserror::Error;

/// The four traversal orders a [`Tree`][crate::Tree] can be walked in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Left subtree, node, right subtree.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Breadth first, top to bottom and left to right within a level.
    LevelOrder,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InOrder => "in-order",
            Self::PreOrder => "pre-order",
            Self::PostOrder => "post-order",
            Self::LevelOrder => "level-order",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when walking a tree.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// A `*_for_each` traversal was called without a callback.
    #[error("{traversal} traversal must be called with a callback")]
    MissingCallback {
        /// The traversal that was requested.
        traversal: Traversal,
    },
}
