//! Box drawing diagrams of a [`Tree`].
//!
//! The diagram is drawn sideways with the root on the left and larger values above smaller ones:
//!
//! ```text
//! │       ┌── 9
//! │   ┌── 8
//! │   │   └── 7
//! └── 5
//!     │   ┌── 4
//!     └── 3
//!         └── 1
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

const BRANCH: &str = "│   ";
const SPACE: &str = "    ";
const LEFT: &str = "└── ";
const RIGHT: &str = "┌── ";

impl<T: fmt::Display> Tree<T> {
    /// Writes a diagram of the tree to `out`, one node per line. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    /// let mut diagram = String::new();
    /// tree.pretty_print(&mut diagram).unwrap();
    ///
    /// assert_eq!(diagram, "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn pretty_print<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(out, root, "", true),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_print(f)
    }
}

fn write_node<T, W>(out: &mut W, node: &Node<T>, prefix: &str, is_left: bool) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    if let Some(right) = node.right() {
        let prefix = format!("{prefix}{}", if is_left { BRANCH } else { SPACE });
        write_node(out, right, &prefix, false)?;
    }

    let connector = if is_left { LEFT } else { RIGHT };
    writeln!(out, "{prefix}{connector}{}", node.value())?;

    if let Some(left) = node.left() {
        let prefix = format!("{prefix}{}", if is_left { SPACE } else { BRANCH });
        write_node(out, left, &prefix, true)?;
    }

    Ok(())
}
