use crate::tree::Node;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// The height of a possibly empty subtree. An empty subtree is one level below a leaf so it has a
/// height of -1.
pub(crate) fn subtree_height<T>(link: &Link<T>) -> isize {
    link.as_deref().map_or(-1, |node| node.height() as isize)
}
