//! The node store. Each [`Node`] owns its children through a [`Link`], so the tree's root link is
//! the only way into the structure and every node has exactly one owner.

use std::fmt;

/// An owning, possibly empty, reference to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// One stored key and the subtree rooted at it.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many nodes are in the subtree rooted at this node, including itself.
    ///
    /// While the tree is threaded into a list by `linearize` this instead counts the nodes from
    /// here to the end of the list. For a list threaded through `right` the two agree.
    pub(crate) size: usize,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("size", &self.size)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    /// A single node subtree holding `key`.
    pub(crate) fn new_boxed(key: T) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            size: 1,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The number of nodes in the left subtree, which is also this node's position within its
    /// own subtree.
    pub(crate) fn left_size(&self) -> usize {
        size(&self.left)
    }

    /// Recomputes `size` from the children.
    pub(crate) fn fix_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

/// The size of the subtree behind `link`. An empty link holds no nodes.
pub(crate) fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// The number of levels in the subtree behind `link`. An empty link has no levels.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Checks that every node's size is one more than the sizes of its children, panicking on the
/// first violation. Returns the number of nodes visited.
pub(crate) fn assert_sizes<T>(link: &Link<T>) -> usize {
    let Some(node) = link else {
        return 0;
    };
    let counted = 1 + assert_sizes(&node.left) + assert_sizes(&node.right);
    assert_eq!(node.size, counted, "wrong subtree size");

    counted
}

/// Checks the ordering and size invariants of the subtree behind `link`, panicking on the first
/// violation. Every key must lie strictly between `lower` and `upper` when they are given.
/// Returns the number of nodes visited.
#[cfg(test)]
pub(crate) fn assert_invariants<T>(link: &Link<T>, lower: Option<&T>, upper: Option<&T>) -> usize
where
    T: Ord + fmt::Debug,
{
    let Some(node) = link else {
        return 0;
    };
    if let Some(lower) = lower {
        assert!(lower < &node.key, "{:?} is not above {:?}", node.key, lower);
    }
    if let Some(upper) = upper {
        assert!(&node.key < upper, "{:?} is not below {:?}", node.key, upper);
    }

    let left = assert_invariants(&node.left, lower, Some(&node.key));
    let right = assert_invariants(&node.right, Some(&node.key), upper);
    assert_eq!(
        node.size,
        1 + left + right,
        "wrong subtree size at {:?}",
        node.key
    );

    node.size
}
