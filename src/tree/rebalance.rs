//! Global rebalancing by relinearization. Instead of rotating locally after every mutation, the
//! whole tree is threaded into a sorted list through its `right` links and then rebuilt as a tree
//! of minimal height. Both passes reuse the existing nodes, so nothing is allocated, and neither
//! compares keys.

use tracing::debug;

use super::{Tree, CHECK_INVARIANTS};
use crate::node::{self, Link};

impl<T> Tree<T> {
    /// Rebuilds the tree into a shape of minimal height, `⌈log2(len + 1)⌉`, in `O(N)` time. The
    /// keys are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.balance();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.select(3), Ok(&4));
    /// ```
    pub fn balance(&mut self) {
        let mut count = 0;
        let mut list = None;
        linearize(self.root.take(), &mut list, &mut count);
        self.root = arborize(&mut list, count);
        debug_assert!(list.is_none(), "arborize left nodes behind");

        debug!(len = count, height = optimal_height(count), "balanced tree");
        if CHECK_INVARIANTS {
            assert_eq!(node::assert_sizes(&self.root), count);
            assert_eq!(node::height(&self.root), optimal_height(count));
        }
    }

    /// Threads the tree into its degenerate form: every node's left link is cleared and the right
    /// links run through the keys in ascending order. The result is still a valid tree, just one
    /// whose height equals its length. Mostly useful to see what [`balance`][Tree::balance]
    /// starts from.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    /// assert_eq!(tree.height(), 2);
    ///
    /// tree.linearize();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn linearize(&mut self) {
        let mut count = 0;
        let mut list = None;
        linearize(self.root.take(), &mut list, &mut count);
        self.root = list;

        debug!(len = count, "linearized tree");
        if CHECK_INVARIANTS {
            assert_eq!(self.len(), count);
        }
    }
}

/// The smallest height any tree of `count` nodes can have, `⌈log2(count + 1)⌉`, which is the
/// number of bits needed to write `count`.
fn optimal_height(count: usize) -> usize {
    (usize::BITS - count.leading_zeros()) as usize
}

/// Prepends the nodes of `tree` onto `list` in ascending order. The right subtree goes first so
/// the list is built from its largest key down. `count` is bumped once per node and each node's
/// size is set to the length of the list starting at it.
fn linearize<T>(tree: Link<T>, list: &mut Link<T>, count: &mut usize) {
    let Some(mut node) = tree else {
        return;
    };
    linearize(node.right.take(), list, count);

    let left = node.left.take();
    *count += 1;
    node.size = *count;
    node.right = list.take();
    *list = Some(node);

    linearize(left, list, count);
}

/// Builds a tree out of the first `count` nodes of `list`, advancing `list` past them. The left
/// subtree gets `(count - 1) / 2` nodes and the right gets the rest, so the left side is never
/// the larger one.
///
/// # Panics
///
/// If `list` holds fewer than `count` nodes.
fn arborize<T>(list: &mut Link<T>, count: usize) -> Link<T> {
    if count == 0 {
        return None;
    }
    let left_count = (count - 1) / 2;
    let right_count = count - left_count - 1;

    let left = arborize(list, left_count);
    let mut root = list
        .take()
        .expect("list is shorter than the count it was arborized with");
    *list = root.right.take();
    root.left = left;
    root.right = arborize(list, right_count);
    root.fix_size();

    Some(root)
}
