//! Rank and select. Both walk a single root-to-node path, using the subtree sizes to skip over
//! whole subtrees, so they cost `O(height)`.

use std::cmp::Ordering;

use tracing::debug;

use super::Tree;
use crate::error::{Result, TreeError};
use crate::node::Node;

impl<T> Tree<T>
where
    T: Ord,
{
    /// Returns the zero-based position of `key` in ascending order, or `None` if the tree
    /// doesn't hold `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 30].iter().copied().collect();
    ///
    /// assert_eq!(tree.rank(&10), Some(0));
    /// assert_eq!(tree.rank(&30), Some(2));
    /// assert_eq!(tree.rank(&15), None);
    /// ```
    pub fn rank(&self, key: &T) -> Option<usize> {
        rank_in(self.root.as_deref(), key)
    }
}

impl<T> Tree<T> {
    /// Returns the key at zero-based position `index` in ascending order.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`] if `index` is not below [`len`][Tree::len].
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::{Tree, TreeError};
    ///
    /// let tree: Tree<_> = [10, 20, 30].iter().copied().collect();
    ///
    /// assert_eq!(tree.select(1), Ok(&20));
    /// assert_eq!(tree.select(3), Err(TreeError::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn select(&self, index: usize) -> Result<&T> {
        let len = self.len();
        let out_of_range = TreeError::OutOfRange { index, len };
        if index >= len {
            debug!(index, len, "select past the end of the tree");
            return Err(out_of_range);
        }

        select_in(self.root.as_deref(), index).ok_or(out_of_range)
    }
}

fn rank_in<T>(node: Option<&Node<T>>, key: &T) -> Option<usize>
where
    T: Ord,
{
    let node = node?;
    match key.cmp(&node.key) {
        Ordering::Less => rank_in(node.left(), key),
        Ordering::Equal => Some(node.left_size()),
        // Everything on the left, and this node, comes before anything on the right.
        Ordering::Greater => rank_in(node.right(), key).map(|rank| rank + node.left_size() + 1),
    }
}

fn select_in<T>(node: Option<&Node<T>>, index: usize) -> Option<&T> {
    let node = node?;
    let left_size = node.left_size();
    match index.cmp(&left_size) {
        Ordering::Less => select_in(node.left(), index),
        Ordering::Equal => Some(&node.key),
        Ordering::Greater => select_in(node.right(), index - left_size - 1),
    }
}
