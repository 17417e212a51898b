//! An ordered set whose nodes remember the size of their subtrees. Besides the usual search,
//! insertion, and deletion, this supports asking for a key's position in sorted order
//! ([`rank`][Tree::rank]), asking for the key at a position ([`select`][Tree::select]), and
//! rebuilding the whole tree into a perfectly balanced shape in linear time
//! ([`balance`][Tree::balance]).
//!
//! The tree never rebalances on its own. Inserting keys in sorted order produces a chain whose
//! operations are `O(N)` until [`balance`][Tree::balance] is called.
//!
//! # Examples
//!
//! ```
//! use ranked_bst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.min(), Err(TreeError::Empty));
//!
//! assert!(tree.insert(3));
//! assert!(tree.insert(1));
//! assert!(tree.insert(2));
//!
//! // Keys are unique so inserting again does nothing.
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//!
//! assert_eq!(tree.rank(&3), Some(2));
//! assert_eq!(tree.select(0), Ok(&1));
//!
//! assert!(tree.delete(&1));
//! assert_eq!(tree.min(), Ok(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::node::{self, Link, Node};

mod iter;
mod order_statistic;
mod rebalance;
mod traverse;

pub use iter::Iter;

/// Whether mutations re-verify subtree sizes before returning.
pub(crate) const CHECK_INVARIANTS: bool =
    cfg!(any(debug_assertions, feature = "check-invariants"));

/// A Binary Search Tree holding unique keys, each node annotated with the size of its subtree.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Dropping a `Box<Node>` with children recurses once per level, which can overflow the
        // stack on a degenerate tree. Detach every node first so each one drops childless.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

/// Two trees are equal when they hold the same keys, whatever their shapes.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The number of keys in the tree. This is read from the root so it is `O(1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert("a");
    /// tree.insert("b");
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        node::size(&self.root)
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree, from the root down to its deepest leaf. An empty tree has
    /// a height of 0 and a single key has a height of 1. This walks every node.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Exchanges the contents of this tree with `other` without touching any nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut left: Tree<_> = [1, 2].iter().copied().collect();
    /// let mut right = Tree::new();
    ///
    /// left.swap(&mut right);
    /// assert!(left.is_empty());
    /// assert_eq!(right.len(), 2);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.root, &mut other.root);
    }

    /// The smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), Err(TreeError::Empty));
    ///
    /// tree.insert(5);
    /// tree.insert(2);
    /// assert_eq!(tree.min(), Ok(&2));
    /// ```
    pub fn min(&self) -> Result<&T> {
        let Some(mut node) = self.root.as_deref() else {
            debug!("min requested from an empty tree");
            return Err(TreeError::Empty);
        };
        while let Some(left) = node.left() {
            node = left;
        }

        Ok(&node.key)
    }

    /// Removes the smallest key from the tree and returns it.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no keys. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].iter().copied().collect();
    ///
    /// assert_eq!(tree.delete_min(), Ok(3));
    /// assert_eq!(tree.min(), Ok(&5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete_min(&mut self) -> Result<T> {
        let Some(root) = self.root.take() else {
            debug!("delete_min called on an empty tree");
            return Err(TreeError::Empty);
        };
        let (min, rest) = split_min(root);
        self.root = rest;
        self.check_root();

        let Node { key, .. } = *min;
        Ok(key)
    }

    /// Verifies the root's size against its children. Each mutation keeps sizes correct along
    /// the path it touched, so a stale root means a path was missed.
    fn check_root(&self) {
        if !CHECK_INVARIANTS {
            return;
        }
        if let Some(root) = &self.root {
            assert_eq!(
                root.size,
                1 + node::size(&root.left) + node::size(&root.right),
                "root size out of date"
            );
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `key` into the tree. Returns whether it was inserted, which is `false` when the
    /// key was already present. In that case the tree is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = insert_into(&mut self.root, key);
        if !inserted {
            trace!("key already present, nothing inserted");
        }
        self.check_root();

        inserted
    }

    /// Whether `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Deletes `key` from the tree. Returns whether it was present; when it wasn't, nothing about
    /// the tree changes.
    ///
    /// A node with two children is replaced by the smallest node of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Deletes `key` from the tree like [`delete`][Tree::delete] but hands back the stored key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("kept"));
    ///
    /// assert_eq!(tree.take(&String::from("kept")), Some(String::from("kept")));
    /// assert_eq!(tree.take(&String::from("kept")), None);
    /// ```
    pub fn take(&mut self, key: &T) -> Option<T> {
        let Some(removed) = remove_from(&mut self.root, key) else {
            trace!("key not present, nothing deleted");
            return None;
        };
        self.check_root();

        let Node { key, .. } = *removed;
        Some(key)
    }
}

/// Inserts `key` below `link`, growing every size on the way down once the insertion is known to
/// have happened.
fn insert_into<T>(link: &mut Link<T>, key: T) -> bool
where
    T: Ord,
{
    match link {
        None => {
            *link = Some(Node::new_boxed(key));
            true
        }
        Some(node) => {
            let inserted = match key.cmp(&node.key) {
                Ordering::Less => insert_into(&mut node.left, key),
                Ordering::Equal => false,
                Ordering::Greater => insert_into(&mut node.right, key),
            };
            if inserted {
                node.size += 1;
            }
            inserted
        }
    }
}

/// Detaches the node holding `key` from below `link` and returns it childless. Sizes along the
/// path only shrink once the key has been found.
fn remove_from<T>(link: &mut Link<T>, key: &T) -> Option<Box<Node<T>>>
where
    T: Ord,
{
    let node = link.as_mut()?;
    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove_from(&mut node.left, key),
        Ordering::Equal => return splice_out(link),
        Ordering::Greater => remove_from(&mut node.right, key),
    };
    if removed.is_some() {
        node.size -= 1;
    }

    removed
}

/// Replaces the node at `link` with its only child, or with nothing if it is a leaf. A node with
/// two children is instead replaced by its successor, the minimum of its right subtree, which takes
/// over both children (Hibbard deletion). The removed node is returned childless.
fn splice_out<T>(link: &mut Link<T>) -> Option<Box<Node<T>>> {
    let mut node = link.take()?;
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        // The child's subtree is unchanged so its size already holds.
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let (mut successor, rest) = split_min(right);
            successor.left = Some(left);
            successor.right = rest;
            successor.size = node.size - 1;
            Some(successor)
        }
    };
    node.size = 1;

    Some(node)
}

/// Splits the leftmost node off of the subtree rooted at `node`. Returns that node, childless,
/// along with what remains of the subtree.
fn split_min<T>(mut node: Box<Node<T>>) -> (Box<Node<T>>, Link<T>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            node.size = 1;
            (node, rest)
        }
        Some(left) => {
            let (min, rest) = split_min(left);
            node.left = rest;
            node.size -= 1;
            (min, Some(node))
        }
    }
}
