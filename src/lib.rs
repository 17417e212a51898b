//! An ordered set built on a Binary Search Tree whose nodes count their subtrees, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key and will sometimes have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! ## Order statistics
//!
//! Every `Node` here also records how many `Node`s live in the subtree rooted at it. That one
//! number per node is enough to answer "how many keys are smaller than this one?"
//! ([`rank`][Tree::rank]) and "which key has exactly `n` smaller keys?"
//! ([`select`][Tree::select]) in `O(height)`, by skipping whole left subtrees at a time.
//!
//! ## Balancing
//!
//! The tree doesn't rotate after each mutation the way an AVL or red-black tree does. Its height
//! depends on the order keys arrive in, and [`balance`][Tree::balance] rebuilds the whole tree to
//! minimal height in linear time by first threading the nodes into a sorted list and then
//! rebuilding a tree from the middle of that list outwards.
//!
//! # Examples
//!
//! ```
//! use ranked_bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=7).collect();
//!
//! // Sorted input gives a chain.
//! assert_eq!(tree.height(), 7);
//! assert_eq!(tree.rank(&4), Some(3));
//!
//! tree.balance();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.rank(&4), Some(3));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod node;
pub mod tree;

pub use error::{Result, TreeError};
pub use tree::{Iter, Tree};
