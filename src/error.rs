//! Errors reported by [`Tree`][crate::Tree] queries that have no answer for the current contents.

use thiserror::Error;

/// The ways a query on a [`Tree`][crate::Tree] can fail. Every variant is recoverable and the
/// tree is left untouched when one is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs at least one key but the tree is empty.
    #[error("the tree is empty")]
    Empty,
    /// A positional lookup asked for a position at or past the number of keys.
    #[error("position {index} is out of range for a tree holding {len} keys")]
    OutOfRange {
        /// The requested zero-based position.
        index: usize,
        /// How many keys the tree held.
        len: usize,
    },
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
