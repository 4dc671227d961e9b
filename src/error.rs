//! Errors returned while constructing a [`Tree`][crate::Tree].
//!
//! Everything else on a tree is infallible: inserting a duplicate key, deleting or finding a
//! missing key, and querying an empty tree are all ordinary states with defined results.

/// Errors triggered when the input given to a tree constructor can't be built into a BST.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A key has no place in a total order (a floating point `NaN`).
    #[error("key at index {index} is not comparable")]
    InvalidKey {
        /// Position of the offending key in the input.
        index: usize,
    },
    /// A slice handed to [`Tree::from_sorted`][crate::Tree::from_sorted] is not strictly
    /// ascending.
    #[error("keys are not strictly ascending at index {index}")]
    Unsorted {
        /// Position of the first key that is not greater than the key before it.
        index: usize,
    },
}
