//! This crate exposes a Binary Search Tree (BST) that is allowed to drift out of balance and is
//! put back into shape by an explicit rebuild.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Built from sorted keys by repeatedly picking the
//! middle key as the root, the height of a BST is the minimal `⌈lg (N + 1)⌉`.
//!
//! ## Rebalancing
//!
//! [`Tree`] doesn't rotate nodes on insert or delete the way an AVL or red-black tree does, so
//! inserting keys in ascending order degrades it into a linked list. [`Tree::rebalance`]
//! flattens the keys with an in-order traversal and rebuilds a tree of minimal height from them.
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! let mut tree = Tree::from_keys([20, 10, 30]);
//! for key in 31..40 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 11);
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod pretty;
pub mod random;
pub mod traversal;
pub mod tree;
mod util;

#[cfg(test)]
mod test;

pub use error::TreeError;
pub use random::RandomKeys;
pub use traversal::Order;
pub use tree::{Node, Tree};
