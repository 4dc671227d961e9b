//! The four classic ways of walking a tree. Every walk visits each node exactly once and collects
//! the result eagerly, so the returned `Vec` is a snapshot that doesn't borrow the tree mutably.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::{Order, Tree};
//!
//! //       4
//! //     /   \
//! //    2     6
//! //   / \   / \
//! //  1   3 5   7
//! let tree = Tree::from_keys(1..=7);
//!
//! assert_eq!(tree.keys(Order::InOrder), vec![1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.keys(Order::PreOrder), vec![4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(tree.keys(Order::PostOrder), vec![1, 3, 2, 5, 7, 6, 4]);
//! assert_eq!(tree.keys(Order::LevelOrder), vec![4, 2, 6, 1, 3, 5, 7]);
//! ```

use std::collections::VecDeque;

use crate::tree::{Node, Tree};

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Breadth first: the root, then every node one level down from left to right, and so on.
    LevelOrder,
}

impl<K> Tree<K> {
    /// Collects every node in the given order.
    pub fn traverse(&self, order: Order) -> Vec<&Node<K>> {
        let Some(root) = self.root() else {
            return Vec::new();
        };

        let mut nodes = Vec::new();
        match order {
            Order::InOrder => root.collect_in_order(&mut nodes),
            Order::PreOrder => root.collect_pre_order(&mut nodes),
            Order::PostOrder => root.collect_post_order(&mut nodes),
            Order::LevelOrder => root.collect_level_order(&mut nodes),
        }
        nodes
    }

    /// Every node, smallest key first.
    pub fn in_order(&self) -> Vec<&Node<K>> {
        self.traverse(Order::InOrder)
    }

    /// Every node, each before its subtrees.
    pub fn pre_order(&self) -> Vec<&Node<K>> {
        self.traverse(Order::PreOrder)
    }

    /// Every node, each after its subtrees.
    pub fn post_order(&self) -> Vec<&Node<K>> {
        self.traverse(Order::PostOrder)
    }

    /// Every node, level by level from the root.
    pub fn level_order(&self) -> Vec<&Node<K>> {
        self.traverse(Order::LevelOrder)
    }

    /// Copies out every key in the given order.
    pub fn keys(&self, order: Order) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(order)
            .into_iter()
            .map(|node| node.key().clone())
            .collect()
    }

    /// Copies out every key in ascending order.
    pub fn keys_in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys(Order::InOrder)
    }
}

impl<K> Node<K> {
    fn collect_in_order<'a>(&'a self, nodes: &mut Vec<&'a Self>) {
        if let Some(left) = self.left() {
            left.collect_in_order(nodes);
        }
        nodes.push(self);
        if let Some(right) = self.right() {
            right.collect_in_order(nodes);
        }
    }

    fn collect_pre_order<'a>(&'a self, nodes: &mut Vec<&'a Self>) {
        nodes.push(self);
        if let Some(left) = self.left() {
            left.collect_pre_order(nodes);
        }
        if let Some(right) = self.right() {
            right.collect_pre_order(nodes);
        }
    }

    fn collect_post_order<'a>(&'a self, nodes: &mut Vec<&'a Self>) {
        if let Some(left) = self.left() {
            left.collect_post_order(nodes);
        }
        if let Some(right) = self.right() {
            right.collect_post_order(nodes);
        }
        nodes.push(self);
    }

    // Recursion alone can't interleave siblings' subtrees, so this needs a FIFO queue.
    fn collect_level_order<'a>(&'a self, nodes: &mut Vec<&'a Self>) {
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            nodes.push(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }
}
