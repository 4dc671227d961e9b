//! A plain, owning BST that never rebalances itself. Inserting and deleting keys only ever
//! touches the search path, so the tree's shape depends on the order keys arrive in. Balance is
//! restored on demand by [`Tree::rebalance`], which flattens the tree and rebuilds it.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! // Construction sorts and deduplicates its input before building.
//! let mut tree = Tree::from_keys([5, 3, 8, 3, 1]);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(5));
//! assert!(tree.find(&3).is_some());
//!
//! // Deleting a missing key is a no-op.
//! assert!(!tree.delete(&42));
//!
//! assert!(tree.delete(&5));
//! assert!(tree.find(&5).is_none());
//! assert_eq!(tree.keys_in_order(), vec![1, 3, 8]);
//!
//! // Ascending inserts degrade the tree into a chain...
//! for key in 9..20 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.is_balanced(), Some(false));
//!
//! // ...until it is rebuilt.
//! tree.rebalance();
//! assert_eq!(tree.is_balanced(), Some(true));
//! assert_eq!(tree.height(), 4);
//! ```

use std::cmp::Ordering;

use log::{debug, trace};
use ordered_float::NotNan;

use crate::error::TreeError;
use crate::util::{self, DeleteResult};

/// An owned, possibly absent, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree over unique keys. This can be used for inserting, finding, and deleting
/// keys, walking them in the usual orders, and measuring the shape of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Nodes are unlinked onto a stack so a degenerate chain doesn't drop recursively.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root of the tree, if it has any nodes.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Checks whether the root's two subtrees differ in height by at most one. See
    /// [`Node::is_balanced`] for why this is a shallow check.
    ///
    /// Returns `None` for an empty tree since there is no root to measure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// assert_eq!(Tree::<i32>::new().is_balanced(), None);
    ///
    /// let mut tree = Tree::from_keys([2, 1, 3]);
    /// assert_eq!(tree.is_balanced(), Some(true));
    ///
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert_eq!(tree.is_balanced(), Some(false));
    /// ```
    pub fn is_balanced(&self) -> Option<bool> {
        self.root().map(Node::is_balanced)
    }

    /// Checks that *every* node's subtrees differ in height by at most one. Unlike
    /// [`Tree::is_balanced`] this inspects the whole tree. An empty tree is balanced.
    pub fn is_height_balanced(&self) -> bool {
        Node::balanced_height(self.root()).is_some()
    }
}

impl<K: Ord> Tree<K> {
    /// Builds a tree of minimal height from arbitrary keys. The keys are sorted and deduplicated
    /// first, so their order doesn't matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys([5, 3, 8, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.keys_in_order(), vec![1, 3, 5, 8]);
    /// ```
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let raw = keys.into_iter().collect::<Vec<_>>();
        let raw_len = raw.len();
        let keys = util::sort_unique(raw);
        debug!("building tree from {} keys ({} unique)", raw_len, keys.len());

        Self::build(keys)
    }

    /// Builds a tree of minimal height from keys that are already strictly ascending.
    ///
    /// # Errors
    ///
    /// [`TreeError::Unsorted`] if some key is not greater than the one before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::from_sorted(vec![1, 3, 5, 8]).unwrap();
    /// assert_eq!(tree.height(), 3);
    ///
    /// assert_eq!(
    ///     Tree::from_sorted(vec![1, 3, 3]),
    ///     Err(TreeError::Unsorted { index: 2 })
    /// );
    /// ```
    pub fn from_sorted(keys: Vec<K>) -> Result<Self, TreeError> {
        if let Some(index) = util::first_unordered(&keys) {
            debug!("rejected unsorted keys at index {}", index);
            return Err(TreeError::Unsorted { index });
        }

        Ok(Self::build(keys))
    }

    fn build(keys: Vec<K>) -> Self {
        let len = keys.len();
        Self {
            root: Node::build(len, &mut keys.into_iter()),
        }
    }

    /// Potentially finds the node holding the given key. If no node has the key, `None` is
    /// returned. The returned node gives access to the subtree below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys([1, 2, 3]);
    ///
    /// let two = tree.find(&2).unwrap();
    /// assert_eq!(two.left().map(|n| *n.key()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether the tree holds the given key.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts the key as a new leaf. Inserting a key that's already present leaves the tree
    /// untouched. Returns whether a node was added.
    ///
    /// The tree isn't rebalanced afterwards.
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(key),
            None => {
                self.root = Some(Node::new_boxed(key));
                true
            }
        };

        if !inserted {
            trace!("insert: key already present, ignoring");
        }
        inserted
    }

    /// Deletes the node holding the given key. If the tree does not contain the key, nothing
    /// happens. Returns whether a key was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys([1, 2, 3]);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.keys_in_order(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        let deleted = Node::delete_from(&mut self.root, key);
        if deleted {
            trace!("delete: key removed");
        } else {
            trace!("delete: key not found");
        }
        deleted
    }

    /// The number of edges between the root and the node holding `node`'s key, found by
    /// searching from the root. `None` if the tree is empty or the key isn't on its search path.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys([1, 2, 3, 4]);
    /// let one = tree.find(&1).unwrap();
    ///
    /// assert_eq!(tree.depth(one), Some(2));
    /// assert_eq!(tree.depth(tree.root().unwrap()), Some(0));
    /// ```
    pub fn depth(&self, node: &Node<K>) -> Option<usize> {
        self.root()?.depth_of(node.key())
    }

    /// Rebuilds the tree from its in-order keys so it has the minimal height for the number of
    /// keys it holds. This is a full `O(N)` reconstruction.
    pub fn rebalance(&mut self) {
        let old_height = self.height();
        let keys = Node::into_sorted_keys(self.root.take());
        let len = keys.len();
        self.root = Node::build(len, &mut keys.into_iter());

        debug!(
            "rebalanced {} keys: height {} -> {}",
            len,
            old_height,
            self.height()
        );
    }
}

impl Tree<NotNan<f64>> {
    /// Builds a tree of minimal height from floating point keys. See [`Tree::from_keys`].
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidKey`] for the first `NaN` since it can't be ordered.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::try_from_floats([2.5, -1.0, 2.5]).unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// assert_eq!(
    ///     Tree::try_from_floats([1.0, f64::NAN]),
    ///     Err(TreeError::InvalidKey { index: 1 })
    /// );
    /// ```
    pub fn try_from_floats<I: IntoIterator<Item = f64>>(keys: I) -> Result<Self, TreeError> {
        let keys = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| {
                NotNan::new(key).map_err(|_| {
                    debug!("rejected NaN key at index {}", index);
                    TreeError::InvalidKey { index }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_keys(keys))
    }
}

/// A `Node` holds a key used for searching/sorting and up to two children. A `Node` with no
/// children is a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, holding smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Counts the nodes in the subtree rooted at this node.
    pub fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }

    /// How many levels are in the subtree rooted at this node. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    /// Checks whether this node's two subtrees differ in height by at most one.
    ///
    /// **Note** This is shallow: only the heights directly below this node are compared. A node
    /// can pass while a subtree further down is badly lopsided. Use
    /// [`Tree::is_height_balanced`] to check every node.
    pub fn is_balanced(&self) -> bool {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.abs_diff(right_height) <= 1
    }

    /// The height of the subtree if every node in it is balanced, otherwise `None`.
    fn balanced_height(node: Option<&Self>) -> Option<usize> {
        let Some(node) = node else {
            return Some(0);
        };
        let left_height = Self::balanced_height(node.left())?;
        let right_height = Self::balanced_height(node.right())?;

        (left_height.abs_diff(right_height) <= 1).then(|| left_height.max(right_height) + 1)
    }

    /// Builds a subtree of minimal height from the next `len` keys of an ascending iterator.
    ///
    /// The root takes the key at index `len / 2`: the left subtree is built from the keys before
    /// it and the right subtree from the keys after it. Building the left subtree first means
    /// the keys are consumed in order, so this is a single pass with no cloning.
    fn build<I: Iterator<Item = K>>(len: usize, keys: &mut I) -> Link<K> {
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        let left = Self::build(mid, keys);
        let key = keys.next()?;
        let right = Self::build(len - mid - 1, keys);

        Some(Box::new(Node { key, left, right }))
    }

    /// Consumes a subtree, returning its keys in order.
    fn into_sorted_keys(link: Link<K>) -> Vec<K> {
        let mut keys = Vec::new();
        let mut stack = Vec::new();
        let mut current = link;

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { key, right, .. } = *node;
            keys.push(key);
            current = right;
        }

        keys
    }
}

impl<K: Ord> Node<K> {
    /// Searches this subtree for the node holding `key`.
    pub fn find(&self, key: &K) -> Option<&Self> {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    /// The number of edges from this node down to the node holding `key`, descending by
    /// comparison. `None` if the search runs off the bottom of the subtree.
    pub fn depth_of(&self, key: &K) -> Option<usize> {
        let mut current = self;
        let mut depth = 0;
        loop {
            current = match key.cmp(&current.key) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return Some(depth),
                Ordering::Greater => current.right()?,
            };
            depth += 1;
        }
    }

    fn insert(&mut self, key: K) -> bool {
        let inserted = match key.cmp(&self.key) {
            Ordering::Less => match self.left.as_mut() {
                Some(left) => left.insert(key),
                None => {
                    self.left = Some(Self::new_boxed(key));
                    true
                }
            },
            Ordering::Equal => false,
            Ordering::Greater => match self.right.as_mut() {
                Some(right) => right.insert(key),
                None => {
                    self.right = Some(Self::new_boxed(key));
                    true
                }
            },
        };

        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
        inserted
    }

    /// Deletes `key` from the subtree hanging off `link`, splicing the link if the subtree's
    /// root is the node being removed.
    fn delete_from(link: &mut Link<K>, key: &K) -> bool {
        match link.as_mut().map(|node| node.delete(key)) {
            None | Some(DeleteResult::NotFound) => false,
            Some(DeleteResult::Deleted) => true,
            Some(DeleteResult::Splice(child)) => {
                *link = child;
                true
            }
        }
    }

    /// Deletes the node with the given `key` from this subtree. See the documentation on
    /// [`DeleteResult`] to see what the various return values mean.
    fn delete(&mut self, key: &K) -> DeleteResult<K> {
        let deleted = match key.cmp(&self.key) {
            Ordering::Less => Self::delete_from(&mut self.left, key),
            Ordering::Greater => Self::delete_from(&mut self.right, key),
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                // Our parent replaces us with our only child, or nothing.
                (None, child) | (child, None) => return DeleteResult::Splice(child),

                // With two children we promote our in-order successor. That is, the smallest
                // node in our right subtree. It has no left child so unlinking it is a splice.
                (Some(left), Some(right)) => {
                    self.left = Some(left);
                    self.right = Some(right);
                    if let Some(successor) = Self::take_smallest(&mut self.right) {
                        self.key = successor;
                    }
                    true
                }
            },
        };

        if deleted {
            DeleteResult::Deleted
        } else {
            DeleteResult::NotFound
        }
    }

    /// Unlinks the leftmost node of the subtree hanging off `link`, replacing it with its right
    /// child, and returns its key.
    fn take_smallest(link: &mut Link<K>) -> Option<K> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::take_smallest(&mut node.left);
        }

        let node = link.take()?;
        let Node { key, right, .. } = *node;
        *link = right;
        Some(key)
    }
}
