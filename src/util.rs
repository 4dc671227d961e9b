use crate::tree::Link;

/// What a `Node` reports back to its parent after being asked to delete a key from its subtree.
pub(crate) enum DeleteResult<K> {
    /// The key wasn't found so nothing was deleted.
    NotFound,
    /// The key was removed somewhere below (or promoted over) the node returning this. The
    /// parent's link is still valid.
    Deleted,
    /// The Node returning this held the key and had at most one child. Its parent must replace
    /// its link to this node with the given link, dropping this node.
    Splice(Link<K>),
}

/// Sorts `keys` ascending and removes duplicates so they can be fed to a midpoint build.
pub(crate) fn sort_unique<K: Ord>(mut keys: Vec<K>) -> Vec<K> {
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Returns the index of the first key that is not strictly greater than its predecessor.
pub(crate) fn first_unordered<K: Ord>(keys: &[K]) -> Option<usize> {
    keys.windows(2)
        .position(|pair| pair[0] >= pair[1])
        .map(|i| i + 1)
}
