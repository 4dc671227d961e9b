//! Renders a tree sideways: the root sits on the left edge, right subtrees are drawn above their
//! parent and left subtrees below it.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! let tree = Tree::from_keys([1, 2, 3, 4]);
//!
//! let expected = "\
//! │   ┌── 4
//! └── 3
//!     └── 2
//!         └── 1
//! ";
//! assert_eq!(tree.to_string(), expected);
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `is_left` says which side of its parent `node` hangs off,
/// which decides the branch glyph and where the continuation bars go.
fn write_node<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let bar = if is_left { "│   " } else { "    " };
        write_node(f, right, &format!("{}{}", prefix, bar), false)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{}{}{}", prefix, branch, node.key())?;

    if let Some(left) = node.left() {
        let bar = if is_left { "    " } else { "│   " };
        write_node(f, left, &format!("{}{}", prefix, bar), true)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(Tree::<i32>::new().to_string(), "");
    }

    #[test]
    fn full_tree() {
        let tree = Tree::from_keys(1..=7);

        let expected = "\
│       ┌── 7
│   ┌── 6
│   │   └── 5
└── 4
    │   ┌── 3
    └── 2
        └── 1
";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn floats_render_plainly() {
        let tree = Tree::try_from_floats([0.5, 1.5]).unwrap();

        assert_eq!(tree.to_string(), "└── 1.5\n    └── 0.5\n");
    }
}
