use rebalance_bst::{Node, Order, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebuilds we have the same set of keys in the tree.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Whether every key in each node's left subtree is smaller and every key in its right subtree
/// is larger.
fn is_bst<K: Ord>(node: Option<&Node<K>>, lower: Option<&K>, upper: Option<&K>) -> bool {
    let Some(node) = node else {
        return true;
    };
    lower.map_or(true, |lower| lower < node.key())
        && upper.map_or(true, |upper| node.key() < upper)
        && is_bst(node.left(), lower, Some(node.key()))
        && is_bst(node.right(), Some(node.key()), upper)
}

fn tree_from_inserts(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        is_bst(tree.root(), None, None)
            && tree.keys_in_order() == set.into_iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = tree_from_inserts(&xs);

        xs.iter().all(|x| tree.find(x).map(|n| n.key()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = Tree::from_keys(xs.iter().copied());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = tree_from_inserts(&xs);
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        // Each key is only in the tree once no matter how many times it was inserted.
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
            && is_bst(tree.root(), None, None)
    }
}

quickcheck::quickcheck! {
    fn duplicate_inserts_change_nothing(xs: Vec<i8>) -> bool {
        let mut tree = tree_from_inserts(&xs);
        let before = tree.clone();
        for x in &xs {
            tree.insert(*x);
        }

        tree == before
    }
}

quickcheck::quickcheck! {
    fn in_order_round_trip(xs: Vec<i8>) -> bool {
        let tree = tree_from_inserts(&xs);
        let rebuilt = Tree::from_sorted(tree.keys_in_order());

        match rebuilt {
            Ok(rebuilt) => {
                rebuilt.keys_in_order() == tree.keys_in_order()
                    && is_bst(rebuilt.root(), None, None)
                    && rebuilt.height() <= tree.height()
            }
            Err(_) => false,
        }
    }
}

quickcheck::quickcheck! {
    fn traversals_agree_on_keys(xs: Vec<i8>) -> bool {
        let tree = tree_from_inserts(&xs);
        let in_order = tree.keys_in_order();

        [Order::PreOrder, Order::PostOrder, Order::LevelOrder]
            .into_iter()
            .all(|order| {
                let mut keys = tree.keys(order);
                keys.sort_unstable();
                keys == in_order
            })
    }
}

quickcheck::quickcheck! {
    fn rebalance_is_balanced_everywhere(xs: Vec<i8>) -> bool {
        let mut tree = tree_from_inserts(&xs);
        tree.rebalance();

        tree.is_height_balanced() && tree.is_balanced() != Some(false)
    }
}
