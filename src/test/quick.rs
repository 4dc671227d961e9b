use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Delete the K from the tree
    Delete(K),
    /// Rebuild the tree
    Rebalance,
    /// Compare in-order keys
    Check,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Mutations are weighted so trees
    /// actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).copied() {
            Some(0) => Op::Insert(K::arbitrary(g)),
            Some(1) => Op::Delete(K::arbitrary(g)),
            Some(2) => Op::Rebalance,
            _ => Op::Check,
        }
    }
}
