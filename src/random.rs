//! Random keys for seeding a tree.
//!
//! # Examples
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use rebalance_bst::{RandomKeys, Tree};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let keys = RandomKeys::default().generate(&mut rng);
//! assert_eq!(keys.len(), 20);
//!
//! // Duplicates are dropped on construction so the tree may hold fewer keys.
//! let tree = Tree::from_keys(keys);
//! assert!(tree.len() <= 20);
//! ```

use std::ops::RangeInclusive;

use rand::Rng;

/// How many keys to draw and which values they are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomKeys {
    /// The number of keys to generate. Duplicates count towards this.
    pub count: usize,
    /// The inclusive bounds every key falls within.
    pub range: RangeInclusive<i64>,
}

impl Default for RandomKeys {
    fn default() -> Self {
        Self {
            count: 20,
            range: 1..=100,
        }
    }
}

impl RandomKeys {
    /// Draws `count` uniformly distributed keys from `range`.
    ///
    /// # Panics
    ///
    /// If `range` is empty.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        (0..self.count)
            .map(|_| rng.gen_range(self.range.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn keys_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let keygen = RandomKeys {
            count: 1_000,
            range: 100..=1_099,
        };

        let keys = keygen.generate(&mut rng);

        assert_eq!(keys.len(), 1_000);
        assert!(keys.iter().all(|k| keygen.range.contains(k)));
    }

    #[test]
    fn same_seed_same_keys() {
        let keygen = RandomKeys::default();

        let a = keygen.generate(&mut StdRng::seed_from_u64(42));
        let b = keygen.generate(&mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn zero_keys() {
        let keygen = RandomKeys {
            count: 0,
            ..RandomKeys::default()
        };

        assert!(keygen.generate(&mut StdRng::seed_from_u64(1)).is_empty());
    }
}
