//! Uniform random choice over message pools.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index into a non-empty pool.
///
/// Swapped out in tests for a scripted source.
pub trait Chooser {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn choose(&mut self, len: usize) -> usize;
}

/// Pick one message from `pool`, or `None` if the pool is empty.
pub fn pick<'a>(chooser: &mut dyn Chooser, pool: &'a [String]) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    let index = chooser.choose(pool.len()).min(pool.len() - 1);
    Some(pool[index].as_str())
}

/// Uniform choice backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    /// Deterministic chooser for a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooser seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded if a seed is given, otherwise OS-seeded.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os, Self::seeded)
    }
}

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct SequenceChooser {
    indices: Vec<usize>,
    next: usize,
}

impl SequenceChooser {
    /// Create a chooser that returns `indices` in order.
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            next: 0,
        }
    }
}

impl Chooser for SequenceChooser {
    fn choose(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.next % self.indices.len()];
        self.next += 1;
        index % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<String> {
        vec!["one".into(), "two".into(), "three".into()]
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut chooser = SequenceChooser::default();
        assert_eq!(pick(&mut chooser, &[]), None);
    }

    #[test]
    fn sequence_chooser_cycles() {
        let pool = pool();
        let mut chooser = SequenceChooser::new(vec![2, 0]);
        assert_eq!(pick(&mut chooser, &pool), Some("three"));
        assert_eq!(pick(&mut chooser, &pool), Some("one"));
        assert_eq!(pick(&mut chooser, &pool), Some("three"));
    }

    #[test]
    fn sequence_chooser_wraps_large_indices() {
        let pool = pool();
        let mut chooser = SequenceChooser::new(vec![4]);
        assert_eq!(pick(&mut chooser, &pool), Some("two"));
    }

    #[test]
    fn seeded_chooser_is_reproducible() {
        let pool = pool();
        let mut a = RandomChooser::seeded(42);
        let mut b = RandomChooser::seeded(42);
        for _ in 0..20 {
            assert_eq!(pick(&mut a, &pool), pick(&mut b, &pool));
        }
    }

    #[test]
    fn random_chooser_covers_pool() {
        let pool = pool();
        let mut chooser = RandomChooser::seeded(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick(&mut chooser, &pool).unwrap());
        }
        assert_eq!(seen.len(), pool.len());
    }
}
