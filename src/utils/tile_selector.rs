//! Random tile selection for blink pulses.
//!
//! Selection only needs to look random, not be unpredictable, so the
//! selector wraps a seedable `StdRng` that tests can replay.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source of tile indices.
#[derive(Debug, Clone)]
pub struct TileSelector {
    rng: StdRng,
}

impl Default for TileSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl TileSelector {
    /// Deterministic selector for replays and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Selector seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uses `seed` when given, OS entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Picks a tile index in `[0, tile_count)` that differs from `excluding`.
    ///
    /// Boards with zero or one tile always get index 0. Uses rejection
    /// sampling: on small boards the expected number of redraws is below two.
    pub fn select(&mut self, tile_count: usize, excluding: Option<usize>) -> usize {
        if tile_count <= 1 {
            return 0;
        }

        loop {
            let index = self.rng.gen_range(0..tile_count);
            if Some(index) != excluding {
                return index;
            }
        }
    }

    /// Picks up to `count` distinct indices, preferring ones not in `exclude`.
    ///
    /// If fewer than `count` indices remain outside `exclude`, the whole
    /// range is used instead. Order of the result is random.
    pub fn select_batch(
        &mut self,
        tile_count: usize,
        count: usize,
        exclude: &HashSet<usize>,
    ) -> Vec<usize> {
        let mut candidates: Vec<usize> = (0..tile_count).filter(|i| !exclude.contains(i)).collect();
        if candidates.len() < count {
            candidates = (0..tile_count).collect();
        }

        let amount = count.min(candidates.len());
        rand::seq::index::sample(&mut self.rng, candidates.len(), amount)
            .iter()
            .map(|i| candidates[i])
            .collect()
    }

    /// Uniform integer in `[min, max]`.
    pub fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniform float in `[min, max]`.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_tile_always_zero() {
        let mut selector = TileSelector::from_seed(7);
        for _ in 0..100 {
            assert_eq!(selector.select(1, None), 0);
            assert_eq!(selector.select(1, Some(0)), 0);
        }
    }

    #[test]
    fn test_never_repeats_previous() {
        let mut selector = TileSelector::from_seed(42);
        let mut last = None;
        for _ in 0..10_000 {
            let index = selector.select(5, last);
            assert!(index < 5);
            assert_ne!(Some(index), last);
            last = Some(index);
        }
    }

    #[test]
    fn test_two_tiles_alternate() {
        let mut selector = TileSelector::from_seed(3);
        let mut last = selector.select(2, None);
        for _ in 0..100 {
            let next = selector.select(2, Some(last));
            assert_eq!(next, 1 - last);
            last = next;
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TileSelector::from_seed(99);
        let mut b = TileSelector::from_seed(99);
        let seq_a: Vec<usize> = (0..50).map(|_| a.select(8, None)).collect();
        let seq_b: Vec<usize> = (0..50).map(|_| b.select(8, None)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_batch_uses_complement() {
        let mut selector = TileSelector::from_seed(11);
        let exclude: HashSet<usize> = [1, 3].into_iter().collect();
        let mut picked = selector.select_batch(4, 2, &exclude);
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 2]);
    }

    #[test]
    fn test_batch_falls_back_to_full_range() {
        let mut selector = TileSelector::from_seed(5);
        let exclude: HashSet<usize> = [0, 1, 2].into_iter().collect();
        let picked = selector.select_batch(4, 2, &exclude);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
        assert!(picked.iter().all(|&i| i < 4));
    }

    #[test]
    fn test_batch_capped_by_tile_count() {
        let mut selector = TileSelector::from_seed(5);
        let mut picked = selector.select_batch(3, 10, &HashSet::new());
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2]);
        assert!(selector.select_batch(0, 2, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_ranges_degenerate() {
        let mut selector = TileSelector::from_seed(1);
        assert_eq!(selector.range_inclusive(2, 2), 2);
        assert_eq!(selector.range_inclusive(3, 1), 3);
        assert_eq!(selector.range_f32(0.2, 0.2), 0.2);
    }

    proptest! {
        #[test]
        fn select_stays_in_range(seed in any::<u64>(), count in 2usize..64, last in 0usize..64) {
            let mut selector = TileSelector::from_seed(seed);
            let excluding = Some(last % count);
            let index = selector.select(count, excluding);
            prop_assert!(index < count);
            prop_assert_ne!(Some(index), excluding);
        }

        #[test]
        fn batch_is_distinct(seed in any::<u64>(), count in 1usize..16, k in 0usize..20) {
            let mut selector = TileSelector::from_seed(seed);
            let picked = selector.select_batch(count, k, &HashSet::new());
            let unique: HashSet<usize> = picked.iter().copied().collect();
            prop_assert_eq!(unique.len(), picked.len());
            prop_assert_eq!(picked.len(), k.min(count));
        }
    }
}
