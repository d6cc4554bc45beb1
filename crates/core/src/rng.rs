//! RNG module - seeded shuffling for the tile deck
//!
//! The deck is shuffled with Fisher-Yates driven by a small deterministic
//! generator, so the same seed always produces the same game. The shuffle
//! function itself keeps no state; the generator state lives with the caller.

/// SplitMix64 generator
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next random u64
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..bound`
    ///
    /// Uses rejection sampling so small bounds carry no modulo bias.
    /// `bound` must be non-zero.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let v = self.next_u64();
            if v < zone {
                return v % bound;
            }
        }
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        shuffle(self, slice);
    }

    /// Current generator state (restarting from it replays the same sequence)
    pub fn seed(&self) -> u64 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Permute `items` in place, every ordering equally likely.
///
/// Walks from the last index down to 1, swapping each element with one picked
/// uniformly from `0..=i`.
pub fn shuffle<T>(rng: &mut SimpleRng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(9);
        for bound in 1..50u64 {
            for _ in 0..20 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_next_below_one_is_zero() {
        let mut rng = SimpleRng::new(3);
        assert_eq!(rng.next_below(1), 0);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = SimpleRng::new(42);
        let mut items: Vec<u32> = (0..98).collect();
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..98).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_handles_tiny_slices() {
        let mut rng = SimpleRng::new(1);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [7u8];
        rng.shuffle(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_shuffle_covers_all_orders_of_three() {
        // 3! = 6 orderings, each should show up at a similar rate.
        let mut rng = SimpleRng::new(2024);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..6000 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut rng, &mut items);
            *counts.entry(items).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (order, n) in counts {
            assert!((800..1200).contains(&n), "{:?} seen {} times", order, n);
        }
    }
}
