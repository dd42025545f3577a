//! Injectable randomness for the "pick one at random" operations.
//!
//! Sampling code takes a [`RandomSource`] instead of reaching for a global
//! generator, so tests can pin the outcome with a [`SeededRandom`].

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed 64-bit values.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..len`, `None` when `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = len as u64;
        // Reject the tail of the range so every index is equally likely.
        let zone = u64::MAX - (u64::MAX % len);
        loop {
            let value = self.next_u64();
            if value < zone {
                return Some((value % len) as usize);
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Pick one element of `items` uniformly.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    rng.pick_index(items.len()).map(|i| &items[i])
}

/// SplitMix64 generator: small, fast, and fully determined by its seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the wall clock, for interactive sessions without a fixed seed.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9e37_79b9_7f4a_7c15);
        Self::new(nanos ^ u64::from(std::process::id()).rotate_left(32))
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}
