//! Linear congruential generator.
//!
//! `x₁ = (a·x₀ + c) mod m` with `a = 214013`, `c = 2531011`, `m = 2^32`.
//! The generator's output is its raw post-update state.
//!
//! Not suitable for anything security related. The type plugs into the `rand`
//! ecosystem through `RngCore`/`SeedableRng` so callers can use `Rng` helpers
//! such as `gen_range` on top of the fixed sequence.

use rand::{Error as RandError, RngCore, SeedableRng};
use tracing::debug;

use crate::math::MAX_UINT32;

/// Multiplier `a`.
pub const MULTIPLIER: u64 = 214_013;
/// Increment `c`.
pub const INCREMENT: u64 = 2_531_011;
/// Modulus `m` (2^32).
pub const MODULUS: u64 = MAX_UINT32;

/// Deterministic pseudo-random sequence seeded once at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcgRandom {
    seed: u64,
}

impl LcgRandom {
    pub fn new(seed: u64) -> Self {
        debug!(seed, "lcg seeded");
        Self { seed }
    }

    /// Current state; equals the last value returned by [`LcgRandom::random`].
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance the state and return it. Always `< 2^32`.
    #[inline]
    pub fn random(&mut self) -> u64 {
        // a·seed reaches ~9e14 for in-range seeds and overflows u64 for large
        // initial seeds, so the product is formed in u128.
        let next = (MULTIPLIER as u128 * self.seed as u128 + INCREMENT as u128) % MODULUS as u128;
        self.seed = next as u64;
        self.seed
    }

    /// Next draw scaled into `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.random() as f64 / MODULUS as f64
    }
}

/// Endless stream of raw draws.
impl Iterator for LcgRandom {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.random())
    }
}

impl RngCore for LcgRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.random() as u32
    }

    /// Two consecutive draws, first one in the low half.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for LcgRandom {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Uses `state` verbatim as the seed, so `seed_from_u64(s)` and `new(s)`
    /// produce the same sequence.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
