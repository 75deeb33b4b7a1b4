//! SplitMix64: the seedable generator behind every oracle outcome.
//!
//! RULE: outcome sampling never touches a platform RNG. Each operation
//! builds its own `SplitMix64` from a derived [`Seed`] and drops it when
//! done, so instances are never shared between calls.

use rand::{RngCore, SeedableRng};

use crate::seed::{GOLDEN_GAMMA, Seed};

const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// 2^53, the number of evenly spaced values `next_unit` can return.
const UNIT_SCALE: f64 = (1u64 << 53) as f64;

/// A 64-bit SplitMix generator.
///
/// `Clone` forks the stream explicitly; there is no `Copy` so a stream is
/// never duplicated by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from a seed.
    pub fn new(seed: Seed) -> Self {
        Self::from_state(seed.value())
    }

    /// Create a generator whose internal state is exactly `state`.
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// The current internal state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance by the golden gamma and return the avalanche-mixed state.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }

    /// A uniform double in [0, 1) built from the top 53 bits.
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / UNIT_SCALE
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (SplitMix64::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        SplitMix64::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = SplitMix64::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_state(u64::from_le_bytes(seed))
    }

    // The default implementation scrambles the seed first; the oracle
    // needs the state to equal the seed.
    fn seed_from_u64(state: u64) -> Self {
        Self::from_state(state)
    }
}
