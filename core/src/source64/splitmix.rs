//! SplitMix64: a 64-bit Weyl sequence through a strong mixer.
//!
//! Period is exactly 2^64 with a single word of state, which makes it the
//! standard choice for turning one seed value into seed material for
//! larger generators.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::provider::{impl_provider64, BitCache64};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// SplitMix64 generator.
///
/// # Example
/// ```
/// use splitstream_core_rs::{SplitMix64, UniformRandomProvider};
///
/// let mut rng = SplitMix64::new(0);
/// assert_eq!(rng.next_u64(), 0xe220a8397b1dcdaf);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
    cache: BitCache64,
}

impl SplitMix64 {
    /// Create a new instance. Every seed value is valid.
    pub fn new(seed: u64) -> Self {
        SplitMix64 {
            state: seed,
            cache: BitCache64::new(),
        }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(seed::GOLDEN_RATIO_64);
        seed::stafford13(self.state)
    }
}

impl_provider64!(SplitMix64);

impl RestorableState for SplitMix64 {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(8 + BitCache64::STATE_BYTES);
        out.push_u64(self.state);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(8 + BitCache64::STATE_BYTES)?;
        self.state = reader.read_u64();
        self.cache.restore(&mut reader);
        Ok(())
    }
}
