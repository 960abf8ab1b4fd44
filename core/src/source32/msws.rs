//! Middle Square Weyl Sequence generator.
//!
//! John von Neumann's middle square method rescued by adding a Weyl
//! sequence to the square, which breaks the short cycles of the
//! original. The Weyl increment selects the stream and is held odd.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::provider::{impl_provider32, BitCache32};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// Middle Square Weyl Sequence generator.
///
/// The output quality is sensitive to the Weyl increment; increments
/// with roughly half the bits set and no long runs perform best. The
/// deterministic extension of short seeds produces adequate increments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddleSquareWeylSequence {
    /// Square sequence.
    x: u64,
    /// Weyl sequence.
    w: u64,
    /// Weyl increment, held odd.
    s: u64,
    cache: BitCache32,
}

impl MiddleSquareWeylSequence {
    /// Create from a 3 element seed: square state, Weyl state, Weyl
    /// increment. The increment's least significant bit is forced odd
    /// for a full period Weyl sequence. Shorter seeds are extended
    /// deterministically.
    pub fn from_seed(seed: &[u64]) -> Self {
        let s = seed::fill_state_u64::<3>(seed);
        MiddleSquareWeylSequence {
            x: s[0],
            w: s[1],
            s: s[2] | 1,
            cache: BitCache32::new(),
        }
    }

    fn next(&mut self) -> u32 {
        self.x = self.x.wrapping_mul(self.x);
        self.w = self.w.wrapping_add(self.s);
        self.x = self.x.wrapping_add(self.w);
        // The middle of the square: swap halves and emit the low word.
        self.x = (self.x >> 32) | (self.x << 32);
        self.x as u32
    }
}

impl_provider32!(MiddleSquareWeylSequence);

impl RestorableState for MiddleSquareWeylSequence {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(24 + BitCache32::STATE_BYTES);
        out.push_u64(self.x);
        out.push_u64(self.w);
        out.push_u64(self.s);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(24 + BitCache32::STATE_BYTES)?;
        self.x = reader.read_u64();
        self.w = reader.read_u64();
        self.s = reader.read_u64() | 1;
        self.cache.restore(&mut reader);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::UniformRandomProvider;

    #[test]
    fn test_increment_is_odd() {
        let rng = MiddleSquareWeylSequence::from_seed(&[1, 2, 4]);
        assert_eq!(rng.s & 1, 1);
    }

    #[test]
    fn test_state_round_trip_mid_cache() {
        let mut rng =
            MiddleSquareWeylSequence::from_seed(&[0x012d_e1ba_bb3c_4104, 0xc816_1b42_0229_4965]);
        rng.next_bool();
        let saved = rng.save_state();
        let expected: Vec<bool> = (0..40).map(|_| rng.next_bool()).collect();
        rng.restore_state(&saved).unwrap();
        let replay: Vec<bool> = (0..40).map(|_| rng.next_bool()).collect();
        assert_eq!(expected, replay);
    }
}
