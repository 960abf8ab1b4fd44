//! L32X64Mix: the 32-bit member of the LXM family.
//!
//! Combines a 32-bit linear congruential generator with a 64-bit
//! xor-based generator and mixes their sum through a Lea hash. Period is
//! 2^32 (2^64 - 1). Instances created with different additive parameters
//! produce statistically independent streams.
//!
//! # Critical Invariants
//!
//! - The LCG additive parameter is always odd.
//! - Jumps advance only the LCG sub-generator; the XBG state is
//!   untouched, which moves the combined stream by a full XBG period per
//!   LCG step.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::jump::{Jumpable, LongJumpable};
use crate::provider::{impl_provider32, BitCache32};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// LCG multiplier.
const M: u32 = 0xadb4_a92d;
/// LCG multiplier for an advance of 2^16 cycles.
const M_POW_16: u32 = 0x6564_0001;
/// LCG additive parameter multiplier for an advance of 2^16 cycles.
const C_POW_16: u32 = 0x046b_0000;

/// L32X64Mix generator.
///
/// # Example
/// ```
/// use splitstream_core_rs::{L32X64Mix, UniformRandomProvider};
///
/// let mut rng = L32X64Mix::from_seed(&[0x012de1ba]);
/// let _ = rng.next_u32();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct L32X64Mix {
    /// LCG additive parameter, held odd.
    la: u32,
    /// LCG state.
    ls: u32,
    x0: u32,
    x1: u32,
    cache: BitCache32,
}

impl L32X64Mix {
    /// Create from a 4 element seed ordered LCG addition, LCG state,
    /// then the two XBG words. The addition's least significant bit is
    /// forced odd for a full period LCG. All-zero XBG words create a
    /// non-functional sub-generator and a period of only 2^32.
    pub fn new(seed: [u32; 4]) -> Self {
        L32X64Mix {
            la: seed[0] | 1,
            ls: seed[1],
            x0: seed[2],
            x1: seed[3],
            cache: BitCache32::new(),
        }
    }

    /// Create from a seed of any non-zero length; missing words are
    /// filled with a golden-ratio walk from the first word.
    pub fn from_seed(seed: &[u32]) -> Self {
        Self::new(seed::extend_seed_u32(seed))
    }

    fn next(&mut self) -> u32 {
        let s0 = self.x0;
        let s = self.ls;

        let z = seed::lea32(s.wrapping_add(s0));

        self.ls = M.wrapping_mul(s).wrapping_add(self.la);

        let s1 = self.x1 ^ s0;
        self.x0 = s0.rotate_left(26) ^ s1 ^ (s1 << 9);
        self.x1 = s1.rotate_left(13);

        z
    }
}

impl_provider32!(L32X64Mix);

impl Jumpable for L32X64Mix {
    /// Advance the LCG one cycle, moving the stream by 2^64 - 1 outputs;
    /// up to 2^32 non-overlapping subsequences.
    fn jump(&mut self) -> Self {
        let copy = self.clone();
        self.ls = M.wrapping_mul(self.ls).wrapping_add(self.la);
        self.cache.clear();
        copy
    }
}

impl LongJumpable for L32X64Mix {
    /// Advance the LCG 2^16 cycles; up to 2^16 subsequences each
    /// subdividable with `jump`.
    fn long_jump(&mut self) -> Self {
        let copy = self.clone();
        self.ls = M_POW_16
            .wrapping_mul(self.ls)
            .wrapping_add(C_POW_16.wrapping_mul(self.la));
        self.cache.clear();
        copy
    }
}

impl RestorableState for L32X64Mix {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(16 + BitCache32::STATE_BYTES);
        out.push_u32(self.la);
        out.push_u32(self.ls);
        out.push_u32(self.x0);
        out.push_u32(self.x1);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(16 + BitCache32::STATE_BYTES)?;
        self.la = reader.read_u32() | 1;
        self.ls = reader.read_u32();
        self.x0 = reader.read_u32();
        self.x1 = reader.read_u32();
        self.cache.restore(&mut reader);
        Ok(())
    }
}
