//! L128X128Mix: the LXM member with a 128-bit linear congruential
//! sub-generator.
//!
//! The wider LCG removes the correlation weakness of a 64-bit additive
//! parameter at the cost of multi-word arithmetic. Named
//! `L128X128MixRandom` in the JDK 17 `java.util.random` package. Period
//! is 2^128 (2^128 - 1).

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::jump::{Jumpable, LongJumpable, Splittable};
use crate::provider::{impl_provider64, BitCache64, UniformRandomProvider};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// Low 64 bits of the 128-bit LCG multiplier; the high half is 1.
const ML: u64 = 0xd605_bbb5_8c8a_bbfd;
/// High 64 bits of the multiplier for an advance of 2^64 cycles; the low
/// half is 1.
const M_POW_64_HIGH: u64 = 0x31f1_79f5_2247_54f4;
/// High 64 bits of the additive multiplier for an advance of 2^64
/// cycles; the low half is 0.
const C_POW_64_HIGH: u64 = 0x6113_9b28_8832_77c3;

#[inline]
fn unsigned_mul_high(a: u64, b: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) >> 64) as u64
}

/// L128X128Mix generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct L128X128Mix {
    /// High half of the LCG additive parameter.
    lah: u64,
    /// Low half of the LCG additive parameter, held odd.
    lal: u64,
    /// High half of the LCG state.
    lsh: u64,
    /// Low half of the LCG state.
    lsl: u64,
    x0: u64,
    x1: u64,
    cache: BitCache64,
}

impl L128X128Mix {
    /// Create from a 6 element seed ordered LCG addition (high, low),
    /// LCG state (high, low), then the two XBG words. The addition's
    /// least significant bit is forced odd for a full period LCG.
    /// All-zero XBG words create a non-functional sub-generator.
    pub fn new(seed: [u64; 6]) -> Self {
        L128X128Mix {
            lah: seed[0],
            lal: seed[1] | 1,
            lsh: seed[2],
            lsl: seed[3],
            x0: seed[4],
            x1: seed[5],
            cache: BitCache64::new(),
        }
    }

    /// Create from a seed of any non-zero length; missing words are
    /// filled with a golden-ratio walk from the first word.
    pub fn from_seed(seed: &[u64]) -> Self {
        Self::new(seed::extend_seed_u64(seed))
    }

    /// One cycle of the 128-bit LCG: `s = m * s + a` with
    /// `m = 2^64 + ML`.
    #[inline]
    fn lcg_advance(&mut self) {
        let sh = self.lsh;
        let sl = self.lsl;
        let u = ML.wrapping_mul(sl);
        let (low, carry) = u.overflowing_add(self.lal);
        self.lsh = ML
            .wrapping_mul(sh)
            .wrapping_add(unsigned_mul_high(ML, sl))
            .wrapping_add(sl)
            .wrapping_add(self.lah)
            .wrapping_add(u64::from(carry));
        self.lsl = low;
    }

    fn next(&mut self) -> u64 {
        let s0 = self.x0;

        // Only the high half of the LCG feeds the mix.
        let z = seed::lea64(self.lsh.wrapping_add(s0));

        self.lcg_advance();

        let s1 = self.x1 ^ s0;
        self.x0 = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.x1 = s1.rotate_left(37);

        z
    }
}

impl_provider64!(L128X128Mix);

impl Jumpable for L128X128Mix {
    /// Advance the LCG one cycle, moving the stream by 2^128 - 1
    /// outputs; up to 2^128 non-overlapping subsequences.
    fn jump(&mut self) -> Self {
        let copy = self.clone();
        self.lcg_advance();
        self.cache.clear();
        copy
    }
}

impl LongJumpable for L128X128Mix {
    /// Advance the LCG 2^64 cycles; up to 2^64 subsequences each
    /// subdividable with `jump`.
    fn long_jump(&mut self) -> Self {
        let copy = self.clone();
        // With the low halves of m' and c' being 1 and 0 the low state
        // word is unchanged and no carry can occur.
        self.lsh = self
            .lsh
            .wrapping_add(M_POW_64_HIGH.wrapping_mul(self.lsl))
            .wrapping_add(C_POW_64_HIGH.wrapping_mul(self.lal));
        self.cache.clear();
        copy
    }
}

impl Splittable for L128X128Mix {
    fn split_from(source: &mut dyn UniformRandomProvider) -> Self {
        // The drawn word feeds the low half of the additive parameter,
        // left-shifted because the constructor forces the bit it drops.
        let lal = source.next_u64() << 1;
        let lah = source.next_u64();
        let lsh = source.next_u64();
        let lsl = source.next_u64();
        let mut x0 = source.next_u64();
        let mut x1 = source.next_u64();
        if x0 | x1 == 0 {
            // SplitMix style reseed guarantees a non-zero XBG state.
            let z = lsl;
            x0 = seed::lea64(z);
            x1 = seed::lea64(z.wrapping_add(seed::GOLDEN_RATIO_64));
        }
        Self::new([lah, lal, lsh, lsl, x0, x1])
    }
}

impl RestorableState for L128X128Mix {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(48 + BitCache64::STATE_BYTES);
        out.push_u64(self.lah);
        out.push_u64(self.lal);
        out.push_u64(self.lsh);
        out.push_u64(self.lsl);
        out.push_u64(self.x0);
        out.push_u64(self.x1);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(48 + BitCache64::STATE_BYTES)?;
        self.lah = reader.read_u64();
        self.lal = reader.read_u64() | 1;
        self.lsh = reader.read_u64();
        self.lsl = reader.read_u64();
        self.x0 = reader.read_u64();
        self.x1 = reader.read_u64();
        self.cache.restore(&mut reader);
        Ok(())
    }
}
