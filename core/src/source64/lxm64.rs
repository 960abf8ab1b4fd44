//! L64X128Mix: the 64-bit LXM member with a 128-bit xor-based
//! sub-generator.
//!
//! Named `L64X128MixRandom` in the JDK 17 `java.util.random` package.
//! Period is 2^64 (2^128 - 1).

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::jump::{Jumpable, LongJumpable, Splittable};
use crate::provider::{impl_provider64, BitCache64, UniformRandomProvider};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// LCG multiplier.
const M: u64 = 0xd134_2543_de82_ef95;
/// LCG multiplier for an advance of 2^32 cycles.
const M_POW_32: u64 = 0x8d23_804c_0000_0001;
/// LCG additive parameter multiplier for an advance of 2^32 cycles.
const C_POW_32: u64 = 0x1669_1c97_0000_0000;

/// L64X128Mix generator.
///
/// # Example
/// ```
/// use splitstream_core_rs::{L64X128Mix, Splittable, UniformRandomProvider};
///
/// let mut rng = L64X128Mix::from_seed(&[0x012de1babb3c4104]);
/// // Derive a statistically independent child stream.
/// let mut child = rng.split();
/// let _ = child.next_u64();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct L64X128Mix {
    /// LCG additive parameter, held odd.
    la: u64,
    /// LCG state.
    ls: u64,
    x0: u64,
    x1: u64,
    cache: BitCache64,
}

impl L64X128Mix {
    /// Create from a 4 element seed ordered LCG addition, LCG state,
    /// then the two XBG words. The addition's least significant bit is
    /// forced odd for a full period LCG. All-zero XBG words create a
    /// non-functional sub-generator and a period of only 2^64.
    pub fn new(seed: [u64; 4]) -> Self {
        L64X128Mix {
            la: seed[0] | 1,
            ls: seed[1],
            x0: seed[2],
            x1: seed[3],
            cache: BitCache64::new(),
        }
    }

    /// Create from a seed of any non-zero length; missing words are
    /// filled with a golden-ratio walk from the first word.
    pub fn from_seed(seed: &[u64]) -> Self {
        Self::new(seed::extend_seed_u64(seed))
    }

    fn next(&mut self) -> u64 {
        let s0 = self.x0;
        let s = self.ls;

        let z = seed::lea64(s.wrapping_add(s0));

        self.ls = M.wrapping_mul(s).wrapping_add(self.la);

        let s1 = self.x1 ^ s0;
        self.x0 = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.x1 = s1.rotate_left(37);

        z
    }
}

impl_provider64!(L64X128Mix);

impl Jumpable for L64X128Mix {
    /// Advance the LCG one cycle, moving the stream by 2^128 - 1
    /// outputs; up to 2^64 non-overlapping subsequences.
    fn jump(&mut self) -> Self {
        let copy = self.clone();
        self.ls = M.wrapping_mul(self.ls).wrapping_add(self.la);
        self.cache.clear();
        copy
    }
}

impl LongJumpable for L64X128Mix {
    /// Advance the LCG 2^32 cycles; up to 2^32 subsequences each
    /// subdividable with `jump`.
    fn long_jump(&mut self) -> Self {
        let copy = self.clone();
        self.ls = M_POW_32
            .wrapping_mul(self.ls)
            .wrapping_add(C_POW_32.wrapping_mul(self.la));
        self.cache.clear();
        copy
    }
}

impl Splittable for L64X128Mix {
    fn split_from(source: &mut dyn UniformRandomProvider) -> Self {
        // The additive parameter is set odd by the constructor so the
        // drawn word is left-shifted to keep all its bits effective.
        let la = source.next_u64() << 1;
        let ls = source.next_u64();
        let mut x0 = source.next_u64();
        let mut x1 = source.next_u64();
        if x0 | x1 == 0 {
            // SplitMix style reseed guarantees a non-zero XBG state.
            let z = ls;
            x0 = seed::lea64(z);
            x1 = seed::lea64(z.wrapping_add(seed::GOLDEN_RATIO_64));
        }
        Self::new([la, ls, x0, x1])
    }
}

impl RestorableState for L64X128Mix {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(32 + BitCache64::STATE_BYTES);
        out.push_u64(self.la);
        out.push_u64(self.ls);
        out.push_u64(self.x0);
        out.push_u64(self.x1);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(32 + BitCache64::STATE_BYTES)?;
        self.la = reader.read_u64() | 1;
        self.ls = reader.read_u64();
        self.x0 = reader.read_u64();
        self.x1 = reader.read_u64();
        self.cache.restore(&mut reader);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_parameter_is_odd() {
        let rng = L64X128Mix::new([0xa2fc_3db3_faf2_0b60, 1, 2, 3]);
        assert_eq!(rng.la & 1, 1);
    }

    #[test]
    fn test_jump_leaves_xbg_untouched() {
        let mut rng = L64X128Mix::new([1, 2, 3, 4]);
        let copy = rng.jump();
        assert_eq!((rng.x0, rng.x1), (copy.x0, copy.x1));
        assert_ne!(rng.ls, copy.ls);
    }

    /// A source stuck on zero, standing in for pathological entropy.
    struct ZeroSource;

    impl UniformRandomProvider for ZeroSource {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn next_bool(&mut self) -> bool {
            false
        }
        fn next_f32(&mut self) -> f32 {
            0.0
        }
        fn next_f64(&mut self) -> f64 {
            0.0
        }
        fn fill_bytes(&mut self, bytes: &mut [u8]) {
            bytes.fill(0);
        }
    }

    #[test]
    fn test_split_repairs_zero_xbg() {
        let child = L64X128Mix::split_from(&mut ZeroSource);
        assert_ne!(child.x0 | child.x1, 0);
    }

    #[test]
    fn test_split_children_diverge() {
        let mut rng = L64X128Mix::from_seed(&[0x012d_e1ba_bb3c_4104]);
        let mut a = rng.split();
        let mut b = rng.split();
        let overlap = (0..64).filter(|_| a.next_u64() == b.next_u64()).count();
        assert_eq!(overlap, 0);
    }
}
