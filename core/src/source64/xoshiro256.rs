//! The xoshiro256 family: 256 bits of state, 64-bit output.
//!
//! The workhorse of the xoshiro line. All three variants share the
//! linear state transition and differ only in the output scrambler
//! applied to the pre-update state. Period is 2^256 - 1.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::jump::{Jumpable, LongJumpable};
use crate::provider::{impl_provider64, BitCache64};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// Coefficients for a jump of 2^128 outputs.
const JUMP_COEFFICIENTS: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];
/// Coefficients for a jump of 2^192 outputs.
const LONG_JUMP_COEFFICIENTS: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

#[inline]
fn advance(s: &mut [u64; 4]) {
    let t = s[1] << 17;
    s[2] ^= s[0];
    s[3] ^= s[1];
    s[1] ^= s[2];
    s[0] ^= s[3];
    s[2] ^= t;
    s[3] = s[3].rotate_left(45);
}

macro_rules! xoshiro256_variant {
    ($(#[$meta:meta])* $name:ident, |$s:ident| $output:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            state: [u64; 4],
            cache: BitCache64,
        }

        impl $name {
            /// Create from a full 4 element seed.
            /// An all-zero seed creates a non-functional generator.
            pub fn new(seed: [u64; 4]) -> Self {
                $name {
                    state: seed,
                    cache: BitCache64::new(),
                }
            }

            /// Create from a seed of any non-zero length; missing state
            /// words are filled deterministically.
            pub fn from_seed(seed: &[u64]) -> Self {
                Self::new(seed::fill_state_u64(seed))
            }

            fn next(&mut self) -> u64 {
                let $s = &self.state;
                let out = $output;
                advance(&mut self.state);
                out
            }

            fn apply_jump(&mut self, coefficients: &[u64; 4]) {
                let mut scratch = [0u64; 4];
                for jc in coefficients {
                    for b in 0..64 {
                        if jc & (1 << b) != 0 {
                            for (acc, word) in scratch.iter_mut().zip(&self.state) {
                                *acc ^= word;
                            }
                        }
                        advance(&mut self.state);
                    }
                }
                self.state = scratch;
                self.cache.clear();
            }
        }

        impl_provider64!($name);

        impl Jumpable for $name {
            /// Advance by 2^128 outputs; up to 2^128 non-overlapping
            /// subsequences.
            fn jump(&mut self) -> Self {
                let copy = self.clone();
                self.apply_jump(&JUMP_COEFFICIENTS);
                copy
            }
        }

        impl LongJumpable for $name {
            /// Advance by 2^192 outputs; up to 2^64 subsequences each
            /// subdividable with `jump`.
            fn long_jump(&mut self) -> Self {
                let copy = self.clone();
                self.apply_jump(&LONG_JUMP_COEFFICIENTS);
                copy
            }
        }

        impl RestorableState for $name {
            fn save_state(&self) -> RngState {
                let mut out = RngState::with_capacity(32 + BitCache64::STATE_BYTES);
                for word in self.state {
                    out.push_u64(word);
                }
                self.cache.save(&mut out);
                out
            }

            fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
                let mut reader = state.reader(32 + BitCache64::STATE_BYTES)?;
                for word in &mut self.state {
                    *word = reader.read_u64();
                }
                self.cache.restore(&mut reader);
                Ok(())
            }
        }
    };
}

xoshiro256_variant!(
    /// xoshiro256+: the fastest variant, with weak low bits.
    ///
    /// Best used for double generation which discards the low bits.
    XoShiRo256Plus,
    |s| s[0].wrapping_add(s[3])
);

xoshiro256_variant!(
    /// xoshiro256++: all-purpose variant with a rotated-sum scrambler.
    ///
    /// # Example
    /// ```
    /// use splitstream_core_rs::{Jumpable, UniformRandomProvider, XoShiRo256PlusPlus};
    ///
    /// let mut rng = XoShiRo256PlusPlus::new([1, 2, 3, 4]);
    /// // Partition the period into independent streams.
    /// let mut worker = rng.jump();
    /// let _ = worker.next_u64();
    /// ```
    XoShiRo256PlusPlus,
    |s| s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0])
);

xoshiro256_variant!(
    /// xoshiro256**: all-purpose variant with a multiply-rotate-multiply
    /// scrambler.
    XoShiRo256StarStar,
    |s| s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::UniformRandomProvider;

    #[test]
    fn test_plus_first_output_is_sum() {
        let mut rng = XoShiRo256Plus::new([5, 11, 13, 9]);
        assert_eq!(rng.next_u64(), 14);
    }

    #[test]
    fn test_variants_share_state_transition() {
        let mut a = XoShiRo256Plus::new([9, 8, 7, 6]);
        let mut b = XoShiRo256StarStar::new([9, 8, 7, 6]);
        for _ in 0..16 {
            a.next_u64();
            b.next_u64();
        }
        assert_eq!(a.state, b.state);
    }

    #[test]
    fn test_jump_returns_pre_jump_copy() {
        let mut rng = XoShiRo256PlusPlus::new([1, 2, 3, 4]);
        let before = rng.state;
        let copy = rng.jump();
        assert_eq!(copy.state, before);
        assert_ne!(rng.state, before);
    }
}
