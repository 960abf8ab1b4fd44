//! The xoshiro128 family: 128 bits of state, 32-bit output.
//!
//! All three variants share the linear state transition and differ only
//! in the output scrambler applied to the pre-update state. Period is
//! 2^128 - 1; an all-zero state is invalid and never escapes.
//!
//! Jump coefficients are the published polynomials for this family and
//! are shared by every variant.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::jump::{Jumpable, LongJumpable};
use crate::provider::{impl_provider32, BitCache32};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// Coefficients for a jump of 2^64 outputs.
const JUMP_COEFFICIENTS: [u32; 4] = [0x8764_000b, 0xf542_d2d3, 0x6fa0_35c3, 0x77f2_db5b];
/// Coefficients for a jump of 2^96 outputs.
const LONG_JUMP_COEFFICIENTS: [u32; 4] = [0xb523_952e, 0x0b6f_099f, 0xccf5_a0ef, 0x1c58_0662];

#[inline]
fn advance(s: &mut [u32; 4]) {
    let t = s[1] << 9;
    s[2] ^= s[0];
    s[3] ^= s[1];
    s[1] ^= s[2];
    s[0] ^= s[3];
    s[2] ^= t;
    s[3] = s[3].rotate_left(11);
}

macro_rules! xoshiro128_variant {
    ($(#[$meta:meta])* $name:ident, |$s:ident| $output:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            state: [u32; 4],
            cache: BitCache32,
        }

        impl $name {
            /// Create from a full 4 element seed.
            /// An all-zero seed creates a non-functional generator.
            pub fn new(seed: [u32; 4]) -> Self {
                $name {
                    state: seed,
                    cache: BitCache32::new(),
                }
            }

            /// Create from a seed of any non-zero length; missing state
            /// words are filled deterministically.
            pub fn from_seed(seed: &[u32]) -> Self {
                Self::new(seed::fill_state_u32(seed))
            }

            fn next(&mut self) -> u32 {
                let $s = &self.state;
                let out = $output;
                advance(&mut self.state);
                out
            }

            /// Walk the jump polynomial, gathering the new state as an
            /// XOR accumulation over the sequence of plain transitions.
            fn apply_jump(&mut self, coefficients: &[u32; 4]) {
                let mut scratch = [0u32; 4];
                for jc in coefficients {
                    for b in 0..32 {
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

        impl_provider32!($name);

        impl Jumpable for $name {
            /// Advance by 2^64 outputs; up to 2^64 non-overlapping
            /// subsequences.
            fn jump(&mut self) -> Self {
                let copy = self.clone();
                self.apply_jump(&JUMP_COEFFICIENTS);
                copy
            }
        }

        impl LongJumpable for $name {
            /// Advance by 2^96 outputs; up to 2^32 subsequences each
            /// subdividable with `jump`.
            fn long_jump(&mut self) -> Self {
                let copy = self.clone();
                self.apply_jump(&LONG_JUMP_COEFFICIENTS);
                copy
            }
        }

        impl RestorableState for $name {
            fn save_state(&self) -> RngState {
                let mut out = RngState::with_capacity(16 + BitCache32::STATE_BYTES);
                for word in self.state {
                    out.push_u32(word);
                }
                self.cache.save(&mut out);
                out
            }

            fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
                let mut reader = state.reader(16 + BitCache32::STATE_BYTES)?;
                for word in &mut self.state {
                    *word = reader.read_u32();
                }
                self.cache.restore(&mut reader);
                Ok(())
            }
        }
    };
}

xoshiro128_variant!(
    /// xoshiro128+: the fastest variant, with weak low bits.
    ///
    /// Best used for float generation which discards the low bits.
    XoShiRo128Plus,
    |s| s[0].wrapping_add(s[3])
);

xoshiro128_variant!(
    /// xoshiro128++: all-purpose variant with a rotated-sum scrambler.
    XoShiRo128PlusPlus,
    |s| s[0].wrapping_add(s[3]).rotate_left(7).wrapping_add(s[0])
);

xoshiro128_variant!(
    /// xoshiro128**: all-purpose variant with a multiply-rotate-multiply
    /// scrambler.
    ///
    /// # Example
    /// ```
    /// use splitstream_core_rs::{UniformRandomProvider, XoShiRo128StarStar};
    ///
    /// let mut rng = XoShiRo128StarStar::new([1, 2, 3, 4]);
    /// assert_eq!(rng.next_u32(), 5760);
    /// ```
    XoShiRo128StarStar,
    |s| s[0].wrapping_mul(5).rotate_left(7).wrapping_mul(9)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::UniformRandomProvider;

    #[test]
    fn test_star_star_first_output() {
        // rotl(1 * 5, 7) * 9 = 640 * 9
        let mut rng = XoShiRo128StarStar::new([1, 2, 3, 4]);
        assert_eq!(rng.next_u32(), 5760);
    }

    #[test]
    fn test_variants_share_state_transition() {
        let mut a = XoShiRo128Plus::new([9, 8, 7, 6]);
        let mut b = XoShiRo128PlusPlus::new([9, 8, 7, 6]);
        for _ in 0..16 {
            a.next_u32();
            b.next_u32();
        }
        assert_eq!(a.state, b.state);
    }

    #[test]
    fn test_short_seed_is_extended() {
        let mut rng = XoShiRo128Plus::from_seed(&[0x012d_e1ba]);
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..32 {
            distinct.insert(rng.next_u32());
        }
        assert!(distinct.len() > 30);
    }
}
