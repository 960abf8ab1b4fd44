//! The xoroshiro128 family: 128 bits of state, 64-bit output.
//!
//! Unlike the xoshiro families the two variants here do not share a
//! state transition: ++ is the 2018 revision with different rotation
//! constants and its own jump polynomials. Period is 2^128 - 1.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::jump::{Jumpable, LongJumpable};
use crate::provider::{impl_provider64, BitCache64};
use crate::seed;
use crate::state::{RestorableState, RngState};

macro_rules! xoroshiro128_variant {
    ($(#[$meta:meta])* $name:ident,
     output: |$o0:ident, $o1:ident| $output:expr,
     update: |$u0:ident, $u1:ident| $update:expr,
     jump: $jump:expr,
     long_jump: $long_jump:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            state: [u64; 2],
            cache: BitCache64,
        }

        impl $name {
            /// Create from a full 2 element seed.
            /// An all-zero seed creates a non-functional generator.
            pub fn new(seed: [u64; 2]) -> Self {
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

            #[inline]
            fn advance(&mut self) {
                let $u0 = self.state[0];
                let $u1 = self.state[1] ^ $u0;
                self.state = $update;
            }

            fn next(&mut self) -> u64 {
                let $o0 = self.state[0];
                let $o1 = self.state[1];
                let out = $output;
                self.advance();
                out
            }

            fn apply_jump(&mut self, coefficients: &[u64; 2]) {
                let mut scratch = [0u64; 2];
                for jc in coefficients {
                    for b in 0..64 {
                        if jc & (1 << b) != 0 {
                            scratch[0] ^= self.state[0];
                            scratch[1] ^= self.state[1];
                        }
                        self.advance();
                    }
                }
                self.state = scratch;
                self.cache.clear();
            }
        }

        impl_provider64!($name);

        impl Jumpable for $name {
            /// Advance by 2^64 outputs; up to 2^64 non-overlapping
            /// subsequences.
            fn jump(&mut self) -> Self {
                let copy = self.clone();
                self.apply_jump(&$jump);
                copy
            }
        }

        impl LongJumpable for $name {
            /// Advance by 2^96 outputs; up to 2^32 subsequences each
            /// subdividable with `jump`.
            fn long_jump(&mut self) -> Self {
                let copy = self.clone();
                self.apply_jump(&$long_jump);
                copy
            }
        }

        impl RestorableState for $name {
            fn save_state(&self) -> RngState {
                let mut out = RngState::with_capacity(16 + BitCache64::STATE_BYTES);
                for word in self.state {
                    out.push_u64(word);
                }
                self.cache.save(&mut out);
                out
            }

            fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
                let mut reader = state.reader(16 + BitCache64::STATE_BYTES)?;
                for word in &mut self.state {
                    *word = reader.read_u64();
                }
                self.cache.restore(&mut reader);
                Ok(())
            }
        }
    };
}

xoroshiro128_variant!(
    /// xoroshiro128+: fast variant with weak low bits, best for double
    /// generation. Rotation constants (24, 16, 37).
    XoRoShiRo128Plus,
    output: |s0, s1| s0.wrapping_add(s1),
    update: |s0, s1| [s0.rotate_left(24) ^ s1 ^ (s1 << 16), s1.rotate_left(37)],
    jump: [0xdf90_0294_d8f5_54a5, 0x1708_65df_4b32_01fc],
    long_jump: [0xd2a9_8b26_625e_ee7b, 0xdddf_9b10_90aa_7ac1]
);

xoroshiro128_variant!(
    /// xoroshiro128++: all-purpose 2018 revision with rotation constants
    /// (49, 21, 28) and a rotated-sum scrambler.
    XoRoShiRo128PlusPlus,
    output: |s0, s1| s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0),
    update: |s0, s1| [s0.rotate_left(49) ^ s1 ^ (s1 << 21), s1.rotate_left(28)],
    jump: [0x2bd7_a6a6_e99c_2ddc, 0x0992_ccaf_6a6f_ca05],
    long_jump: [0x360f_d5f2_cf8d_5d99, 0x9c6e_6877_736c_46e3]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::UniformRandomProvider;

    #[test]
    fn test_plus_first_output_is_sum() {
        let mut rng = XoRoShiRo128Plus::new([40, 2]);
        assert_eq!(rng.next_u64(), 42);
    }

    #[test]
    fn test_plus_transition_reference_prefix() {
        // The second output is the first to depend on the rotation
        // constants; reference value for the revised (24, 16, 37)
        // transition.
        let mut rng =
            XoRoShiRo128Plus::new([0x012d_e1ba_bb3c_4104, 0xa5a8_18b8_fc5a_a503]);
        assert_eq!(rng.next_u64(), 0xa6d5_fa73_b796_e607);
        assert_eq!(rng.next_u64(), 0xd419_031a_381f_ea2e);
    }

    #[test]
    fn test_variants_diverge_in_state() {
        // The ++ revision uses a different transition, not just a
        // different scrambler.
        let mut a = XoRoShiRo128Plus::new([9, 8]);
        let mut b = XoRoShiRo128PlusPlus::new([9, 8]);
        a.next_u64();
        b.next_u64();
        assert_ne!(a.state, b.state);
    }

    #[test]
    fn test_jump_returns_pre_jump_copy() {
        let mut rng = XoRoShiRo128PlusPlus::new([1, 2]);
        let before = rng.state;
        let copy = rng.jump();
        assert_eq!(copy.state, before);
        assert_ne!(rng.state, before);
    }
}
