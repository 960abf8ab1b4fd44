//! The xoroshiro64 family: 64 bits of state, 32-bit output.
//!
//! Smallest member of the xoroshiro line, intended for embedded use or
//! as a sub-generator. Period is 2^64 - 1. No jump polynomials are
//! published for this state size, so the family is not jumpable.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::provider::{impl_provider32, BitCache32};
use crate::seed;
use crate::state::{RestorableState, RngState};

macro_rules! xoroshiro64_variant {
    ($(#[$meta:meta])* $name:ident, |$s0:ident| $output:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            state: [u32; 2],
            cache: BitCache32,
        }

        impl $name {
            /// Create from a full 2 element seed.
            /// An all-zero seed creates a non-functional generator.
            pub fn new(seed: [u32; 2]) -> Self {
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
                let $s0 = self.state[0];
                let out = $output;
                let mut s1 = self.state[1];
                s1 ^= $s0;
                self.state[0] = $s0.rotate_left(26) ^ s1 ^ (s1 << 9);
                self.state[1] = s1.rotate_left(13);
                out
            }
        }

        impl_provider32!($name);

        impl RestorableState for $name {
            fn save_state(&self) -> RngState {
                let mut out = RngState::with_capacity(8 + BitCache32::STATE_BYTES);
                for word in self.state {
                    out.push_u32(word);
                }
                self.cache.save(&mut out);
                out
            }

            fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
                let mut reader = state.reader(8 + BitCache32::STATE_BYTES)?;
                for word in &mut self.state {
                    *word = reader.read_u32();
                }
                self.cache.restore(&mut reader);
                Ok(())
            }
        }
    };
}

xoroshiro64_variant!(
    /// xoroshiro64*: single multiply scrambler, weak low bits.
    XoRoShiRo64Star,
    |s0| s0.wrapping_mul(0x9e37_79bb)
);

xoroshiro64_variant!(
    /// xoroshiro64**: multiply-rotate-multiply scrambler, all-purpose.
    XoRoShiRo64StarStar,
    |s0| s0.wrapping_mul(0x9e37_79bb).rotate_left(5).wrapping_mul(5)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::UniformRandomProvider;

    #[test]
    fn test_deterministic() {
        let mut a = XoRoShiRo64Star::new([0x012d_e1ba, 0xa5a8_18b8]);
        let mut b = XoRoShiRo64Star::new([0x012d_e1ba, 0xa5a8_18b8]);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_variants_differ_only_in_output() {
        let mut a = XoRoShiRo64Star::new([3, 4]);
        let mut b = XoRoShiRo64StarStar::new([3, 4]);
        for _ in 0..16 {
            a.next_u32();
            b.next_u32();
        }
        assert_eq!(a.state, b.state);
    }
}
