//! The PCG family members with a 64-bit congruential core and 32-bit
//! output.
//!
//! The LCG members carry a per-instance odd increment selected by the
//! seed; the MCG member drops the increment for speed at the cost of a
//! shorter period. Output permutations operate on the pre-update state.
//!
//! Note: only the first 64 seed bits are fully effective for the LCG
//! members. Seeds differing only in the increment word select between
//! two additive sequences and have a 50% chance of being highly
//! correlated. Use the single-word constructor with the default
//! increment when in doubt.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::provider::{impl_provider32, BitCache32};
use crate::seed;
use crate::state::{RestorableState, RngState};

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const DEFAULT_INCREMENT: u64 = 1_442_695_040_888_963_407;

#[inline]
fn xsh_rr(x: u64) -> u32 {
    let count = (x >> 59) as u32;
    (((x ^ (x >> 18)) >> 27) as u32).rotate_right(count)
}

#[inline]
fn xsh_rs(x: u64) -> u32 {
    let count = (x >> 61) as u32;
    ((x ^ (x >> 22)) >> (22 + count)) as u32
}

macro_rules! pcg_lcg_variant {
    ($(#[$meta:meta])* $name:ident, $transform:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            state: u64,
            increment: u64,
            cache: BitCache32,
        }

        impl $name {
            /// Create using the default increment; the seed sets the
            /// starting state.
            pub fn new(seed: u64) -> Self {
                let increment = DEFAULT_INCREMENT;
                $name {
                    state: bump(seed.wrapping_add(increment), increment),
                    increment,
                    cache: BitCache32::new(),
                }
            }

            /// Create from a 2 element seed: starting state, then the
            /// increment word. The increment's most significant bit is
            /// discarded by a left shift and the low bit forced odd for
            /// a maximal period LCG. Shorter seeds are extended
            /// deterministically.
            pub fn from_seed(seed: &[u64]) -> Self {
                let s = seed::fill_state_u64::<2>(seed);
                let increment = (s[1] << 1) | 1;
                $name {
                    state: bump(s[0].wrapping_add(increment), increment),
                    increment,
                    cache: BitCache32::new(),
                }
            }

            fn next(&mut self) -> u32 {
                let x = self.state;
                self.state = bump(x, self.increment);
                $transform(x)
            }
        }

        impl_provider32!($name);

        impl RestorableState for $name {
            fn save_state(&self) -> RngState {
                let mut out = RngState::with_capacity(16 + BitCache32::STATE_BYTES);
                out.push_u64(self.state);
                // Halved on save so a tampered byte state cannot restore
                // an even increment with a sub-maximal period.
                out.push_u64(self.increment >> 1);
                self.cache.save(&mut out);
                out
            }

            fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
                let mut reader = state.reader(16 + BitCache32::STATE_BYTES)?;
                self.state = reader.read_u64();
                self.increment = (reader.read_u64() << 1) | 1;
                self.cache.restore(&mut reader);
                Ok(())
            }
        }
    };
}

#[inline]
fn bump(x: u64, increment: u64) -> u64 {
    x.wrapping_mul(MULTIPLIER).wrapping_add(increment)
}

pcg_lcg_variant!(
    /// PCG XSH-RR 64/32: xorshift-high then random rotate.
    ///
    /// # Example
    /// ```
    /// use splitstream_core_rs::{PcgXshRr32, UniformRandomProvider};
    ///
    /// let mut rng = PcgXshRr32::new(42);
    /// let _ = rng.next_u32();
    /// ```
    PcgXshRr32,
    xsh_rr
);

pcg_lcg_variant!(
    /// PCG XSH-RS 64/32: xorshift-high then random shift.
    PcgXshRs32,
    xsh_rs
);

/// PCG XSH-RR 64/32 over a multiplicative congruential core.
///
/// Drops the increment; the two low state bits are fixed at 1, giving a
/// period of 2^62.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcgMcgXshRr32 {
    state: u64,
    cache: BitCache32,
}

impl PcgMcgXshRr32 {
    /// Create a new instance. The two least significant seed bits are
    /// forced to 1; a maximal period MCG requires an odd state.
    pub fn new(seed: u64) -> Self {
        PcgMcgXshRr32 {
            state: seed | 3,
            cache: BitCache32::new(),
        }
    }

    fn next(&mut self) -> u32 {
        let x = self.state;
        self.state = x.wrapping_mul(MULTIPLIER);
        xsh_rr(x)
    }
}

impl_provider32!(PcgMcgXshRr32);

impl RestorableState for PcgMcgXshRr32 {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(8 + BitCache32::STATE_BYTES);
        out.push_u64(self.state);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(8 + BitCache32::STATE_BYTES)?;
        self.state = reader.read_u64() | 3;
        self.cache.restore(&mut reader);
        Ok(())
    }
}
