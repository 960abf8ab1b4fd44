//! Chris Doty-Humphrey's Small Fast Counting generator, 64-bit variant.
//!
//! A chaotic generator with a counter mixed in to guarantee a minimum
//! period of 2^64. The average period is approximately 2^255.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::provider::{impl_provider64, BitCache64};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// SFC 64-bit generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sfc64 {
    a: u64,
    b: u64,
    c: u64,
    counter: u64,
    cache: BitCache64,
}

impl Sfc64 {
    /// Create from a 3 element seed; shorter seeds are extended
    /// deterministically. The first outputs are discarded to escape a
    /// possibly low quality seed region.
    pub fn from_seed(seed: &[u64]) -> Self {
        let s = seed::fill_state_u64::<3>(seed);
        let mut rng = Sfc64 {
            a: s[0],
            b: s[1],
            c: s[2],
            counter: 1,
            cache: BitCache64::new(),
        };
        for _ in 0..18 {
            rng.next();
        }
        rng
    }

    fn next(&mut self) -> u64 {
        let tmp = self.a.wrapping_add(self.b).wrapping_add(self.counter);
        self.counter = self.counter.wrapping_add(1);
        self.a = self.b ^ (self.b >> 11);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(24).wrapping_add(tmp);
        tmp
    }
}

impl_provider64!(Sfc64);

impl RestorableState for Sfc64 {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(32 + BitCache64::STATE_BYTES);
        out.push_u64(self.a);
        out.push_u64(self.b);
        out.push_u64(self.c);
        out.push_u64(self.counter);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(32 + BitCache64::STATE_BYTES)?;
        self.a = reader.read_u64();
        self.b = reader.read_u64();
        self.c = reader.read_u64();
        self.counter = reader.read_u64();
        self.cache.restore(&mut reader);
        Ok(())
    }
}
