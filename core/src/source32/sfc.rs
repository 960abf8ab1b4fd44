//! Chris Doty-Humphrey's Small Fast Counting generator, 32-bit variant.
//!
//! A chaotic generator with a counter mixed in to guarantee a minimum
//! period of 2^32. The average period is approximately 2^127.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::provider::{impl_provider32, BitCache32};
use crate::seed;
use crate::state::{RestorableState, RngState};

/// SFC 32-bit generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    counter: u32,
    cache: BitCache32,
}

impl Sfc32 {
    /// Create from a 3 element seed; shorter seeds are extended
    /// deterministically. The first outputs are discarded to escape a
    /// possibly low quality seed region.
    pub fn from_seed(seed: &[u32]) -> Self {
        let s = seed::fill_state_u32::<3>(seed);
        let mut rng = Sfc32 {
            a: s[0],
            b: s[1],
            c: s[2],
            counter: 1,
            cache: BitCache32::new(),
        };
        for _ in 0..15 {
            rng.next();
        }
        rng
    }

    fn next(&mut self) -> u32 {
        let tmp = self.a.wrapping_add(self.b).wrapping_add(self.counter);
        self.counter = self.counter.wrapping_add(1);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(tmp);
        tmp
    }
}

impl_provider32!(Sfc32);

impl RestorableState for Sfc32 {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(16 + BitCache32::STATE_BYTES);
        out.push_u32(self.a);
        out.push_u32(self.b);
        out.push_u32(self.c);
        out.push_u32(self.counter);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(16 + BitCache32::STATE_BYTES)?;
        self.a = reader.read_u32();
        self.b = reader.read_u32();
        self.c = reader.read_u32();
        self.counter = reader.read_u32();
        self.cache.restore(&mut reader);
        Ok(())
    }
}
