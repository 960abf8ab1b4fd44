//! Philox4x32-10: a 128-bit counter-based generator.
//!
//! Each counter value is encrypted with a 10 round bijective mix under a
//! 64-bit key to produce a block of four outputs. Position in the
//! sequence is explicit in the state, so jumps of any distance are
//! essentially instantaneous. Period is 2^130.
//!
//! # Critical Invariants
//!
//! - The counter increments when a block is exhausted, never before, so
//!   a seed counter of `n` starts exactly `4 * n` outputs into the
//!   stream of the same key.
//! - The output buffer is always the encryption of the current counter;
//!   jump and restore regenerate it whenever the position points inside
//!   a block.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::jump::{ArbitrarilyJumpable, Jumpable, LongJumpable};
use crate::provider::{impl_provider32, BitCache32};
use crate::state::{RestorableState, RngState};

/// Weyl constant added to key word 0 each round.
const WEYL_A: u32 = 0x9e37_79b9;
/// Weyl constant added to key word 1 each round.
const WEYL_B: u32 = 0xbb67_ae85;
/// Multiplier for counter word 0.
const MULT_A: u32 = 0xd251_1f53;
/// Multiplier for counter word 2.
const MULT_B: u32 = 0xcd9e_8d57;

const BUFFER_SIZE: usize = 4;
/// log2 of the period.
const LOG_PERIOD: u32 = 130;
/// The period of 2^130 as a double.
const PERIOD: f64 = 1361129467683753853853498429727072845824.0;
/// 2^54: the smallest double whose integer values cannot carry the two
/// least significant bits.
const TWO_POW_54: f64 = 18014398509481984.0;

/// Philox 4x32 generator with 10 rounds.
///
/// # Example
/// ```
/// use splitstream_core_rs::{ArbitrarilyJumpable, Philox4x32, UniformRandomProvider};
///
/// let mut rng = Philox4x32::from_seed(&[0x012de1ba, 0xa5a818b8]);
/// let _ = rng.next_u32();
/// // Place a second stream exactly 2^40 outputs ahead.
/// let mut behind = rng.jump_power_of_two(40);
/// let _ = behind.next_u32();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Philox4x32 {
    key: [u32; 2],
    counter: [u32; 4],
    buffer: [u32; 4],
    buffer_position: usize,
    cache: BitCache32,
}

impl Philox4x32 {
    /// Create from a key and counter seed: `[key0, key1, counter0..3]`,
    /// low counter bits first. Missing elements are zero; the counter is
    /// not scrambled, so contiguous counter seeds produce contiguous
    /// blocks of 4 outputs.
    pub fn from_seed(seed: &[u32]) -> Self {
        let mut input = [0u32; 6];
        let n = seed.len().min(6);
        input[..n].copy_from_slice(&seed[..n]);
        Philox4x32 {
            key: [input[0], input[1]],
            counter: [input[2], input[3], input[4], input[5]],
            buffer: [0; 4],
            buffer_position: BUFFER_SIZE,
            cache: BitCache32::new(),
        }
    }

    /// Create from a 64-bit key with a zero counter.
    pub fn new(key: [u32; 2]) -> Self {
        Self::from_seed(&key)
    }

    fn next(&mut self) -> u32 {
        let p = self.buffer_position;
        if p < BUFFER_SIZE {
            self.buffer_position = p + 1;
            return self.buffer[p];
        }
        self.increment_counter();
        self.generate();
        self.buffer_position = 1;
        self.buffer[0]
    }

    fn increment_counter(&mut self) {
        for word in &mut self.counter {
            *word = word.wrapping_add(1);
            if *word != 0 {
                return;
            }
        }
    }

    /// Encrypt the current counter into the output buffer; 10 rounds.
    fn generate(&mut self) {
        self.buffer = self.counter;
        let mut k0 = self.key[0];
        let mut k1 = self.key[1];
        single_round(&mut self.buffer, k0, k1);
        for _ in 0..9 {
            k0 = k0.wrapping_add(WEYL_A);
            k1 = k1.wrapping_add(WEYL_B);
            single_round(&mut self.buffer, k0, k1);
        }
    }

    /// Copy the generator, then advance the counter and buffer position
    /// of this instance. The copy keeps the pre-jump stream.
    fn copy_and_jump(&mut self, skip: usize, increment: [u32; 4]) -> Self {
        let copy = self.clone();

        // Skip within the block; rolling past the end consumes one
        // counter increment.
        self.buffer_position += skip;
        if self.buffer_position > BUFFER_SIZE {
            self.buffer_position -= BUFFER_SIZE;
            self.increment_counter();
        }

        // 128-bit add with carry, least significant word first.
        let mut carry = 0u64;
        for (word, inc) in self.counter.iter_mut().zip(increment) {
            let r = u64::from(*word) + u64::from(inc) + carry;
            *word = r as u32;
            carry = r >> 32;
        }

        self.finish_jump();
        copy
    }

    fn finish_jump(&mut self) {
        self.cache.clear();
        // A position past the end delays regeneration to the next
        // output call, which keeps chained jumps cheap.
        if self.buffer_position < BUFFER_SIZE {
            self.generate();
        }
    }
}

fn single_round(counter: &mut [u32; 4], key0: u32, key1: u32) {
    let product0 = u64::from(MULT_A) * u64::from(counter[0]);
    let hi0 = (product0 >> 32) as u32;
    let lo0 = product0 as u32;
    let product1 = u64::from(MULT_B) * u64::from(counter[2]);
    let hi1 = (product1 >> 32) as u32;
    let lo1 = product1 as u32;

    counter[0] = hi1 ^ counter[1] ^ key0;
    counter[1] = lo1;
    counter[2] = hi0 ^ counter[3] ^ key1;
    counter[3] = lo0;
}

impl_provider32!(Philox4x32);

impl Jumpable for Philox4x32 {
    /// Advance by 2^66 outputs (2^64 blocks); up to 2^64 non-overlapping
    /// subsequences.
    fn jump(&mut self) -> Self {
        let copy = self.clone();
        self.counter[2] = self.counter[2].wrapping_add(1);
        if self.counter[2] == 0 {
            self.counter[3] = self.counter[3].wrapping_add(1);
        }
        self.finish_jump();
        copy
    }
}

impl LongJumpable for Philox4x32 {
    /// Advance by 2^98 outputs; up to 2^32 subsequences each
    /// subdividable with `jump`.
    fn long_jump(&mut self) -> Self {
        let copy = self.clone();
        self.counter[3] = self.counter[3].wrapping_add(1);
        self.finish_jump();
        copy
    }
}

impl ArbitrarilyJumpable for Philox4x32 {
    fn jump_distance(&mut self, distance: f64) -> Self {
        assert!(
            distance >= 0.0 && distance < PERIOD,
            "jump distance must be a finite value within the period"
        );
        // Split the distance into a skip within the current block and a
        // counter increment of whole blocks.
        let skip = if distance < TWO_POW_54 {
            distance as usize & 0x3
        } else {
            0
        };
        let mut increment = [0u32; 4];
        if distance >= BUFFER_SIZE as f64 {
            write_unsigned_integer(distance * 0.25, &mut increment);
        }
        self.copy_and_jump(skip, increment)
    }

    fn jump_power_of_two(&mut self, log_distance: u32) -> Self {
        assert!(
            log_distance < LOG_PERIOD,
            "log distance must be below the log2 of the period"
        );
        let mut skip = 0;
        let mut increment = [0u32; 4];
        if log_distance <= 1 {
            // The first two powers move within a block.
            skip = 1 << log_distance;
        } else {
            let n = log_distance - 2;
            increment[(n >> 5) as usize] = 1 << (n & 0x1f);
        }
        self.copy_and_jump(skip, increment)
    }
}

/// Write an integral double below 2^128 into little-endian 32-bit words.
fn write_unsigned_integer(value: f64, out: &mut [u32; 4]) {
    let mut v = value as u128;
    for word in out.iter_mut() {
        *word = v as u32;
        v >>= 32;
    }
}

impl RestorableState for Philox4x32 {
    fn save_state(&self) -> RngState {
        let mut out = RngState::with_capacity(28 + BitCache32::STATE_BYTES);
        out.push_u32(self.key[0]);
        out.push_u32(self.key[1]);
        for word in self.counter {
            out.push_u32(word);
        }
        out.push_u32(self.buffer_position as u32);
        self.cache.save(&mut out);
        out
    }

    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError> {
        let mut reader = state.reader(28 + BitCache32::STATE_BYTES)?;
        self.key = [reader.read_u32(), reader.read_u32()];
        for word in &mut self.counter {
            *word = reader.read_u32();
        }
        self.buffer_position = (reader.read_u32() as usize).min(BUFFER_SIZE);
        self.cache.restore(&mut reader);
        // The buffer is derived state; rebuild it from the counter.
        self.generate();
        Ok(())
    }
}
