//! The uniform generation interface shared by every generator.
//!
//! Each generator implements one native width (`next_u32` or `next_u64`
//! is the raw transition); the other primitive methods are derived by the
//! `impl_provider32!` / `impl_provider64!` macros, and the bounded methods
//! are provided by the trait itself on top of the primitives.
//!
//! # Critical Invariants
//!
//! - Derived output caches (unconsumed boolean bits, the pending high word
//!   of a 64-bit source) are part of generator state: they survive
//!   save/restore and serde, and are invalidated by jump and split.
//! - Two generators with equal state produce byte-identical output through
//!   every method of this trait, in any call order.

use serde::{Deserialize, Serialize};

use crate::sampling;

/// Uniform random generation over the full primitive types.
///
/// # Example
/// ```
/// use splitstream_core_rs::{UniformRandomProvider, XoShiRo256PlusPlus};
///
/// let mut rng = XoShiRo256PlusPlus::new([1, 2, 3, 4]);
/// let word = rng.next_u64();
/// let coin = rng.next_bool();
/// let unit = rng.next_f64(); // [0.0, 1.0)
/// let die = rng.next_u32_below(6); // [0, 6)
/// ```
pub trait UniformRandomProvider {
    /// Next uniform 32-bit word.
    fn next_u32(&mut self) -> u32;

    /// Next uniform 64-bit word.
    fn next_u64(&mut self) -> u64;

    /// Next uniform boolean, one cached bit per call.
    fn next_bool(&mut self) -> bool;

    /// Next uniform `f32` in `[0.0, 1.0)` on the 24-bit grid.
    fn next_f32(&mut self) -> f32;

    /// Next uniform `f64` in `[0.0, 1.0)` on the 53-bit grid.
    fn next_f64(&mut self) -> f64;

    /// Fill `dest` with uniform bytes, each raw word emitted low byte
    /// first.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Uniform value in `[0, n)` without modulo bias.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    fn next_u32_below(&mut self, n: u32) -> u32 {
        sampling::next_u32_below(self, n)
    }

    /// Uniform value in `[0, n)` without modulo bias.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    fn next_u64_below(&mut self, n: u64) -> u64 {
        sampling::next_u64_below(self, n)
    }

    /// Uniform value in `[origin, bound)`.
    ///
    /// # Panics
    /// Panics if `origin >= bound`.
    fn next_i32_between(&mut self, origin: i32, bound: i32) -> i32 {
        sampling::next_i32_between(self, origin, bound)
    }

    /// Uniform value in `[origin, bound)`.
    ///
    /// # Panics
    /// Panics if `origin >= bound`.
    fn next_i64_between(&mut self, origin: i64, bound: i64) -> i64 {
        sampling::next_i64_between(self, origin, bound)
    }

    /// Uniform `f32` in `[0.0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is not strictly positive and finite.
    fn next_f32_below(&mut self, bound: f32) -> f32 {
        sampling::next_f32_below(self, bound)
    }

    /// Uniform `f32` in `[origin, bound)`.
    ///
    /// # Panics
    /// Panics if the bounds are not finite or `origin >= bound`.
    fn next_f32_between(&mut self, origin: f32, bound: f32) -> f32 {
        sampling::next_f32_between(self, origin, bound)
    }

    /// Uniform `f64` in `[0.0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is not strictly positive and finite.
    fn next_f64_below(&mut self, bound: f64) -> f64 {
        sampling::next_f64_below(self, bound)
    }

    /// Uniform `f64` in `[origin, bound)`.
    ///
    /// # Panics
    /// Panics if the bounds are not finite or `origin >= bound`.
    fn next_f64_between(&mut self, origin: f64, bound: f64) -> f64 {
        sampling::next_f64_between(self, origin, bound)
    }
}

/// Output cache for a 32-bit source: unconsumed boolean bits.
///
/// The cache word holds a marker bit above the remaining payload bits and
/// decays to the sentinel value 1 when empty, so emptiness and fill level
/// are encoded in a single word that serializes with the rest of the
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BitCache32 {
    bool_source: u32,
}

impl BitCache32 {
    pub(crate) fn new() -> Self {
        BitCache32 { bool_source: 1 }
    }

    /// Consume one cached bit, or `None` when a refill is needed.
    pub(crate) fn take_bool(&mut self) -> Option<bool> {
        if self.bool_source == 1 {
            return None;
        }
        let bit = self.bool_source & 1 == 1;
        self.bool_source >>= 1;
        Some(bit)
    }

    /// Refill from a fresh word and consume its first bit.
    pub(crate) fn refill_bool(&mut self, word: u32) -> bool {
        self.bool_source = (1 << 31) | (word >> 1);
        word & 1 == 1
    }

    /// Discard cached bits; used after jump, split and restore.
    pub(crate) fn clear(&mut self) {
        self.bool_source = 1;
    }

    pub(crate) fn save(&self, out: &mut crate::state::RngState) {
        out.push_u32(self.bool_source);
    }

    pub(crate) fn restore(&mut self, reader: &mut crate::state::StateReader<'_>) {
        self.bool_source = reader.read_u32();
    }

    pub(crate) const STATE_BYTES: usize = 4;
}

/// Output cache for a 64-bit source: unconsumed boolean bits plus the
/// pending high half of the last word split into two `u32` outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BitCache64 {
    bool_source: u64,
    // Sentinel u64::MAX when empty; a stashed high word is always < 2^32.
    int_source: u64,
}

impl BitCache64 {
    pub(crate) fn new() -> Self {
        BitCache64 {
            bool_source: 1,
            int_source: u64::MAX,
        }
    }

    pub(crate) fn take_bool(&mut self) -> Option<bool> {
        if self.bool_source == 1 {
            return None;
        }
        let bit = self.bool_source & 1 == 1;
        self.bool_source >>= 1;
        Some(bit)
    }

    pub(crate) fn refill_bool(&mut self, word: u64) -> bool {
        self.bool_source = (1 << 63) | (word >> 1);
        word & 1 == 1
    }

    /// Consume the pending high word, if any.
    pub(crate) fn take_u32(&mut self) -> Option<u32> {
        if self.int_source == u64::MAX {
            return None;
        }
        let word = self.int_source as u32;
        self.int_source = u64::MAX;
        Some(word)
    }

    /// Stash the high half of a fresh word and return its low half.
    pub(crate) fn split_word(&mut self, word: u64) -> u32 {
        self.int_source = word >> 32;
        word as u32
    }

    pub(crate) fn clear(&mut self) {
        self.bool_source = 1;
        self.int_source = u64::MAX;
    }

    pub(crate) fn save(&self, out: &mut crate::state::RngState) {
        out.push_u64(self.bool_source);
        out.push_u64(self.int_source);
    }

    pub(crate) fn restore(&mut self, reader: &mut crate::state::StateReader<'_>) {
        self.bool_source = reader.read_u64();
        self.int_source = reader.read_u64();
    }

    pub(crate) const STATE_BYTES: usize = 16;
}

/// Implement [`UniformRandomProvider`] for a 32-bit native source.
///
/// The type must provide an inherent `fn next(&mut self) -> u32` and a
/// `cache: BitCache32` field.
macro_rules! impl_provider32 {
    ($t:ty) => {
        impl $crate::provider::UniformRandomProvider for $t {
            fn next_u32(&mut self) -> u32 {
                self.next()
            }

            fn next_u64(&mut self) -> u64 {
                let hi = u64::from(self.next());
                let lo = u64::from(self.next());
                (hi << 32) | lo
            }

            fn next_bool(&mut self) -> bool {
                match self.cache.take_bool() {
                    Some(bit) => bit,
                    None => {
                        let word = self.next();
                        self.cache.refill_bool(word)
                    }
                }
            }

            fn next_f32(&mut self) -> f32 {
                $crate::bits::f32_from_u32(self.next())
            }

            fn next_f64(&mut self) -> f64 {
                let v = self.next();
                let w = self.next();
                $crate::bits::f64_from_u32_pair(v, w)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                $crate::bits::fill_bytes_u32(dest, || self.next());
            }
        }
    };
}

/// Implement [`UniformRandomProvider`] for a 64-bit native source.
///
/// The type must provide an inherent `fn next(&mut self) -> u64` and a
/// `cache: BitCache64` field.
macro_rules! impl_provider64 {
    ($t:ty) => {
        impl $crate::provider::UniformRandomProvider for $t {
            fn next_u32(&mut self) -> u32 {
                match self.cache.take_u32() {
                    Some(word) => word,
                    None => {
                        let bits = self.next();
                        self.cache.split_word(bits)
                    }
                }
            }

            fn next_u64(&mut self) -> u64 {
                self.next()
            }

            fn next_bool(&mut self) -> bool {
                match self.cache.take_bool() {
                    Some(bit) => bit,
                    None => {
                        let word = self.next();
                        self.cache.refill_bool(word)
                    }
                }
            }

            fn next_f32(&mut self) -> f32 {
                $crate::bits::f32_from_u64(self.next())
            }

            fn next_f64(&mut self) -> f64 {
                $crate::bits::f64_from_u64(self.next())
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                $crate::bits::fill_bytes_u64(dest, || self.next());
            }
        }
    };
}

pub(crate) use impl_provider32;
pub(crate) use impl_provider64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_cache32_decays_to_sentinel() {
        let mut cache = BitCache32::new();
        assert!(cache.take_bool().is_none());
        // Refill with all-ones: first bit comes from the refill itself.
        assert!(cache.refill_bool(u32::MAX));
        for _ in 0..31 {
            assert_eq!(cache.take_bool(), Some(true));
        }
        assert!(cache.take_bool().is_none(), "cache should be empty again");
    }

    #[test]
    fn test_bit_cache64_int_source_round_trip() {
        let mut cache = BitCache64::new();
        assert!(cache.take_u32().is_none());
        let low = cache.split_word(0xaaaa_bbbb_cccc_ddddu64);
        assert_eq!(low, 0xcccc_dddd);
        assert_eq!(cache.take_u32(), Some(0xaaaa_bbbb));
        assert!(cache.take_u32().is_none());
    }

    #[test]
    fn test_bit_cache64_clear_discards_pending() {
        let mut cache = BitCache64::new();
        cache.split_word(0x1234_5678_9abc_def0);
        cache.refill_bool(0xffff_ffff_ffff_ffff);
        cache.clear();
        assert!(cache.take_u32().is_none());
        assert!(cache.take_bool().is_none());
    }
}
