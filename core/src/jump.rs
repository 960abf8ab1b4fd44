//! Capability traits for parallel stream decorrelation.
//!
//! A jump replaces many sequential state transitions with one cheap state
//! computation. The mutating generator ends up `D` steps ahead; the
//! returned copy keeps the pre-jump position, so repeated calls carve the
//! period into non-overlapping streams:
//!
//! ```
//! use splitstream_core_rs::{Jumpable, UniformRandomProvider, XoShiRo256PlusPlus};
//!
//! let mut source = XoShiRo256PlusPlus::new([1, 2, 3, 4]);
//! let mut stream_a = source.jump(); // first 2^128 outputs
//! let mut stream_b = source.jump(); // next 2^128 outputs
//! assert_ne!(stream_a.next_u64(), stream_b.next_u64());
//! ```
//!
//! Capabilities are static: a generator without a defined jump function
//! simply does not implement the trait.

use crate::provider::UniformRandomProvider;

/// A fixed-distance jump, typically the square root of the period.
pub trait Jumpable: Sized {
    /// Advance this generator by the family's jump distance and return a
    /// copy positioned at the pre-jump state.
    ///
    /// Cached output (boolean bits, pending words) is discarded from the
    /// advanced generator; the returned copy keeps it.
    fn jump(&mut self) -> Self;
}

/// A second, larger jump distance for two-level stream partitioning.
pub trait LongJumpable: Jumpable {
    /// Advance by the family's long-jump distance and return a copy
    /// positioned at the pre-jump state.
    fn long_jump(&mut self) -> Self;
}

/// Jumps of caller-chosen distance, available to counter-based
/// generators whose position is explicit in the state.
pub trait ArbitrarilyJumpable: Jumpable {
    /// Advance by `distance` outputs and return the pre-jump copy.
    ///
    /// # Panics
    /// Panics if `distance` is negative, not finite, or not an integer
    /// value representable within the generator's period.
    fn jump_distance(&mut self, distance: f64) -> Self;

    /// Advance by `2^log_distance` outputs and return the pre-jump copy.
    ///
    /// # Panics
    /// Panics if `log_distance` meets or exceeds the log2 of the period.
    fn jump_power_of_two(&mut self, log_distance: u32) -> Self;
}

/// Deterministic stream splitting.
///
/// Splitting derives a new generator instance whose sequence is
/// statistically independent of its source; unlike a jump it changes the
/// instance parameters, not just the position.
pub trait Splittable: UniformRandomProvider + Sized {
    /// Create a new generator seeded from `source`'s output.
    fn split_from(source: &mut dyn UniformRandomProvider) -> Self;

    /// Create a new generator seeded from this generator's own output,
    /// advancing it.
    fn split(&mut self) -> Self {
        Self::split_from(self)
    }
}
