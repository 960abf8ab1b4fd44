//! Deterministic pseudorandom generation built for reproducible parallel
//! simulation.
//!
//! The crate provides a roster of small-state generator cores behind one
//! uniform interface:
//!
//! - [`UniformRandomProvider`]: full-word, boolean, floating point and
//!   unbiased bounded output from any generator.
//! - [`Jumpable`] / [`LongJumpable`] / [`ArbitrarilyJumpable`]: cheap
//!   stream partitioning for generators with a defined jump function.
//! - [`Splittable`]: derivation of statistically independent child
//!   streams for the LXM family.
//! - [`RestorableState`]: byte-exact state checkpointing, including the
//!   partially consumed output caches, so a restored generator replays
//!   the identical sequence through every output method.
//!
//! # Critical Invariants
//!
//! - Identical seeds produce identical sequences on every platform; no
//!   generator reads ambient entropy.
//! - Bounded sampling is exactly uniform: rejection, never modulo.
//! - `save_state` and `restore_state` round-trip through any sequence of
//!   output calls, including mid-cache.
//!
//! # Example
//! ```
//! use splitstream_core_rs::{Jumpable, UniformRandomProvider, XoShiRo256PlusPlus};
//!
//! let mut master = XoShiRo256PlusPlus::from_seed(&[0x012de1babb3c4104]);
//! // Give each worker its own 2^128 output stream.
//! let mut workers: Vec<_> = (0..4).map(|_| master.jump()).collect();
//! let sample = workers[0].next_u32_below(100);
//! assert!(sample < 100);
//! ```

pub(crate) mod bits;
mod error;
mod jump;
mod provider;
pub(crate) mod sampling;
mod seed;
pub mod source32;
pub mod source64;
mod state;

pub use error::RngError;
pub use jump::{ArbitrarilyJumpable, Jumpable, LongJumpable, Splittable};
pub use provider::UniformRandomProvider;
pub use seed::SeedSource;
pub use state::{RestorableState, RngState};

pub use source32::{
    Jsf32, L32X64Mix, MiddleSquareWeylSequence, PcgMcgXshRr32, PcgXshRr32, PcgXshRs32, Philox4x32,
    Sfc32, XoRoShiRo64Star, XoRoShiRo64StarStar, XoShiRo128Plus, XoShiRo128PlusPlus,
    XoShiRo128StarStar,
};
pub use source64::{
    L128X128Mix, L64X128Mix, PcgRxsMXs64, Sfc64, SplitMix64, XoRoShiRo128Plus,
    XoRoShiRo128PlusPlus, XoShiRo256Plus, XoShiRo256PlusPlus, XoShiRo256StarStar,
};
