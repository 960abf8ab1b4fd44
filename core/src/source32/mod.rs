//! Generators whose native output is a 32-bit word.
//!
//! 64-bit values are composed from two native words, high word first;
//! booleans and smaller requests are served from a cached word.

mod jsf;
mod lxm32;
mod msws;
mod pcg32;
mod philox;
mod sfc;
mod xoroshiro64;
mod xoshiro128;

pub use jsf::Jsf32;
pub use lxm32::L32X64Mix;
pub use msws::MiddleSquareWeylSequence;
pub use pcg32::{PcgMcgXshRr32, PcgXshRr32, PcgXshRs32};
pub use philox::Philox4x32;
pub use sfc::Sfc32;
pub use xoroshiro64::{XoRoShiRo64Star, XoRoShiRo64StarStar};
pub use xoshiro128::{XoShiRo128Plus, XoShiRo128PlusPlus, XoShiRo128StarStar};
