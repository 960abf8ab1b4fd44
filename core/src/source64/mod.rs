//! Generators whose native output is a 64-bit word.
//!
//! 32-bit values are served from the halves of a cached native word,
//! low half first; booleans are served bit by bit from another.

mod lxm128;
mod lxm64;
mod pcg64;
mod sfc;
mod splitmix;
mod xoroshiro128;
mod xoshiro256;

pub use lxm128::L128X128Mix;
pub use lxm64::L64X128Mix;
pub use pcg64::PcgRxsMXs64;
pub use sfc::Sfc64;
pub use splitmix::SplitMix64;
pub use xoroshiro128::{XoRoShiRo128Plus, XoRoShiRo128PlusPlus};
pub use xoshiro256::{XoShiRo256Plus, XoShiRo256PlusPlus, XoShiRo256StarStar};
