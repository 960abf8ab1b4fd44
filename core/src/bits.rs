//! Bit-to-number conversions shared by all generators.
//!
//! Floating point values are built from the high bits of raw output so the
//! result is uniform over a power-of-two grid in `[0, 1)`. The byte fillers
//! emit each word low byte first.

/// 2^-53, the spacing of the 53-bit double grid on [0, 1).
const DOUBLE_MULTIPLIER: f64 = 1.0 / 9007199254740992.0;

/// 2^-24, the spacing of the 24-bit float grid on [0, 1).
const FLOAT_MULTIPLIER: f32 = 1.0 / 16777216.0;

/// Build a `f64` in `[0, 1)` from the high 53 bits of a `u64`.
#[inline]
pub(crate) fn f64_from_u64(v: u64) -> f64 {
    (v >> 11) as f64 * DOUBLE_MULTIPLIER
}

/// Build a `f64` in `[0, 1)` from two `u32` words (26 + 27 bits).
#[inline]
pub(crate) fn f64_from_u32_pair(v: u32, w: u32) -> f64 {
    (((u64::from(v) >> 6) << 27) | (u64::from(w) >> 5)) as f64 * DOUBLE_MULTIPLIER
}

/// Build a `f32` in `[0, 1)` from the high 24 bits of a `u32`.
#[inline]
pub(crate) fn f32_from_u32(v: u32) -> f32 {
    (v >> 8) as f32 * FLOAT_MULTIPLIER
}

/// Build a `f32` in `[0, 1)` from the high 24 bits of a `u64`.
#[inline]
pub(crate) fn f32_from_u64(v: u64) -> f32 {
    (v >> 40) as f32 * FLOAT_MULTIPLIER
}

/// Fill `dest` from a stream of `u32` words, low byte first.
///
/// The unused high bytes of the final word are discarded when the slice
/// length is not a multiple of four.
pub(crate) fn fill_bytes_u32<F: FnMut() -> u32>(dest: &mut [u8], mut next: F) {
    let mut chunks = dest.chunks_exact_mut(4);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&next().to_le_bytes());
    }
    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let bytes = next().to_le_bytes();
        tail.copy_from_slice(&bytes[..tail.len()]);
    }
}

/// Fill `dest` from a stream of `u64` words, low byte first.
pub(crate) fn fill_bytes_u64<F: FnMut() -> u64>(dest: &mut [u8], mut next: F) {
    let mut chunks = dest.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&next().to_le_bytes());
    }
    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let bytes = next().to_le_bytes();
        tail.copy_from_slice(&bytes[..tail.len()]);
    }
}
