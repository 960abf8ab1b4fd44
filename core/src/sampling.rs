//! Bounded sampling without modulo bias.
//!
//! Integer bounds use rejection (multiply-shift for 32-bit, masked modulo
//! for 63-bit values); float bounds use an overflow-safe affine map of the
//! unit value. Arguments are validated before any randomness is consumed,
//! so a panicking call never advances the generator.

use crate::provider::UniformRandomProvider;

/// Uniform `u32` in `[0, n)` via multiply-shift rejection.
///
/// A single multiply maps the raw word onto `[0, n)`; draws landing in the
/// short leading zone of `2^32 mod n` values are rejected, which keeps
/// every bucket exactly the same size.
pub(crate) fn next_u32_below<R: UniformRandomProvider + ?Sized>(rng: &mut R, n: u32) -> u32 {
    assert!(n > 0, "upper bound must be strictly positive");
    let mut m = u64::from(rng.next_u32()) * u64::from(n);
    let mut low = m as u32;
    if low < n {
        // 2^32 mod n
        let threshold = n.wrapping_neg() % n;
        while low < threshold {
            m = u64::from(rng.next_u32()) * u64::from(n);
            low = m as u32;
        }
    }
    (m >> 32) as u32
}

/// Uniform `u64` in `[0, n)`.
pub(crate) fn next_u64_below<R: UniformRandomProvider + ?Sized>(rng: &mut R, n: u64) -> u64 {
    assert!(n > 0, "upper bound must be strictly positive");
    if n > 1 << 63 {
        // Bounds above 2^63 accept more than half of all raw words, so
        // direct rejection terminates quickly.
        loop {
            let v = rng.next_u64();
            if v < n {
                return v;
            }
        }
    }
    loop {
        let bits = rng.next_u64() >> 1;
        let val = bits % n;
        // Reject the partial top interval of the 63-bit range.
        if bits.wrapping_sub(val).wrapping_add(n - 1) < 1 << 63 {
            return val;
        }
    }
}

/// Uniform `i32` in `[origin, bound)`.
pub(crate) fn next_i32_between<R: UniformRandomProvider + ?Sized>(
    rng: &mut R,
    origin: i32,
    bound: i32,
) -> i32 {
    assert!(origin < bound, "origin must be less than bound");
    let n = bound.wrapping_sub(origin);
    if n > 0 {
        return origin.wrapping_add(next_u32_below(rng, n as u32) as i32);
    }
    // Range width of 2^31 or more: more than half of all raw words land
    // inside, reject the rest.
    loop {
        let v = rng.next_u32() as i32;
        if v >= origin && v < bound {
            return v;
        }
    }
}

/// Uniform `i64` in `[origin, bound)`.
pub(crate) fn next_i64_between<R: UniformRandomProvider + ?Sized>(
    rng: &mut R,
    origin: i64,
    bound: i64,
) -> i64 {
    assert!(origin < bound, "origin must be less than bound");
    let n = bound.wrapping_sub(origin);
    if n > 0 {
        return origin.wrapping_add(next_u64_below(rng, n as u64) as i64);
    }
    loop {
        let v = rng.next_u64() as i64;
        if v >= origin && v < bound {
            return v;
        }
    }
}

/// Uniform `f32` in `[0.0, bound)`.
pub(crate) fn next_f32_below<R: UniformRandomProvider + ?Sized>(rng: &mut R, bound: f32) -> f32 {
    assert!(
        bound > 0.0 && bound.is_finite(),
        "bound must be strictly positive and finite"
    );
    let v = rng.next_f32() * bound;
    // Rounding can land exactly on the open bound.
    if v >= bound {
        bound.next_down()
    } else {
        v
    }
}

/// Uniform `f32` in `[origin, bound)`.
pub(crate) fn next_f32_between<R: UniformRandomProvider + ?Sized>(
    rng: &mut R,
    origin: f32,
    bound: f32,
) -> f32 {
    assert!(origin.is_finite() && bound.is_finite(), "bounds must be finite");
    assert!(origin < bound, "origin must be less than bound");
    let u = rng.next_f32();
    // Two-product form stays finite even when bound - origin overflows.
    let v = (1.0 - u) * origin + u * bound;
    if v >= bound {
        bound.next_down()
    } else {
        v
    }
}

/// Uniform `f64` in `[0.0, bound)`.
pub(crate) fn next_f64_below<R: UniformRandomProvider + ?Sized>(rng: &mut R, bound: f64) -> f64 {
    assert!(
        bound > 0.0 && bound.is_finite(),
        "bound must be strictly positive and finite"
    );
    let v = rng.next_f64() * bound;
    if v >= bound {
        bound.next_down()
    } else {
        v
    }
}

/// Uniform `f64` in `[origin, bound)`.
pub(crate) fn next_f64_between<R: UniformRandomProvider + ?Sized>(
    rng: &mut R,
    origin: f64,
    bound: f64,
) -> f64 {
    assert!(origin.is_finite() && bound.is_finite(), "bounds must be finite");
    assert!(origin < bound, "origin must be less than bound");
    let u = rng.next_f64();
    let v = (1.0 - u) * origin + u * bound;
    if v >= bound {
        bound.next_down()
    } else {
        v
    }
}
