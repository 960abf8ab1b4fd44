//! Seed canonicalization and the shared automatic seed source.
//!
//! Short seeds are always extended deterministically so that every
//! constructor accepts any non-empty seed slice. Two schemes are used:
//! a Well-style scramble of earlier words (the classic linear families)
//! and a SplitMix-style golden-ratio walk (the LXM families). Both
//! guarantee the extension contains at most one zero word even for an
//! all-zero input seed.

use std::sync::{Mutex, MutexGuard};

use crate::source64::SplitMix64;

/// Fractional part of the golden ratio scaled to 64 bits, rounded to odd.
pub(crate) const GOLDEN_RATIO_64: u64 = 0x9e37_79b9_7f4a_7c15;
/// Fractional part of the golden ratio scaled to 32 bits, rounded to odd.
pub(crate) const GOLDEN_RATIO_32: u32 = 0x9e37_79b9;

/// Copy `seed` into an `N` word state, extending short seeds with the
/// Well-style scramble of the word `N` positions back.
pub(crate) fn fill_state_u32<const N: usize>(seed: &[u32]) -> [u32; N] {
    assert!(!seed.is_empty(), "seed must not be empty");
    let mut state = [0u32; N];
    let n = seed.len().min(N);
    state[..n].copy_from_slice(&seed[..n]);
    for i in n..N {
        state[i] = scramble_well(i64::from(state[i - n] as i32), i as i64) as u32;
    }
    state
}

/// 64-bit variant of [`fill_state_u32`].
pub(crate) fn fill_state_u64<const N: usize>(seed: &[u64]) -> [u64; N] {
    assert!(!seed.is_empty(), "seed must not be empty");
    let mut state = [0u64; N];
    let n = seed.len().min(N);
    state[..n].copy_from_slice(&seed[..n]);
    for i in n..N {
        state[i] = scramble_well(state[i - n] as i64, i as i64) as u64;
    }
    state
}

// The shift is arithmetic on the sign-extended value.
fn scramble_well(n: i64, add: i64) -> i64 {
    1_812_433_253i64.wrapping_mul(n ^ (n >> 30)).wrapping_add(add)
}

/// Extend a short seed with a SplitMix-style walk seeded from the first
/// word, finalized with the Stafford variant-13 mixer.
pub(crate) fn extend_seed_u64<const N: usize>(seed: &[u64]) -> [u64; N] {
    assert!(!seed.is_empty(), "seed must not be empty");
    let mut s = [0u64; N];
    let n = seed.len().min(N);
    s[..n].copy_from_slice(&seed[..n]);
    let mut x = s[0];
    for word in &mut s[n..] {
        x = x.wrapping_add(GOLDEN_RATIO_64);
        *word = stafford13(x);
    }
    s
}

/// 32-bit variant of [`extend_seed_u64`], finalized with the MurmurHash3
/// mixer.
pub(crate) fn extend_seed_u32<const N: usize>(seed: &[u32]) -> [u32; N] {
    assert!(!seed.is_empty(), "seed must not be empty");
    let mut s = [0u32; N];
    let n = seed.len().min(N);
    s[..n].copy_from_slice(&seed[..n]);
    let mut x = s[0];
    for word in &mut s[n..] {
        x = x.wrapping_add(GOLDEN_RATIO_32);
        *word = murmur3(x);
    }
    s
}

/// David Stafford's variant-13 64-bit mix function.
pub(crate) fn stafford13(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// MurmurHash3 32-bit finalizer.
pub(crate) fn murmur3(mut x: u32) -> u32 {
    x = (x ^ (x >> 16)).wrapping_mul(0x85eb_ca6b);
    x = (x ^ (x >> 13)).wrapping_mul(0xc2b2_ae35);
    x ^ (x >> 16)
}

/// Doug Lea's 64-bit mix function with a single constant and 32-bit
/// shifts, used by the LXM output path and split seeding.
pub(crate) fn lea64(mut x: u64) -> u64 {
    x = (x ^ (x >> 32)).wrapping_mul(0xdaba_0b6e_b093_22e3);
    x = (x ^ (x >> 32)).wrapping_mul(0xdaba_0b6e_b093_22e3);
    x ^ (x >> 32)
}

/// 32-bit variant of [`lea64`] with 16-bit shifts.
pub(crate) fn lea32(mut x: u32) -> u32 {
    x = (x ^ (x >> 16)).wrapping_mul(0xd36d_884b);
    x = (x ^ (x >> 16)).wrapping_mul(0xd36d_884b);
    x ^ (x >> 16)
}

/// A shared source of seed material for automatic generator seeding.
///
/// The source is an explicit object the caller creates and passes around;
/// there is no ambient global. Access is serialized with a mutex so one
/// instance can seed generators from multiple threads without producing
/// duplicate seeds.
///
/// # Example
/// ```
/// use splitstream_core_rs::{SeedSource, XoShiRo256PlusPlus};
///
/// let seeds = SeedSource::new(0x9e3779b97f4a7c15);
/// let rng = XoShiRo256PlusPlus::new(seeds.seed_array());
/// ```
#[derive(Debug)]
pub struct SeedSource {
    inner: Mutex<SplitMix64>,
}

impl SeedSource {
    /// Create a seed source from an entropy value.
    pub fn new(seed: u64) -> Self {
        SeedSource {
            inner: Mutex::new(SplitMix64::new(seed)),
        }
    }

    /// Draw one 64-bit seed word.
    pub fn next_seed_u64(&self) -> u64 {
        use crate::provider::UniformRandomProvider;
        self.lock().next_u64()
    }

    /// Draw one 32-bit seed word.
    pub fn next_seed_u32(&self) -> u32 {
        use crate::provider::UniformRandomProvider;
        self.lock().next_u64() as u32
    }

    /// Draw a fixed-size array of 64-bit seed words in one lock hold.
    pub fn seed_array<const N: usize>(&self) -> [u64; N] {
        use crate::provider::UniformRandomProvider;
        let mut rng = self.lock();
        let mut seed = [0u64; N];
        for word in &mut seed {
            *word = rng.next_u64();
        }
        seed
    }

    /// Draw a fixed-size array of 32-bit seed words in one lock hold.
    pub fn seed_array_u32<const N: usize>(&self) -> [u32; N] {
        use crate::provider::UniformRandomProvider;
        let mut rng = self.lock();
        let mut seed = [0u32; N];
        for word in &mut seed {
            *word = rng.next_u64() as u32;
        }
        seed
    }

    fn lock(&self) -> MutexGuard<'_, SplitMix64> {
        // A poisoned lock only means a panic elsewhere; the generator
        // state is always valid.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
