//! Shared statistical assertions for generator output.
//!
//! These are coarse screens with fixed significance levels, not a
//! substitute for a full test battery. Every check is deterministic
//! because every generator under test is seeded explicitly.

use splitstream_core_rs::UniformRandomProvider;

/// Two-sided z critical value at alpha = 0.01.
const Z_CRITICAL: f64 = 2.5758;

/// Chi-square critical value for 255 degrees of freedom at
/// alpha = 0.001.
const CHI_SQUARE_CRITICAL_255: f64 = 311.560343;

/// Assert the one-bit frequency over `words` 64-bit outputs stays within
/// the two-sided 99% band around one half.
pub fn assert_monobit<R: UniformRandomProvider + ?Sized>(rng: &mut R, words: usize) {
    let total_bits = (words * 64) as f64;
    let mut ones = 0u64;
    for _ in 0..words {
        ones += u64::from(rng.next_u64().count_ones());
    }
    let deviation = (2.0 * ones as f64 - total_bits).abs();
    let bound = Z_CRITICAL * total_bits.sqrt();
    assert!(
        deviation <= bound,
        "monobit deviation {deviation} exceeds bound {bound} ({ones} ones in {total_bits} bits)"
    );
}

/// Assert a chi-square goodness of fit over 256 byte bins at
/// alpha = 0.001.
pub fn assert_bytes_uniform<R: UniformRandomProvider + ?Sized>(rng: &mut R, n_bytes: usize) {
    let mut bytes = vec![0u8; n_bytes];
    rng.fill_bytes(&mut bytes);
    let mut bins = [0u64; 256];
    for b in bytes {
        bins[b as usize] += 1;
    }
    assert_chi_square_256(&bins, n_bytes);
}

/// Assert a chi-square goodness of fit for pre-binned counts over 256
/// equally likely bins.
pub fn assert_chi_square_256(bins: &[u64; 256], samples: usize) {
    let expected = samples as f64 / 256.0;
    let statistic: f64 = bins
        .iter()
        .map(|&observed| {
            let d = observed as f64 - expected;
            d * d / expected
        })
        .sum();
    assert!(
        statistic < CHI_SQUARE_CRITICAL_255,
        "chi-square statistic {statistic} exceeds critical value {CHI_SQUARE_CRITICAL_255}"
    );
}
