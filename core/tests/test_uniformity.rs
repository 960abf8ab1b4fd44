//! Statistical screens over every generator family: bit frequency, byte
//! distribution and bounded sampling bucket counts.
//!
//! Seeds are fixed, so these tests are deterministic; a failure means a
//! code defect, not bad luck.

mod common;

use splitstream_core_rs::{
    Jsf32, L128X128Mix, L32X64Mix, L64X128Mix, MiddleSquareWeylSequence, PcgMcgXshRr32,
    PcgRxsMXs64, PcgXshRr32, PcgXshRs32, Philox4x32, Sfc32, Sfc64, SplitMix64,
    UniformRandomProvider, XoRoShiRo128Plus, XoRoShiRo128PlusPlus, XoRoShiRo64Star,
    XoRoShiRo64StarStar, XoShiRo128Plus, XoShiRo128PlusPlus, XoShiRo128StarStar, XoShiRo256Plus,
    XoShiRo256PlusPlus, XoShiRo256StarStar,
};

const WORDS: usize = 1 << 16;

#[test]
fn test_monobit_all_generators() {
    let seed32: [u32; 4] = [0x012d_e1ba, 0xa5a8_18b8, 0xb124_ea2b, 0x18e0_3749];
    let seed64: [u64; 4] = [
        0x012d_e1ba_bb3c_4104,
        0xa5a8_18b8_fc5a_a503,
        0xb124_ea2b_701f_4993,
        0x18e0_3749_33d8_c782,
    ];

    let mut sources: Vec<Box<dyn UniformRandomProvider>> = vec![
        Box::new(XoShiRo128Plus::new(seed32)),
        Box::new(XoShiRo128PlusPlus::new(seed32)),
        Box::new(XoShiRo128StarStar::new(seed32)),
        Box::new(XoRoShiRo64Star::new([seed32[0], seed32[1]])),
        Box::new(XoRoShiRo64StarStar::new([seed32[0], seed32[1]])),
        Box::new(XoShiRo256Plus::new(seed64)),
        Box::new(XoShiRo256PlusPlus::new(seed64)),
        Box::new(XoShiRo256StarStar::new(seed64)),
        Box::new(XoRoShiRo128Plus::new([seed64[0], seed64[1]])),
        Box::new(XoRoShiRo128PlusPlus::new([seed64[0], seed64[1]])),
        Box::new(PcgXshRr32::new(seed64[0])),
        Box::new(PcgXshRs32::new(seed64[0])),
        Box::new(PcgMcgXshRr32::new(seed64[0])),
        Box::new(PcgRxsMXs64::new(seed64[0])),
        Box::new(Philox4x32::from_seed(&[seed32[0], seed32[1]])),
        Box::new(L32X64Mix::from_seed(&seed32)),
        Box::new(L64X128Mix::from_seed(&seed64)),
        Box::new(L128X128Mix::from_seed(&seed64)),
        Box::new(MiddleSquareWeylSequence::from_seed(&seed64[..3])),
        Box::new(Sfc32::from_seed(&seed32[..3])),
        Box::new(Sfc64::from_seed(&seed64[..3])),
        Box::new(Jsf32::new(seed32[0])),
        Box::new(SplitMix64::new(seed64[0])),
    ];

    for rng in &mut sources {
        common::assert_monobit(rng.as_mut(), WORDS);
    }
}

#[test]
fn test_byte_distribution_representatives() {
    common::assert_bytes_uniform(&mut XoShiRo256PlusPlus::new([1, 2, 3, 4]), 1 << 18);
    common::assert_bytes_uniform(&mut PcgXshRr32::new(42), 1 << 18);
    common::assert_bytes_uniform(&mut Philox4x32::from_seed(&[1234]), 1 << 18);
    common::assert_bytes_uniform(&mut L64X128Mix::from_seed(&[42]), 1 << 18);
}

#[test]
fn test_bounded_sampling_bucket_uniformity() {
    // A non power of two bound exercises the rejection path; bucket
    // counts must stay flat.
    let mut rng = XoShiRo256PlusPlus::new([5, 6, 7, 8]);
    let samples = 1 << 18;
    let mut bins = [0u64; 256];
    for _ in 0..samples {
        bins[rng.next_u32_below(256 * 3) as usize / 3] += 1;
    }
    common::assert_chi_square_256(&bins, samples);
}

#[test]
fn test_f64_output_is_in_unit_interval_and_centered() {
    let mut rng = XoShiRo256Plus::new([9, 10, 11, 12]);
    let n = 1 << 16;
    let mut sum = 0.0;
    for _ in 0..n {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
        sum += v;
    }
    let mean = sum / n as f64;
    // Standard error of the mean is about 0.0011 at this sample size.
    assert!((mean - 0.5).abs() < 0.005, "mean {mean} too far from 0.5");
}

#[test]
fn test_bool_output_is_balanced() {
    let mut rng = L32X64Mix::from_seed(&[0x012d_e1ba]);
    let n = 1 << 18;
    let ones = (0..n).filter(|_| rng.next_bool()).count();
    let deviation = (2.0 * ones as f64 - n as f64).abs();
    assert!(deviation <= 2.5758 * (n as f64).sqrt());
}
