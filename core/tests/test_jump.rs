//! Jump behavior: reference sequences after jump and long jump, the
//! pre-jump copy contract, and arbitrary jump consistency.

use splitstream_core_rs::{
    ArbitrarilyJumpable, Jumpable, L64X128Mix, LongJumpable, Philox4x32, UniformRandomProvider,
    XoRoShiRo128Plus, XoShiRo128Plus, XoShiRo256PlusPlus,
};

const SEED_64: [u64; 4] = [
    0x012d_e1ba_bb3c_4104,
    0xa5a8_18b8_fc5a_a503,
    0xb124_ea2b_701f_4993,
    0x18e0_3749_33d8_c782,
];

/// Assert `jump` hands back the original stream and places the mutated
/// generator on `expected_after`.
fn assert_jump_outputs<R, F>(mut rng: R, jump: F, expected_before: &[u64], expected_after: &[u64])
where
    R: UniformRandomProvider,
    F: FnOnce(&mut R) -> R,
{
    let mut copy = jump(&mut rng);
    for (i, &value) in expected_before.iter().enumerate() {
        assert_eq!(copy.next_u64(), value, "pre-jump output {i}");
    }
    for (i, &value) in expected_after.iter().enumerate() {
        assert_eq!(rng.next_u64(), value, "post-jump output {i}");
    }
}

#[test]
fn test_xoshiro256_plus_plus_jump() {
    assert_jump_outputs(
        XoShiRo256PlusPlus::new(SEED_64),
        Jumpable::jump,
        &[0x8325_6c3e_fe49_4810, 0xb6a3_2c7a_2f42_7e87],
        &[
            0x0978_1781_5ff7_650e,
            0xe3a4_a1ba_31fe_551c,
            0xd7ed_ac1f_857e_b72e,
            0xeaf1_03ab_604c_1f33,
            0x274b_f134_4592_53ef,
            0xb2c0_37e0_4c35_4378,
            0x42f0_d50f_53d0_1cfa,
            0x170b_7b09_9229_1c41,
        ],
    );
}

#[test]
fn test_xoshiro256_plus_plus_long_jump() {
    assert_jump_outputs(
        XoShiRo256PlusPlus::new(SEED_64),
        LongJumpable::long_jump,
        &[0x8325_6c3e_fe49_4810, 0xb6a3_2c7a_2f42_7e87],
        &[
            0x0a6b_9e34_dbf9_c7ca,
            0x2214_a78c_97dc_2187,
            0x9f44_832a_1e1b_a9c6,
            0x49f5_a7c5_d161_8518,
            0xbca9_ab8b_ed06_2466,
            0x21da_06a3_4efa_f84a,
            0xfc22_b0fe_3dda_8c05,
            0x9b85_b0b6_cfc9_3daf,
        ],
    );
}

#[test]
fn test_xoroshiro128_plus_jump() {
    assert_jump_outputs(
        XoRoShiRo128Plus::new([SEED_64[0], SEED_64[1]]),
        Jumpable::jump,
        &[0xa6d5_fa73_b796_e607, 0xd419_031a_381f_ea2e],
        &[
            0xb715_ad9c_b572_030e,
            0x1063_4f81_7a8f_69b1,
            0xe871_b367_a8f9_c567,
            0x3096_f4ce_b231_98cd,
            0xf5b0_9c87_34d2_6da9,
            0x58ba_83f7_79a2_549c,
            0xb6c5_4c8e_a9fc_672b,
            0x87bb_9766_ff20_834d,
        ],
    );
}

#[test]
fn test_xoroshiro128_plus_long_jump() {
    assert_jump_outputs(
        XoRoShiRo128Plus::new([SEED_64[0], SEED_64[1]]),
        LongJumpable::long_jump,
        &[0xa6d5_fa73_b796_e607, 0xd419_031a_381f_ea2e],
        &[
            0xf569_a89f_3ee6_fa3d,
            0x3c61_867c_bcc2_08a8,
            0x95a8_3b71_0aa1_a57f,
            0xed5c_6583_8355_9407,
            0xbb70_b695_9a82_f3b0,
            0x31ea_b244_213f_e7be,
            0xe14b_b9d5_0b6b_026f,
            0x8071_6d04_b81d_5aaa,
        ],
    );
}

#[test]
fn test_xoshiro128_plus_jump() {
    let mut rng = XoShiRo128Plus::new([0x012d_e1ba, 0xa5a8_18b8, 0xb124_ea2b, 0x18e0_3749]);
    let mut copy = rng.jump();
    assert_eq!(copy.next_u32(), 0x1a0e_1903);
    let expected_after = [
        0x65dd_c942u32,
        0x7e7c_4d6b,
        0x6745_a785,
        0x4089_7788,
        0xfb60_ce92,
        0x121f_2ee0,
        0xd000_bae8,
        0x52b3_ebfc,
    ];
    for (i, &value) in expected_after.iter().enumerate() {
        assert_eq!(rng.next_u32(), value, "post-jump output {i}");
    }
}

#[test]
fn test_philox_jump() {
    let mut rng = Philox4x32::from_seed(&[1234]);
    let mut copy = rng.jump();
    assert_eq!(copy.next_u32(), 0x9eee_de35);
    let expected_after = [
        0x0712_9e5fu32,
        0x653d_7a73,
        0x1d83_31c1,
        0x86ff_06af,
        0x2c03_a11b,
        0x4b0d_a1a1,
        0x66b9_f664,
        0x9cef_b170,
    ];
    for (i, &value) in expected_after.iter().enumerate() {
        assert_eq!(rng.next_u32(), value, "post-jump output {i}");
    }
}

#[test]
fn test_philox_long_jump() {
    let mut rng = Philox4x32::from_seed(&[1234]);
    let mut copy = rng.long_jump();
    assert_eq!(copy.next_u32(), 0x9eee_de35);
    let expected_after = [
        0x0ec5_5d2du32,
        0xca6f_1ed5,
        0x72e5_8b38,
        0xea66_c6b1,
        0x663b_ab8a,
        0x466d_d22c,
        0x4cc6_399c,
        0x4fb7_e4c1,
    ];
    for (i, &value) in expected_after.iter().enumerate() {
        assert_eq!(rng.next_u32(), value, "post-jump output {i}");
    }
}

#[test]
fn test_philox_power_of_two_jump_matches_fixed_jump() {
    // jump() is 2^64 counter increments, i.e. 2^66 outputs.
    let mut a = Philox4x32::from_seed(&[9876, 54321]);
    let mut b = a.clone();
    a.jump();
    b.jump_power_of_two(66);
    for _ in 0..16 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

#[test]
fn test_philox_jump_distance_matches_sequential_draws() {
    // A small jump lands exactly where consuming the outputs would.
    let mut jumped = Philox4x32::from_seed(&[3141, 5926]);
    let mut stepped = jumped.clone();
    jumped.jump_distance(13.0);
    for _ in 0..13 {
        stepped.next_u32();
    }
    for _ in 0..16 {
        assert_eq!(jumped.next_u32(), stepped.next_u32());
    }
}

#[test]
fn test_philox_jump_distance_composes() {
    // One jump of 700 equals a jump of 400 then a jump of 300.
    let mut a = Philox4x32::from_seed(&[42]);
    let mut b = a.clone();
    a.jump_distance(700.0);
    b.jump_distance(400.0);
    b.jump_distance(300.0);
    for _ in 0..16 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

#[test]
fn test_jump_discards_cached_output() {
    // An odd number of boolean draws leaves bits cached; the jumped
    // generator must start from a clean word while the copy keeps the
    // cache and replays the original stream.
    let mut rng = XoShiRo256PlusPlus::new(SEED_64);
    let mut reference = rng.clone();
    rng.next_bool();
    let mut copy = rng.jump();

    reference.next_bool();
    for _ in 0..64 {
        assert_eq!(copy.next_bool(), reference.next_bool());
    }
}

#[test]
fn test_repeated_jumps_partition_the_stream() {
    let mut source = XoShiRo256PlusPlus::new(SEED_64);
    let mut streams: Vec<_> = (0..4).map(|_| source.jump()).collect();

    // The first stream must replay the unjumped sequence.
    let mut reference = XoShiRo256PlusPlus::new(SEED_64);
    for _ in 0..8 {
        assert_eq!(streams[0].next_u64(), reference.next_u64());
    }

    // No collisions across a window of each stream.
    let mut seen = std::collections::HashSet::new();
    for stream in &mut streams {
        for _ in 0..256 {
            assert!(seen.insert(stream.next_u64()));
        }
    }
}

#[test]
fn test_lxm_jump_returns_pre_jump_copy() {
    let mut rng = L64X128Mix::from_seed(&[0x012d_e1ba_bb3c_4104]);
    let mut reference = rng.clone();
    let mut copy = rng.jump();
    for _ in 0..16 {
        assert_eq!(copy.next_u64(), reference.next_u64());
    }
    // The advanced generator is on a different stream segment.
    assert_ne!(rng.next_u64(), reference.next_u64());
}
