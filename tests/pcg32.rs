use pcg_scalar::rng::{INCREMENT, MULTIPLIER, Pcg32};

use proptest::prelude::*;
use rand_core::{RngCore, SeedableRng};

#[test]
fn pcg32_known_vector() {
    let mut rng = Pcg32::from_state(0x853c_49e6_748f_ea9b);

    let mut results = [0u32; 6];
    for r in results.iter_mut() {
        *r = rng.next_u32();
    }

    let expected: [u32; 6] = [
        355248013, 41705475, 3406281715, 4186697710, 483882979, 2766312848,
    ];
    assert_eq!(results, expected);
    assert_eq!(rng.state(), 0x0330_f297_5786_f981);
}

#[test]
fn pcg32_zero_state_vector() {
    let mut rng = Pcg32::from_state(0);

    assert_eq!(rng.next_u32(), 0);
    assert_eq!(rng.next_u32(), 4164751464);
    assert_eq!(rng.next_u32(), 3469696627);
}

#[test]
fn pcg32_output_uses_pre_update_state() {
    let state = 0x853c_49e6_748f_ea9bu64;
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
    let rot = (state >> 59) as u32;

    let mut rng = Pcg32::from_state(state);

    assert_eq!(rng.next_u32(), xorshifted.rotate_right(rot));
    assert_eq!(
        rng.state(),
        state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
    );
}

#[test]
fn pcg32_rotation_matches_shift_formula() {
    for state in [0u64, 1, u64::MAX, 0x8000_0000_0000_0000, 0x0123_4567_89ab_cdef] {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        let manual = (xorshifted >> rot) | (xorshifted << (rot.wrapping_neg() & 31));

        assert_eq!(Pcg32::from_state(state).next_u32(), manual);
    }
}

#[test]
fn pcg32_constants() {
    assert_eq!(MULTIPLIER, 0x5851_f42d_4c95_7f2d);
    assert_eq!(INCREMENT, 0xda3e_39cb_94b9_5bdb);
    assert_eq!(INCREMENT & 1, 1);
}

#[test]
fn pcg32_state_wraps() {
    let mut rng = Pcg32::from_state(u64::MAX);
    rng.next_u32();

    assert_eq!(
        rng.state(),
        u64::MAX.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
    );
}

#[test]
fn pcg32_rotation_by_zero_is_identity() {
    // top five bits clear, so the rotation amount is zero
    let state = 0x0123_4567_89ab_cdefu64;
    assert_eq!(state >> 59, 0);

    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

    assert_eq!(Pcg32::from_state(state).next_u32(), xorshifted);
}

#[test]
fn pcg32_rotation_by_max() {
    let state = 0xf800_0000_0000_0000u64 | 0x0000_7654_3210_fedc;
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

    assert_eq!(
        Pcg32::from_state(state).next_u32(),
        (xorshifted >> 31) | (xorshifted << 1)
    );
}

#[test]
fn pcg32_snapshot_and_restore() {
    let mut rng = Pcg32::from_state(99);
    rng.next_u32();

    let snapshot = rng.state();
    let first: Vec<u32> = (0..16).map(|_| rng.next_u32()).collect();

    rng.set_state(snapshot);
    let second: Vec<u32> = (0..16).map(|_| rng.next_u32()).collect();

    assert_eq!(first, second);
}

#[test]
fn pcg32_os_seeded_generators_differ() {
    let a = Pcg32::new().unwrap();
    let b = Pcg32::new().unwrap();

    assert_ne!(a.state(), b.state());
}

#[test]
fn pcg32_rng_core_next_u64_low_word_first() {
    let mut rng = Pcg32::from_state(0x853c_49e6_748f_ea9b);
    let x = RngCore::next_u64(&mut rng);

    assert_eq!(x, (41705475u64 << 32) | 355248013);
}

#[test]
fn pcg32_rng_core_fill_bytes() {
    let mut rng = Pcg32::from_state(0x853c_49e6_748f_ea9b);
    let mut buf = [0u8; 8];
    rng.fill_bytes(&mut buf);

    assert_eq!(&buf[..4], &355248013u32.to_le_bytes());
    assert_eq!(&buf[4..], &41705475u32.to_le_bytes());
}

#[test]
fn pcg32_from_seed_is_big_endian_state() {
    let rng = Pcg32::from_seed(0x853c_49e6_748f_ea9bu64.to_be_bytes());
    assert_eq!(rng, Pcg32::from_state(0x853c_49e6_748f_ea9b));
}

proptest! {
    #[test]
    fn pcg32_same_state_same_sequence(seed in any::<u64>()) {
        let mut a = Pcg32::from_state(seed);
        let mut b = Pcg32::from_state(seed);

        for _ in 0..64 {
            prop_assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn pcg32_state_roundtrip(x in any::<u64>(), start in any::<u64>()) {
        let mut rng = Pcg32::from_state(start);
        rng.set_state(x);
        prop_assert_eq!(rng.state(), x);
    }
}
