//! Big-integer operations checked against 128-bit reference arithmetic.

use crate::bignum::Bigint;
use crate::math::LimbVec;

fn bigint_from_u128(x: u128) -> Bigint {
    let mut data = LimbVec::new();
    for i in 0..4 {
        data.push((x >> (32 * i)) as u32);
    }
    while data.last() == Some(&0) {
        data.pop();
    }
    Bigint { data }
}

/// Deterministic xorshift64 stream.
fn sample_u64(count: usize) -> Vec<u64> {
    let mut values = Vec::with_capacity(count);
    let mut state = 0x0123_4567_89AB_CDEF_u64;
    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        values.push(state);
    }
    values
}

#[test]
fn add_matches_u128_test() {
    for (&a, &b) in sample_u64(500).iter().zip(sample_u64(500).iter().rev()) {
        let mut z = Bigint::from_u64(a);
        z.iadd(&Bigint::from_u64(b));
        assert_eq!(z, bigint_from_u128(a as u128 + b as u128), "{} + {}", a, b);
    }
}

#[test]
fn sub_matches_u128_test() {
    for (&a, &b) in sample_u64(500).iter().zip(sample_u64(500).iter().rev()) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        let mut z = Bigint::from_u64(hi);
        z.isub(&Bigint::from_u64(lo));
        assert_eq!(z, bigint_from_u128((hi - lo) as u128), "{} - {}", hi, lo);
    }
}

#[test]
fn mul_matches_u128_test() {
    for (&a, &b) in sample_u64(500).iter().zip(sample_u64(500).iter().rev()) {
        let mut z = Bigint::from_u64(a);
        z.imul(&Bigint::from_u64(b));
        assert_eq!(z, bigint_from_u128(a as u128 * b as u128), "{} * {}", a, b);
    }
}

#[test]
fn mul_small_matches_u128_test() {
    for &a in &sample_u64(500) {
        for y in [1u32, 2, 3, 10, 16, 36, 0xFFFF_FFFF] {
            let mut z = Bigint::from_u64(a);
            z.imul_small(y);
            assert_eq!(z, bigint_from_u128(a as u128 * y as u128), "{} * {}", a, y);
        }
    }
}

#[test]
fn compare_matches_u64_test() {
    let values = sample_u64(100);
    for &a in &values {
        for &b in &values {
            assert_eq!(
                Bigint::from_u64(a).compare(&Bigint::from_u64(b)),
                a.cmp(&b)
            );
        }
    }
}

#[test]
fn parity_matches_u64_test() {
    for &a in &sample_u64(500) {
        assert_eq!(Bigint::from_u64(a).is_even(), a % 2 == 0);
    }
}

#[test]
fn wide_values_stay_in_capacity_test() {
    // The digit generator's working values top out near 2^1082; walking
    // a 64-bit seed up there one doubling at a time must agree with the
    // single shifted multiply.
    for &a in &sample_u64(20) {
        // Pin both end bits so the width is known exactly.
        let seed = Bigint::from_u64(a | (1 << 63) | 1);

        let mut stepped = seed.clone();
        for _ in 0..1000 {
            stepped.imul_small(2);
        }

        let mut shifted = seed.clone();
        shifted.imul(&Bigint::pow2(1000));

        assert_eq!(stepped, shifted);
        assert_eq!(shifted.data.len(), 64 / 32 + 1000 / 32 + 1);
    }
}
