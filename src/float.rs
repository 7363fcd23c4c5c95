//! IEEE-754 binary64 decomposition.
//!
//! The significand is extracted by value from the bit pattern, never by
//! reinterpreting memory, so host endianness does not matter.

use super::bignum::Bigint;

/// Bitmask for the exponent field.
const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;
/// Bitmask for the hidden bit, the implicit 1 above the fraction.
const HIDDEN_BIT_MASK: u64 = 0x0010_0000_0000_0000;
/// Bitmask for the fraction, excluding the hidden bit.
const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// Size of the fraction field, in bits.
const MANTISSA_SIZE: i32 = 52;
/// Bias mapping the stored exponent to the `x = f * 2^e` form.
const EXPONENT_BIAS: i32 = 1023 + MANTISSA_SIZE;
/// Exponent of every subnormal double in the `x = f * 2^e` form, and the
/// smallest exponent any double has.
pub(crate) const DENORMAL_EXPONENT: i32 = 1 - EXPONENT_BIAS;

/// Decompose a positive finite double into `(f, e)` with `x = f * 2^e`
/// exactly.
///
/// Subnormals keep their raw fraction and the fixed minimum exponent;
/// normals get the hidden bit OR'd back in. `f` comes out normalized.
pub(crate) fn decompose(x: f64) -> (Bigint, i32) {
    debug_assert!(x.is_finite() && x > 0.0);

    let bits = x.to_bits();
    let biased = ((bits & EXPONENT_MASK) >> MANTISSA_SIZE) as i32;
    let fraction = bits & MANTISSA_MASK;

    if biased == 0 {
        (Bigint::from_u64(fraction), DENORMAL_EXPONENT)
    } else {
        (
            Bigint::from_u64(fraction | HIDDEN_BIT_MASK),
            biased - EXPONENT_BIAS,
        )
    }
}

// TESTS
// -----
