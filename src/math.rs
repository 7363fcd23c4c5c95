//! Building-blocks for the fixed-capacity big-integer arithmetic.
//!
//! These algorithms assume little-endian order for the limb buffers, so
//! for a buffer `[0, 1, 2]`, `2` is the most significant limb and `0` is
//! the least significant limb.

use arrayvec::ArrayVec;

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base 10, except it stores a 32-bit
//  number instead. The wide type must hold the product of two limbs plus
//  two carries without overflow, which a 64-bit accumulator does.
pub(crate) type Limb = u32;
type Wide = u64;

/// Number of bits in a single limb.
pub(crate) const LIMB_BITS: usize = 32;

/// Capacity of every limb buffer, in limbs (1120 bits).
///
/// Sized for the digit generator's worst case: the scaled remainder and
/// its rounding boundaries stay below 2^1082 for every finite double and
/// radix, with margin for one more radix-36 multiply.
pub(crate) const MAX_LIMBS: usize = 35;

/// Fixed-capacity storage for a big integer, in little-endian order.
///
/// Exceeding the capacity is a caller bug and panics; the arithmetic
/// below never grows a value past what its inputs allow.
pub(crate) type LimbVec = ArrayVec<Limb, MAX_LIMBS>;

/// Split a u64 into limbs, in little-endian order.
#[inline]
pub(crate) fn split_u64(x: u64) -> [Limb; 2] {
    [x as Limb, (x >> LIMB_BITS) as Limb]
}

// SCALAR
// ------

// Scalar-to-scalar operations, building-blocks for the multi-limb
// operations.

pub(crate) mod scalar {
    use super::{Limb, Wide, LIMB_BITS};

    /// AddAssign two limbs and return if overflow happens.
    #[inline]
    pub(crate) fn iadd(x: &mut Limb, y: Limb) -> bool {
        let t = x.overflowing_add(y);
        *x = t.0;
        t.1
    }

    /// SubAssign two limbs and return if borrow happens.
    #[inline]
    pub(crate) fn isub(x: &mut Limb, y: Limb) -> bool {
        let t = x.overflowing_sub(y);
        *x = t.0;
        t.1
    }

    /// Multiply two limbs with carry, returning the (low, high) halves.
    #[inline]
    pub(crate) fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow: (2^32-1)^2 + (2^32-1) < 2^64.
        let z = (x as Wide) * (y as Wide) + (carry as Wide);
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }

    /// MulAssign a limb with carry, returning the new carry.
    #[inline]
    pub(crate) fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }
}

// SMALL
// -----

// Large-to-small operations, modifying a limb buffer by a native scalar.

pub(crate) mod small {
    use super::{scalar, Limb, LimbVec};

    /// MulAssign the buffer by a single limb.
    pub(crate) fn imul(x: &mut LimbVec, y: Limb) {
        if y == 0 {
            x.clear();
            return;
        }

        // Multiply iteratively over all limbs, carrying along the way.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of the value, add to the end.
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Normalize the buffer by popping any most-significant zero limbs.
    ///
    /// Idempotent; a zero value normalizes to the empty buffer.
    #[inline]
    pub(crate) fn normalize(x: &mut LimbVec) {
        while x.last() == Some(&0) {
            x.pop();
        }
    }

    /// Whether the buffer upholds the no-leading-zero-limb invariant.
    #[inline]
    pub(crate) fn is_normalized(x: &LimbVec) -> bool {
        x.last() != Some(&0)
    }
}

// LARGE
// -----

// Large-to-large operations between two limb buffers.

pub(crate) mod large {
    use super::{scalar, small, Limb, LimbVec};
    use core::cmp::Ordering;
    use core::iter;

    /// Compare two normalized buffers: by length first, then limb by
    /// limb from the most significant end down.
    #[inline]
    pub(crate) fn compare(x: &[Limb], y: &[Limb]) -> Ordering {
        match x.len().cmp(&y.len()) {
            Ordering::Equal => x.iter().rev().cmp(y.iter().rev()),
            ord => ord,
        }
    }

    /// AddAssign a buffer.
    pub(crate) fn iadd(x: &mut LimbVec, y: &[Limb]) {
        debug_assert!(small::is_normalized(x));

        // Pad so every limb of y has a counterpart.
        while x.len() < y.len() {
            x.push(0);
        }

        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            // At most one of the two adds can overflow, since at most
            // Limb::MAX + Limb::MAX + 1 is accumulated.
            let mut c = scalar::iadd(xi, *yi);
            if carry {
                c |= scalar::iadd(xi, 1);
            }
            carry = c;
        }

        // Ripple the final carry through the limbs above y.
        let mut size = y.len();
        while carry && size < x.len() {
            carry = scalar::iadd(&mut x[size], 1);
            size += 1;
        }
        if carry {
            x.push(1);
        }

        debug_assert!(small::is_normalized(x));
    }

    /// SubAssign a buffer; the caller guarantees `x >= y`.
    ///
    /// The difference may shrink by any number of limbs, or cancel to
    /// zero entirely, so the result is renormalized.
    pub(crate) fn isub(x: &mut LimbVec, y: &[Limb]) {
        debug_assert!(compare(x, y) != Ordering::Less);

        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            let mut c = scalar::isub(xi, *yi);
            if carry {
                c |= scalar::isub(xi, 1);
            }
            carry = c;
        }

        // x >= y, so the borrow extinguishes inside x.
        let mut size = y.len();
        while carry {
            debug_assert!(size < x.len());
            carry = scalar::isub(&mut x[size], 1);
            size += 1;
        }

        small::normalize(x);
    }

    /// MulAssign by another buffer, schoolbook style.
    ///
    /// O(nx * ny) partial products accumulated into a zeroed buffer; the
    /// caller guarantees nx + ny limbs fit the capacity.
    pub(crate) fn imul(x: &mut LimbVec, y: &[Limb]) {
        debug_assert!(small::is_normalized(x));

        if y.len() == 1 {
            small::imul(x, y[0]);
            return;
        }
        if x.is_empty() || y.is_empty() {
            x.clear();
            return;
        }

        let mut z = LimbVec::new();
        z.extend(iter::repeat(0).take(x.len() + y.len()));
        for (i, &xi) in x.iter().enumerate() {
            let mut carry: Limb = 0;
            for (j, &yj) in y.iter().enumerate() {
                let (lo, hi) = scalar::mul(xi, yj, carry);
                // hi < Limb::MAX here, so absorbing the add's overflow
                // cannot itself overflow.
                carry = hi;
                if scalar::iadd(&mut z[i + j], lo) {
                    carry += 1;
                }
            }
            // The row's final carry lands in a limb no other row has
            // touched yet.
            z[i + y.len()] = carry;
        }

        small::normalize(&mut z);
        *x = z;
    }
}

// TESTS
// -----
