//! Shortest-form digit generation for finite doubles.
//!
//! This is the free-format algorithm of Burger and Dybvig ("Printing
//! Floating-Point Numbers Quickly and Accurately"), the base variant
//! that walks the scale exponent one radix step at a time instead of
//! estimating it with a logarithm. The digit loop descends from Steele
//! and White's Dragon4. All arithmetic is exact, over the fixed-capacity
//! `Bigint`, so the emitted digits are correctly rounded and stop as
//! soon as they identify the input double uniquely.

use arrayvec::ArrayVec;
use core::cmp::Ordering;

use super::bignum::Bigint;
use super::digit;
use super::float;

/// Capacity of the output buffer.
///
/// Radix 2 needs the most room: the smallest subnormal prints as `0.`
/// followed by 1073 zeros and a digit, and the largest finite double
/// fills 1024 integer positions, either way with a possible sign ahead.
pub(crate) const MAX_OUTPUT: usize = 1200;

/// Finished positional text of one conversion.
pub(crate) type OutputBuf = ArrayVec<u8, MAX_OUTPUT>;

/// Working state of one conversion, stack-resident for its whole life.
///
/// The exact scaled value is `r / s`, and digit `n` of the output weighs
/// `radix^(k - 1 - n)`. `m_plus` and `m_minus` track the scaled distance
/// to the midpoints toward the neighboring doubles: while the remainder
/// stays inside `(m_minus, s - m_plus)` the digits emitted so far do not
/// yet pin down the input, so generation continues.
struct Dragon {
    r: Bigint,
    s: Bigint,
    m_plus: Bigint,
    m_minus: Bigint,

    /// Output radix in `[2, 36]`.
    radix: u32,
    /// Scale exponent: the leading digit has weight `radix^(k - 1)`.
    k: i32,
    /// Whether a value exactly on the low midpoint still rounds back.
    low_ok: bool,
    /// Whether a value exactly on the high midpoint still rounds back.
    high_ok: bool,

    out: OutputBuf,
    /// Count of digits emitted so far.
    emitted: usize,
}

impl Dragon {
    fn new(radix: u32) -> Self {
        Dragon {
            r: Bigint::default(),
            s: Bigint::default(),
            m_plus: Bigint::default(),
            m_minus: Bigint::default(),
            radix,
            k: 0,
            low_ok: false,
            high_ok: false,
            out: OutputBuf::new(),
            emitted: 0,
        }
    }

    /// Initialize `r`, `s`, `m_plus`, `m_minus` from the decomposed
    /// `(f, e)`.
    ///
    /// The cases split on the sign of `e` and on whether `f` sits at the
    /// bottom of its binade: there the next double down is half a gap
    /// away instead of a full one, so the midpoints are asymmetric.
    fn prepare(&mut self, f: Bigint, e: i32) {
        // Under round-to-nearest-even an even significand owns both of
        // its midpoints, which admits the shorter of two candidate
        // encodings. An odd significand owns neither.
        let even = f.is_even();
        self.low_ok = even;
        self.high_ok = even;

        let bottom = f.is_two_to_52();
        if e >= 0 {
            if bottom {
                // r = f * 2^(e+2), s = 4, m+ = 2^(e+1), m- = 2^e
                self.r = f;
                self.r.imul(&Bigint::pow2(e as u32 + 2));
                self.s = Bigint::from_u32(4);
                self.m_plus = Bigint::pow2(e as u32 + 1);
                self.m_minus = Bigint::pow2(e as u32);
            } else {
                // r = f * 2^(e+1), s = 2, m+ = m- = 2^e
                self.r = f;
                self.r.imul(&Bigint::pow2(e as u32 + 1));
                self.s = Bigint::from_u32(2);
                self.m_plus = Bigint::pow2(e as u32);
                self.m_minus = self.m_plus.clone();
            }
        } else if bottom && e > float::DENORMAL_EXPONENT {
            // A predecessor with a smaller exponent exists.
            // r = f * 4, s = 2^(2-e), m+ = 2, m- = 1
            self.r = f;
            self.r.imul_small(4);
            self.s = Bigint::pow2((2 - e) as u32);
            self.m_plus = Bigint::from_u32(2);
            self.m_minus = Bigint::from_u32(1);
        } else {
            // r = f * 2, s = 2^(1-e), m+ = m- = 1
            self.r = f;
            self.r.imul_small(2);
            self.s = Bigint::pow2((1 - e) as u32);
            self.m_plus = Bigint::from_u32(1);
            self.m_minus = Bigint::from_u32(1);
        }
    }

    /// Find `k` such that the value lands in the canonical digit window
    /// `[radix^(k-1), radix^k)`, nudging `s` (k up) or `r` and the
    /// midpoints (k down) one radix step per round.
    ///
    /// Each round moves `k` by exactly one toward the window, and the
    /// window is reachable because the value is finite and nonzero, so
    /// both loops terminate; for the most extreme doubles in radix 2
    /// that is on the order of 1100 rounds.
    fn scale(&mut self) {
        let mut k = 0;

        // k too low: the leading digit would overflow the radix.
        loop {
            let mut t = self.r.clone();
            t.iadd(&self.m_plus);
            if !self.reaches_ceiling(&t) {
                break;
            }
            self.s.imul_small(self.radix);
            k += 1;
        }

        // If k moved up it cannot also be too high.
        if k == 0 {
            // k too high: the leading digit would be zero.
            loop {
                let mut t = self.r.clone();
                t.iadd(&self.m_plus);
                t.imul_small(self.radix);
                if !self.stays_under(&t) {
                    break;
                }
                self.r.imul_small(self.radix);
                self.m_plus.imul_small(self.radix);
                self.m_minus.imul_small(self.radix);
                k -= 1;
            }
        }

        self.k = k;
    }

    /// `t` reaches or exceeds `s`, counting an exact hit only when the
    /// high midpoint is inclusive.
    fn reaches_ceiling(&self, t: &Bigint) -> bool {
        match t.compare(&self.s) {
            Ordering::Greater => true,
            Ordering::Equal => self.high_ok,
            Ordering::Less => false,
        }
    }

    /// `t` still falls short of `s` (or only just touches it, when the
    /// high midpoint is exclusive).
    fn stays_under(&self, t: &Bigint) -> bool {
        match t.compare(&self.s) {
            Ordering::Less => true,
            Ordering::Equal => !self.high_ok,
            Ordering::Greater => false,
        }
    }

    /// Emit digits until the value is pinned down, then fill any integer
    /// positions left of the stop with zeros.
    fn generate(&mut self) {
        loop {
            // d, r  <-  (r * radix) divmod s, by repeated subtraction;
            // the scale invariant r < s bounds d below the radix.
            self.r.imul_small(self.radix);
            let mut d = 0;
            while self.r.compare(&self.s) != Ordering::Less {
                self.r.isub(&self.s);
                d += 1;
            }
            debug_assert!(d < self.radix);

            self.m_plus.imul_small(self.radix);
            self.m_minus.imul_small(self.radix);

            // Has the remainder crossed either midpoint?
            let low = match self.r.compare(&self.m_minus) {
                Ordering::Less => true,
                Ordering::Equal => self.low_ok,
                Ordering::Greater => false,
            };
            let mut t = self.r.clone();
            t.iadd(&self.m_plus);
            let high = self.reaches_ceiling(&t);

            match (low, high) {
                (false, false) => self.emit_digit(d),
                (true, false) => {
                    self.emit_digit(d);
                    break;
                }
                (false, true) => {
                    self.emit_digit(d + 1);
                    break;
                }
                (true, true) => {
                    // Both neighbors reachable: emit whichever digit
                    // leaves the smaller error, comparing 2r against s.
                    let mut twice = self.r.clone();
                    twice.imul_small(2);
                    if twice.compare(&self.s) == Ordering::Less {
                        self.emit_digit(d);
                    } else {
                        self.emit_digit(d + 1);
                    }
                    break;
                }
            }
        }

        self.pad_integer();
    }

    /// Push one digit with its positional dressing: a leading `0.` and
    /// `-k` zeros ahead of the first digit when the value has no integer
    /// part, or the point itself where the integer part ends.
    fn emit_digit(&mut self, d: u32) {
        // A rounded-up digit stays below the radix: the scale invariant
        // r + m+ <= s tightens to strict inequality whenever the high
        // midpoint is inclusive, which blocks the carry-out case.
        debug_assert!(d < self.radix);

        // Position relative to the ones place: 1 means the last integer
        // digit, 0 the first fraction digit.
        let pos = self.k - self.emitted as i32;

        if pos <= 0 && self.emitted == 0 {
            self.push(b'0');
            self.push(b'.');
            for _ in self.k..0 {
                self.push(b'0');
            }
        } else if pos == 0 {
            self.push(b'.');
        }

        self.push(digit::from_digit(d));
        self.emitted += 1;
    }

    /// Zero-fill the integer positions between the last emitted digit
    /// and the ones place, if generation stopped left of it.
    fn pad_integer(&mut self) {
        if self.k >= 1 {
            for _ in self.emitted as i32..self.k {
                self.push(b'0');
            }
        }
    }

    #[inline]
    fn push(&mut self, byte: u8) {
        debug_assert!(self.out.len() < MAX_OUTPUT);
        self.out.push(byte);
    }
}

/// Convert a positive finite double into its shortest base-`radix`
/// positional form, with a leading `-` when `negative` is set.
pub(crate) fn format_shortest(x: f64, negative: bool, radix: u32) -> OutputBuf {
    let mut dragon = Dragon::new(radix);
    if negative {
        dragon.push(b'-');
    }

    let (f, e) = float::decompose(x);
    dragon.prepare(f, e);
    dragon.scale();
    dragon.generate();
    dragon.out
}

// TESTS
// -----
