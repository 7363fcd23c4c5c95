//! Conversion driver: classification, the decimal integer fast path,
//! and the host emission interface.

use std::io;
use std::num::FpCategory;

use super::digit::{MAX_RADIX, MIN_RADIX};
use super::dragon;

/// Interned output for the value classes with a fixed spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Literal {
    /// Any NaN, regardless of sign or payload.
    Nan,
    /// Positive infinity.
    Infinity,
    /// Negative infinity.
    NegInfinity,
    /// Zero of either sign.
    Zero,
}

impl Literal {
    /// The spelled-out string.
    pub fn as_str(self) -> &'static str {
        match self {
            Literal::Nan => "NaN",
            Literal::Infinity => "Infinity",
            Literal::NegInfinity => "-Infinity",
            Literal::Zero => "0",
        }
    }
}

/// Receives the pieces of a conversion.
///
/// The default methods write plain text to the destination. Implement
/// them to intern the fixed literals, to reuse a native integer
/// formatter, or to capture the digit string without re-parsing it (an
/// interpreter pushing onto its value stack, for instance).
pub trait Host {
    /// Push one of the fixed-spelling literals.
    #[inline]
    fn push_literal<W>(&mut self, writer: &mut W, literal: Literal) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        writer.write_all(literal.as_str().as_bytes())
    }

    /// Push a 32-bit integer in decimal, with an optional sign.
    #[inline]
    fn push_unsigned<W>(&mut self, writer: &mut W, negative: bool, value: u32) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        if negative {
            writer.write_all(b"-")?;
        }
        itoa::write(&mut *writer, value)?;
        Ok(())
    }

    /// Push the finished digit string of a slow-path conversion,
    /// including any sign and decimal point.
    #[inline]
    fn push_digits<W>(&mut self, writer: &mut W, digits: &[u8]) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        writer.write_all(digits)
    }
}

/// Host that writes everything through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHost;

impl Host for DefaultHost {}

/// Write the shortest base-`radix` form of `value` that reads back as
/// the same double.
///
/// `radix` must lie in `[2, 36]`; ten decimal digits and the lowercase
/// alphabet serve as digits. The output is plain positional notation,
/// never exponent notation. Every double has defined output: NaN, the
/// infinities and both zeros map to their [`Literal`] spelling.
///
/// `digits` is reserved for a future fixed-precision mode and ignored;
/// the conversion always emits the shortest round-tripping form.
pub fn stringify<W, H>(
    writer: &mut W,
    host: &mut H,
    value: f64,
    radix: u32,
    digits: usize,
) -> io::Result<()>
where
    W: io::Write,
    H: Host,
{
    assert!(
        radix >= MIN_RADIX && radix <= MAX_RADIX,
        "radix must lie in [2, 36]"
    );
    let _ = digits;

    let negative = value.is_sign_negative();
    match value.classify() {
        FpCategory::Nan => return host.push_literal(writer, Literal::Nan),
        FpCategory::Infinite if negative => {
            return host.push_literal(writer, Literal::NegInfinity);
        }
        FpCategory::Infinite => return host.push_literal(writer, Literal::Infinity),
        // The sign of a zero is not printed.
        FpCategory::Zero => return host.push_literal(writer, Literal::Zero),
        FpCategory::Normal | FpCategory::Subnormal => {}
    }

    let magnitude = value.abs();

    // Small decimal integers are overwhelmingly common; let the host's
    // integer formatter handle them without the big-integer machinery.
    if radix == 10 {
        let truncated = magnitude as u32;
        if truncated as f64 == magnitude {
            return host.push_unsigned(writer, negative, truncated);
        }
    }

    let out = dragon::format_shortest(magnitude, negative, radix);
    host.push_digits(writer, &out)
}

/// Convert to an owned `String`.
pub fn to_string(value: f64, radix: u32) -> String {
    let mut writer = Vec::with_capacity(24);
    stringify(&mut writer, &mut DefaultHost, value, radix, 0)
        .expect("writes to a Vec do not fail");
    // The output is ASCII: digits, sign, point, and literal spellings.
    unsafe { String::from_utf8_unchecked(writer) }
}

// TESTS
// -----
