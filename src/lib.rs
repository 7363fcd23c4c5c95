//! Shortest round-trip conversion of IEEE-754 doubles to text, in any
//! radix from 2 to 36.
//!
//! The conversion emits the fewest base-`radix` digits that parse back
//! to the exact same double under round-to-nearest-even, in plain
//! positional notation: an optional `-`, digits, and at most one `.`,
//! never exponent notation. It is the classic Steele & White / Burger &
//! Dybvig free-format digit generation, run over a fixed-capacity big
//! integer so a conversion performs no heap allocation of its own.
//!
//! ```
//! assert_eq!(dtoa_radix::to_string(0.1, 10), "0.1");
//! assert_eq!(dtoa_radix::to_string(255.0, 16), "ff");
//! assert_eq!(dtoa_radix::to_string(0.5, 2), "0.1");
//! assert_eq!(dtoa_radix::to_string(-2.5, 10), "-2.5");
//! ```
//!
//! The writer-driven entry point, [`stringify`], routes its output
//! through a [`Host`] so an embedder can intern the fixed literals
//! (`NaN`, `Infinity`, `-Infinity`, `0`), keep its own integer fast
//! path, or capture the digit string without re-parsing it.

// MODULES
mod bignum;
mod digit;
mod dragon;
mod float;
mod math;
mod write;

// API
pub use crate::write::{stringify, to_string, DefaultHost, Host, Literal};
