//! White-box harness: compiles the conversion modules directly into the
//! test crate so their internals can be exercised beyond the public API.

#![allow(dead_code)]

#[path = "../src/math.rs"]
mod math;

#[path = "../src/bignum.rs"]
mod bignum;

#[path = "../src/float.rs"]
mod float;

#[path = "../src/digit.rs"]
mod digit;

#[path = "../src/dragon.rs"]
mod dragon;

#[path = "../src/write.rs"]
mod write;

#[path = "dragon/num.rs"]
mod num;

#[path = "dragon/generate.rs"]
mod generate;
