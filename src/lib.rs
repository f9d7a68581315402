//! bitseq: pseudo-random binary sequences
//!
//! a [`source::BitSource`] produces bits one at a time, [`generate`] turns them
//! into a sequence of `0`s and `1`s and [`nist`] checks how random that
//! sequence looks.
//!
//! # Example
//! ```
//! use bitseq::{generate::write_bits, source::{Bit, FixedSource}};
//!
//! let mut source = FixedSource::new(vec![Bit::One, Bit::Zero]);
//! let mut out: Vec<u8> = vec![];
//! write_bits(4, &mut source, &mut out).unwrap();
//! assert_eq!(out, b"1010");
//! ```
pub mod error;
pub mod fs;
pub mod generate;
pub mod input;
pub mod nist;
pub mod source;
pub mod special;
