//! Internal utilities for the bitcrypt library
//!
//! Not part of the public API surface; shared by the algorithm crates for
//! constant-time word comparison and byte/word conversion.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq_words, ct_mask, ct_xor4};
pub use endian::{words_from_be_bytes, words_to_be_bytes};
