//! Constant values for bitcrypt cryptographic operations
//!
//! This library provides the sizes, limits and defaults shared by every
//! bitcrypt component. All sizes are expressed in **bits** unless the
//! constant name ends in `_BYTES`, matching the bit-oriented API of
//! `bitcrypt-algorithms`.

#![no_std]

pub mod utils;
