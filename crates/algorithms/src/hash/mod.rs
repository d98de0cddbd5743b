//! Hash functions
//!
//! [`HashFunction`] is the streaming interface HMAC and PBKDF2 are generic
//! over. Hashes consume bit arrays, so messages need not be byte aligned.

use crate::bitarray::BitArray;
use crate::error::Result;

pub mod sha256;

pub use sha256::Sha256;

/// A streaming hash over bit strings
pub trait HashFunction: Clone {
    /// Algorithm name
    const NAME: &'static str;

    /// Compression block size in bits
    const BLOCK_BITS: usize;

    /// Digest size in bits
    const OUTPUT_BITS: usize;

    /// A fresh state
    fn new() -> Self;

    /// Return to the fresh state
    fn reset(&mut self) -> &mut Self;

    /// Absorb more data
    fn update(&mut self, data: &BitArray) -> Result<&mut Self>;

    /// Pad, produce the digest and reset
    fn finalize(&mut self) -> BitArray;

    /// One-shot digest
    fn hash(data: &BitArray) -> Result<BitArray> {
        Ok(Self::new().update(data)?.finalize())
    }
}
