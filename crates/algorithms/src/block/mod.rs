//! Block ciphers
//!
//! The AEAD modes are written against [`BlockCipher`], which works on one
//! 128-bit block held as four big-endian words.

pub mod aes;

pub use aes::Aes;

/// A keyed permutation of 128-bit blocks
pub trait BlockCipher {
    /// Short algorithm name
    fn name(&self) -> &'static str;

    /// Encrypt one block
    fn encrypt_block(&self, block: &[u32; 4]) -> [u32; 4];

    /// Decrypt one block
    fn decrypt_block(&self, block: &[u32; 4]) -> [u32; 4];
}
