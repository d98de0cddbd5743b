//! Constants for hash functions

/// Output size of SHA-256 in bits
pub const SHA256_OUTPUT_BITS: usize = 256;

/// Output size of SHA-256 in 32-bit words
pub const SHA256_OUTPUT_WORDS: usize = 8;

/// Internal block size of SHA-256 in bits
pub const SHA256_BLOCK_BITS: usize = 512;

/// Internal block size of SHA-256 in 32-bit words
pub const SHA256_BLOCK_WORDS: usize = 16;

/// Number of SHA-256 compression rounds
pub const SHA256_ROUNDS: usize = 64;

/// HMAC inner pad, repeated per 32-bit word
pub const HMAC_IPAD_WORD: u32 = 0x3636_3636;

/// HMAC outer pad, repeated per 32-bit word
pub const HMAC_OPAD_WORD: u32 = 0x5c5c_5c5c;
