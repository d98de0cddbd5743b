//! Testing utilities for the bitcrypt library
//!
//! Hosts the known-answer vector framework under [`suites`] and a few
//! helpers shared by the integration tests in `tests/`.

pub mod suites;

use bitcrypt::algorithms::BitArray;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for test data
pub fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `bytes` random bytes as a bit array
pub fn random_bits(rng: &mut ChaCha8Rng, bytes: usize) -> BitArray {
    let mut buf = vec![0u8; bytes];
    rng.fill(&mut buf[..]);
    BitArray::from_bytes(&buf)
}

/// Parse a hex string into a bit array, panicking on bad input
pub fn hex_bits(s: &str) -> BitArray {
    BitArray::from_bytes(&hex::decode(s).expect("valid hex in test input"))
}

/// A copy of `bits` with bit `index` inverted
pub fn flip_bit(bits: &BitArray, index: usize) -> BitArray {
    let mut words = bits.words().to_vec();
    words[index / 32] ^= 1 << (31 - index % 32);
    BitArray::from_words_with_len(words, bits.bit_len())
}
