//! SHA-256 (FIPS 180-4)
//!
//! The state buffers unprocessed bits as a [`BitArray`], so input may end
//! at any bit. A finished state resets itself and can be reused.

use zeroize::Zeroize;

use bitcrypt_params::utils::hash::{
    SHA256_BLOCK_BITS, SHA256_BLOCK_WORDS, SHA256_OUTPUT_BITS, SHA256_OUTPUT_WORDS, SHA256_ROUNDS,
};

use super::HashFunction;
use crate::bitarray::BitArray;
use crate::codec::{Codec, Utf8};
use crate::error::{Error, Result};

/// Initial hash value: first 32 bits of the fractional parts of the square
/// roots of the first 8 primes
///
/// Stored as a literal table; `test_constants_derive_from_primes` recomputes
/// both this and [`K`] from the primes.
const IV: [u32; SHA256_OUTPUT_WORDS] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants: first 32 bits of the fractional parts of the cube roots
/// of the first 64 primes
const K: [u32; SHA256_ROUNDS] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// SHA-256 hash state
#[derive(Clone, Zeroize)]
pub struct Sha256 {
    state: [u32; SHA256_OUTPUT_WORDS],
    buffer: BitArray,
    length: u64,
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self {
            state: IV,
            buffer: BitArray::new(),
            length: 0,
        }
    }
}

impl Sha256 {
    /// Absorb UTF-8 text
    pub fn update_str(&mut self, text: &str) -> Result<&mut Self> {
        self.update(&Utf8::to_bits(text)?)
    }

    /// One-shot digest of UTF-8 text
    pub fn hash_str(text: &str) -> Result<BitArray> {
        Self::hash(&Utf8::to_bits(text)?)
    }

    fn compress(state: &mut [u32; SHA256_OUTPUT_WORDS], block: &[u32]) {
        let mut w = [0u32; 64];
        w[..SHA256_BLOCK_WORDS].copy_from_slice(&block[..SHA256_BLOCK_WORDS]);

        for i in 16..64 {
            let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
            let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
            w[i] = w[i - 16]
                .wrapping_add(s0)
                .wrapping_add(w[i - 7])
                .wrapping_add(s1);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

        for i in 0..SHA256_ROUNDS {
            let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
            let ch = (e & f) ^ ((!e) & g);
            let temp1 = h
                .wrapping_add(s1)
                .wrapping_add(ch)
                .wrapping_add(K[i])
                .wrapping_add(w[i]);
            let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let temp2 = s0.wrapping_add(maj);

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);
        }

        for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *s = s.wrapping_add(v);
        }
        w.zeroize();
    }

    /// Compress every complete block in `data`, keeping the rest buffered
    fn absorb(&mut self, data: BitArray) {
        let bits = data.bit_len();
        let blocks = bits / SHA256_BLOCK_BITS;
        let words = data.into_words();
        for block in words.chunks_exact(SHA256_BLOCK_WORDS).take(blocks) {
            Self::compress(&mut self.state, block);
        }
        let consumed = blocks * SHA256_BLOCK_WORDS;
        self.buffer =
            BitArray::from_words_with_len(words[consumed..].to_vec(), bits - blocks * SHA256_BLOCK_BITS);
    }
}

impl HashFunction for Sha256 {
    const NAME: &'static str = "sha256";
    const BLOCK_BITS: usize = SHA256_BLOCK_BITS;
    const OUTPUT_BITS: usize = SHA256_OUTPUT_BITS;

    fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    fn update(&mut self, data: &BitArray) -> Result<&mut Self> {
        self.length = self
            .length
            .checked_add(data.bit_len() as u64)
            .ok_or(Error::Limit {
                operation: "sha256",
                details: "message too long",
            })?;
        let buffered = self.buffer.concat(data);
        self.absorb(buffered);
        Ok(self)
    }

    fn finalize(&mut self) -> BitArray {
        let mut words = self
            .buffer
            .concat(&BitArray::from_words_with_len(vec![0x8000_0000], 1))
            .into_words();
        while (words.len() + 2) % SHA256_BLOCK_WORDS != 0 {
            words.push(0);
        }
        words.push((self.length >> 32) as u32);
        words.push(self.length as u32);
        for block in words.chunks_exact(SHA256_BLOCK_WORDS) {
            Self::compress(&mut self.state, block);
        }
        let digest = BitArray::from_words(self.state.to_vec());
        self.reset();
        digest
    }
}
