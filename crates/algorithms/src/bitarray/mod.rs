//! Bit-precise byte strings
//!
//! A [`BitArray`] is a sequence of big-endian 32-bit words holding an
//! arbitrary number of bits, MSB first. Every primitive in this crate
//! consumes and produces bit arrays; the codecs convert them to and from
//! text and bytes.
//!
//! The in-memory form keeps the number of occupied bits explicitly and
//! always zeroes the unused low bits of a partial last word. The packed
//! single-integer convention, where a partial word carries its bit count
//! multiplied by 2^40 on top of the word bits, is only used at the
//! interoperability boundary ([`BitArray::from_packed`],
//! [`BitArray::to_packed`], [`partial`], [`get_partial`]).

use core::fmt;

use bitcrypt_internal::{ct_eq_words, ct_xor4, words_from_be_bytes, words_to_be_bytes};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Result};

/// Multiplier of the bit count in the packed partial-word convention
pub const PARTIAL_UNIT: u64 = 1 << 40;

/// Mask selecting the top `bits` bits of a word
#[inline(always)]
fn high_mask(bits: usize) -> u32 {
    match bits {
        0 => 0,
        b if b >= 32 => u32::MAX,
        b => u32::MAX << (32 - b),
    }
}

/// Encode a partial word in the packed convention
///
/// Unless `canonical` is set, `word` holds its `len` occupied bits
/// right-aligned and is shifted into the high bits first. A length of 32
/// (or more) returns the word unchanged; a length of 0 yields an empty
/// zero word.
pub fn partial(len: u32, word: u32, canonical: bool) -> u64 {
    if len >= 32 {
        return u64::from(word);
    }
    if len == 0 {
        return 0;
    }
    let aligned = if canonical { word } else { word << (32 - len) };
    u64::from(aligned) + u64::from(len) * PARTIAL_UNIT
}

/// Number of occupied bits of a packed word (32 when no length is encoded)
pub fn get_partial(packed: u64) -> u32 {
    match packed.saturating_add(PARTIAL_UNIT >> 1) / PARTIAL_UNIT {
        0 => 32,
        n => n.min(32) as u32,
    }
}

/// XOR two 128-bit blocks
#[inline(always)]
pub fn xor4(a: &[u32; 4], b: &[u32; 4]) -> [u32; 4] {
    ct_xor4(a, b)
}

/// An arbitrary-length bit string stored as big-endian 32-bit words
#[derive(Clone, Default, Zeroize)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<u64>", into = "Vec<u64>")
)]
pub struct BitArray {
    words: Vec<u32>,
    bits: usize,
}

impl BitArray {
    /// The empty bit array
    pub fn new() -> Self {
        Self::default()
    }

    /// A bit array made of whole words
    pub fn from_words(words: Vec<u32>) -> Self {
        let bits = words.len() * 32;
        Self { words, bits }
    }

    /// A bit array holding the first `bits` bits of `words`
    ///
    /// Missing words are zero-filled; surplus words and the unused tail of
    /// the last word are dropped.
    pub fn from_words_with_len(mut words: Vec<u32>, bits: usize) -> Self {
        words.resize(bits.div_ceil(32), 0);
        if let Some(last) = words.last_mut() {
            *last &= high_mask(bits - (bits - 1) / 32 * 32);
        }
        Self { words, bits }
    }

    /// A bit array holding `bytes` verbatim
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            words: words_from_be_bytes(bytes),
            bits: bytes.len() * 8,
        }
    }

    /// A 128-bit array from a block
    pub fn from_block(block: [u32; 4]) -> Self {
        Self::from_words(block.to_vec())
    }

    /// Decode the packed interoperability form
    ///
    /// Only the last element may carry a partial-word length; earlier
    /// elements are read as whole words.
    pub fn from_packed(packed: &[u64]) -> Self {
        let Some((last, init)) = packed.split_last() else {
            return Self::new();
        };
        let mut words: Vec<u32> = init.iter().map(|&p| p as u32).collect();
        words.push(*last as u32);
        let bits = init.len() * 32 + get_partial(*last) as usize;
        Self::from_words_with_len(words, bits)
    }

    /// Encode into the packed interoperability form
    pub fn to_packed(&self) -> Vec<u64> {
        let mut out: Vec<u64> = self.words.iter().map(|&w| u64::from(w)).collect();
        let tail = self.bits % 32;
        if let Some(last) = out.last_mut() {
            if tail != 0 {
                *last = partial(tail as u32, *last as u32, true);
            }
        }
        out
    }

    /// Length in bits
    pub fn bit_len(&self) -> usize {
        self.bits
    }

    /// True when no bits are held
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The underlying words; the last one may be partial
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Consume into the underlying words
    pub fn into_words(mut self) -> Vec<u32> {
        core::mem::take(&mut self.words)
    }

    /// Bytes of the array, a partial trailing byte zero-extended
    pub fn to_bytes(&self) -> Vec<u8> {
        words_to_be_bytes(&self.words, self.bits.div_ceil(8))
    }

    /// The 128-bit block starting at word `index`, zero-padded
    pub fn block(&self, index: usize) -> [u32; 4] {
        let mut block = [0u32; 4];
        for (i, slot) in block.iter_mut().enumerate() {
            *slot = self.words.get(index + i).copied().unwrap_or(0);
        }
        block
    }

    /// Bits `[start, end)`; `end = None` runs to the end of the array
    ///
    /// Ranges are clipped to the array, so an out-of-range start yields an
    /// empty result.
    pub fn bit_slice(&self, start: usize, end: Option<usize>) -> BitArray {
        let end = end.unwrap_or(self.bits).min(self.bits);
        if start >= end {
            return Self::new();
        }
        let first = start / 32;
        let offset = start % 32;
        let tail = Self {
            words: self.words[first..].to_vec(),
            bits: self.bits - first * 32,
        };
        let aligned = if offset == 0 {
            tail
        } else {
            let shifted = tail.shift_right(32 - offset, 0);
            let bits = shifted.bits - 32;
            Self::from_words_with_len(shifted.words[1..].to_vec(), bits)
        };
        aligned.clamp(end - start)
    }

    /// Read `length <= 32` bits starting at bit `start` as an integer
    ///
    /// Bits past the end of the array read as zero.
    pub fn extract(&self, start: usize, length: usize) -> Result<u32> {
        validate::max_length("bit array extract", length, 32)?;
        if length == 0 {
            return Ok(0);
        }
        let index = start / 32;
        let hi = u64::from(self.words.get(index).copied().unwrap_or(0));
        let lo = u64::from(self.words.get(index + 1).copied().unwrap_or(0));
        let window = (hi << 32) | lo;
        let shift = 64 - start % 32 - length;
        let mask = (1u64 << length) - 1;
        Ok(((window >> shift) & mask) as u32)
    }

    /// Join two arrays at bit granularity
    pub fn concat(&self, other: &BitArray) -> BitArray {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let used = self.bits % 32;
        if used == 0 {
            let mut words = self.words.clone();
            words.extend_from_slice(&other.words);
            return Self {
                words,
                bits: self.bits + other.bits,
            };
        }
        let (carry, head) = match self.words.split_last() {
            Some((last, head)) => (*last, head.to_vec()),
            None => (0, Vec::new()),
        };
        other.shift_right_onto(used, carry, head)
    }

    /// Truncate to `len` bits; a no-op when the array is not longer
    pub fn clamp(&self, len: usize) -> BitArray {
        let mut out = self.clone();
        out.truncate(len);
        out
    }

    /// In-place [`BitArray::clamp`]
    pub fn truncate(&mut self, len: usize) {
        if len >= self.bits {
            return;
        }
        let words = core::mem::take(&mut self.words);
        *self = Self::from_words_with_len(words, len);
    }

    /// Prefix `shift` bits taken from `carry` followed by zeros
    ///
    /// The carry word supplies the first `min(shift, 32)` prefix bits from
    /// its top; any further prefix bits are zero.
    pub fn shift_right(&self, shift: usize, carry: u32) -> BitArray {
        self.shift_right_onto(shift, carry, Vec::new())
    }

    /// [`BitArray::shift_right`] appended to `out`, which holds whole words
    fn shift_right_onto(&self, shift: usize, carry: u32, mut out: Vec<u32>) -> BitArray {
        let total = out.len() * 32 + shift + self.bits;
        let mut carry = if shift < 32 { carry & high_mask(shift) } else { carry };
        let mut rest = shift;
        while rest >= 32 {
            out.push(carry);
            carry = 0;
            rest -= 32;
        }
        if rest == 0 {
            out.extend_from_slice(&self.words);
        } else {
            for &word in &self.words {
                out.push(carry | (word >> rest));
                carry = word << (32 - rest);
            }
            out.push(carry);
        }
        Self::from_words_with_len(out, total)
    }

    /// Swap the byte order of every word
    ///
    /// The bit length is kept, so the tail of a partial last word is
    /// cleared after the swap.
    pub fn byteswap_words(&mut self) {
        for word in self.words.iter_mut() {
            *word = word.swap_bytes();
        }
        let words = core::mem::take(&mut self.words);
        *self = Self::from_words_with_len(words, self.bits);
    }

    /// Constant-structure equality
    ///
    /// Arrays of different bit length are unequal without inspecting their
    /// words; otherwise every word is compared before answering.
    pub fn equal(&self, other: &BitArray) -> bool {
        self.bits == other.bits && ct_eq_words(&self.words, &other.words)
    }

    /// XOR `block` into the four words starting at word `index`
    ///
    /// Bits past the array length stay zero.
    pub(crate) fn xor_block_at(&mut self, index: usize, block: &[u32; 4]) {
        for (word, mask) in self.words[index..].iter_mut().zip(block.iter()) {
            *word ^= mask;
        }
        if self.bits % 32 != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= high_mask(self.bits % 32);
            }
        }
    }
}

impl ConstantTimeEq for BitArray {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(self.equal(other) as u8)
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for BitArray {}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitArray<{}>(", self.bits)?;
        for word in &self.words {
            write!(f, "{:08x}", word)?;
        }
        write!(f, ")")
    }
}

impl From<Vec<u64>> for BitArray {
    fn from(packed: Vec<u64>) -> Self {
        Self::from_packed(&packed)
    }
}

impl From<BitArray> for Vec<u64> {
    fn from(bits: BitArray) -> Self {
        bits.to_packed()
    }
}

impl From<[u32; 4]> for BitArray {
    fn from(block: [u32; 4]) -> Self {
        Self::from_block(block)
    }
}

impl From<&[u8]> for BitArray {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
