//! Endianness utility functions
//!
//! Bit arrays store bits MSB-first, so bytes map onto words big-endian.

use byteorder::{BigEndian, ByteOrder};

/// Pack bytes into big-endian words, zero-filling the last word
pub fn words_from_be_bytes(bytes: &[u8]) -> Vec<u32> {
    let whole = bytes.len() / 4 * 4;
    let mut words = vec![0u32; bytes.len().div_ceil(4)];
    BigEndian::read_u32_into(&bytes[..whole], &mut words[..whole / 4]);

    let rest = &bytes[whole..];
    if !rest.is_empty() {
        let mut word = [0u8; 4];
        word[..rest.len()].copy_from_slice(rest);
        words[whole / 4] = BigEndian::read_u32(&word);
    }
    words
}

/// Unpack big-endian words into exactly `len` bytes
///
/// Missing trailing bytes (when `len` exceeds the words) are zero.
pub fn words_to_be_bytes(words: &[u32], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; words.len() * 4];
    BigEndian::write_u32_into(words, &mut out);
    out.resize(len, 0);
    out
}
