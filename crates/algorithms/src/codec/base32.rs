use super::{strip_whitespace, Codec};
use crate::bitarray::BitArray;
use crate::error::{Error, Result};

const STANDARD_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const HEX_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

const BITS_PER_CHAR: usize = 5;

fn encode(bits: &BitArray, alphabet: &[u8; 32]) -> Result<String> {
    let mut out = String::with_capacity(bits.bit_len().div_ceil(BITS_PER_CHAR).next_multiple_of(8));
    for start in (0..bits.bit_len()).step_by(BITS_PER_CHAR) {
        let index = bits.extract(start, BITS_PER_CHAR)? as usize;
        out.push(char::from(alphabet[index]));
    }
    while out.len() % 8 != 0 {
        out.push('=');
    }
    Ok(out)
}

/// Decode with one alphabet; `None` names the first foreign character
fn decode(cleaned: &str, alphabet: &[u8; 32]) -> core::result::Result<BitArray, char> {
    let mut bytes = Vec::with_capacity(cleaned.len() * BITS_PER_CHAR / 8);
    let mut acc = 0u32;
    let mut pending = 0usize;
    for c in cleaned.chars() {
        let value = alphabet
            .iter()
            .position(|&a| char::from(a) == c)
            .ok_or(c)? as u32;
        acc = (acc << BITS_PER_CHAR) | value;
        pending += BITS_PER_CHAR;
        if pending >= 8 {
            pending -= 8;
            bytes.push((acc >> pending) as u8);
            acc &= (1 << pending) - 1;
        }
    }
    Ok(BitArray::from_bytes(&bytes))
}

fn clean(input: &str) -> String {
    strip_whitespace(input)
        .chars()
        .filter(|&c| c != '=')
        .collect::<String>()
        .to_ascii_uppercase()
}

/// RFC 4648 base32, `=` padded to a multiple of eight characters
///
/// Decoding is case-insensitive and only emits whole bytes. Input that
/// contains characters outside the standard alphabet is retried as
/// [`Base32Hex`] before it is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32;

impl Codec for Base32 {
    const NAME: &'static str = "base32";
    type Encoded = String;
    type Input = str;

    fn from_bits(bits: &BitArray) -> Result<String> {
        encode(bits, STANDARD_ALPHABET)
    }

    fn to_bits(input: &str) -> Result<BitArray> {
        let cleaned = clean(input);
        decode(&cleaned, STANDARD_ALPHABET).or_else(|bad| {
            decode(&cleaned, HEX_ALPHABET).map_err(|_| {
                Error::encoding(Self::NAME, format!("unexpected character {:?}", bad))
            })
        })
    }
}

/// RFC 4648 base32 with the extended-hex alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32Hex;

impl Codec for Base32Hex {
    const NAME: &'static str = "base32hex";
    type Encoded = String;
    type Input = str;

    fn from_bits(bits: &BitArray) -> Result<String> {
        encode(bits, HEX_ALPHABET)
    }

    fn to_bits(input: &str) -> Result<BitArray> {
        decode(&clean(input), HEX_ALPHABET)
            .map_err(|bad| Error::encoding(Self::NAME, format!("unexpected character {:?}", bad)))
    }
}
