use super::{strip_whitespace, Codec};
use crate::bitarray::BitArray;
use crate::error::{Error, Result};

/// Lowercase hexadecimal
///
/// Encodes `bit_len / 4` digits. Decoding drops whitespace and every `0x`
/// marker, and keeps exactly four bits per digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

impl Codec for Hex {
    const NAME: &'static str = "hex";
    type Encoded = String;
    type Input = str;

    fn from_bits(bits: &BitArray) -> Result<String> {
        let mut out = hex::encode(bits.to_bytes());
        out.truncate(bits.bit_len() / 4);
        Ok(out)
    }

    fn to_bits(input: &str) -> Result<BitArray> {
        let mut digits = strip_whitespace(input).replace("0x", "");
        let len = digits.len() * 4;
        if digits.len() % 2 == 1 {
            digits.push('0');
        }
        let bytes = hex::decode(&digits).map_err(|e| Error::encoding(Self::NAME, e.to_string()))?;
        Ok(BitArray::from_bytes(&bytes).clamp(len))
    }
}
