use super::Codec;
use crate::bitarray::BitArray;
use crate::error::{Error, Result};

/// UTF-8 text
///
/// Encoding reads whole bytes only; a trailing partial byte is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Codec for Utf8 {
    const NAME: &'static str = "utf8";
    type Encoded = String;
    type Input = str;

    fn from_bits(bits: &BitArray) -> Result<String> {
        let bytes = bits.clamp(bits.bit_len() / 8 * 8).to_bytes();
        String::from_utf8(bytes).map_err(|e| Error::encoding(Self::NAME, e.to_string()))
    }

    fn to_bits(input: &str) -> Result<BitArray> {
        Ok(BitArray::from_bytes(input.as_bytes()))
    }
}
