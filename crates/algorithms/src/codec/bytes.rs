use super::Codec;
use crate::bitarray::BitArray;
use crate::error::Result;

/// Raw bytes; a trailing partial byte is zero-extended
#[derive(Debug, Clone, Copy, Default)]
pub struct Bytes;

impl Codec for Bytes {
    const NAME: &'static str = "bytes";
    type Encoded = Vec<u8>;
    type Input = [u8];

    fn from_bits(bits: &BitArray) -> Result<Vec<u8>> {
        Ok(bits.to_bytes())
    }

    fn to_bits(input: &[u8]) -> Result<BitArray> {
        Ok(BitArray::from_bytes(input))
    }
}
