use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use super::{strip_whitespace, Codec};
use crate::bitarray::BitArray;
use crate::error::{Error, Result};

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, LENIENT.with_encode_padding(true));

const URL_SAFE: GeneralPurpose =
    GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT.with_encode_padding(false));

fn decode(engine: &GeneralPurpose, format: &'static str, input: &str) -> Result<BitArray> {
    let cleaned: String = strip_whitespace(input).chars().filter(|&c| c != '=').collect();
    let bytes = engine
        .decode(cleaned)
        .map_err(|e| Error::encoding(format, e.to_string()))?;
    Ok(BitArray::from_bytes(&bytes))
}

/// Standard base64 with `=` padding
///
/// A trailing partial byte is zero-extended before encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl Codec for Base64 {
    const NAME: &'static str = "base64";
    type Encoded = String;
    type Input = str;

    fn from_bits(bits: &BitArray) -> Result<String> {
        Ok(STANDARD.encode(bits.to_bytes()))
    }

    fn to_bits(input: &str) -> Result<BitArray> {
        decode(&STANDARD, Self::NAME, input)
    }
}

/// URL-safe base64 (`-` and `_`), unpadded
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Url;

impl Codec for Base64Url {
    const NAME: &'static str = "base64url";
    type Encoded = String;
    type Input = str;

    fn from_bits(bits: &BitArray) -> Result<String> {
        Ok(URL_SAFE.encode(bits.to_bytes()))
    }

    fn to_bits(input: &str) -> Result<BitArray> {
        decode(&URL_SAFE, Self::NAME, input)
    }
}
