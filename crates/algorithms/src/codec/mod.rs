//! Conversions between bit arrays and external text and byte forms
//!
//! Each format is a zero-sized type implementing [`Codec`]. Decoding is
//! lenient about whitespace (and padding where the format has one);
//! malformed input is reported as [`Error::Encoding`](crate::Error::Encoding)
//! naming the format.

use crate::bitarray::BitArray;
use crate::error::Result;

mod base32;
mod base64;
mod bytes;
mod hex;
mod utf8;

pub use self::base32::{Base32, Base32Hex};
pub use self::base64::{Base64, Base64Url};
pub use self::bytes::Bytes;
pub use self::hex::Hex;
pub use self::utf8::Utf8;

/// A bidirectional bit array codec
pub trait Codec {
    /// Format name used in error messages
    const NAME: &'static str;

    /// External representation produced by [`Codec::from_bits`]
    type Encoded;

    /// External representation accepted by [`Codec::to_bits`]
    type Input: ?Sized;

    /// Encode a bit array
    fn from_bits(bits: &BitArray) -> Result<Self::Encoded>;

    /// Decode into a bit array
    fn to_bits(input: &Self::Input) -> Result<BitArray>;
}

/// Input with every whitespace character removed
fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
