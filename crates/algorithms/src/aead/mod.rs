//! Authenticated encryption modes
//!
//! CCM, OCB2 and GCM turn any 128-bit [`BlockCipher`] into an AEAD scheme.
//! Every call is self-contained: the cipher instance carries the key and
//! the nonce, associated data and tag length are passed per call. The
//! ciphertext is returned with the tag appended; decryption verifies the
//! tag with [`BitArray::equal`] and withholds the plaintext on mismatch.

use crate::bitarray::BitArray;
use crate::block::BlockCipher;
use crate::error::{validate, Result};

pub mod ccm;
pub mod gcm;
pub mod ocb2;

pub use ccm::Ccm;
pub use gcm::Gcm;
pub use ocb2::Ocb2;

/// A block cipher mode providing authenticated encryption
pub trait AeadMode {
    /// Mode name
    const NAME: &'static str;

    /// Tag length in bits used when none is requested
    const DEFAULT_TAG_BITS: usize;

    /// Encrypt and authenticate, returning `ciphertext || tag`
    fn encrypt<C: BlockCipher>(
        cipher: &C,
        plaintext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
    ) -> Result<BitArray>;

    /// Verify and decrypt `ciphertext || tag`
    fn decrypt<C: BlockCipher>(
        cipher: &C,
        ciphertext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
    ) -> Result<BitArray>;
}

/// Requested tag length, with `None` and zero meaning the mode default
pub(crate) fn tag_len(requested: Option<usize>, default: usize) -> usize {
    requested.filter(|&bits| bits != 0).unwrap_or(default)
}

/// Split the trailing `tag_bits` bits off a sealed message
///
/// A message too short to hold the tag fails authentication like any other
/// truncated ciphertext.
pub(crate) fn split_tag(
    algorithm: &'static str,
    sealed: &BitArray,
    tag_bits: usize,
) -> Result<(BitArray, BitArray)> {
    validate::authentication(sealed.bit_len() >= tag_bits, algorithm)?;
    let body_bits = sealed.bit_len() - tag_bits;
    Ok((sealed.clamp(body_bits), sealed.bit_slice(body_bits, None)))
}
