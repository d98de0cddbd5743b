//! OCB 2.0 authenticated encryption
//!
//! Offsets advance by doubling in GF(2^128). The final, possibly partial,
//! block is encrypted with a pad derived from its bit length, and the
//! associated data is authenticated with PMAC. Callers that already hold
//! the PMAC of their associated data can pass it directly (`premac`).

use bitcrypt_internal::ct_mask;
use bitcrypt_params::utils::symmetric::{
    GF128_DOUBLE_REDUCTION, OCB2_DEFAULT_TAG_BITS, OCB2_NONCE_BITS,
};

use super::{split_tag, tag_len, AeadMode};
use crate::bitarray::{xor4, BitArray};
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// OCB2 mode
pub struct Ocb2;

/// Multiply by x in GF(2^128)
#[inline]
pub fn double(a: &[u32; 4]) -> [u32; 4] {
    [
        a[0] << 1 ^ a[1] >> 31,
        a[1] << 1 ^ a[2] >> 31,
        a[2] << 1 ^ a[3] >> 31,
        a[3] << 1 ^ (GF128_DOUBLE_REDUCTION & ct_mask(a[0] >> 31)),
    ]
}

fn check_nonce(nonce: &BitArray) -> Result<()> {
    validate::parameter(
        nonce.bit_len() == OCB2_NONCE_BITS,
        "ocb2 nonce",
        "ocb iv must be 128 bits",
    )
}

fn check_tag(tag_bits: usize) -> Result<()> {
    validate::parameter(tag_bits <= 128, "ocb2 tag", "ocb: invalid tag length")
}

/// Length-dependent pad for the final block
fn final_pad<C: BlockCipher>(cipher: &C, delta: &[u32; 4], bits: usize) -> [u32; 4] {
    cipher.encrypt_block(&xor4(delta, &[0, 0, 0, bits as u32]))
}

/// Tag over the checksum, folding in the associated data's PMAC
fn finish_tag<C: BlockCipher>(
    cipher: &C,
    checksum: &[u32; 4],
    delta: &[u32; 4],
    adata: &BitArray,
    premac: bool,
) -> [u32; 4] {
    let mut tag = cipher.encrypt_block(&xor4(checksum, &xor4(delta, &double(delta))));
    if !adata.is_empty() {
        let ad_mac = if premac { adata.block(0) } else { pmac(cipher, adata) };
        tag = xor4(&tag, &ad_mac);
    }
    tag
}

/// PMAC of `data`, as used for OCB2 associated data
pub fn pmac<C: BlockCipher>(cipher: &C, data: &BitArray) -> [u32; 4] {
    let mut offset = cipher.encrypt_block(&[0; 4]);
    offset = xor4(&offset, &double(&double(&offset)));
    let mut sum = [0u32; 4];

    let words = data.words().len();
    let mut i = 0;
    while i + 4 < words {
        offset = double(&offset);
        sum = xor4(&sum, &cipher.encrypt_block(&xor4(&offset, &data.block(i))));
        i += 4;
    }

    let mut last = data.bit_slice(32 * i, None);
    if last.bit_len() < 128 {
        offset = xor4(&offset, &double(&offset));
        last = last.concat(&BitArray::from_block([0x8000_0000, 0, 0, 0]));
    }
    sum = xor4(&sum, &last.block(0));
    cipher.encrypt_block(&xor4(&double(&xor4(&offset, &double(&offset))), &sum))
}

impl Ocb2 {
    /// Encrypt with explicit handling of the associated data
    ///
    /// With `premac` set, `adata` is taken to be the PMAC of the real
    /// associated data and is XORed into the tag as is.
    pub fn encrypt_with<C: BlockCipher>(
        cipher: &C,
        plaintext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
        premac: bool,
    ) -> Result<BitArray> {
        check_nonce(nonce)?;
        let tag_bits = tag_len(tag_bits, OCB2_DEFAULT_TAG_BITS);
        check_tag(tag_bits)?;

        let mut delta = double(&cipher.encrypt_block(&nonce.block(0)));
        let mut checksum = [0u32; 4];
        let mut out = Vec::with_capacity(plaintext.words().len() + 4);

        let words = plaintext.words().len();
        let mut i = 0;
        while i + 4 < words {
            let block = plaintext.block(i);
            checksum = xor4(&checksum, &block);
            out.extend_from_slice(&xor4(&delta, &cipher.encrypt_block(&xor4(&delta, &block))));
            delta = double(&delta);
            i += 4;
        }

        let last = plaintext.bit_slice(32 * i, None);
        let pad = final_pad(cipher, &delta, last.bit_len());
        let last_ct = BitArray::from_block(xor4(&last.block(0), &pad)).clamp(last.bit_len());
        checksum = xor4(&checksum, &xor4(&last_ct.block(0), &pad));

        let adata = adata.cloned().unwrap_or_default();
        let tag = finish_tag(cipher, &checksum, &delta, &adata, premac);

        Ok(BitArray::from_words(out)
            .concat(&last_ct)
            .concat(&BitArray::from_block(tag).clamp(tag_bits)))
    }

    /// Decrypt with explicit handling of the associated data
    ///
    /// See [`Ocb2::encrypt_with`] for `premac`.
    pub fn decrypt_with<C: BlockCipher>(
        cipher: &C,
        ciphertext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
        premac: bool,
    ) -> Result<BitArray> {
        check_nonce(nonce)?;
        let tag_bits = tag_len(tag_bits, OCB2_DEFAULT_TAG_BITS);
        check_tag(tag_bits)?;
        let (body, received) = split_tag("ocb2", ciphertext, tag_bits)?;

        let mut delta = double(&cipher.encrypt_block(&nonce.block(0)));
        let mut checksum = [0u32; 4];
        let mut out = Vec::with_capacity(body.words().len());

        let mut i = 0;
        while 32 * (i + 4) < body.bit_len() {
            let block = xor4(&delta, &cipher.decrypt_block(&xor4(&delta, &body.block(i))));
            checksum = xor4(&checksum, &block);
            out.extend_from_slice(&block);
            delta = double(&delta);
            i += 4;
        }

        let last_bits = body.bit_len() - 32 * i;
        let pad = final_pad(cipher, &delta, last_bits);
        let last = xor4(&pad, &body.bit_slice(32 * i, None).block(0));
        checksum = xor4(&checksum, &last);

        let adata = adata.cloned().unwrap_or_default();
        let tag = finish_tag(cipher, &checksum, &delta, &adata, premac);
        let tag = BitArray::from_block(tag).clamp(tag_bits);
        validate::authentication(tag.equal(&received), "ocb2")?;

        Ok(BitArray::from_words(out).concat(&BitArray::from_block(last).clamp(last_bits)))
    }
}

impl AeadMode for Ocb2 {
    const NAME: &'static str = "ocb2";
    const DEFAULT_TAG_BITS: usize = OCB2_DEFAULT_TAG_BITS;

    fn encrypt<C: BlockCipher>(
        cipher: &C,
        plaintext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
    ) -> Result<BitArray> {
        Self::encrypt_with(cipher, plaintext, nonce, adata, tag_bits, false)
    }

    fn decrypt<C: BlockCipher>(
        cipher: &C,
        ciphertext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
    ) -> Result<BitArray> {
        Self::decrypt_with(cipher, ciphertext, nonce, adata, tag_bits, false)
    }
}
