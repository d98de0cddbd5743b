//! Counter with CBC-MAC (NIST SP 800-38C, RFC 3610)
//!
//! The length field size `L` is the smallest of 2..=4 bytes that holds the
//! message length, raised to `15 - nonce_bytes` for short nonces. Nonces
//! longer than `15 - L` bytes are truncated to fit.
//!
//! Long messages can report progress through a per-call observer that
//! receives the fraction of the counter-mode pass completed.

use bitcrypt_params::utils::symmetric::{
    CCM_DEFAULT_TAG_BITS, CCM_MAX_DATA_BYTES, CCM_MAX_TAG_BYTES, CCM_MIN_LENGTH_FIELD_BYTES,
    CCM_MIN_NONCE_BYTES, CCM_MIN_TAG_BYTES, CCM_PROGRESS_STEPS, CCM_SHORT_ADATA_MAX_BYTES,
};

use super::{split_tag, tag_len, AeadMode};
use crate::bitarray::{partial, xor4, BitArray};
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CCM mode
pub struct Ccm;

/// Both lengths must fit the 32-bit length encodings
fn check_data_limits(ad_bytes: u64, message_bytes: u64) -> Result<()> {
    validate::limit(
        ad_bytes <= CCM_MAX_DATA_BYTES && message_bytes <= CCM_MAX_DATA_BYTES,
        "ccm",
        "can't deal with 4GiB or more data",
    )
}

/// Per-call session state shared by encryption and decryption
struct Session<'a, C: BlockCipher> {
    cipher: &'a C,
    nonce: BitArray,
    length_field: usize,
    tag_bytes: usize,
}

impl<'a, C: BlockCipher> Session<'a, C> {
    fn new(cipher: &'a C, nonce: &BitArray, message_bytes: usize, tag_bits: usize) -> Result<Self> {
        let nonce_bytes = nonce.bit_len() / 8;
        validate::parameter(
            nonce_bytes >= CCM_MIN_NONCE_BYTES,
            "ccm nonce",
            "ccm: iv must be at least 7 bytes",
        )?;

        let tag_bytes = tag_bits / 8;
        validate::parameter(
            tag_bits % 16 == 0 && (CCM_MIN_TAG_BYTES..=CCM_MAX_TAG_BYTES).contains(&tag_bytes),
            "ccm tag",
            "ccm: invalid tag length",
        )?;

        let mut length_field = CCM_MIN_LENGTH_FIELD_BYTES;
        while length_field < 4 && (message_bytes as u64) >> (8 * length_field) != 0 {
            length_field += 1;
        }
        length_field = length_field.max(15usize.saturating_sub(nonce_bytes));
        log::trace!("ccm: length field of {} bytes", length_field);

        Ok(Self {
            cipher,
            nonce: nonce.clamp(8 * (15 - length_field)),
            length_field,
            tag_bytes,
        })
    }

    /// Flags byte followed by the nonce, as a bit array
    fn prefixed_nonce(&self, flags: u32) -> BitArray {
        BitArray::from_packed(&[partial(8, flags, false)]).concat(&self.nonce)
    }

    /// Raw CBC-MAC over the formatted header, associated data and message
    fn cbc_mac(&self, plaintext: &BitArray, adata: &BitArray) -> Result<[u32; 4]> {
        let ad_bytes = adata.bit_len() / 8;
        let message_bytes = plaintext.bit_len() / 8;
        check_data_limits(ad_bytes as u64, message_bytes as u64)?;

        let adata_flag = if adata.is_empty() { 0 } else { 0x40 };
        let flags = adata_flag
            | ((self.tag_bytes as u32 - 2) << 2)
            | (self.length_field as u32 - 1);
        let mut b0 = self.prefixed_nonce(flags).block(0);
        b0[3] |= message_bytes as u32;
        let mut mac = self.cipher.encrypt_block(&b0);

        if !adata.is_empty() {
            let header = if ad_bytes <= CCM_SHORT_ADATA_MAX_BYTES {
                BitArray::from_packed(&[partial(16, ad_bytes as u32, false)])
            } else {
                BitArray::from_packed(&[partial(16, 0xFFFE, false)])
                    .concat(&BitArray::from_words(vec![ad_bytes as u32]))
            };
            let formatted = header.concat(adata);
            for i in (0..formatted.words().len()).step_by(4) {
                mac = self.cipher.encrypt_block(&xor4(&mac, &formatted.block(i)));
            }
        }

        for i in (0..plaintext.words().len()).step_by(4) {
            mac = self.cipher.encrypt_block(&xor4(&mac, &plaintext.block(i)));
        }
        Ok(mac)
    }

    /// Counter-mode pass over `data`
    ///
    /// Returns the transformed data and `tag` XORed with the keystream of
    /// counter block zero, truncated to the tag length.
    fn ctr(
        &self,
        data: &BitArray,
        tag: &[u32; 4],
        progress: &mut dyn FnMut(f64),
    ) -> (BitArray, BitArray) {
        let mut counter = self.prefixed_nonce(self.length_field as u32 - 1).block(0);
        let tag = BitArray::from_block(xor4(tag, &self.cipher.encrypt_block(&counter)))
            .clamp(8 * self.tag_bytes);

        let mut out = data.clone();
        let words = data.words().len();
        let step = words as f64 / CCM_PROGRESS_STEPS as f64;
        let mut next_report = step;
        for i in (0..words).step_by(4) {
            if i as f64 > next_report {
                progress(i as f64 / words as f64);
                next_report += step;
            }
            counter[3] = counter[3].wrapping_add(1);
            out.xor_block_at(i, &self.cipher.encrypt_block(&counter));
        }
        (out, tag)
    }
}

impl Ccm {
    /// [`AeadMode::encrypt`] reporting progress to `progress`
    pub fn encrypt_with_progress<C: BlockCipher>(
        cipher: &C,
        plaintext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
        progress: &mut dyn FnMut(f64),
    ) -> Result<BitArray> {
        let tag_bits = tag_len(tag_bits, CCM_DEFAULT_TAG_BITS);
        let adata = adata.cloned().unwrap_or_default();
        let session = Session::new(cipher, nonce, plaintext.bit_len() / 8, tag_bits)?;

        let mac = session.cbc_mac(plaintext, &adata)?;
        let (ciphertext, tag) = session.ctr(plaintext, &mac, progress);
        Ok(ciphertext.concat(&tag))
    }

    /// [`AeadMode::decrypt`] reporting progress to `progress`
    pub fn decrypt_with_progress<C: BlockCipher>(
        cipher: &C,
        ciphertext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
        progress: &mut dyn FnMut(f64),
    ) -> Result<BitArray> {
        let tag_bits = tag_len(tag_bits, CCM_DEFAULT_TAG_BITS);
        let adata = adata.cloned().unwrap_or_default();
        let (body, tag) = split_tag("ccm", ciphertext, tag_bits)?;
        let session = Session::new(cipher, nonce, body.bit_len() / 8, tag_bits)?;

        let (plaintext, received_mac) = session.ctr(&body, &tag.block(0), progress);
        let mac = session.cbc_mac(&plaintext, &adata)?;
        let mac = BitArray::from_block(mac).clamp(8 * session.tag_bytes);

        validate::authentication(received_mac.equal(&mac), "ccm")?;
        Ok(plaintext)
    }
}

impl AeadMode for Ccm {
    const NAME: &'static str = "ccm";
    const DEFAULT_TAG_BITS: usize = CCM_DEFAULT_TAG_BITS;

    fn encrypt<C: BlockCipher>(
        cipher: &C,
        plaintext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
    ) -> Result<BitArray> {
        Self::encrypt_with_progress(cipher, plaintext, nonce, adata, tag_bits, &mut |_: f64| {})
    }

    fn decrypt<C: BlockCipher>(
        cipher: &C,
        ciphertext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
    ) -> Result<BitArray> {
        Self::decrypt_with_progress(cipher, ciphertext, nonce, adata, tag_bits, &mut |_: f64| {})
    }
}
