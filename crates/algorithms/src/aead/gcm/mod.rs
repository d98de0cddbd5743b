//! Galois/Counter Mode
//!
//! Counter mode encryption with a GHASH authenticator over
//! GF(2^128). Nonces of any length are accepted; a 96-bit nonce is used
//! directly as the initial counter block, anything else is hashed first.

use bitcrypt_internal::ct_mask;
use log::trace;

use bitcrypt_params::utils::symmetric::{
    GCM_DEFAULT_TAG_BITS, GCM_STANDARD_NONCE_BITS, GHASH_REDUCTION,
};

use super::{tag_len, AeadMode};
use crate::bitarray::{xor4, BitArray};
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// GCM mode
pub struct Gcm;

/// Multiply two elements of GF(2^128) in GCM's bit order
pub fn gf_mult(x: &[u32; 4], y: &[u32; 4]) -> [u32; 4] {
    let mut z = [0u32; 4];
    let mut v = *y;

    for i in 0..128 {
        let mask = ct_mask(x[i / 32] >> (31 - i % 32));
        z = xor4(&z, &[v[0] & mask, v[1] & mask, v[2] & mask, v[3] & mask]);

        let reduce = ct_mask(v[3]) & GHASH_REDUCTION;
        for j in (1..4).rev() {
            v[j] = (v[j] >> 1) | ((v[j - 1] & 1) << 31);
        }
        v[0] = (v[0] >> 1) ^ reduce;
    }
    z
}

/// Absorb `data` into the GHASH state `y`, zero-padding the last block
pub fn ghash(h: &[u32; 4], y: &[u32; 4], data: &BitArray) -> [u32; 4] {
    let mut y = *y;
    for i in (0..data.words().len()).step_by(4) {
        y = gf_mult(&xor4(&y, &data.block(i)), h);
    }
    y
}

fn length_block(a_bits: usize, b_bits: usize) -> BitArray {
    let (a, b) = (a_bits as u64, b_bits as u64);
    BitArray::from_block([(a >> 32) as u32, a as u32, (b >> 32) as u32, b as u32])
}

/// Per-call state: hash key and pre-counter block
struct Session<'a, C: BlockCipher> {
    cipher: &'a C,
    h: [u32; 4],
    j0: [u32; 4],
}

impl<'a, C: BlockCipher> Session<'a, C> {
    fn new(cipher: &'a C, nonce: &BitArray, tag_bits: usize) -> Result<Self> {
        validate::parameter(tag_bits <= 128, "gcm tag", "gcm: invalid tag length")?;

        let h = cipher.encrypt_block(&[0; 4]);
        let j0 = if nonce.bit_len() == GCM_STANDARD_NONCE_BITS {
            let w = nonce.words();
            [w[0], w[1], w[2], 1]
        } else {
            trace!("gcm: hashing {}-bit nonce", nonce.bit_len());
            let y = ghash(&h, &[0; 4], nonce);
            ghash(&h, &y, &length_block(0, nonce.bit_len()))
        };
        Ok(Self { cipher, h, j0 })
    }

    /// CTR keystream XOR starting at `inc32(J0)`
    fn ctr(&self, data: &BitArray) -> BitArray {
        let mut out = data.clone();
        let mut counter = self.j0;
        for i in (0..data.words().len()).step_by(4) {
            counter[3] = counter[3].wrapping_add(1);
            out.xor_block_at(i, &self.cipher.encrypt_block(&counter));
        }
        out
    }

    fn tag(&self, adata: &BitArray, ciphertext: &BitArray, tag_bits: usize) -> BitArray {
        let s = ghash(&self.h, &[0; 4], adata);
        let s = ghash(&self.h, &s, ciphertext);
        let s = ghash(
            &self.h,
            &s,
            &length_block(adata.bit_len(), ciphertext.bit_len()),
        );
        let tag = xor4(&s, &self.cipher.encrypt_block(&self.j0));
        BitArray::from_block(tag).bit_slice(0, Some(tag_bits))
    }
}

impl AeadMode for Gcm {
    const NAME: &'static str = "gcm";
    const DEFAULT_TAG_BITS: usize = GCM_DEFAULT_TAG_BITS;

    fn encrypt<C: BlockCipher>(
        cipher: &C,
        plaintext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
    ) -> Result<BitArray> {
        let tag_bits = tag_len(tag_bits, GCM_DEFAULT_TAG_BITS);
        let session = Session::new(cipher, nonce, tag_bits)?;
        let adata = adata.cloned().unwrap_or_default();

        let ct = session.ctr(plaintext);
        let tag = session.tag(&adata, &ct, tag_bits);
        Ok(ct.concat(&tag))
    }

    fn decrypt<C: BlockCipher>(
        cipher: &C,
        ciphertext: &BitArray,
        nonce: &BitArray,
        adata: Option<&BitArray>,
        tag_bits: Option<usize>,
    ) -> Result<BitArray> {
        let tag_bits = tag_len(tag_bits, GCM_DEFAULT_TAG_BITS);
        let session = Session::new(cipher, nonce, tag_bits)?;
        let adata = adata.cloned().unwrap_or_default();

        // An input no longer than the tag is all tag
        let (body, received) = if tag_bits <= ciphertext.bit_len() {
            let body_bits = ciphertext.bit_len() - tag_bits;
            (ciphertext.clamp(body_bits), ciphertext.bit_slice(body_bits, None))
        } else {
            (BitArray::new(), ciphertext.clone())
        };

        let tag = session.tag(&adata, &body, tag_bits);
        validate::authentication(tag.equal(&received), "gcm")?;
        Ok(session.ctr(&body))
    }
}
