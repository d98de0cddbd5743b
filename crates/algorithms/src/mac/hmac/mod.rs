//! HMAC (RFC 2104 / FIPS 198-1) over any [`HashFunction`]
//!
//! The inner and outer pads are absorbed once at construction into two
//! template states; each MAC starts from a copy of them.

use bitcrypt_params::utils::hash::{HMAC_IPAD_WORD, HMAC_OPAD_WORD};

use crate::bitarray::BitArray;
use crate::error::{validate, Result};
use crate::hash::{HashFunction, Sha256};

/// Keyed HMAC context
#[derive(Clone)]
pub struct Hmac<H: HashFunction = Sha256> {
    inner: H,
    outer: H,
    working: H,
    updated: bool,
}

impl<H: HashFunction> Hmac<H> {
    /// Key a new context; keys longer than one hash block are hashed first
    pub fn new(key: &BitArray) -> Result<Self> {
        let block_words = H::BLOCK_BITS / 32;
        let hashed;
        let key = if key.bit_len() > H::BLOCK_BITS {
            hashed = H::hash(key)?;
            &hashed
        } else {
            key
        };

        let pad = |mask: u32| {
            BitArray::from_words(
                (0..block_words)
                    .map(|i| key.words().get(i).copied().unwrap_or(0) ^ mask)
                    .collect(),
            )
        };

        let mut inner = H::new();
        inner.update(&pad(HMAC_IPAD_WORD))?;
        let mut outer = H::new();
        outer.update(&pad(HMAC_OPAD_WORD))?;

        Ok(Self {
            working: inner.clone(),
            inner,
            outer,
            updated: false,
        })
    }

    /// MAC `data` in one call
    ///
    /// Fails if the context has been updated since the last reset.
    pub fn mac(&mut self, data: &BitArray) -> Result<BitArray> {
        validate::parameter(
            !self.updated,
            "hmac",
            "encrypt on already updated hmac called!",
        )?;
        self.update(data)?;
        self.digest()
    }

    /// Alias of [`Hmac::mac`]
    pub fn encrypt(&mut self, data: &BitArray) -> Result<BitArray> {
        self.mac(data)
    }

    /// Discard any absorbed data
    pub fn reset(&mut self) {
        self.working = self.inner.clone();
        self.updated = false;
    }

    /// Absorb more data
    pub fn update(&mut self, data: &BitArray) -> Result<&mut Self> {
        self.updated = true;
        self.working.update(data)?;
        Ok(self)
    }

    /// Finish the MAC over everything absorbed, then reset
    pub fn digest(&mut self) -> Result<BitArray> {
        let inner_digest = self.working.finalize();
        let tag = self.outer.clone().update(&inner_digest)?.finalize();
        self.reset();
        Ok(tag)
    }

    /// Recompute the MAC of `data` and compare with `tag` in constant time
    pub fn verify(&mut self, data: &BitArray, tag: &BitArray) -> Result<bool> {
        let expected = self.mac(data)?;
        Ok(expected.equal(tag))
    }
}
