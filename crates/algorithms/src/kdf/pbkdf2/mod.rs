//! Password-Based Key Derivation Function 2 (RFC 8018, section 5.2)
//!
//! HMAC over the chosen hash is the pseudorandom function. Block `i` of
//! the output is `U_1 ^ ... ^ U_c` where `U_1 = PRF(P, S || INT_32_BE(i))`
//! and `U_j = PRF(P, U_{j-1})`.

use core::marker::PhantomData;

use bitcrypt_params::utils::kdf::{PBKDF2_DEFAULT_ITERATIONS, PBKDF2_MAX_BLOCKS};

use crate::bitarray::BitArray;
use crate::codec::{Codec, Utf8};
use crate::error::{validate, Result};
use crate::hash::{HashFunction, Sha256};
use crate::mac::Hmac;

/// PBKDF2 with HMAC over `H`
pub struct Pbkdf2<H: HashFunction = Sha256> {
    _hash: PhantomData<H>,
}

impl<H: HashFunction> Pbkdf2<H> {
    /// Derive `out_bits` bits from `password` and `salt`
    ///
    /// An iteration count of 0 selects the default of 1000. An output
    /// length of 0 returns one full PRF block.
    pub fn derive(
        password: &BitArray,
        salt: &BitArray,
        iterations: u32,
        out_bits: usize,
    ) -> Result<BitArray> {
        let iterations = if iterations == 0 {
            PBKDF2_DEFAULT_ITERATIONS
        } else {
            iterations
        };
        let blocks = out_bits.max(1).div_ceil(H::OUTPUT_BITS) as u64;
        validate::parameter(
            blocks <= PBKDF2_MAX_BLOCKS,
            "pbkdf2",
            "invalid params to pbkdf2",
        )?;

        let mut prf = Hmac::<H>::new(password)?;
        let mut out = BitArray::new();

        for index in 1..=blocks {
            let counter = BitArray::from_words(vec![index as u32]);
            let mut u = prf.encrypt(&salt.concat(&counter))?;
            let mut block = u.words().to_vec();
            for _ in 1..iterations {
                u = prf.encrypt(&u)?;
                for (acc, word) in block.iter_mut().zip(u.words()) {
                    *acc ^= word;
                }
            }
            out = out.concat(&BitArray::from_words_with_len(block, u.bit_len()));
        }

        if out_bits > 0 {
            out.truncate(out_bits);
        }
        Ok(out)
    }

    /// [`Pbkdf2::derive`] over UTF-8 password and salt
    pub fn derive_str(
        password: &str,
        salt: &str,
        iterations: u32,
        out_bits: usize,
    ) -> Result<BitArray> {
        Self::derive(
            &Utf8::to_bits(password)?,
            &Utf8::to_bits(salt)?,
            iterations,
            out_bits,
        )
    }
}

/// PBKDF2-HMAC-SHA256
pub fn pbkdf2(
    password: &BitArray,
    salt: &BitArray,
    iterations: u32,
    out_bits: usize,
) -> Result<BitArray> {
    Pbkdf2::<Sha256>::derive(password, salt, iterations, out_bits)
}
