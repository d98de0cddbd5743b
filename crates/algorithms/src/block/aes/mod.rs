//! AES block cipher (FIPS 197)
//!
//! Table-driven implementation over 32-bit words. The round tables are
//! shared process-wide (see [`tables`]) and each instance holds its
//! expanded encryption and decryption schedules, which are wiped on drop.
//!
//! Keys of 128, 192 and 256 bits are accepted through a single type; the
//! round count follows from the key length.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use bitcrypt_params::utils::symmetric::{
    AES128_KEY_BITS, AES128_ROUNDS, AES192_KEY_BITS, AES192_ROUNDS, AES256_KEY_BITS,
    AES256_ROUNDS, AES_BLOCK_BITS,
};

use super::BlockCipher;
use crate::bitarray::BitArray;
use crate::error::{validate, Error, Result};

mod tables;

use tables::{xtime, TABLES};

/// Largest schedule: 15 round keys of four words for AES-256
const MAX_SCHEDULE_WORDS: usize = 60;

/// AES with a 128, 192 or 256-bit key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    enc_key: [u32; MAX_SCHEDULE_WORDS],
    dec_key: [u32; MAX_SCHEDULE_WORDS],
    rounds: usize,
}

// Key schedules stay out of debug output
impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let sbox = &TABLES.sbox;
    let [a, b, c, d] = word.to_be_bytes();
    u32::from_be_bytes([
        sbox[a as usize],
        sbox[b as usize],
        sbox[c as usize],
        sbox[d as usize],
    ])
}

impl Aes {
    /// Expand a key given as a bit array
    pub fn new(key: &BitArray) -> Result<Self> {
        let bits = key.bit_len();
        if bits != AES128_KEY_BITS && bits != AES192_KEY_BITS && bits != AES256_KEY_BITS {
            return Err(Error::param("aes key", "invalid aes key size"));
        }
        Ok(Self::from_key_words(key.words()))
    }

    /// Expand a key given as 4, 6 or 8 words
    pub fn from_words(key: &[u32]) -> Result<Self> {
        validate::parameter(
            matches!(key.len(), 4 | 6 | 8),
            "aes key",
            "invalid aes key size",
        )?;
        Ok(Self::from_key_words(key))
    }

    fn from_key_words(key: &[u32]) -> Self {
        let key_words = key.len();
        let rounds = match key_words {
            4 => AES128_ROUNDS,
            6 => AES192_ROUNDS,
            _ => AES256_ROUNDS,
        };
        let total = 4 * (rounds + 1);
        let mut enc_key = [0u32; MAX_SCHEDULE_WORDS];
        let mut dec_key = [0u32; MAX_SCHEDULE_WORDS];
        enc_key[..key_words].copy_from_slice(key);

        let mut rcon = 1u8;
        for i in key_words..total {
            let mut tmp = enc_key[i - 1];
            if i % key_words == 0 || (key_words == 8 && i % key_words == 4) {
                tmp = sub_word(tmp);
                if i % key_words == 0 {
                    tmp = tmp.rotate_left(8) ^ (u32::from(rcon) << 24);
                    rcon = xtime(rcon);
                }
            }
            enc_key[i] = enc_key[i - key_words] ^ tmp;
        }

        // Reverse the schedule, running the middle rounds through InvMixColumns
        let tables = &*TABLES;
        let mut i = total;
        for j in 0..total {
            let tmp = enc_key[if j & 3 != 0 { i } else { i - 4 }];
            dec_key[j] = if i <= 4 || j < 4 {
                tmp
            } else {
                let [a, b, c, d] = tmp.to_be_bytes();
                tables.dec[0][tables.sbox[a as usize] as usize]
                    ^ tables.dec[1][tables.sbox[b as usize] as usize]
                    ^ tables.dec[2][tables.sbox[c as usize] as usize]
                    ^ tables.dec[3][tables.sbox[d as usize] as usize]
            };
            i -= 1;
        }

        Aes {
            enc_key,
            dec_key,
            rounds,
        }
    }

    /// Number of rounds (10, 12 or 14)
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Encrypt one 128-bit block
    pub fn encrypt(&self, block: &BitArray) -> Result<BitArray> {
        validate::length("aes block", block.bit_len(), AES_BLOCK_BITS)?;
        Ok(BitArray::from_block(self.crypt(&block.block(0), false)))
    }

    /// Decrypt one 128-bit block
    pub fn decrypt(&self, block: &BitArray) -> Result<BitArray> {
        validate::length("aes block", block.bit_len(), AES_BLOCK_BITS)?;
        Ok(BitArray::from_block(self.crypt(&block.block(0), true)))
    }

    fn crypt(&self, input: &[u32; 4], decrypt: bool) -> [u32; 4] {
        let tables = &*TABLES;
        let (key, t, sbox) = if decrypt {
            (&self.dec_key, &tables.dec, &tables.sbox_inv)
        } else {
            (&self.enc_key, &tables.enc, &tables.sbox)
        };

        // Decryption walks the rows the other way, so words 1 and 3 swap
        let mut a = input[0] ^ key[0];
        let mut b = input[if decrypt { 3 } else { 1 }] ^ key[1];
        let mut c = input[2] ^ key[2];
        let mut d = input[if decrypt { 1 } else { 3 }] ^ key[3];
        let mut k = 4;

        for _ in 0..self.rounds - 1 {
            let a2 = t[0][(a >> 24) as usize]
                ^ t[1][(b >> 16 & 255) as usize]
                ^ t[2][(c >> 8 & 255) as usize]
                ^ t[3][(d & 255) as usize]
                ^ key[k];
            let b2 = t[0][(b >> 24) as usize]
                ^ t[1][(c >> 16 & 255) as usize]
                ^ t[2][(d >> 8 & 255) as usize]
                ^ t[3][(a & 255) as usize]
                ^ key[k + 1];
            let c2 = t[0][(c >> 24) as usize]
                ^ t[1][(d >> 16 & 255) as usize]
                ^ t[2][(a >> 8 & 255) as usize]
                ^ t[3][(b & 255) as usize]
                ^ key[k + 2];
            d = t[0][(d >> 24) as usize]
                ^ t[1][(a >> 16 & 255) as usize]
                ^ t[2][(b >> 8 & 255) as usize]
                ^ t[3][(c & 255) as usize]
                ^ key[k + 3];
            a = a2;
            b = b2;
            c = c2;
            k += 4;
        }

        // Last round: no column mix
        let mut out = [0u32; 4];
        for i in 0..4 {
            let index = if decrypt { (4 - i) & 3 } else { i };
            out[index] = u32::from_be_bytes([
                sbox[(a >> 24) as usize],
                sbox[(b >> 16 & 255) as usize],
                sbox[(c >> 8 & 255) as usize],
                sbox[(d & 255) as usize],
            ]) ^ key[k];
            k += 1;
            let first = a;
            a = b;
            b = c;
            c = d;
            d = first;
        }
        out
    }
}

impl BlockCipher for Aes {
    fn name(&self) -> &'static str {
        "aes"
    }

    fn encrypt_block(&self, block: &[u32; 4]) -> [u32; 4] {
        self.crypt(block, false)
    }

    fn decrypt_block(&self, block: &[u32; 4]) -> [u32; 4] {
        self.crypt(block, true)
    }
}
