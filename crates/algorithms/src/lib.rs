//! Symmetric cryptographic primitives over bit-precise arrays
//!
//! Everything in this crate speaks [`BitArray`]: a sequence of big-endian
//! 32-bit words with an exact bit length. On top of it sit the AES block
//! cipher, the CCM, OCB2 and GCM authenticated encryption modes, SHA-256,
//! HMAC, PBKDF2 and codecs between bit arrays and text.
//!
//! # Example
//!
//! ```
//! use bitcrypt_algorithms::{AeadMode, Aes, Ccm, Codec, Hex, Utf8};
//!
//! let key = Hex::to_bits("000102030405060708090a0b0c0d0e0f").unwrap();
//! let nonce = Hex::to_bits("101112131415161718191a1b1c").unwrap();
//! let cipher = Aes::new(&key).unwrap();
//!
//! let pt = Utf8::to_bits("attack at dawn").unwrap();
//! let ct = Ccm::encrypt(&cipher, &pt, &nonce, None, None).unwrap();
//! let back = Ccm::decrypt(&cipher, &ct, &nonce, None, None).unwrap();
//! assert_eq!(Utf8::from_bits(&back).unwrap(), "attack at dawn");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Bit array and codecs
pub mod bitarray;
pub use bitarray::BitArray;

pub mod codec;
pub use codec::{Base32, Base32Hex, Base64, Base64Url, Bytes, Codec, Hex, Utf8};

// Block cipher implementations
pub mod block;
pub use block::{Aes, BlockCipher};

// AEAD modes
pub mod aead;
pub use aead::{AeadMode, Ccm, Gcm, Ocb2};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha256};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// KDF implementations
pub mod kdf;
pub use kdf::{pbkdf2, Pbkdf2};
