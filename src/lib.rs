//! # bitcrypt
//!
//! Symmetric cryptography over bit-precise arrays.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bitcrypt = "0.4"
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`BitArray`](prelude::BitArray)
//!   in its packed word form
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bitcrypt-api`]: public error taxonomy
//! - [`bitcrypt-internal`]: constant-time and endianness helpers
//! - [`bitcrypt-params`]: algorithm constants
//! - [`bitcrypt-algorithms`]: bit arrays, codecs, AES, AEAD modes, SHA-256,
//!   HMAC and PBKDF2
//!
//! ## Example
//!
//! ```
//! use bitcrypt::prelude::*;
//!
//! let key = pbkdf2(
//!     &Utf8::to_bits("correct horse").unwrap(),
//!     &Hex::to_bits("0011223344556677").unwrap(),
//!     1000,
//!     128,
//! )
//! .unwrap();
//! let cipher = Aes::new(&key).unwrap();
//! let nonce = Hex::to_bits("000102030405060708090a0b").unwrap();
//!
//! let sealed = Gcm::encrypt(&cipher, &Utf8::to_bits("hello").unwrap(), &nonce, None, None).unwrap();
//! let opened = Gcm::decrypt(&cipher, &sealed, &nonce, None, None).unwrap();
//! assert_eq!(Utf8::from_bits(&opened).unwrap(), "hello");
//! ```

#![forbid(unsafe_code)]

// Core re-exports
pub use bitcrypt_algorithms as algorithms;
pub use bitcrypt_api as api;
pub use bitcrypt_internal as internal;
pub use bitcrypt_params as params;

// Workspace dependencies that appear in the public API
pub use subtle;
pub use zeroize;

/// Common imports for bitcrypt users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt};

    // Bit arrays and codecs
    pub use crate::algorithms::codec::{
        Base32, Base32Hex, Base64, Base64Url, Bytes, Codec, Hex, Utf8,
    };
    pub use crate::algorithms::BitArray;

    // Primitives and their traits
    pub use crate::algorithms::{
        pbkdf2, AeadMode, Aes, BlockCipher, Ccm, Gcm, HashFunction, Hmac, Ocb2, Pbkdf2, Sha256,
    };
}
