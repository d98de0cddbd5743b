//! Public API types for the bitcrypt library
//!
//! This crate provides the error taxonomy shared by every bitcrypt
//! component. Operations either return a valid result or exactly one
//! [`Error`]; there is no partial success anywhere in the library.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};
