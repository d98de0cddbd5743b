//! Key derivation functions

pub mod pbkdf2;

pub use pbkdf2::{pbkdf2, Pbkdf2};
