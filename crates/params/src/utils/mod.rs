//! Constants grouped by algorithm family

pub mod hash;
pub mod kdf;
pub mod symmetric;
