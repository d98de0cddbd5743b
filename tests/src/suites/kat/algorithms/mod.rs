pub mod codec;
pub mod sha256;
