//! Error handling for the bitcrypt ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::ResultExt;
