//! Constants for key derivation functions

/// Iteration count PBKDF2 uses when the caller passes zero
pub const PBKDF2_DEFAULT_ITERATIONS: u32 = 1000;

/// Largest number of PRF blocks PBKDF2 may produce (RFC 8018 section 5.2)
pub const PBKDF2_MAX_BLOCKS: u64 = 0xFFFF_FFFF;
