//! Constants for the block cipher and authenticated encryption modes

/// AES-128 key size in bits
pub const AES128_KEY_BITS: usize = 128;

/// AES-192 key size in bits
pub const AES192_KEY_BITS: usize = 192;

/// AES-256 key size in bits
pub const AES256_KEY_BITS: usize = 256;

/// AES block size in bits
pub const AES_BLOCK_BITS: usize = 128;

/// Number of rounds for AES-128
pub const AES128_ROUNDS: usize = 10;

/// Number of rounds for AES-192
pub const AES192_ROUNDS: usize = 12;

/// Number of rounds for AES-256
pub const AES256_ROUNDS: usize = 14;

/// Minimum CCM nonce size in bytes
pub const CCM_MIN_NONCE_BYTES: usize = 7;

/// Smallest CCM length field (`L`) in bytes
pub const CCM_MIN_LENGTH_FIELD_BYTES: usize = 2;

/// Largest associated data or message CCM will process, in bytes
pub const CCM_MAX_DATA_BYTES: u64 = 0xFFFF_FFFF;

/// Associated data up to this many bytes uses the short 2-byte length prefix
pub const CCM_SHORT_ADATA_MAX_BYTES: usize = 0xFEFF;

/// Minimum CCM tag size in bytes
pub const CCM_MIN_TAG_BYTES: usize = 4;

/// Maximum CCM tag size in bytes
pub const CCM_MAX_TAG_BYTES: usize = 16;

/// Default CCM tag size in bits
pub const CCM_DEFAULT_TAG_BITS: usize = 64;

/// Number of progress notifications CCM emits over a long message
pub const CCM_PROGRESS_STEPS: usize = 50;

/// Required OCB2 nonce size in bits
pub const OCB2_NONCE_BITS: usize = 128;

/// Default OCB2 tag size in bits
pub const OCB2_DEFAULT_TAG_BITS: usize = 64;

/// OCB2/GF(2^128) doubling reduction constant (x^7 + x^2 + x + 1)
pub const GF128_DOUBLE_REDUCTION: u32 = 0x87;

/// Nonce size for which GCM uses the nonce directly as J0, in bits
pub const GCM_STANDARD_NONCE_BITS: usize = 96;

/// Default GCM tag size in bits
pub const GCM_DEFAULT_TAG_BITS: usize = 128;

/// GHASH reduction constant applied to the top word after a right shift
pub const GHASH_REDUCTION: u32 = 0xE100_0000;
