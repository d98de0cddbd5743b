//! Error type definitions for cryptographic operations

use thiserror::Error;

/// Primary error type for bitcrypt operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A key, nonce, block, tag length or KDF parameter was rejected
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Where the parameter was rejected
        context: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// A length-validated input had the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Where the length was checked
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Codec input was not valid in the named format
    #[error("this isn't {format}: {message}")]
    InvalidEncoding {
        /// Name of the expected format (`hex`, `base64`, ...)
        format: &'static str,
        /// What was wrong with the input
        message: String,
    },

    /// Authentication tag mismatch on decryption
    #[error("authentication failed: {context}")]
    AuthenticationFailed {
        /// Algorithm whose tag did not verify
        context: &'static str,
    },

    /// Input exceeds a hard implementation bound; signals a usage bug
    #[error("implementation limit in {context}: {message}")]
    ImplementationLimit {
        /// Operation whose bound was exceeded
        context: &'static str,
        /// Description of the bound
        message: String,
    },

    /// A component requiring external setup was used before it was ready
    #[error("{context} is not ready")]
    NotReady {
        /// Component that is not ready
        context: &'static str,
    },
}

/// Result type for bitcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

/// Coarse failure class of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong key/nonce/block/tag length, malformed codec text, bad KDF input
    InvalidParameter,
    /// Authentication tag mismatch
    CorruptData,
    /// Data size beyond a hard bound
    ImplementationLimit,
    /// External setup missing
    NotReady,
}

impl Error {
    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. }
            | Self::InvalidLength { .. }
            | Self::InvalidEncoding { .. } => ErrorKind::InvalidParameter,
            Self::AuthenticationFailed { .. } => ErrorKind::CorruptData,
            Self::ImplementationLimit { .. } => ErrorKind::ImplementationLimit,
            Self::NotReady { .. } => ErrorKind::NotReady,
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidEncoding { format, message } => Self::InvalidEncoding { format, message },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed { context },
            Self::ImplementationLimit { message, .. } => {
                Self::ImplementationLimit { context, message }
            }
            Self::NotReady { .. } => Self::NotReady { context },
        }
    }

    /// Replace the message of an existing error, where it carries one
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidEncoding { format, .. } => Self::InvalidEncoding { format, message },
            Self::ImplementationLimit { context, .. } => {
                Self::ImplementationLimit { context, message }
            }
            other => other,
        }
    }
}
