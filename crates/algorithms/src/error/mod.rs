//! Error handling for cryptographic primitives

use std::borrow::Cow;
use std::fmt;

use bitcrypt_api::{Error as CoreError, Result as CoreResult};

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bits
        expected: usize,
        /// Actual length in bits
        actual: usize,
    },

    /// Malformed codec input
    Encoding {
        /// Format the input was expected to be in
        format: &'static str,
        /// What went wrong
        details: Cow<'static, str>,
    },

    /// Authentication failure (AEAD tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Input exceeds a hard bound of the implementation
    Limit {
        /// Operation whose bound was exceeded
        operation: &'static str,
        /// Description of the bound
        details: &'static str,
    },

    /// Component used before its external setup completed
    NotReady {
        /// Component that is not ready
        component: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<D: Into<Cow<'static, str>>>(format: &'static str, details: D) -> Self {
        Error::Encoding {
            format,
            details: details.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {} bits, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { format, details } => {
                write!(f, "this isn't {}: {}", format, details)
            }
            Error::Authentication { algorithm } => {
                write!(f, "{}: tag doesn't match", algorithm)
            }
            Error::Limit { operation, details } => {
                write!(f, "{}: {}", operation, details)
            }
            Error::NotReady { component } => {
                write!(f, "{} is not ready", component)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { format, details } => CoreError::InvalidEncoding {
                format,
                message: details.into_owned(),
            },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
            },
            Error::Limit { operation, details } => CoreError::ImplementationLimit {
                context: operation,
                message: details.to_string(),
            },
            Error::NotReady { component } => CoreError::NotReady { context: component },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use bitcrypt_api::ResultExt;

// Include the validation submodule
pub mod validate;
