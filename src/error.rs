//! Error types for header hashing

use thiserror::Error;

use crate::params::MIN_INPUT_SIZE;

/// Errors reported by blob encoding and slow hash invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Header hash was not exactly 32 bytes
    #[error("invalid header hash length: expected 32 bytes, got {len}")]
    InvalidHeaderLength { len: usize },

    /// Input handed to the slow hash is below its minimum length
    #[error("primitive input too short: {len} bytes, need at least {min}")]
    InputTooShort { len: usize, min: usize },

    /// Variant code outside {1, 2, 4}
    #[error("unsupported cryptonight variant: {0}")]
    UnsupportedVariant(u32),

    /// Variant name that no known alias matches
    #[error("unknown cryptonight variant name: {0:?}")]
    UnknownVariantName(String),
}

impl Error {
    pub(crate) fn input_too_short(len: usize) -> Self {
        Self::InputTooShort {
            len,
            min: MIN_INPUT_SIZE,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;
