//! Slow hash capability
//!
//! The memory-hard Cryptonight function is not implemented here. Callers
//! inject it through [`SlowHash`], either as a Rust implementation or as
//! a foreign `cn_slow_hash` through [`crate::ExternSlowHash`].
//!
//! Implementations only ever see a [`SlowHashInput`], which this crate
//! builds after checking the input length and normalizing the height, so
//! no caller can hand a primitive short input or a prehashed flag.

use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::params::{DIGEST_SIZE, MIN_INPUT_SIZE};
use crate::variant::Variant;

/// Checked arguments for one slow hash call
///
/// Only [`invoke`] creates these. Holding one means the input is at least
/// [`MIN_INPUT_SIZE`] bytes, the height is 0 unless the variant is
/// [`Variant::V4`], and the input is raw (never prehashed).
#[derive(Debug, Clone, Copy)]
pub struct SlowHashInput<'a> {
    bytes: &'a [u8],
    variant: Variant,
    height: u64,
}

impl<'a> SlowHashInput<'a> {
    pub(crate) fn new(bytes: &'a [u8], variant: Variant, height: u64) -> Result<Self> {
        if bytes.len() < MIN_INPUT_SIZE {
            return Err(Error::input_too_short(bytes.len()));
        }

        Ok(Self {
            bytes,
            variant,
            height: variant.effective_height(height),
        })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    /// Always false: headers are hashed raw
    pub fn prehashed(&self) -> bool {
        false
    }
}

/// Cryptonight slow hash
///
/// Implementations must be deterministic and reentrant: concurrent calls
/// through `&self` may not share a scratchpad. Allocate it per call or
/// keep it thread-local.
pub trait SlowHash: Send + Sync {
    fn slow_hash(&self, input: &SlowHashInput<'_>) -> [u8; DIGEST_SIZE];
}

impl<P: SlowHash + ?Sized> SlowHash for &P {
    fn slow_hash(&self, input: &SlowHashInput<'_>) -> [u8; DIGEST_SIZE] {
        (**self).slow_hash(input)
    }
}

impl<P: SlowHash + ?Sized> SlowHash for Box<P> {
    fn slow_hash(&self, input: &SlowHashInput<'_>) -> [u8; DIGEST_SIZE] {
        (**self).slow_hash(input)
    }
}

impl<P: SlowHash + ?Sized> SlowHash for Arc<P> {
    fn slow_hash(&self, input: &SlowHashInput<'_>) -> [u8; DIGEST_SIZE] {
        (**self).slow_hash(input)
    }
}

/// Run the slow hash over raw input
///
/// Most callers want [`crate::HeaderHasher`] instead. This is the direct
/// wrapper, useful for known-answer tests against published vectors.
///
/// Input shorter than 43 bytes is rejected here rather than handed to a
/// primitive that would abort. The input is never marked as prehashed,
/// and `height` is replaced with 0 unless `variant` is [`Variant::V4`].
pub fn invoke<P: SlowHash + ?Sized>(
    primitive: &P,
    input: &[u8],
    variant: Variant,
    height: u64,
) -> Result<[u8; DIGEST_SIZE]> {
    let input = SlowHashInput::new(input, variant, height)?;
    trace!(%variant, input_len = input.bytes.len(), height = input.height, "invoking slow hash");

    Ok(primitive.slow_hash(&input))
}
