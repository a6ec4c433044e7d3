//! Header hashing and digest normalization
//!
//! Cryptonight ecosystems read hash output as a little-endian number when
//! comparing against a target, while the consuming chain client reads every
//! byte sequence as big-endian. [`HashOutput`] carries both views: the
//! untouched `digest`, and `result`, the digest reversed exactly once so
//! that its big-endian value equals the digest's little-endian value.

use serde::{Deserialize, Serialize};

use crate::blob::MiningBlob;
use crate::error::Result;
use crate::params::DIGEST_SIZE;
use crate::primitive::{SlowHash, invoke};
use crate::variant::Variant;

/// Digest pair returned for every header hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashOutput {
    /// Raw slow hash output, native byte order
    pub digest: [u8; DIGEST_SIZE],
    /// `digest` reversed, for big-endian difficulty comparison
    pub result: [u8; DIGEST_SIZE],
}

impl HashOutput {
    /// Build both views from a raw digest
    pub fn from_digest(digest: [u8; DIGEST_SIZE]) -> Self {
        let mut result = digest;
        result.reverse();
        Self { digest, result }
    }

    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    pub fn result_hex(&self) -> String {
        hex::encode(self.result)
    }

    /// Check `result` against a big-endian target
    ///
    /// Passes when `result <= target` as 256-bit big-endian integers.
    /// Byte arrays compare lexicographically, which is exactly that order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cryptonight_header::HashOutput;
    ///
    /// let mut digest = [0xFFu8; 32];
    /// digest[31] = 0x00; // most significant byte once reversed
    /// let output = HashOutput::from_digest(digest);
    ///
    /// let mut target = [0xFFu8; 32];
    /// target[0] = 0x01;
    /// assert!(output.meets_target(&target));
    /// assert!(!output.meets_target(&[0u8; 32]));
    /// ```
    #[inline(always)]
    pub fn meets_target(&self, target: &[u8; DIGEST_SIZE]) -> bool {
        self.result <= *target
    }
}

/// Header hasher bound to one slow hash implementation
///
/// Holds no per-call state, so a single instance can be shared across
/// threads as long as the primitive is reentrant.
#[derive(Debug, Clone, Default)]
pub struct HeaderHasher<P> {
    primitive: P,
}

impl<P: SlowHash> HeaderHasher<P> {
    pub fn new(primitive: P) -> Self {
        Self { primitive }
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    pub fn into_primitive(self) -> P {
        self.primitive
    }

    /// Cryptonight v7 over a 32-byte header hash and 8-byte nonce
    pub fn hash_variant_1(&self, header_hash: &[u8], nonce: u64) -> Result<HashOutput> {
        self.hash(header_hash, nonce, Variant::V1, 0)
    }

    /// Cryptonight v8 over a 32-byte header hash and 8-byte nonce
    pub fn hash_variant_2(&self, header_hash: &[u8], nonce: u64) -> Result<HashOutput> {
        self.hash(header_hash, nonce, Variant::V2, 0)
    }

    /// CryptonightR over a 32-byte header hash and 8-byte nonce
    ///
    /// The random program depends on `height`, so it must be the height of
    /// the block being mined or validated.
    pub fn hash_variant_4(&self, header_hash: &[u8], nonce: u64, height: u64) -> Result<HashOutput> {
        self.hash(header_hash, nonce, Variant::V4, height)
    }

    /// Hash with an explicit variant; `height` is ignored unless V4
    pub fn hash(
        &self,
        header_hash: &[u8],
        nonce: u64,
        variant: Variant,
        height: u64,
    ) -> Result<HashOutput> {
        hash_with(&self.primitive, header_hash, nonce, variant, height)
    }

    /// Hash an already encoded blob
    pub fn hash_blob(&self, blob: &MiningBlob, variant: Variant, height: u64) -> Result<HashOutput> {
        let digest = invoke(&self.primitive, blob.as_bytes(), variant, height)?;
        Ok(HashOutput::from_digest(digest))
    }
}

/// Variant and height for a hashing job
///
/// Deserializes from configs such as `{"variant": 4, "height": 8111222}`.
/// `height` defaults to 0 and is forced to 0 for variants 1 and 2, on
/// deserialization as well as through [`HashParams::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHashParams")]
pub struct HashParams {
    pub variant: Variant,
    pub height: u64,
}

/// Wire form of [`HashParams`] before height normalization
#[derive(Deserialize)]
struct RawHashParams {
    variant: Variant,
    #[serde(default)]
    height: u64,
}

impl From<RawHashParams> for HashParams {
    fn from(raw: RawHashParams) -> Self {
        HashParams::new(raw.variant, raw.height)
    }
}

impl HashParams {
    pub fn new(variant: Variant, height: u64) -> Self {
        Self {
            variant,
            height: variant.effective_height(height),
        }
    }

    /// Hash a header with these parameters
    pub fn hash<P: SlowHash + ?Sized>(
        &self,
        primitive: &P,
        header_hash: &[u8],
        nonce: u64,
    ) -> Result<HashOutput> {
        hash_with(primitive, header_hash, nonce, self.variant, self.height)
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            variant: Variant::V4,
            height: 0,
        }
    }
}

fn hash_with<P: SlowHash + ?Sized>(
    primitive: &P,
    header_hash: &[u8],
    nonce: u64,
    variant: Variant,
    height: u64,
) -> Result<HashOutput> {
    let blob = MiningBlob::from_header(header_hash, nonce, variant)?;
    let digest = invoke(primitive, blob.as_bytes(), variant, height)?;
    Ok(HashOutput::from_digest(digest))
}

/// Single-shot Cryptonight v7 header hash
pub fn hash_variant_1<P: SlowHash + ?Sized>(
    primitive: &P,
    header_hash: &[u8],
    nonce: u64,
) -> Result<HashOutput> {
    hash_with(primitive, header_hash, nonce, Variant::V1, 0)
}

/// Single-shot Cryptonight v8 header hash
pub fn hash_variant_2<P: SlowHash + ?Sized>(
    primitive: &P,
    header_hash: &[u8],
    nonce: u64,
) -> Result<HashOutput> {
    hash_with(primitive, header_hash, nonce, Variant::V2, 0)
}

/// Single-shot CryptonightR header hash
pub fn hash_variant_4<P: SlowHash + ?Sized>(
    primitive: &P,
    header_hash: &[u8],
    nonce: u64,
    height: u64,
) -> Result<HashOutput> {
    hash_with(primitive, header_hash, nonce, Variant::V4, height)
}
