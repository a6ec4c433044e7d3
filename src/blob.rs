//! Mining blob encoder
//!
//! Serializes a header hash and nonce into the 76-byte buffer that
//! Monero-style CPU and GPU miners expect:
//!
//! ```text
//! offset  size  field
//!      0     1  major version (7, 8 or 10 by variant)
//!      1     1  minor version (0)
//!      2     5  timestamp (zero)
//!      7    32  header hash
//!     39     8  nonce (little-endian u64)
//!     47    29  padding (0x77)
//! ```
//!
//! The layout only has to match the length and the version/nonce offsets
//! that miners already use, so most of it is filler.

use core::fmt;

use crate::error::{Error, Result};
use crate::params::*;
use crate::variant::Variant;

/// Fixed-size input to the slow hash
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MiningBlob([u8; BLOB_SIZE]);

impl MiningBlob {
    /// Encode a blob from a 32-byte header hash
    pub fn encode(header_hash: &[u8; HEADER_HASH_SIZE], nonce: u64, variant: Variant) -> Self {
        // Filler first; every field below overwrites only its own range
        let mut blob = [BLOB_FILLER; BLOB_SIZE];

        blob[MAJOR_VERSION_OFFSET] = variant.major_version();
        blob[MINOR_VERSION_OFFSET] = MINOR_VERSION;
        blob[TIMESTAMP_OFFSET..HEADER_HASH_OFFSET].fill(0);
        blob[HEADER_HASH_OFFSET..NONCE_OFFSET].copy_from_slice(header_hash);
        blob[NONCE_OFFSET..PADDING_OFFSET].copy_from_slice(&nonce.to_le_bytes());

        Self(blob)
    }

    /// Encode a blob from an unchecked header hash slice
    ///
    /// Fails with [`Error::InvalidHeaderLength`] unless the slice is
    /// exactly 32 bytes.
    pub fn from_header(header_hash: &[u8], nonce: u64, variant: Variant) -> Result<Self> {
        let header_hash = header_hash_array(header_hash)?;
        Ok(Self::encode(&header_hash, nonce, variant))
    }

    /// Wrap raw blob bytes without re-encoding
    pub const fn from_bytes(bytes: [u8; BLOB_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw blob bytes
    pub const fn as_bytes(&self) -> &[u8; BLOB_SIZE] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; BLOB_SIZE] {
        self.0
    }

    pub const fn major_version(&self) -> u8 {
        self.0[MAJOR_VERSION_OFFSET]
    }

    pub fn header_hash(&self) -> [u8; HEADER_HASH_SIZE] {
        let mut hash = [0u8; HEADER_HASH_SIZE];
        hash.copy_from_slice(&self.0[HEADER_HASH_OFFSET..NONCE_OFFSET]);
        hash
    }

    pub fn nonce(&self) -> u64 {
        let mut bytes = [0u8; NONCE_SIZE];
        bytes.copy_from_slice(&self.0[NONCE_OFFSET..PADDING_OFFSET]);
        u64::from_le_bytes(bytes)
    }

    /// Rewrite the nonce in place, leaving every other byte untouched
    ///
    /// Lets callers sweep nonces over one header without re-encoding.
    #[inline(always)]
    pub fn set_nonce(&mut self, nonce: u64) {
        self.0[NONCE_OFFSET..PADDING_OFFSET].copy_from_slice(&nonce.to_le_bytes());
    }
}

/// Convert a header hash slice into a fixed array
pub(crate) fn header_hash_array(header_hash: &[u8]) -> Result<[u8; HEADER_HASH_SIZE]> {
    <[u8; HEADER_HASH_SIZE]>::try_from(header_hash).map_err(|_| Error::InvalidHeaderLength {
        len: header_hash.len(),
    })
}

impl AsRef<[u8]> for MiningBlob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<MiningBlob> for [u8; BLOB_SIZE] {
    fn from(blob: MiningBlob) -> Self {
        blob.0
    }
}

impl fmt::LowerHex for MiningBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for MiningBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MiningBlob({:x})", self)
    }
}
