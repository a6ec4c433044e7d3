//! Mining Blob Layout Parameters
//!
//! The blob mirrors the length and leading offsets of a Monero block
//! hashing blob so that existing CPU and GPU miners keep working.

/// Header hash size in bytes
pub const HEADER_HASH_SIZE: usize = 32;

/// Nonce size in bytes (little-endian u64)
pub const NONCE_SIZE: usize = 8;

/// Timestamp field size in bytes (always zero)
pub const TIMESTAMP_SIZE: usize = 5;

/// Total mining blob size in bytes
pub const BLOB_SIZE: usize = 76;

/// Digest size produced by the slow hash
pub const DIGEST_SIZE: usize = 32;

/// Value every blob byte holds before any field is written
pub const BLOB_FILLER: u8 = 0x77;

/// Minimum input accepted by the slow hash
pub const MIN_INPUT_SIZE: usize = 43;

/// Minor version tag, never used by miners
pub const MINOR_VERSION: u8 = 0;

/// Offset of the major version tag (byte 0)
pub const MAJOR_VERSION_OFFSET: usize = 0;

/// Offset of the minor version tag (byte 1)
pub const MINOR_VERSION_OFFSET: usize = 1;

/// Offset of the zeroed timestamp (bytes 2-6)
pub const TIMESTAMP_OFFSET: usize = 2;

/// Offset of the header hash (bytes 7-38)
pub const HEADER_HASH_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_SIZE;

/// Offset of the little-endian nonce (bytes 39-46)
pub const NONCE_OFFSET: usize = HEADER_HASH_OFFSET + HEADER_HASH_SIZE;

/// Start of the reserved padding (29 bytes of filler)
pub const PADDING_OFFSET: usize = NONCE_OFFSET + NONCE_SIZE;
