//! # Cryptonight Header Hashing
//!
//! Encodes a block-chain header hash and nonce into the mining blob used by
//! Monero-style Cryptonight miners, runs an injected Cryptonight slow hash
//! over it, and returns the digest in two byte orders.
//!
//! ## Variants
//!
//! - **Variant 1** (Cryptonight v7): blob major version 7
//! - **Variant 2** (Cryptonight v8): blob major version 8
//! - **Variant 4** (CryptonightR): blob major version 10, depends on block height
//!
//! ## Blob Format
//!
//! ```text
//! blob = major || minor || timestamp || header_hash || nonce || padding
//!        1B       1B       5B (zero)    32B            8B (LE)  29B (0x77)
//! ```
//!
//! ## Output
//!
//! Every call returns a [`HashOutput`]:
//!
//! - `digest`: raw slow hash output, untouched
//! - `result`: `digest` reversed, so that reading it as a big-endian
//!   integer gives the value Cryptonight miners compare against targets
//!
//! ## Example
//!
//! ```rust
//! use cryptonight_header::{HeaderHasher, SlowHash, SlowHashInput};
//!
//! // Stand-in primitive; real callers inject Cryptonight
//! struct Xor;
//!
//! impl SlowHash for Xor {
//!     fn slow_hash(&self, input: &SlowHashInput<'_>) -> [u8; 32] {
//!         let mut out = [0u8; 32];
//!         for (i, byte) in input.as_bytes().iter().enumerate() {
//!             out[i % 32] ^= byte;
//!         }
//!         out
//!     }
//! }
//!
//! let hasher = HeaderHasher::new(Xor);
//! let output = hasher.hash_variant_4(&[0xAB; 32], 42, 8_111_222).unwrap();
//!
//! let mut reversed = output.digest;
//! reversed.reverse();
//! assert_eq!(output.result, reversed);
//! ```

mod blob;
mod error;
mod ffi;
mod header;
mod params;
mod primitive;
mod variant;

pub use blob::MiningBlob;
pub use error::{Error, Result};
pub use ffi::{CnSlowHashFn, ExternSlowHash};
pub use header::{
    HashOutput, HashParams, HeaderHasher, hash_variant_1, hash_variant_2, hash_variant_4,
};
pub use params::*;
pub use primitive::{SlowHash, SlowHashInput, invoke};
pub use variant::Variant;
