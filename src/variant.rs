//! Cryptonight variant selector
//!
//! Public discourse uses several names for the same revisions:
//! variant 1 is Cryptonight v7, variant 2 is Cryptonight v8 and
//! variant 4 is CryptonightR.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cryptonight algorithm revision
///
/// Serialized as its numeric code so configs read `"variant": 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Variant {
    /// Cryptonight v7
    V1,
    /// Cryptonight v8
    V2,
    /// CryptonightR, the only variant that consumes block height
    V4,
}

impl Variant {
    /// All supported variants, in code order
    pub const ALL: [Variant; 3] = [Variant::V1, Variant::V2, Variant::V4];

    /// Numeric code passed to the slow hash
    pub const fn code(self) -> u32 {
        match self {
            Variant::V1 => 1,
            Variant::V2 => 2,
            Variant::V4 => 4,
        }
    }

    /// Monero hard-fork major version that introduced this variant
    ///
    /// Written into blob byte 0 so miners that key off the major
    /// version select the right algorithm.
    pub const fn major_version(self) -> u8 {
        match self {
            Variant::V1 => 7,
            Variant::V2 => 8,
            Variant::V4 => 10,
        }
    }

    /// Whether the block height reaches the slow hash
    pub const fn uses_height(self) -> bool {
        matches!(self, Variant::V4)
    }

    /// Height actually forwarded for this variant (0 unless V4)
    #[inline(always)]
    pub const fn effective_height(self, height: u64) -> u64 {
        if self.uses_height() { height } else { 0 }
    }

    /// Conventional short name
    pub const fn name(self) -> &'static str {
        match self {
            Variant::V1 => "cn/1",
            Variant::V2 => "cn/2",
            Variant::V4 => "cn/r",
        }
    }
}

impl TryFrom<u32> for Variant {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            1 => Ok(Variant::V1),
            2 => Ok(Variant::V2),
            4 => Ok(Variant::V4),
            other => Err(Error::UnsupportedVariant(other)),
        }
    }
}

impl From<Variant> for u32 {
    fn from(variant: Variant) -> Self {
        variant.code()
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "1" | "v7" | "cn/1" => Ok(Variant::V1),
            "2" | "v8" | "cn/2" => Ok(Variant::V2),
            "4" | "r" | "cn/r" => Ok(Variant::V4),
            _ => match name.parse::<u32>() {
                Ok(code) => Variant::try_from(code),
                Err(_) => Err(Error::UnknownVariantName(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
