//! Argon2 variant and version tags.

use std::fmt;

use super::error::Error;

/// The three Argon2 variants.
///
/// The numeric value of each variant participates in the initial hash H0
/// and in the data-independent address generator, so it is fixed by
/// RFC 9106 and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Data-dependent addressing throughout.
    Argon2d = 0,
    /// Data-independent addressing throughout.
    Argon2i = 1,
    /// Data-independent for the first two slices of the first pass,
    /// data-dependent afterwards.
    Argon2id = 2,
}

impl Variant {
    /// Numeric tag as hashed into H0.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Numeric tag widened for the address generator's input block.
    pub(crate) fn as_u64(self) -> u64 {
        self as u64
    }

    /// Identifier used in PHC strings (`argon2d`, `argon2i`, `argon2id`).
    pub fn as_lowercase_str(self) -> &'static str {
        match self {
            Variant::Argon2d => "argon2d",
            Variant::Argon2i => "argon2i",
            Variant::Argon2id => "argon2id",
        }
    }

    /// Parses a PHC identifier segment.
    pub(crate) fn from_token(token: &str) -> Result<Variant, Error> {
        match token {
            "argon2d" => Ok(Variant::Argon2d),
            "argon2i" => Ok(Variant::Argon2i),
            "argon2id" => Ok(Variant::Argon2id),
            _ => Err(Error::DecodingFail),
        }
    }
}

impl TryFrom<u32> for Variant {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            0 => Ok(Variant::Argon2d),
            1 => Ok(Variant::Argon2i),
            2 => Ok(Variant::Argon2id),
            _ => Err(Error::DecodingFail),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_lowercase_str())
    }
}

/// Argon2 algorithm version.
///
/// Only version 0x13 (decimal 19, as written in PHC strings) is supported;
/// the 0x10 wire format differs and is not implemented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Version {
    /// Version 1.3.
    #[default]
    V0x13 = 0x13,
}

impl Version {
    /// Numeric value as hashed into H0 and written after `v=` in PHC strings.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Version {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            0x13 => Ok(Version::V0x13),
            _ => Err(Error::DecodingFail),
        }
    }
}
