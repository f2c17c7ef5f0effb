//! PHC string codec for Argon2 hashes.
//!
//! Serialized hashes follow the Password Hashing Competition string format:
//!
//! ```text
//! $argon2{d|i|id}$v=19$m=<mem>,t=<time>,p=<lanes>$<b64(salt)>$<b64(hash)>
//! ```
//!
//! Base64 uses the standard alphabet with trailing `=` padding removed.
//! The encoder always emits the cost parameters in the order `m,t,p`; the
//! decoder accepts them in any order but requires all three, and rejects
//! unknown keys, malformed numbers, malformed base64, and any version
//! other than 19 (0x13).

use std::fmt::Write;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

use super::error::{Error, Result};
use super::variant::{Variant, Version};

/// Parameters and payloads recovered from an encoded hash.
///
/// The salt and hash fields hold the exact decoded bytes; their lengths are
/// not checked against the current input policy until the hash is re-derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub variant: Variant,
    pub version: Version,
    pub mem_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

/// Length in characters of `value` written in decimal.
fn num_len(value: u32) -> usize {
    let mut len = 1;
    let mut value = value;
    while value >= 10 {
        len += 1;
        value /= 10;
    }
    len
}

/// Length in characters of `len` bytes of unpadded base64.
fn base64_len(len: usize) -> usize {
    (len * 4 + 2) / 3
}

/// Exact length of the string [`encode_string`] produces for these inputs.
pub fn encoded_len(
    variant: Variant,
    mem_cost: u32,
    time_cost: u32,
    parallelism: u32,
    salt_len: usize,
    hash_len: usize,
) -> usize {
    "$$v=$m=,t=,p=$$".len()
        + variant.as_lowercase_str().len()
        + num_len(Version::default().as_u32())
        + num_len(mem_cost)
        + num_len(time_cost)
        + num_len(parallelism)
        + base64_len(salt_len)
        + base64_len(hash_len)
}

/// Serializes a digest and its parameters into the PHC string format.
pub fn encode_string(
    variant: Variant,
    version: Version,
    mem_cost: u32,
    time_cost: u32,
    parallelism: u32,
    salt: &[u8],
    hash: &[u8],
) -> String {
    let mut out = String::with_capacity(encoded_len(
        variant,
        mem_cost,
        time_cost,
        parallelism,
        salt.len(),
        hash.len(),
    ));

    write!(
        out,
        "${}$v={}$m={},t={},p={}${}${}",
        variant.as_lowercase_str(),
        version.as_u32(),
        mem_cost,
        time_cost,
        parallelism,
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(hash),
    )
    .expect("writing to a String cannot fail");

    out
}

/// Parses a PHC string produced by [`encode_string`] or a compatible
/// implementation.
pub fn decode_string(encoded: &str) -> Result<Decoded> {
    // A leading '$' yields one empty leading segment; exactly five
    // non-empty segments must follow.
    let segments: Vec<&str> = encoded.split('$').collect();
    if segments.len() != 6 || !segments[0].is_empty() {
        return Err(Error::DecodingFail);
    }
    if segments[1..].iter().any(|segment| segment.is_empty()) {
        return Err(Error::DecodingFail);
    }

    let variant = Variant::from_token(segments[1])?;

    let version_value = segments[2]
        .strip_prefix("v=")
        .ok_or(Error::DecodingFail)
        .and_then(decode_u32)?;
    let version = Version::try_from(version_value)?;

    let mut mem_cost = None;
    let mut time_cost = None;
    let mut parallelism = None;
    for pair in segments[3].split(',') {
        let (key, value) = pair.split_once('=').ok_or(Error::DecodingFail)?;
        match key {
            "m" => mem_cost = Some(decode_u32(value)?),
            "t" => time_cost = Some(decode_u32(value)?),
            "p" => parallelism = Some(decode_u32(value)?),
            _ => return Err(Error::DecodingFail),
        }
    }

    let salt = STANDARD_NO_PAD
        .decode(segments[4])
        .map_err(|_| Error::DecodingFail)?;
    let hash = STANDARD_NO_PAD
        .decode(segments[5])
        .map_err(|_| Error::DecodingFail)?;

    Ok(Decoded {
        variant,
        version,
        mem_cost: mem_cost.ok_or(Error::DecodingFail)?,
        time_cost: time_cost.ok_or(Error::DecodingFail)?,
        parallelism: parallelism.ok_or(Error::DecodingFail)?,
        salt,
        hash,
    })
}

/// Parses a decimal u32, rejecting signs, whitespace, and empty input.
fn decode_u32(value: &str) -> Result<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::DecodingFail);
    }
    value.parse::<u32>().map_err(|_| Error::DecodingFail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_reference_form() {
        let encoded = encode_string(
            Variant::Argon2i,
            Version::V0x13,
            65536,
            2,
            1,
            b"somesalt",
            &[0xAB; 4],
        );
        assert_eq!(encoded, "$argon2i$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$q6urqw");
        assert_eq!(encoded.len(), encoded_len(Variant::Argon2i, 65536, 2, 1, 8, 4));
    }

    #[test]
    fn decode_round_trips_canonical_strings() {
        let encoded = encode_string(
            Variant::Argon2id,
            Version::V0x13,
            4096,
            3,
            2,
            b"\x01\x02\x03\x04\x05\x06\x07\x08",
            &[9u8; 32],
        );
        let decoded = decode_string(&encoded).unwrap();
        assert_eq!(decoded.variant, Variant::Argon2id);
        assert_eq!(decoded.mem_cost, 4096);
        assert_eq!(decoded.time_cost, 3);
        assert_eq!(decoded.parallelism, 2);
        assert_eq!(decoded.salt, b"\x01\x02\x03\x04\x05\x06\x07\x08");
        assert_eq!(decoded.hash, vec![9u8; 32]);

        let reencoded = encode_string(
            decoded.variant,
            decoded.version,
            decoded.mem_cost,
            decoded.time_cost,
            decoded.parallelism,
            &decoded.salt,
            &decoded.hash,
        );
        assert_eq!(reencoded, encoded);
    }

    #[test]
    fn parameter_order_is_flexible() {
        let decoded =
            decode_string("$argon2i$v=19$t=2,p=1,m=65536$c29tZXNhbHQ$q6urqw").unwrap();
        assert_eq!(decoded.mem_cost, 65536);
        assert_eq!(decoded.time_cost, 2);
        assert_eq!(decoded.parallelism, 1);
    }

    #[test]
    fn malformed_strings_are_rejected() {
        // Missing '$' between parameters and salt.
        assert_eq!(
            decode_string("$argon2i$v=19$m=65536,t=2,p=1c29tZXNhbHQ$q6urqw"),
            Err(Error::DecodingFail)
        );
        // No leading '$'.
        assert_eq!(
            decode_string("argon2i$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$q6urqw"),
            Err(Error::DecodingFail)
        );
        // Unknown variant token.
        assert_eq!(
            decode_string("$argon3$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$q6urqw"),
            Err(Error::DecodingFail)
        );
        // Unsupported version.
        assert_eq!(
            decode_string("$argon2i$v=16$m=65536,t=2,p=1$c29tZXNhbHQ$q6urqw"),
            Err(Error::DecodingFail)
        );
        // Unknown parameter key.
        assert_eq!(
            decode_string("$argon2i$v=19$m=65536,t=2,p=1,k=1$c29tZXNhbHQ$q6urqw"),
            Err(Error::DecodingFail)
        );
        // Missing parameter.
        assert_eq!(
            decode_string("$argon2i$v=19$m=65536,t=2$c29tZXNhbHQ$q6urqw"),
            Err(Error::DecodingFail)
        );
        // Non-numeric parameter.
        assert_eq!(
            decode_string("$argon2i$v=19$m=lots,t=2,p=1$c29tZXNhbHQ$q6urqw"),
            Err(Error::DecodingFail)
        );
        // Signed numbers are not valid PHC decimals.
        assert_eq!(
            decode_string("$argon2i$v=19$m=+65536,t=2,p=1$c29tZXNhbHQ$q6urqw"),
            Err(Error::DecodingFail)
        );
        // Padded base64 is not the canonical form.
        assert_eq!(
            decode_string("$argon2i$v=19$m=65536,t=2,p=1$c29tZXNhbHQ=$q6urqw"),
            Err(Error::DecodingFail)
        );
        // Malformed base64.
        assert_eq!(
            decode_string("$argon2i$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$!!!"),
            Err(Error::DecodingFail)
        );
    }
}
