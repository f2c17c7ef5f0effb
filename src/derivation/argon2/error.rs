//! The closed set of errors reported by the Argon2 engine.
//!
//! Every failed call returns exactly one of these kinds, and the output is
//! never partially populated on failure. Messages are stable and name the
//! offending field ("salt", "memory", "time", ...) so callers without
//! access to the enum can still dispatch on substrings.

use thiserror::Error;

/// Errors that can occur during hashing, encoding, or verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Output tag shorter than 4 bytes.
    #[error("output is too short")]
    OutputTooShort,
    /// Output tag length does not fit in 32 bits.
    #[error("output is too long")]
    OutputTooLong,
    /// Password length does not fit in 32 bits.
    #[error("password is too long")]
    PwdTooLong,
    /// Salt shorter than 8 bytes (16 for the default-parameter helper).
    #[error("salt is too short")]
    SaltTooShort,
    /// Salt length does not fit in 32 bits.
    #[error("salt is too long")]
    SaltTooLong,
    /// Fewer than one pass requested.
    #[error("time cost is too small")]
    TimeTooSmall,
    /// Pass count does not fit in 32 bits.
    #[error("time cost is too large")]
    TimeTooLarge,
    /// Fewer than 8 KiB-blocks of memory requested.
    #[error("memory cost is too small")]
    MemoryTooLittle,
    /// Memory cost does not fit in 32 bits.
    #[error("memory cost is too large")]
    MemoryTooMuch,
    /// Fewer than one lane requested.
    #[error("too few lanes")]
    LanesTooFew,
    /// More than 2^24 - 1 lanes requested.
    #[error("too many lanes")]
    LanesTooMany,
    /// The working memory could not be allocated.
    #[error("memory allocation error")]
    MemoryAllocationError,
    /// A PHC string could not be parsed: wrong segment count, unknown
    /// variant or key, unsupported version, malformed number or base64.
    #[error("decoding failed")]
    DecodingFail,
    /// The recomputed digest does not match the stored one.
    #[error("password verification mismatch")]
    VerifyMismatch,
    /// The PHC string carries a different variant than the caller expects.
    #[error("incorrect Argon2 type")]
    IncorrectType,
}

/// Result alias used across the module.
pub type Result<T> = std::result::Result<T, Error>;
