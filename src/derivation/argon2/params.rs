//! Parameter definitions and validation for Argon2.
//!
//! This module defines the configurable parameters shared by all three
//! variants and provides validation to ensure they meet the algorithm's
//! requirements before any memory is allocated.

use super::error::{Error, Result};

/// Number of synchronization points (slices) per lane. Fixed by RFC 9106.
pub(crate) const SYNC_POINTS: u32 = 4;

/// Minimum and maximum number of lanes (degree of parallelism).
pub const MIN_LANES: u32 = 1;
pub const MAX_LANES: u32 = 0xFF_FFFF;

/// Minimum and maximum memory cost in KiB-blocks. The effective minimum is
/// `2 * 4 * lanes`; requests between the absolute minimum and that floor
/// are raised silently, matching the reference implementation.
pub const MIN_MEMORY: u32 = 2 * SYNC_POINTS;
pub const MAX_MEMORY: u32 = u32::MAX;

/// Minimum and maximum number of passes.
pub const MIN_TIME: u32 = 1;
pub const MAX_TIME: u32 = u32::MAX;

/// Minimum and maximum output tag length in bytes.
pub const MIN_HASH_LENGTH: u32 = 4;
pub const MAX_HASH_LENGTH: u32 = u32::MAX;

/// Minimum and maximum salt length in bytes.
pub const MIN_SALT_LENGTH: usize = 8;
pub const MAX_SALT_LENGTH: usize = u32::MAX as usize;

/// Maximum password length in bytes.
pub const MAX_PWD_LENGTH: usize = u32::MAX as usize;

/// Salt floor applied by the default-parameter [`hash`](super::hash) helper.
pub const RECOMMENDED_SALT_LENGTH: usize = 16;

/// Requests best-effort wiping of sensitive inputs after use.
///
/// Wiping applies to the buffers owned by the derivation
/// [`Context`](super::Context); it uses writes the compiler cannot elide.
/// The working memory arena itself is never wiped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Zero the context's password buffer once H0 has consumed it.
    pub clear_password: bool,
    /// Zero the context's secret buffer once H0 has consumed it.
    pub clear_secret: bool,
}

/// Configuration parameters for an Argon2 derivation.
///
/// Memory and time cost trade attacker effort against the latency a
/// legitimate caller is willing to pay; lanes add parallelism for
/// multi-core hardware.
///
/// # Parameter selection
///
/// OWASP's 2024 password-storage guidance suggests at least 19 MiB of
/// memory (`mem_cost = 19456`) with two passes, 46 MiB for a wider
/// margin, one lane per available core, and 32-byte tags.
#[derive(Clone, Debug)]
pub struct Params {
    /// Memory cost in KiB-blocks (effective minimum 8 × lanes).
    pub mem_cost: u32,
    /// Number of passes over memory (minimum 1).
    pub time_cost: u32,
    /// Degree of parallelism (number of lanes, 1 ..= 2^24 - 1).
    pub lanes: u32,
    /// Worker count for lane filling (1 ..= 2^24 - 1). Filling proceeds
    /// lane-by-lane within each slice, which yields the same digest as any
    /// parallel scheduling; this setting does not influence the output.
    pub threads: u32,
    /// Length of the output tag in bytes (minimum 4).
    pub hash_length: u32,
    /// Optional secret key K for keyed hashing.
    pub secret: Option<Vec<u8>>,
    /// Optional associated data X.
    pub associated_data: Option<Vec<u8>>,
    /// Input-wiping requests.
    pub flags: Flags,
}

impl Default for Params {
    /// Default parameters: 64 MiB memory, 3 passes, 4 lanes, 32-byte tag.
    fn default() -> Self {
        Self {
            mem_cost: 64 * 1024,
            time_cost: 3,
            lanes: 4,
            threads: 4,
            hash_length: 32,
            secret: None,
            associated_data: None,
            flags: Flags::default(),
        }
    }
}

impl Params {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.lanes < MIN_LANES || self.threads < MIN_LANES {
            return Err(Error::LanesTooFew);
        }

        if self.lanes > MAX_LANES || self.threads > MAX_LANES {
            return Err(Error::LanesTooMany);
        }

        if self.time_cost < MIN_TIME {
            return Err(Error::TimeTooSmall);
        }

        if self.mem_cost < MIN_MEMORY {
            return Err(Error::MemoryTooLittle);
        }

        if self.hash_length < MIN_HASH_LENGTH {
            return Err(Error::OutputTooShort);
        }

        Ok(())
    }

    /// Effective number of memory blocks m': the request is raised to the
    /// floor of two blocks per segment, then truncated down to a multiple
    /// of `4 * lanes` so every lane holds four equal slices.
    pub(crate) fn memory_blocks(&self) -> u32 {
        let floor = 2 * SYNC_POINTS * self.lanes;
        let raised = self.mem_cost.max(floor);
        (raised / (SYNC_POINTS * self.lanes)) * (SYNC_POINTS * self.lanes)
    }
}
