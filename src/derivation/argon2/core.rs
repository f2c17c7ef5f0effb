//! Derivation driver and public Argon2 entry points.
//!
//! The engine proper lives here: input validation, arena allocation, the
//! H0 / fill / finalize sequence, and the hashing and verification surface
//! built on top of it.

use zeroize::Zeroize;

use super::block::Block;
use super::boundary::{finalize, initial_hash, initialize_lanes};
use super::encoding::{self, Decoded};
use super::error::{Error, Result};
use super::memory::MemoryLayout;
use super::params::{
    Params, MAX_PWD_LENGTH, MAX_SALT_LENGTH, MIN_SALT_LENGTH, RECOMMENDED_SALT_LENGTH,
};
use super::variant::{Variant, Version};

/// All inputs of one derivation.
///
/// The context owns its password and salt so that the
/// [`Flags`](super::Flags) wipe requests can act on the actual buffers the
/// engine consumed. A context is intended for a single derivation; after a
/// call with `clear_password` set, the password buffer has been wiped and
/// emptied.
#[derive(Clone)]
pub struct Context {
    pub variant: Variant,
    pub version: Version,
    pub params: Params,
    pub password: Vec<u8>,
    pub salt: Vec<u8>,
}

impl Context {
    /// Builds a derivation context for version 0x13.
    pub fn new(variant: Variant, params: Params, password: Vec<u8>, salt: Vec<u8>) -> Self {
        Self {
            variant,
            version: Version::default(),
            params,
            password,
            salt,
        }
    }
}

/// Runs one derivation and returns the raw tag.
///
/// The output is exactly `params.hash_length` bytes. On failure nothing is
/// returned: the engine never exposes a partially filled tag. The working
/// memory is freshly allocated per call and dropped before returning.
pub fn hash_raw_context(ctx: &mut Context) -> Result<Vec<u8>> {
    ctx.params.validate()?;
    validate_inputs(&ctx.password, &ctx.salt)?;

    let total_blocks = ctx.params.memory_blocks();
    let layout = MemoryLayout::new(total_blocks, ctx.params.lanes);

    let mut memory: Vec<Block> = Vec::new();
    memory
        .try_reserve_exact(total_blocks as usize)
        .map_err(|_| Error::MemoryAllocationError)?;
    memory.resize(total_blocks as usize, Block::ZERO);

    let h0 = initial_hash(ctx.variant, ctx.version, &ctx.params, &ctx.password, &ctx.salt);

    // H0 has consumed the sensitive inputs; honor wipe requests before the
    // long-running fill.
    if ctx.params.flags.clear_password {
        ctx.password.zeroize();
    }
    if ctx.params.flags.clear_secret {
        if let Some(secret) = ctx.params.secret.as_mut() {
            secret.zeroize();
        }
    }

    initialize_lanes(&mut memory, &layout, &h0);
    layout.fill(&mut memory, ctx.variant, ctx.params.time_cost);

    Ok(finalize(&memory, &layout, ctx.params.hash_length))
}

/// Runs one derivation and returns the PHC-encoded hash.
///
/// The encoded string records the requested cost parameters, not the
/// internally rounded memory size, so it re-derives identically.
pub fn hash_encoded_context(ctx: &mut Context) -> Result<String> {
    let digest = hash_raw_context(ctx)?;
    Ok(encoding::encode_string(
        ctx.variant,
        ctx.version,
        ctx.params.mem_cost,
        ctx.params.time_cost,
        ctx.params.lanes,
        &ctx.salt,
        &digest,
    ))
}

fn validate_inputs(password: &[u8], salt: &[u8]) -> Result<()> {
    if password.len() > MAX_PWD_LENGTH {
        return Err(Error::PwdTooLong);
    }
    if salt.len() < MIN_SALT_LENGTH {
        return Err(Error::SaltTooShort);
    }
    if salt.len() > MAX_SALT_LENGTH {
        return Err(Error::SaltTooLong);
    }
    Ok(())
}

fn cost_params(t_cost: u32, m_cost: u32, parallelism: u32, hash_length: u32) -> Params {
    Params {
        mem_cost: m_cost,
        time_cost: t_cost,
        lanes: parallelism,
        threads: parallelism,
        hash_length,
        ..Params::default()
    }
}

fn derive_raw(
    variant: Variant,
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<Vec<u8>> {
    let mut ctx = Context::new(
        variant,
        cost_params(t_cost, m_cost, parallelism, hash_length),
        password.to_vec(),
        salt.to_vec(),
    );
    hash_raw_context(&mut ctx)
}

fn derive_encoded(
    variant: Variant,
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<String> {
    let digest = derive_raw(variant, t_cost, m_cost, parallelism, password, salt, hash_length)?;
    Ok(encoding::encode_string(
        variant,
        Version::default(),
        m_cost,
        t_cost,
        parallelism,
        salt,
        &digest,
    ))
}

/// Argon2d digest of `hash_length` bytes.
pub fn hash_d_raw(
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<Vec<u8>> {
    derive_raw(Variant::Argon2d, t_cost, m_cost, parallelism, password, salt, hash_length)
}

/// Argon2i digest of `hash_length` bytes.
pub fn hash_i_raw(
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<Vec<u8>> {
    derive_raw(Variant::Argon2i, t_cost, m_cost, parallelism, password, salt, hash_length)
}

/// Argon2id digest of `hash_length` bytes.
pub fn hash_id_raw(
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<Vec<u8>> {
    derive_raw(Variant::Argon2id, t_cost, m_cost, parallelism, password, salt, hash_length)
}

/// Argon2d hash in the PHC string format.
pub fn hash_d(
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<String> {
    derive_encoded(Variant::Argon2d, t_cost, m_cost, parallelism, password, salt, hash_length)
}

/// Argon2i hash in the PHC string format.
pub fn hash_i(
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<String> {
    derive_encoded(Variant::Argon2i, t_cost, m_cost, parallelism, password, salt, hash_length)
}

/// Argon2id hash in the PHC string format.
pub fn hash_id(
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<String> {
    derive_encoded(Variant::Argon2id, t_cost, m_cost, parallelism, password, salt, hash_length)
}

/// Argon2id hash with the default cost parameters (t=3, m=64 MiB, p=4,
/// 32-byte tag).
///
/// Unlike the explicit-parameter functions, this helper enforces the
/// recommended 16-byte salt minimum.
pub fn hash(password: &[u8], salt: &[u8]) -> Result<String> {
    if salt.len() < RECOMMENDED_SALT_LENGTH {
        return Err(Error::SaltTooShort);
    }
    hash_id(3, 65536, 4, password, salt, 32)
}

/// Argon2id hash with explicit cost parameters; alias of [`hash_id`].
pub fn hash_with_params(
    t_cost: u32,
    m_cost: u32,
    parallelism: u32,
    password: &[u8],
    salt: &[u8],
    hash_length: u32,
) -> Result<String> {
    hash_id(t_cost, m_cost, parallelism, password, salt, hash_length)
}

/// Re-derives the digest described by `decoded` and compares it to the
/// stored one, byte for byte over the full length.
fn verify_decoded(decoded: &Decoded, password: &[u8]) -> Result<()> {
    let params = cost_params(
        decoded.time_cost,
        decoded.mem_cost,
        decoded.parallelism,
        decoded.hash.len() as u32,
    );
    let mut ctx = Context::new(
        decoded.variant,
        params,
        password.to_vec(),
        decoded.salt.clone(),
    );
    let computed = hash_raw_context(&mut ctx)?;

    if constant_time_eq(&computed, &decoded.hash) {
        Ok(())
    } else {
        Err(Error::VerifyMismatch)
    }
}

/// Verifies `password` against an encoded hash of a known variant.
///
/// Fails with [`Error::IncorrectType`] when the string was produced by a
/// different variant, and [`Error::VerifyMismatch`] when the password does
/// not match.
pub fn argon2_verify(encoded: &str, password: &[u8], expected: Variant) -> Result<()> {
    let decoded = encoding::decode_string(encoded)?;
    if decoded.variant != expected {
        return Err(Error::IncorrectType);
    }
    verify_decoded(&decoded, password)
}

/// Verifies `password` against an Argon2d PHC string.
pub fn verify_d(encoded: &str, password: &[u8]) -> Result<()> {
    argon2_verify(encoded, password, Variant::Argon2d)
}

/// Verifies `password` against an Argon2i PHC string.
pub fn verify_i(encoded: &str, password: &[u8]) -> Result<()> {
    argon2_verify(encoded, password, Variant::Argon2i)
}

/// Verifies `password` against an Argon2id PHC string.
pub fn verify_id(encoded: &str, password: &[u8]) -> Result<()> {
    argon2_verify(encoded, password, Variant::Argon2id)
}

/// Verifies `password` against an encoded hash, auto-detecting the variant.
///
/// Returns `Ok(false)` on a password mismatch; parse and parameter errors
/// are reported as errors.
pub fn verify(encoded: &str, password: &[u8]) -> Result<bool> {
    let decoded = encoding::decode_string(encoded)?;
    match verify_decoded(&decoded, password) {
        Ok(()) => Ok(true),
        Err(Error::VerifyMismatch) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Compares two byte slices in constant time.
///
/// Every byte is inspected regardless of where the first difference occurs,
/// so the comparison time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
