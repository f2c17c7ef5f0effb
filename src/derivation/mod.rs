//! Key derivation functions exposed by the crate.
//!
//! Currently includes the Argon2 family of memory-hard password hashing
//! functions (RFC 9106).

pub mod argon2;

/// Re-exports of the Argon2 public surface.
pub use argon2::{
    argon2_verify, hash, hash_d, hash_d_raw, hash_i, hash_i_raw, hash_id, hash_id_raw,
    hash_with_params, verify, verify_d, verify_i, verify_id, Context, Decoded, Error, Flags,
    Params, Result, Variant, Version,
};
