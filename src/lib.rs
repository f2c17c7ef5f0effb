//! Memory-hard password hashing and key derivation
//!
//! This crate provides a pure-Rust implementation of the Argon2 family of
//! password hashing functions (Argon2d, Argon2i, and Argon2id) as specified
//! in RFC 9106, version 0x13, together with the BLAKE2b hash function
//! (RFC 7693) on which Argon2 is built.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! algorithms are implemented explicitly, with semantics that can be checked
//! line by line against their specifications, and are validated against the
//! published reference test vectors.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions. Currently BLAKE2b with a streaming
//!   `init/update/finalize` surface, a one-shot form, and the
//!   variable-length construction H' used by Argon2 to derive blocks and
//!   tags of arbitrary size.
//!
//! - `derivation`
//!   Key derivation functions. Contains the Argon2 engine: parameter
//!   validation, the memory-fill state machine with its three addressing
//!   modes, the BLAKE2b-based compression function, the PHC string codec,
//!   and constant-time password verification.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use argonite::derivation::argon2;
//!
//! let encoded = argon2::hash(b"password", b"random_salt_16_b").unwrap();
//! assert!(argon2::verify(&encoded, b"password").unwrap());
//! ```
//!
//! # Design goals
//!
//! - Explicit, minimal APIs with stable, well-defined semantics
//! - Bit-exact interoperability with the reference implementation
//! - A closed set of error kinds, one per failed call
//! - No persistent state: no environment variables, no configuration files
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for password storage and key derivation.

mod utils;

pub mod derivation;
pub mod hash;
