//! Argon2 password hashing functions (RFC 9106).
//!
//! Argon2 is a memory-hard password hashing function designed to resist
//! GPU-based brute-force attacks and hardware side channels. Three variants
//! are provided:
//!
//! - **Argon2d**: block addresses depend on previously computed memory,
//!   maximizing resistance to time-memory trade-off attacks. Suitable when
//!   no timing side channel is available to the attacker.
//! - **Argon2i**: block addresses are computed from position counters only,
//!   resisting timing attacks at some cost in trade-off resistance.
//! - **Argon2id**: the hybrid recommended for password hashing; the first
//!   half of the first pass is data-independent, the rest data-dependent.
//!
//! # How a derivation runs
//!
//! A derivation seeds a 64-byte BLAKE2b digest H0 from every input and
//! parameter, expands it into the first two blocks of each memory lane,
//! then sweeps the whole matrix `t_cost` times: every block becomes the
//! compression G of its predecessor and one pseudo-randomly selected
//! earlier block. The last block of every lane is XORed into a single
//! block and squeezed through the variable-length construction H' to the
//! requested tag length.
//!
//! The matrix is `lanes` rows of 1024-byte blocks, each row cut into four
//! slices. Slice boundaries are synchronization points: inside a slice,
//! lanes never read each other, so they could be filled concurrently.
//!
//! # Serialized hashes
//!
//! Alongside raw digests, hashes can be produced and verified in the PHC
//! string format, which records the variant and parameters next to the
//! base64-encoded salt and digest:
//!
//! ```text
//! $argon2i$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$wWKIMhR9lyDFvRz9YTZweHKfbftvj+qf+YFY4NeBbtA
//! ```

pub(crate) mod block;
pub(crate) mod boundary;
pub mod core;
pub mod encoding;
pub mod error;
pub(crate) mod memory;
pub mod params;
pub(crate) mod reference;
pub mod variant;

pub use self::core::{
    argon2_verify, hash, hash_d, hash_d_raw, hash_encoded_context, hash_i, hash_i_raw, hash_id,
    hash_id_raw, hash_raw_context, hash_with_params, verify, verify_d, verify_i, verify_id,
    Context,
};
pub use encoding::{decode_string, encode_string, encoded_len, Decoded};
pub use error::{Error, Result};
pub use params::{Flags, Params};
pub use variant::{Variant, Version};
