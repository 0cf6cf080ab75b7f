//! This file is the root of the `lovecrc` Rust crate.
//!
//! LoveCRC is a non-cryptographic digest. A message is expanded by repeated
//! base-64 encoding, compressed into `L / 64` words, each word is turned into a
//! CRC-64 generator polynomial by a likely-prime search, and the digest is the
//! concatenation of one CRC-64 of the padded message per polynomial.
//!
//! It offers no collision resistance, no keyed mode and no streaming API.
//!
//! ```
//! let digest = lovecrc::hash(b"", 192).unwrap();
//! assert_eq!(digest.as_str(), "ff00000000000000ff00000000000000ff00000000000000");
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod types;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::{ChunkDecodePolicy, HasherConfig, SegmentFormat};
pub use error::LoveCrcError;
pub use pipeline::{hash, hash_with_config, trace, DigestTrace};
pub use types::{Digest, DigestLength};

#[doc(hidden)]
pub mod __private {
    pub use log;
}
