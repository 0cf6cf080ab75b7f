//! This module defines the core, strongly-typed values used throughout the
//! lovecrc digest pipeline.
//!
//! `DigestLength` replaces a bare bit count with the closed set of lengths the
//! algorithm supports, and `Digest` carries the rendered output together with
//! the raw checksum segments it was built from.

pub mod digest;
pub mod digest_length;

// Re-export the main type(s) for easier access.
pub use digest::Digest;
pub use digest_length::DigestLength;
