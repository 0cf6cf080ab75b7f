//! The digest pipeline: Expand -> Compress -> Parameterize -> Form.
//!
//! `orchestrator` drives the kernels in order and owns the public entry points.
//! `trace` captures every intermediate value of a run for diagnostics.

pub mod orchestrator;
pub mod trace;

pub use orchestrator::{hash, hash_with_config};
pub use trace::{trace, DigestTrace};
