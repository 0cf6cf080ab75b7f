//! This module serves as the public API for the pure, stateless kernels that
//! make up the LoveCRC digest pipeline.
//!
//! Each stage lives in its own sub-module and is driven, in order, by
//! `pipeline::orchestrator`. No kernel reads state from a later stage.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Stage 1: Expansion
pub mod expander;

/// Stage 2: Compression
pub mod compressor;

/// Stage 3: Parameterization
pub mod parameterizer;
pub mod primality;

/// Stage 4: Digest Formation
pub mod crc64;
pub mod digest_former;
