// In: src/error.rs

//! This module defines the single, unified error type for the entire lovecrc library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

use crate::types::DigestLength;

/// Process exit status for an invalid argument (POSIX `EINVAL`).
pub const EXIT_INVALID_ARGUMENT: i32 = 22;

/// Process exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum LoveCrcError {
    // =========================================================================
    // === Input Validation Errors
    // =========================================================================
    #[error(
        "Digest length must be one of the following values: {} bits (got {0})",
        DigestLength::valid_values_list()
    )]
    /// Carries the requested length as the caller wrote it.
    InvalidDigestLength(String),

    // =========================================================================
    // === Pipeline Errors
    // =========================================================================
    /// A block chunk was not an 8-digit hexadecimal numeral under the strict policy.
    #[error("Word {index} is not valid hexadecimal: {chunk:?}")]
    MalformedWord { index: usize, chunk: String },

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === Configuration & External Error Wrappers
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An error from the Serde JSON library, typically while loading a config file.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (e.g. reading stdin).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoveCrcError {
    /// Maps the error onto the process exit status a command-line caller should use.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoveCrcError::InvalidDigestLength(_) => EXIT_INVALID_ARGUMENT,
            _ => EXIT_FAILURE,
        }
    }
}
