// In: src/config.rs

//! The single source of truth for all LoveCRC hashing configuration.
//!
//! `HasherConfig` is created once at the application boundary (the CLI, or a
//! JSON file) and passed by reference into the pipeline. Every field has a
//! default that reproduces the reference digest, so `HasherConfig::default()`
//! is what the plain `hash` entry point uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::LoveCrcError;
use crate::types::DigestLength;

//==================================================================================
// I. Policy Enums
//==================================================================================

/// How the compressor treats an 8-byte chunk that is not a hexadecimal numeral.
///
/// Blocks produced by base-64 encoding almost never consist of hex digits only,
/// so `Strict` rejects nearly every message. It exists for callers that want
/// the condition surfaced instead of absorbed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChunkDecodePolicy {
    /// **Default:** an invalid chunk decodes to the word `0`.
    ///
    /// Only eight unsigned ASCII hex digits form a word; this is the crate's
    /// own rule. The reference's signed parse also accepts a leading `-` (part
    /// of the URL-safe alphabet) and yields a negative word, whereas here
    /// `-abc1234` decodes to `0` like any other invalid chunk.
    #[default]
    ZeroOnInvalid,

    /// An invalid chunk aborts the digest with `LoveCrcError::MalformedWord`.
    Strict,
}

/// How each 64-bit checksum segment is rendered into the digest string.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentFormat {
    /// **Default:** minimal lowercase hex with no leading zeros (reference behavior).
    /// Two digests of the same length may differ in character count.
    #[default]
    Unpadded,

    /// Every segment is zero-padded to 16 hex digits, so the digest is always `L / 4` characters.
    FixedWidth,
}

//==================================================================================
// II. The Unified HasherConfig
//==================================================================================

/// The single, unified configuration for one digest computation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HasherConfig {
    /// The requested digest length in bits.
    #[serde(default)]
    pub length: DigestLength,

    /// Policy for non-hexadecimal chunks in the expanded block.
    #[serde(default)]
    pub chunk_decode: ChunkDecodePolicy,

    /// Rendering of checksum segments.
    #[serde(default)]
    pub segment_format: SegmentFormat,

    /// If true, polynomials are derived on the rayon thread pool.
    /// The digest is identical either way.
    #[serde(default)]
    pub parallel: bool,
}

impl HasherConfig {
    /// Returns a default config for the given length.
    pub fn with_length(length: DigestLength) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Parses a config from a JSON document. Missing fields take their defaults.
    ///
    /// `length` is validated on its own, so a bad value surfaces as
    /// `LoveCrcError::InvalidDigestLength` rather than a generic JSON error.
    pub fn from_json_str(json: &str) -> Result<Self, LoveCrcError> {
        let mut value: Value = serde_json::from_str(json)?;
        let length = match value.as_object_mut().and_then(|obj| obj.remove("length")) {
            Some(raw) => Some(length_from_json(&raw)?),
            None => None,
        };
        let mut config: HasherConfig = serde_json::from_value(value)?;
        if let Some(length) = length {
            config.length = length;
        }
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoveCrcError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LoveCrcError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }
}

/// Accepts a length written as a JSON number or a numeric string.
fn length_from_json(raw: &Value) -> Result<DigestLength, LoveCrcError> {
    match raw {
        Value::Number(n) => match n.as_u64().and_then(|bits| u32::try_from(bits).ok()) {
            Some(bits) => DigestLength::try_from(bits),
            None => Err(LoveCrcError::InvalidDigestLength(n.to_string())),
        },
        Value::String(s) => s.parse(),
        other => Err(LoveCrcError::InvalidDigestLength(other.to_string())),
    }
}
