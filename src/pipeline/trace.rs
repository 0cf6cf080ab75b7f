//! Step-by-step record of a single digest computation.
//!
//! `trace` shares its stage runner with `hash_with_config` and keeps every
//! intermediate value, which is what the CLI's `--trace` flag prints.

use serde::Serialize;

use crate::config::HasherConfig;
use crate::error::LoveCrcError;
use crate::pipeline::orchestrator::run_stages;
use crate::types::{Digest, DigestLength};

/// One word's journey from the folded block to its checksum segment.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WordTrace {
    pub word: u64,
    pub prime: Option<u64>,
    pub polynomial: u64,
    pub checksum: u64,
}

/// Every intermediate value produced while hashing one message.
#[derive(Serialize, Debug, Clone)]
pub struct DigestTrace {
    pub length: DigestLength,
    pub message_len: usize,
    /// The expanded block, lossily shown as text.
    pub expanded_block: String,
    /// Words decoded from the block, before folding.
    pub decoded_words: Vec<u64>,
    /// Per-word results after folding, in order.
    pub words: Vec<WordTrace>,
    #[serde(rename = "digest")]
    pub digest_hex: String,
    #[serde(skip)]
    digest_value: Digest,
}

impl DigestTrace {
    /// The digest this trace produced.
    pub fn digest(&self) -> &Digest {
        &self.digest_value
    }

    /// Pretty JSON rendering of the trace.
    pub fn to_json_pretty(&self) -> Result<String, LoveCrcError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Hashes `message` under `config`, recording every stage.
pub fn trace(message: &[u8], config: &HasherConfig) -> Result<DigestTrace, LoveCrcError> {
    let run = run_stages(message, config)?;

    let words = run
        .params
        .iter()
        .zip(run.digest.segments())
        .map(|(param, &checksum)| WordTrace {
            word: param.word,
            prime: param.prime,
            polynomial: param.polynomial,
            checksum,
        })
        .collect();

    Ok(DigestTrace {
        length: run.digest.length(),
        message_len: message.len(),
        expanded_block: String::from_utf8_lossy(&run.block).into_owned(),
        decoded_words: run.decoded_words,
        words,
        digest_hex: run.digest.as_str().to_string(),
        digest_value: run.digest,
    })
}
