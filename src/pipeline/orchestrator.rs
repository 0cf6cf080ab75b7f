// In: src/pipeline/orchestrator.rs

use std::time::Instant;

use crate::config::HasherConfig;
use crate::error::LoveCrcError;
use crate::kernels::parameterizer::{self, Parameter};
use crate::kernels::{compressor, digest_former, expander};
use crate::types::{Digest, DigestLength};

//==================================================================================
// 1. Public Orchestration API
//==================================================================================

/// Hashes `message` to a digest of `length` bits with the default configuration.
///
/// # Errors
/// Returns `LoveCrcError::InvalidDigestLength` if `length` is not one of
/// 192, 256, ..., 1024 (multiples of 64).
pub fn hash(message: &[u8], length: u32) -> Result<Digest, LoveCrcError> {
    let length = DigestLength::try_from(length)?;
    hash_with_config(message, &HasherConfig::with_length(length))
}

/// Hashes `message` according to `config`.
///
/// The four stages run strictly in order and each consumes only what the
/// previous stage produced. The digest former checksums the padded message,
/// not the expanded block.
pub fn hash_with_config(message: &[u8], config: &HasherConfig) -> Result<Digest, LoveCrcError> {
    Ok(run_stages(message, config)?.digest)
}

//==================================================================================
// 2. Stage Runner
//==================================================================================

/// Everything the four stages produced for one message.
pub(crate) struct PipelineRun {
    pub block: Vec<u8>,
    /// Words as decoded from the block, before folding.
    pub decoded_words: Vec<u64>,
    /// One entry per folded word.
    pub params: Vec<Parameter>,
    pub digest: Digest,
}

/// Runs expand, compress, parameterize and form, keeping the intermediates.
pub(crate) fn run_stages(
    message: &[u8],
    config: &HasherConfig,
) -> Result<PipelineRun, LoveCrcError> {
    let start_overall = Instant::now();
    let length = config.length;

    // 1. Expand the padded message into a block of whole words.
    let block = expander::expand(message, length);
    log_stage!("stage" = "expand", "message_len" = message.len(), "block_len" = block.len());

    // 2. Decode and fold the block down to exactly W words.
    let decoded_words = compressor::decode_words(&block, config.chunk_decode)?;
    let mut words = decoded_words.clone();
    compressor::fold_in_place(&mut words, length.word_count())?;
    log_stage!("stage" = "compress", "decoded" = decoded_words.len(), "words" = words.len());

    // 3. Derive one generator polynomial per word.
    let params = parameterizer::parameterize(&words, config.parallel);
    log_stage!("stage" = "parameterize", "parallel" = config.parallel);

    // 4. Checksum the padded message once per polynomial.
    let polynomials: Vec<u64> = params.iter().map(|p| p.polynomial).collect();
    let segments = digest_former::checksums(&polynomials, &expander::pad(message));
    let digest = build_digest(length, segments, config)?;

    log::debug!(
        "lovecrc: hashed {} bytes to {} bits in {:.2?}",
        message.len(),
        length,
        start_overall.elapsed()
    );
    Ok(PipelineRun {
        block,
        decoded_words,
        params,
        digest,
    })
}

//==================================================================================
// 3. Helpers
//==================================================================================

/// Checks the segment count invariant and renders the final digest.
pub(crate) fn build_digest(
    length: DigestLength,
    segments: Vec<u64>,
    config: &HasherConfig,
) -> Result<Digest, LoveCrcError> {
    if segments.len() != length.word_count() {
        return Err(LoveCrcError::InternalError(format!(
            "formed {} segments for a {}-bit digest, expected {}",
            segments.len(),
            length,
            length.word_count()
        )));
    }
    let hex = digest_former::render(&segments, config.segment_format);
    Ok(Digest::new(length, segments, hex))
}
