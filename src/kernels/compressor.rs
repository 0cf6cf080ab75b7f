//! This module contains the Compressor: the second stage of the digest pipeline.
//!
//! The expanded block is read as a sequence of 8-character hexadecimal numerals,
//! one per word, and the word sequence is then folded right-to-left until
//! exactly `L / 64` words remain.

use crate::config::ChunkDecodePolicy;
use crate::error::LoveCrcError;
use crate::kernels::expander::WORD_TEXT_LEN;
use crate::types::DigestLength;

//==================================================================================
// 1. Chunk Decoding
//==================================================================================

/// Parses 8 bytes of block text as a base-16 numeral.
///
/// Returns `None` unless every byte is an ASCII hex digit (either case).
/// A sign is never accepted, so `-abc1234` is invalid even though the
/// reference parser would read it as a negative number.
/// Eight digits fit in 32 bits, so the result can never overflow.
pub fn parse_hex_chunk(chunk: &[u8]) -> Option<u64> {
    if chunk.is_empty() {
        return None;
    }
    chunk.iter().try_fold(0u64, |acc, &byte| {
        let digit = (byte as char).to_digit(16)?;
        Some((acc << 4) | u64::from(digit))
    })
}

/// Splits the block into words, applying `policy` to non-hex chunks.
pub fn decode_words(block: &[u8], policy: ChunkDecodePolicy) -> Result<Vec<u64>, LoveCrcError> {
    if block.len() % WORD_TEXT_LEN != 0 {
        return Err(LoveCrcError::InternalError(format!(
            "expanded block of {} bytes is not a whole number of words",
            block.len()
        )));
    }

    block
        .chunks_exact(WORD_TEXT_LEN)
        .enumerate()
        .map(|(index, chunk)| match (parse_hex_chunk(chunk), policy) {
            (Some(word), _) => Ok(word),
            (None, ChunkDecodePolicy::ZeroOnInvalid) => Ok(0),
            (None, ChunkDecodePolicy::Strict) => Err(LoveCrcError::MalformedWord {
                index,
                chunk: String::from_utf8_lossy(chunk).into_owned(),
            }),
        })
        .collect()
}

//==================================================================================
// 2. Folding
//==================================================================================

/// Folds `words` in place down to `target` entries.
///
/// Each step replaces the second-to-last word with `second_to_last - last`
/// (mod 2^64) and drops the last word.
pub fn fold_in_place(words: &mut Vec<u64>, target: usize) -> Result<(), LoveCrcError> {
    if words.len() < target {
        return Err(LoveCrcError::InternalError(format!(
            "cannot fold {} words up to {}",
            words.len(),
            target
        )));
    }
    while words.len() > target {
        let last = words.pop().unwrap_or_default();
        if let Some(penultimate) = words.last_mut() {
            *penultimate = penultimate.wrapping_sub(last);
        }
    }
    Ok(())
}

//==================================================================================
// 3. Public Entry Point
//==================================================================================

/// Compresses an expanded block into exactly `length.word_count()` words.
pub fn compress(
    block: &[u8],
    length: DigestLength,
    policy: ChunkDecodePolicy,
) -> Result<Vec<u64>, LoveCrcError> {
    let mut words = decode_words(block, policy)?;
    fold_in_place(&mut words, length.word_count())?;
    Ok(words)
}
