//! This module contains the Expander: the first stage of the digest pipeline.
//!
//! The message is padded with a single sentinel byte and then repeatedly
//! re-encoded as URL-safe base-64 text until the buffer is at least one block
//! long and a whole number of 8-byte words.

use base64::{engine::general_purpose::URL_SAFE, Engine};

use crate::types::DigestLength;

/// The byte `0b1000_0000` appended to every message before hashing.
pub const SENTINEL: u8 = 0x80;

/// Bytes of block text per word.
pub const WORD_TEXT_LEN: usize = 8;

/// Returns the message with the sentinel byte appended.
///
/// The sentinel keeps the empty message from being a degenerate input, and is
/// also what the digest former checksums.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(message.len() + 1);
    padded.extend_from_slice(message);
    padded.push(SENTINEL);
    padded
}

/// True once `buf` is long enough for `length` and splits evenly into words.
fn is_expanded(buf: &[u8], length: DigestLength) -> bool {
    buf.len() >= length.bytes() && buf.len() % WORD_TEXT_LEN == 0
}

/// Expands `message` into a block for the compressor.
///
/// If the padded message already satisfies both size conditions it is returned
/// as-is. Otherwise every pass grows the buffer by roughly 4/3, so the loop
/// always terminates.
pub fn expand(message: &[u8], length: DigestLength) -> Vec<u8> {
    let mut buf = pad(message);
    while !is_expanded(&buf, length) {
        buf = URL_SAFE.encode(&buf).into_bytes();
    }
    buf
}
