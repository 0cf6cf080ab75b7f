//! The output of one digest computation.

use std::fmt;

use crate::types::DigestLength;

/// A finished LoveCRC digest.
///
/// `as_str()` is the hex string handed to callers. `segments()` holds the `W`
/// raw checksums in word order, since unpadded hex cannot be split back apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    length: DigestLength,
    segments: Vec<u64>,
    hex: String,
}

impl Digest {
    pub(crate) fn new(length: DigestLength, segments: Vec<u64>, hex: String) -> Self {
        Self {
            length,
            segments,
            hex,
        }
    }

    pub fn length(&self) -> DigestLength {
        self.length
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    pub fn into_string(self) -> String {
        self.hex
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
