//! This module defines the canonical, type-safe representation of a requested
//! digest length.

use crate::error::LoveCrcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bits per word, the unit every digest length is a multiple of.
pub const WORD_BITS: u32 = 64;

/// The digest lengths, in bits, the algorithm accepts.
///
/// Every variant is a multiple of 64, so `word_count()` is exact. Serialized as
/// its bit count (e.g. `256`), and rejected on deserialization if not listed here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub enum DigestLength {
    #[default]
    Bits192,
    Bits256,
    Bits320,
    Bits384,
    Bits448,
    Bits512,
    Bits576,
    Bits640,
    Bits704,
    Bits768,
    Bits832,
    Bits896,
    Bits960,
    Bits1024,
}

impl DigestLength {
    /// All valid lengths, shortest first.
    pub const ALL: [DigestLength; 14] = [
        Self::Bits192,
        Self::Bits256,
        Self::Bits320,
        Self::Bits384,
        Self::Bits448,
        Self::Bits512,
        Self::Bits576,
        Self::Bits640,
        Self::Bits704,
        Self::Bits768,
        Self::Bits832,
        Self::Bits896,
        Self::Bits960,
        Self::Bits1024,
    ];

    /// The length in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Self::Bits192 => 192,
            Self::Bits256 => 256,
            Self::Bits320 => 320,
            Self::Bits384 => 384,
            Self::Bits448 => 448,
            Self::Bits512 => 512,
            Self::Bits576 => 576,
            Self::Bits640 => 640,
            Self::Bits704 => 704,
            Self::Bits768 => 768,
            Self::Bits832 => 832,
            Self::Bits896 => 896,
            Self::Bits960 => 960,
            Self::Bits1024 => 1024,
        }
    }

    /// The minimum size of the expanded block, in bytes (`L / 8`).
    pub fn bytes(&self) -> usize {
        (self.bits() / 8) as usize
    }

    /// The number of 64-bit words the compressor folds down to (`L / 64`).
    pub fn word_count(&self) -> usize {
        (self.bits() / WORD_BITS) as usize
    }

    /// The valid set as a comma-separated list, used in error messages.
    pub fn valid_values_list() -> String {
        Self::ALL
            .iter()
            .map(|len| len.bits().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TryFrom<u32> for DigestLength {
    type Error = LoveCrcError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|len| len.bits() == bits)
            .ok_or_else(|| LoveCrcError::InvalidDigestLength(bits.to_string()))
    }
}

impl From<DigestLength> for u32 {
    fn from(len: DigestLength) -> u32 {
        len.bits()
    }
}

impl FromStr for DigestLength {
    type Err = LoveCrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let bits: u32 = text
            .parse()
            .map_err(|_| LoveCrcError::InvalidDigestLength(text.to_string()))?;
        Self::try_from(bits)
    }
}

impl fmt::Display for DigestLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lengths_are_word_multiples() {
        for len in DigestLength::ALL {
            assert_eq!(len.bits() % WORD_BITS, 0);
            assert_eq!(len.word_count() * 64, len.bits() as usize);
            assert_eq!(DigestLength::try_from(len.bits()).unwrap(), len);
        }
        assert_eq!(DigestLength::Bits192.word_count(), 3);
        assert_eq!(DigestLength::Bits1024.word_count(), 16);
        assert_eq!(DigestLength::Bits1024.bytes(), 128);
    }

    #[test]
    fn test_rejects_values_outside_set() {
        for bits in [0, 1, 64, 128, 191, 200, 1088, 2048, u32::MAX] {
            assert!(matches!(
                DigestLength::try_from(bits),
                Err(LoveCrcError::InvalidDigestLength(b)) if b == bits.to_string()
            ));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("512".parse::<DigestLength>().unwrap(), DigestLength::Bits512);
        assert_eq!(" 960 ".parse::<DigestLength>().unwrap(), DigestLength::Bits960);
        assert!("100".parse::<DigestLength>().is_err());
    }

    #[test]
    fn test_from_str_reports_original_text() {
        for text in ["abc", "5000000000", "-192"] {
            match text.parse::<DigestLength>() {
                Err(LoveCrcError::InvalidDigestLength(got)) => assert_eq!(got, text),
                other => panic!("Expected InvalidDigestLength, got {:?}", other),
            }
        }
        let msg = "abc".parse::<DigestLength>().unwrap_err().to_string();
        assert!(msg.contains("got abc"));
    }

    #[test]
    fn test_serde_as_bit_count() {
        let json = serde_json::to_string(&DigestLength::Bits384).unwrap();
        assert_eq!(json, "384");
        let parsed: DigestLength = serde_json::from_str("704").unwrap();
        assert_eq!(parsed, DigestLength::Bits704);
        assert!(serde_json::from_str::<DigestLength>("300").is_err());
    }
}
