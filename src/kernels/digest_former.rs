//! This module contains the Digest Former: the final stage of the digest pipeline.
//!
//! Every polynomial drives its own CRC-64 over the padded original message.
//! The checksums are rendered as hex and concatenated in word order.

use std::fmt::Write;

use crate::config::SegmentFormat;
use crate::kernels::crc64::Crc64Table;

/// Hex digits in a fully padded segment.
pub const SEGMENT_HEX_WIDTH: usize = 16;

/// Computes one checksum per polynomial over `padded_message`.
pub fn checksums(polynomials: &[u64], padded_message: &[u8]) -> Vec<u64> {
    polynomials
        .iter()
        .map(|&poly| Crc64Table::new(poly).checksum(padded_message))
        .collect()
}

/// Renders the checksum segments into a digest string.
pub fn render(segments: &[u64], format: SegmentFormat) -> String {
    let mut digest = String::with_capacity(segments.len() * SEGMENT_HEX_WIDTH);
    for segment in segments {
        // Writing into a String cannot fail.
        let _ = match format {
            SegmentFormat::Unpadded => write!(digest, "{:x}", segment),
            SegmentFormat::FixedWidth => write!(digest, "{:016x}", segment),
        };
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::crc64::ECMA;

    #[test]
    fn test_checksums_in_polynomial_order() {
        let sums = checksums(&[ECMA, 0], b"123456789");
        assert_eq!(sums, vec![0x995D_C9BB_DF19_39FA, Crc64Table::new(0).checksum(b"123456789")]);
    }

    #[test]
    fn test_render_unpadded_drops_leading_zeros() {
        let sums = checksums(&[0xC7A2_EA20_B2F1_4C94], &[0x80]);
        assert_eq!(render(&sums, SegmentFormat::Unpadded), "de689855874b27e");
        assert_eq!(render(&sums, SegmentFormat::FixedWidth), "0de689855874b27e");
    }

    #[test]
    fn test_render_concatenates() {
        let segments = [0x1u64, 0xFF00_0000_0000_0000, 0xabc];
        assert_eq!(render(&segments, SegmentFormat::Unpadded), "1ff00000000000000abc");
        assert_eq!(
            render(&segments, SegmentFormat::FixedWidth),
            "0000000000000001ff000000000000000000000000000abc"
        );
        assert_eq!(render(&[], SegmentFormat::Unpadded), "");
    }
}
