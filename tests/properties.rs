use proptest::prelude::*;

use lovecrc::kernels::{compressor, expander, parameterizer, primality};
use lovecrc::{
    hash, hash_with_config, trace, ChunkDecodePolicy, DigestLength, HasherConfig, LoveCrcError,
};

const HEX_DIGITS: &[u8] = b"0123456789abcdef";

fn any_length() -> impl Strategy<Value = DigestLength> {
    prop::sample::select(DigestLength::ALL.to_vec())
}

/// Hex text that, once the sentinel is appended, already fills whole words and
/// at least `L / 8` bytes. Such messages skip base-64 expansion, so their
/// words reach the parameterizer non-zero.
fn hex_block_message() -> impl Strategy<Value = (DigestLength, Vec<u8>)> {
    any_length().prop_flat_map(|length| {
        let min_words = length.word_count();
        let message = (min_words..min_words + 4).prop_flat_map(|words| {
            prop::collection::vec(prop::sample::select(HEX_DIGITS.to_vec()), words * 8 - 1)
        });
        (Just(length), message)
    })
}

fn hex_words(message: &[u8]) -> Vec<u64> {
    message
        .chunks_exact(8)
        .map(|chunk| u64::from_str_radix(std::str::from_utf8(chunk).unwrap(), 16).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn hash_is_deterministic(
        message in prop::collection::vec(any::<u8>(), 0..512),
        length in any_length(),
    ) {
        let first = hash(&message, length.bits()).unwrap();
        let second = hash(&message, length.bits()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lengths_outside_the_set_are_rejected(bits in any::<u32>()) {
        prop_assume!(DigestLength::ALL.iter().all(|len| len.bits() != bits));
        let is_invalid_length = matches!(
            hash(b"message", bits),
            Err(LoveCrcError::InvalidDigestLength(b)) if b == bits.to_string()
        );
        prop_assert!(is_invalid_length);
    }

    #[test]
    fn compressor_always_yields_word_count(
        message in prop::collection::vec(any::<u8>(), 0..2048),
        length in any_length(),
    ) {
        let block = expander::expand(&message, length);
        let words = compressor::compress(&block, length, ChunkDecodePolicy::ZeroOnInvalid).unwrap();
        prop_assert_eq!(words.len(), length.word_count());
    }

    #[test]
    fn derived_prime_is_at_most_word_and_passes_test(word in 2u64..) {
        let param = parameterizer::derive(word);
        let prime = param.prime.unwrap();
        prop_assert!(prime <= word);
        prop_assert!(primality::is_likely_prime(prime));
        prop_assert_eq!(param.polynomial, word - prime);
    }

    #[test]
    fn hex_blocks_decode_to_their_digits(case in hex_block_message()) {
        let (length, message) = case;
        let sequential = HasherConfig::with_length(length);
        let t = trace(&message, &sequential).unwrap();

        let full_words = message.len() / 8;
        let expected_words = hex_words(&message);
        prop_assert_eq!(&t.decoded_words[..full_words], expected_words.as_slice());
        // The final chunk holds the sentinel byte and reads as zero.
        prop_assert_eq!(t.decoded_words.len(), full_words + 1);
        prop_assert_eq!(t.decoded_words[full_words], 0);
        prop_assert_eq!(t.words.len(), length.word_count());

        let parallel = HasherConfig { parallel: true, ..sequential };
        prop_assert_eq!(&hash_with_config(&message, &parallel).unwrap(), t.digest());
    }

    #[test]
    fn digest_has_one_segment_per_word(
        message in prop::collection::vec(any::<u8>(), 0..256),
        length in any_length(),
    ) {
        let digest = hash_with_config(&message, &HasherConfig::with_length(length)).unwrap();
        prop_assert_eq!(digest.segments().len(), length.word_count());
        let rendered: String = digest.segments().iter().map(|s| format!("{:x}", s)).collect();
        prop_assert_eq!(digest.as_str(), rendered.as_str());
    }
}

#[test]
fn test_random_messages_are_stable_across_modes() {
    for _ in 0..32 {
        // 12 to 19 words of hex text: the block is the message itself.
        let words = rand::random_range(12..20usize);
        let message: Vec<u8> = (0..words * 8 - 1)
            .map(|_| HEX_DIGITS[rand::random_range(0..HEX_DIGITS.len())])
            .collect();
        let sequential = HasherConfig::with_length(DigestLength::Bits768);
        let parallel = HasherConfig {
            parallel: true,
            ..sequential.clone()
        };
        assert_eq!(
            hash_with_config(&message, &sequential).unwrap(),
            hash_with_config(&message, &parallel).unwrap()
        );
    }
}

#[test]
fn test_empty_message_pinned_for_every_call() {
    for _ in 0..3 {
        assert_eq!(
            hash(&[], 192).unwrap().to_string(),
            "ff00000000000000ff00000000000000ff00000000000000"
        );
    }
    assert_ne!(hash(&[], 192).unwrap(), hash(&[0x00], 192).unwrap());
}
