//! This module contains the Parameterizer: the third stage of the digest pipeline.
//!
//! Each folded word `w` is turned into a CRC-64 generator polynomial `w - p`,
//! where `p` is the nearest likely prime at or below `w`. Words are independent
//! of one another, so the search can run on the rayon thread pool. Results are
//! always returned in word order.

use rayon::prelude::*;

use crate::kernels::primality::nearest_likely_prime;

/// The polynomial used for words with no prime at or below them (0 and 1).
pub const DEGENERATE_POLYNOMIAL: u64 = 0;

/// The derivation of one polynomial, kept for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub word: u64,
    /// `None` for words below 2.
    pub prime: Option<u64>,
    pub polynomial: u64,
}

/// Derives the parameter for a single word.
pub fn derive(word: u64) -> Parameter {
    let prime = nearest_likely_prime(word);
    let polynomial = prime.map_or(DEGENERATE_POLYNOMIAL, |p| word - p);
    Parameter {
        word,
        prime,
        polynomial,
    }
}

/// Derives one parameter per word, preserving order.
pub fn parameterize(words: &[u64], parallel: bool) -> Vec<Parameter> {
    if parallel {
        // Indexed parallel iterators collect in source order.
        words.par_iter().map(|&w| derive(w)).collect()
    } else {
        words.iter().map(|&w| derive(w)).collect()
    }
}

/// Convenience wrapper returning only the polynomials.
pub fn polynomials(words: &[u64], parallel: bool) -> Vec<u64> {
    parameterize(words, parallel)
        .into_iter()
        .map(|param| param.polynomial)
        .collect()
}
