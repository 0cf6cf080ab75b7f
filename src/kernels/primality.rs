//! Fermat base-2 likely-prime testing over `u64`.
//!
//! The test is one-sided: it never rejects a prime, but base-2 pseudoprimes
//! such as 341 and 561 pass as well.

const ONE: u64 = 1;

/// The Fermat witness base.
const BASE: u64 = 2;

/// Computes `(a * b) mod m` without overflow.
#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// Computes `base^exp mod modulus` by square-and-multiply.
///
/// `modulus` must be non-zero. A modulus of 1 always yields 0.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == ONE {
        return 0;
    }
    let mut result = ONE;
    let mut base = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// Returns true if `n` is a likely prime: `2^(n-1) mod n == 1`.
///
/// 2 itself cannot be certified by a base-2 witness and is accepted outright.
/// 0 and 1 are never prime.
pub fn is_likely_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 => true,
        _ => mod_pow(BASE, n - ONE, n) == ONE,
    }
}

/// Finds the largest likely prime `p <= w`, or `None` when `w < 2`.
///
/// The search stops at 2 at the latest, and in practice at 3 for any `w >= 3`.
pub fn nearest_likely_prime(w: u64) -> Option<u64> {
    (BASE..=w).rev().find(|&p| is_likely_prime(p))
}
