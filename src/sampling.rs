//! Ternary sampling with a cryptographically secure source.

use crate::error::{Error, Result};
use crate::poly::RingElement;
use rand::seq::index;
use rand::{CryptoRng, Rng};

/// Sample a ternary polynomial with exactly `d_pos` coefficients +1 and
/// `d_neg` coefficients -1, positions drawn uniformly without replacement.
///
/// The CSPRNG bound is a correctness-of-security requirement: predictable
/// blinding breaks encryption semantics outright.
pub fn sample_ternary<R: Rng + CryptoRng>(
    rng: &mut R,
    d_pos: usize,
    d_neg: usize,
    n: usize,
) -> Result<RingElement> {
    if d_pos + d_neg > n {
        return Err(Error::Configuration(format!(
            "ternary weights {d_pos}+{d_neg} exceed ring degree {n}"
        )));
    }
    let positions = index::sample(rng, n, d_pos + d_neg);
    let mut coeffs = vec![0i64; n];
    for (k, idx) in positions.iter().enumerate() {
        coeffs[idx] = if k < d_pos { 1 } else { -1 };
    }
    Ok(RingElement::from_coeffs(coeffs))
}
