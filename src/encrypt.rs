//! Encryption: `c = r·h + m (mod q)` with a fresh blinding polynomial.

use crate::encoding::encode;
use crate::error::Result;
use crate::keygen::PublicKey;
use crate::params::Params;
use crate::poly::RingElement;
use crate::sampling::sample_ternary;
use rand::{CryptoRng, Rng};

/// Encrypt a byte message under a public key.
///
/// `r` is sampled fresh on every call and never reused — encrypting the
/// same message twice yields different ciphertexts.
pub fn encrypt<R: Rng + CryptoRng>(
    rng: &mut R,
    params: &Params,
    pk: &PublicKey,
    message: &[u8],
) -> Result<RingElement> {
    let m = encode(message, params.n)?;
    let r = sample_ternary(rng, params.d_r, params.d_r, params.n)?;
    Ok(r.multiply(&pk.h, params.q).add(&m, params.q))
}
