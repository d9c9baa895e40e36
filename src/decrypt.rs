//! Decryption via center-lift and reduction to the plaintext modulus.
//!
//! `f·c = p·(r·g) + f·m (mod q)`; with the noise bound enforced by
//! `Params`, centering recovers that value exactly over the integers, so
//! reducing mod `p` leaves `f·m`, and multiplying by `f_p⁻¹` yields `m`.

use crate::encoding::decode;
use crate::error::Result;
use crate::keygen::PrivateKey;
use crate::params::Params;
use crate::poly::RingElement;

/// Decrypt a ciphertext with a private key, returning the message bytes.
pub fn decrypt(
    params: &Params,
    sk: &PrivateKey,
    ciphertext: &RingElement,
) -> Result<Vec<u8>> {
    let a = sk.f.multiply(ciphertext, params.q).center(params.q);
    let m = sk.f_p.multiply(&a, params.p);
    Ok(decode(&m, params.p))
}
