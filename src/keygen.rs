//! Key generation.

use crate::error::{Error, Result};
use crate::inverse::invert;
use crate::params::Params;
use crate::poly::RingElement;
use crate::sampling::sample_ternary;
use rand::{CryptoRng, Rng};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Resample budget before key generation gives up.
pub const MAX_KEYGEN_ATTEMPTS: u32 = 100;

/// Public key: `h = p · f_q⁻¹ · g (mod q)`, coefficients in `[0, q)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub h: RingElement,
}

/// Private key material.
///
/// `f` is kept in signed ternary form, `f_p` is its inverse mod `p`
/// (precomputed at keygen so decryption never has to fail), and `h` rides
/// along so the private encoding alone suffices for signing.
///
/// Zeroized on drop. Does not implement `Debug` to prevent accidental
/// logging of secrets.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    pub f: RingElement,
    pub f_p: RingElement,
    pub h: RingElement,
}

impl PrivateKey {
    /// Rebuild a private key from its wire parts, recomputing the mod-`p`
    /// inverse. Surfaces [`Error::NotInvertible`] for a corrupted or
    /// foreign `f`.
    pub fn from_parts(f: RingElement, h: RingElement, params: &Params) -> Result<Self> {
        let f_p = invert(&f, params.p)?;
        Ok(PrivateKey { f, f_p, h })
    }
}

/// A freshly generated key pair, owned exclusively by the caller.
#[derive(Clone)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

/// Generate a key pair.
///
/// Samples `f` with weights `(d_f, d_f - 1)` and retries (bounded) until it
/// is a unit both mod `q` and mod `p` — checking mod `p` here is what makes
/// decryption infallible for honestly generated keys. Then
/// `h = p · f_q⁻¹ · g (mod q)`.
pub fn generate_keypair<R: Rng + CryptoRng>(
    rng: &mut R,
    params: &Params,
) -> Result<KeyPair> {
    for _ in 0..MAX_KEYGEN_ATTEMPTS {
        let f = sample_ternary(rng, params.d_f, params.d_f - 1, params.n)?;
        let f_q = match invert(&f, params.q) {
            Ok(v) => v,
            Err(Error::NotInvertible(_)) => continue,
            Err(e) => return Err(e),
        };
        let f_p = match invert(&f, params.p) {
            Ok(v) => v,
            Err(Error::NotInvertible(_)) => continue,
            Err(e) => return Err(e),
        };
        let g = sample_ternary(rng, params.d_g, params.d_g, params.n)?;
        let h = f_q
            .multiply(&g, params.q)
            .scalar_mul(params.p as i64, params.q);
        return Ok(KeyPair {
            public: PublicKey { h: h.clone() },
            private: PrivateKey { f, f_p, h },
        });
    }
    Err(Error::KeyGeneration(MAX_KEYGEN_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_keypair(seed: u64) -> (KeyPair, Params) {
        let params = Params::recommended();
        let mut rng = StdRng::seed_from_u64(seed);
        (generate_keypair(&mut rng, &params).unwrap(), params)
    }

    #[test]
    fn private_inverse_holds_mod_p() {
        let (kp, params) = test_keypair(42);
        let prod = kp.private.f.multiply(&kp.private.f_p, params.p);
        assert_eq!(prod, RingElement::identity(params.n));
    }

    #[test]
    fn public_key_satisfies_ring_relation() {
        // f·h ≡ p·g (mod q): centered coefficients are small multiples of p.
        let (kp, params) = test_keypair(42);
        let v = kp.private.f.multiply(&kp.public.h, params.q).center(params.q);
        for &c in &v.coeffs {
            assert_eq!(c.rem_euclid(params.p as i64), 0);
            assert!(c.unsigned_abs() <= 2 * params.p as u64 * params.d_g as u64);
        }
    }

    #[test]
    fn successive_keypairs_differ() {
        let (a, _) = test_keypair(1);
        let (b, _) = test_keypair(2);
        assert_ne!(a.public.h, b.public.h);
        assert_ne!(a.private.f, b.private.f);
    }

    #[test]
    fn public_half_rides_in_private_key() {
        let (kp, _) = test_keypair(42);
        assert_eq!(kp.private.h, kp.public.h);
    }

    #[test]
    fn from_parts_rejects_non_unit() {
        let params = Params::recommended();
        let mut f = RingElement::zero(params.n);
        // x - 1 divides x^n - 1, so this f has no inverse mod p.
        f.coeffs[0] = -1;
        f.coeffs[1] = 1;
        let h = RingElement::zero(params.n);
        assert!(matches!(
            PrivateKey::from_parts(f, h, &params),
            Err(Error::NotInvertible(3))
        ));
    }
}
