//! Wire encoding.
//!
//! Every ring element travels as `n` little-endian `u32` words, hex-encoded
//! for transport. The private-key encoding is `f ‖ h` (2·n words): the
//! public half rides along so that signing and decryption need only the
//! private string. Signatures are raw tag bytes, hex-encoded. This format is
//! stable for a given parameter set.

use crate::error::{Error, Result};
use crate::keygen::{PrivateKey, PublicKey};
use crate::params::Params;
use crate::poly::RingElement;
use zeroize::Zeroizing;

/// Serialize a ring element as little-endian `u32` words reduced into `[0, q)`.
pub fn ring_to_bytes(e: &RingElement, q: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 * e.len());
    for &c in &e.coeffs {
        let w = c.rem_euclid(q as i64) as u32;
        buf.extend_from_slice(&w.to_le_bytes());
    }
    buf
}

/// Deserialize a ring element of degree `n`, leaving coefficients in `[0, q)`
/// as transmitted.
pub fn ring_from_bytes(data: &[u8], n: usize) -> Result<RingElement> {
    if data.len() != 4 * n {
        return Err(Error::Encoding {
            what: "ring element",
            reason: format!("expected {} bytes, got {}", 4 * n, data.len()),
        });
    }
    let mut coeffs = Vec::with_capacity(n);
    for chunk in data.chunks_exact(4) {
        let w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        coeffs.push(w as i64);
    }
    Ok(RingElement::from_coeffs(coeffs))
}

/// Hex transport string for a public key or ciphertext.
pub fn ring_to_hex(e: &RingElement, q: u32) -> String {
    hex::encode(ring_to_bytes(e, q))
}

/// Parse a hex transport string back into a ring element of degree `n`.
pub fn ring_from_hex(s: &str, n: usize, what: &'static str) -> Result<RingElement> {
    let bytes = hex::decode(s).map_err(|e| Error::Encoding {
        what,
        reason: e.to_string(),
    })?;
    ring_from_bytes(&bytes, n).map_err(|e| match e {
        Error::Encoding { reason, .. } => Error::Encoding { what, reason },
        other => other,
    })
}

/// Hex encoding of a private key: `f ‖ h`.
pub fn private_key_to_hex(sk: &PrivateKey, q: u32) -> String {
    let mut buf = Zeroizing::new(ring_to_bytes(&sk.f, q));
    buf.extend_from_slice(&ring_to_bytes(&sk.h, q));
    hex::encode(buf.as_slice())
}

/// Parse a private-key string, re-centering `f` into signed ternary form and
/// recomputing its mod-`p` inverse (which is where a corrupted key surfaces
/// as [`Error::NotInvertible`]).
pub fn private_key_from_hex(s: &str, params: &Params) -> Result<PrivateKey> {
    let bytes = Zeroizing::new(hex::decode(s).map_err(|e| Error::Encoding {
        what: "private key",
        reason: e.to_string(),
    })?);
    if bytes.len() != 8 * params.n {
        return Err(Error::Encoding {
            what: "private key",
            reason: format!("expected {} bytes, got {}", 8 * params.n, bytes.len()),
        });
    }
    let f = ring_from_bytes(&bytes[..4 * params.n], params.n)?.center(params.q);
    let h = ring_from_bytes(&bytes[4 * params.n..], params.n)?;
    PrivateKey::from_parts(f, h, params)
}

/// Hex encoding of a public key.
pub fn public_key_to_hex(pk: &PublicKey, q: u32) -> String {
    ring_to_hex(&pk.h, q)
}

/// Parse a public-key string.
pub fn public_key_from_hex(s: &str, n: usize) -> Result<PublicKey> {
    Ok(PublicKey {
        h: ring_from_hex(s, n, "public key")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::generate_keypair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ring_bytes_roundtrip() {
        let mut e = RingElement::zero(1024);
        e.coeffs[0] = 42;
        e.coeffs[100] = 65536;
        e.coeffs[1023] = -1; // serializes as q - 1
        let bytes = ring_to_bytes(&e, 65537);
        assert_eq!(bytes.len(), 4096);
        let back = ring_from_bytes(&bytes, 1024).unwrap();
        assert_eq!(back.coeffs[0], 42);
        assert_eq!(back.coeffs[100], 65536);
        assert_eq!(back.coeffs[1023], 65536);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            ring_from_bytes(&[0u8; 10], 1024),
            Err(Error::Encoding { .. })
        ));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(ring_from_hex("zz", 1024, "ciphertext").is_err());
    }

    #[test]
    fn private_key_hex_roundtrip() {
        let params = Params::recommended();
        let mut rng = StdRng::seed_from_u64(11);
        let kp = generate_keypair(&mut rng, &params).unwrap();
        let s = private_key_to_hex(&kp.private, params.q);
        assert_eq!(s.len(), 2 * 8 * params.n);
        let back = private_key_from_hex(&s, &params).unwrap();
        assert_eq!(back.f, kp.private.f);
        assert_eq!(back.f_p, kp.private.f_p);
        assert_eq!(back.h, kp.private.h);
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let params = Params::recommended();
        let mut rng = StdRng::seed_from_u64(11);
        let kp = generate_keypair(&mut rng, &params).unwrap();
        let s = public_key_to_hex(&kp.public, params.q);
        let back = public_key_from_hex(&s, params.n).unwrap();
        assert_eq!(back.h, kp.public.h);
    }
}
