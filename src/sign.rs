//! Authentication tags bound to a key pair.
//!
//! Tag = HMAC-SHA3-256 over the message digest, keyed by the digest of the
//! serialized public key. Signer and verifier derive the MAC key from the
//! same bytes — the signer from the public half carried in its private key,
//! the verifier from the public key it was handed — so a tag produced by
//! [`sign`] always verifies, and a single flipped byte in message, tag, or
//! key makes it fail. The key material is public, so this is an integrity
//! and key-binding tag, not an unforgeability signature; see DESIGN.md for
//! the trade-off.

use crate::keygen::{PrivateKey, PublicKey};
use crate::poly::RingElement;
use crate::serialize::ring_to_bytes;
use hmac::{Hmac, Mac};
use sha3::{Digest, Sha3_256};
use subtle::ConstantTimeEq;

type HmacSha3 = Hmac<Sha3_256>;

/// Fixed tag length in bytes.
pub const SIGNATURE_BYTES: usize = 32;

fn tag_key(h: &RingElement, q: u32) -> [u8; 32] {
    Sha3_256::digest(ring_to_bytes(h, q)).into()
}

fn compute_tag(message: &[u8], h: &RingElement, q: u32) -> [u8; SIGNATURE_BYTES] {
    let digest = Sha3_256::digest(message);
    let mut mac = HmacSha3::new_from_slice(&tag_key(h, q))
        .expect("HMAC accepts keys of any length");
    mac.update(&digest);
    mac.finalize().into_bytes().into()
}

/// Produce the authentication tag for a message under a key pair.
pub fn sign(message: &[u8], sk: &PrivateKey, q: u32) -> [u8; SIGNATURE_BYTES] {
    compute_tag(message, &sk.h, q)
}

/// Check a tag against a message and public key. Constant-time comparison;
/// never errors — any mismatch, including a malformed tag length, is `false`.
pub fn verify(message: &[u8], signature: &[u8], pk: &PublicKey, q: u32) -> bool {
    if signature.len() != SIGNATURE_BYTES {
        return false;
    }
    let expected = compute_tag(message, &pk.h, q);
    expected.as_slice().ct_eq(signature).into()
}
