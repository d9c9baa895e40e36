//! Service-layer facade: string-based operations over the wire encodings,
//! plus the static metrics descriptor.

use crate::decrypt::decrypt;
use crate::encrypt::encrypt;
use crate::error::Result;
use crate::keygen::generate_keypair;
use crate::params::Params;
use crate::serialize::{
    private_key_from_hex, private_key_to_hex, public_key_from_hex, public_key_to_hex,
    ring_from_hex, ring_to_hex,
};
use crate::sign;
use rand::rngs::OsRng;
use serde::Serialize;

/// Static descriptor returned by [`Engine::performance_metrics`].
#[derive(Clone, Debug, Serialize)]
pub struct MetricsDescriptor {
    pub algorithm: &'static str,
    pub ring_degree: usize,
    pub ciphertext_modulus: u32,
    pub plaintext_modulus: u32,
    pub public_key_bytes: usize,
    pub private_key_bytes: usize,
    pub ciphertext_bytes: usize,
    pub signature_bytes: usize,
    pub max_message_bytes: usize,
    pub multiplication: &'static str,
    pub target: &'static str,
}

/// A fully validated, immutable engine instance.
///
/// Construction goes through [`Params`], so an `Engine` that exists is
/// ready — there is no partially-initialized observable state. Safe to
/// share read-only across threads; every operation is a pure function of
/// its inputs plus the OS random source.
#[derive(Clone, Debug)]
pub struct Engine {
    params: Params,
}

impl Engine {
    pub fn new(params: Params) -> Self {
        Engine { params }
    }

    /// Engine over the interoperability default parameter set.
    pub fn recommended() -> Self {
        Engine::new(Params::recommended())
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Generate a key pair, returning `(public_hex, private_hex)`.
    pub fn generate_keypair(&self) -> Result<(String, String)> {
        let kp = generate_keypair(&mut OsRng, &self.params)
            .map_err(|e| e.in_op("generate_keypair"))?;
        Ok((
            public_key_to_hex(&kp.public, self.params.q),
            private_key_to_hex(&kp.private, self.params.q),
        ))
    }

    /// Encrypt a UTF-8 message under a hex-encoded public key.
    pub fn encrypt(&self, message: &str, public_key_hex: &str) -> Result<String> {
        let run = || -> Result<String> {
            let pk = public_key_from_hex(public_key_hex, self.params.n)?;
            let ct = encrypt(&mut OsRng, &self.params, &pk, message.as_bytes())?;
            Ok(ring_to_hex(&ct, self.params.q))
        };
        run().map_err(|e| e.in_op("encrypt"))
    }

    /// Decrypt a hex-encoded ciphertext with a hex-encoded private key.
    ///
    /// Output is lossily UTF-8 decoded; treat it as advisory when a key or
    /// modulus mismatch is suspected.
    pub fn decrypt(&self, ciphertext_hex: &str, private_key_hex: &str) -> Result<String> {
        let run = || -> Result<String> {
            let sk = private_key_from_hex(private_key_hex, &self.params)?;
            let ct = ring_from_hex(ciphertext_hex, self.params.n, "ciphertext")?;
            let bytes = decrypt(&self.params, &sk, &ct)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        };
        run().map_err(|e| e.in_op("decrypt"))
    }

    /// Produce a hex-encoded authentication tag for a message.
    pub fn sign(&self, message: &str, private_key_hex: &str) -> Result<String> {
        let run = || -> Result<String> {
            let sk = private_key_from_hex(private_key_hex, &self.params)?;
            Ok(hex::encode(sign::sign(message.as_bytes(), &sk, self.params.q)))
        };
        run().map_err(|e| e.in_op("sign"))
    }

    /// Check a hex-encoded tag. Never errors: any malformed or mismatching
    /// input — tag, message, or public key — verifies as `false`.
    pub fn verify(&self, message: &str, signature_hex: &str, public_key_hex: &str) -> bool {
        let Ok(signature) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(pk) = public_key_from_hex(public_key_hex, self.params.n) else {
            return false;
        };
        sign::verify(message.as_bytes(), &signature, &pk, self.params.q)
    }

    /// Static informational descriptor for observability layers.
    pub fn performance_metrics(&self) -> MetricsDescriptor {
        MetricsDescriptor {
            algorithm: "NTRU",
            ring_degree: self.params.n,
            ciphertext_modulus: self.params.q,
            plaintext_modulus: self.params.p,
            public_key_bytes: 4 * self.params.n,
            private_key_bytes: 8 * self.params.n,
            ciphertext_bytes: 4 * self.params.n,
            signature_bytes: sign::SIGNATURE_BYTES,
            max_message_bytes: self.params.max_message_bytes(),
            multiplication: "O(n^2) cyclic convolution (reference contract)",
            target: "constrained IoT-class devices",
        }
    }
}
