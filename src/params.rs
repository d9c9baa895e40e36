//! Scheme parameters, validated once at construction.

use crate::error::{Error, Result};

/// Minimum accepted ring degree (post-quantum security margin).
pub const MIN_RING_DEGREE: usize = 1024;

/// Immutable parameter set for the quotient ring `(Z/qZ)[x] / (x^n - 1)`.
///
/// Construction validates everything up front; a `Params` value that exists
/// is safe to share read-only across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Ring degree.
    pub n: usize,
    /// Ciphertext modulus (odd prime, or a power of two).
    pub q: u32,
    /// Plaintext modulus (small odd prime).
    pub p: u32,
    /// Private-key weight: `f` gets `d_f` coefficients +1 and `d_f - 1` of -1,
    /// keeping `f(1) != 0` so `f` stays coprime with the `(x - 1)` factor of
    /// `x^n - 1`.
    pub d_f: usize,
    /// Weight of `g` (`d_g` each of +1 / -1).
    pub d_g: usize,
    /// Weight of the per-encryption blinding polynomial `r`.
    pub d_r: usize,
}

impl Params {
    /// Construct with the default plaintext modulus `p = 3` and weights `n/3`.
    pub fn new(n: usize, q: u32) -> Result<Self> {
        let d = n / 3;
        Self::with_weights(n, q, 3, d, d, d)
    }

    /// Construct with explicit plaintext modulus and sampling weights.
    pub fn with_weights(
        n: usize,
        q: u32,
        p: u32,
        d_f: usize,
        d_g: usize,
        d_r: usize,
    ) -> Result<Self> {
        if n < MIN_RING_DEGREE {
            return Err(Error::Configuration(format!(
                "ring degree {n} below minimum {MIN_RING_DEGREE}"
            )));
        }
        if n % 8 != 0 {
            return Err(Error::Configuration(format!(
                "ring degree {n} must be a multiple of 8 for byte packing"
            )));
        }
        if q < 4 || !(is_odd_prime(q) || q.is_power_of_two()) {
            return Err(Error::Configuration(format!(
                "ciphertext modulus {q} must be an odd prime or a power of two"
            )));
        }
        // Coefficient products must fit i64.
        if q > 1 << 30 {
            return Err(Error::Configuration(format!(
                "ciphertext modulus {q} exceeds the supported 2^30 bound"
            )));
        }
        if !is_odd_prime(p) {
            return Err(Error::Configuration(format!(
                "plaintext modulus {p} must be a small odd prime"
            )));
        }
        if q % p == 0 {
            return Err(Error::Configuration(format!(
                "moduli must be coprime, got p = {p}, q = {q}"
            )));
        }
        if d_f == 0 || d_g == 0 || d_r == 0 {
            return Err(Error::Configuration(
                "sampling weights must be nonzero".into(),
            ));
        }
        if 2 * d_f - 1 > n || 2 * d_g > n || 2 * d_r > n {
            return Err(Error::Configuration(format!(
                "sampling weights exceed ring degree {n}"
            )));
        }
        // Decryption margin: |p·(r*g) + f*m| must stay below q/2 so centering
        // recovers the exact integer value.
        let margin = 2 * p as u64 * d_r.min(d_g) as u64 + 2 * d_f as u64;
        if margin >= q as u64 / 2 {
            return Err(Error::Configuration(format!(
                "weights too large for modulus {q}: decryption noise bound {margin} >= q/2"
            )));
        }
        Ok(Params { n, q, p, d_f, d_g, d_r })
    }

    /// Interoperability default: `n = 1024, q = 65537, p = 3`.
    pub fn recommended() -> Self {
        Params {
            n: 1024,
            q: 65537,
            p: 3,
            d_f: 341,
            d_g: 341,
            d_r: 341,
        }
    }

    /// Plaintext capacity in bytes (one bit per coefficient).
    pub fn max_message_bytes(&self) -> usize {
        self.n / 8
    }
}

fn is_odd_prime(m: u32) -> bool {
    if m < 3 || m % 2 == 0 {
        return false;
    }
    let mut d = 3u32;
    while (d as u64) * (d as u64) <= m as u64 {
        if m % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
