//! Ring elements and arithmetic over `(Z/qZ)[x] / (x^n - 1)`.
//!
//! Coefficients are stored as `i64`. Stored values (keys, ciphertexts) are
//! kept reduced into `[0, q)`; signed coefficients appear only in ternary
//! polynomials and in centered decryption intermediates.

use zeroize::Zeroize;

/// A polynomial in the quotient ring, always exactly `n` coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct RingElement {
    pub coeffs: Vec<i64>,
}

impl RingElement {
    /// The zero element of degree `n`.
    pub fn zero(n: usize) -> Self {
        RingElement { coeffs: vec![0; n] }
    }

    /// The multiplicative identity: coefficient 1 at position 0.
    pub fn identity(n: usize) -> Self {
        let mut coeffs = vec![0; n];
        coeffs[0] = 1;
        RingElement { coeffs }
    }

    pub fn from_coeffs(coeffs: Vec<i64>) -> Self {
        RingElement { coeffs }
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coordinate-wise sum reduced into `[0, q)`.
    pub fn add(&self, other: &RingElement, q: u32) -> RingElement {
        debug_assert_eq!(self.len(), other.len());
        let q = q as i64;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| (a + b).rem_euclid(q))
            .collect();
        RingElement { coeffs }
    }

    /// Cyclic convolution: `out[k] = Σ_{i+j ≡ k (mod n)} a[i]·b[j] (mod q)`.
    ///
    /// Naive O(n²) schoolbook form. This is the conformance contract: any
    /// faster substitute (NTT) must produce bit-identical reduced output.
    pub fn multiply(&self, other: &RingElement, q: u32) -> RingElement {
        debug_assert_eq!(self.len(), other.len());
        let n = self.len();
        let q = q as i64;
        let mut out = vec![0i64; n];
        for (i, &ai) in self.coeffs.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            let ai = ai.rem_euclid(q);
            for (j, &bj) in other.coeffs.iter().enumerate() {
                let mut k = i + j;
                if k >= n {
                    k -= n;
                }
                out[k] = (out[k] + ai * bj.rem_euclid(q)) % q;
            }
        }
        RingElement { coeffs: out }
    }

    /// Multiply every coefficient by a scalar, reduced into `[0, q)`.
    pub fn scalar_mul(&self, s: i64, q: u32) -> RingElement {
        let q = q as i64;
        let s = s.rem_euclid(q);
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| (c.rem_euclid(q) * s).rem_euclid(q))
            .collect();
        RingElement { coeffs }
    }

    /// Reduce every coefficient into `[0, q)`.
    pub fn reduce(&self, q: u32) -> RingElement {
        let q = q as i64;
        let coeffs = self.coeffs.iter().map(|c| c.rem_euclid(q)).collect();
        RingElement { coeffs }
    }

    /// Lift coefficients from `[0, q)` into the symmetric range `(-q/2, q/2]`.
    ///
    /// Decryption intermediate only; never applied to stored keys or
    /// ciphertexts.
    pub fn center(&self, q: u32) -> RingElement {
        let q = q as i64;
        let half = q / 2;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| {
                let c = c.rem_euclid(q);
                if c > half {
                    c - q
                } else {
                    c
                }
            })
            .collect();
        RingElement { coeffs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q: u32 = 65537;

    fn elem(coeffs: &[i64], n: usize) -> RingElement {
        let mut v = coeffs.to_vec();
        v.resize(n, 0);
        RingElement::from_coeffs(v)
    }

    #[test]
    fn add_reduces_mod_q() {
        let a = elem(&[Q as i64 - 1, 5], 16);
        let b = elem(&[2, -6], 16);
        let sum = a.add(&b, Q);
        assert_eq!(sum.coeffs[0], 1);
        assert_eq!(sum.coeffs[1], Q as i64 - 1);
    }

    #[test]
    fn multiply_matches_hand_expansion() {
        // (1 + x)^2 = 1 + 2x + x^2
        let a = elem(&[1, 1], 16);
        let c = a.multiply(&a, Q);
        assert_eq!(&c.coeffs[..4], &[1, 2, 1, 0]);
    }

    #[test]
    fn multiply_wraps_cyclically() {
        // x^(n-1) * x = x^n = 1 in the cyclic ring.
        let n = 16;
        let mut a = RingElement::zero(n);
        a.coeffs[n - 1] = 1;
        let mut b = RingElement::zero(n);
        b.coeffs[1] = 1;
        let c = a.multiply(&b, Q);
        assert_eq!(c, RingElement::identity(n));
    }

    #[test]
    fn multiply_commutes() {
        let a = elem(&[3, 0, 7, 1, 9], 32);
        let b = elem(&[5, 2, 0, 0, 4, 11], 32);
        assert_eq!(a.multiply(&b, Q), b.multiply(&a, Q));
    }

    #[test]
    fn multiply_distributes_over_add() {
        let a = elem(&[3, 1, 4, 1, 5], 32);
        let b = elem(&[2, 7, 1, 8], 32);
        let c = elem(&[9, 0, 0, 3, 6], 32);
        let lhs = a.multiply(&b.add(&c, Q), Q);
        let rhs = a.multiply(&b, Q).add(&a.multiply(&c, Q), Q);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn identity_is_neutral() {
        let a = elem(&[12, 99, 3], 16);
        assert_eq!(a.multiply(&RingElement::identity(16), Q), a.reduce(Q));
    }

    #[test]
    fn center_maps_into_symmetric_range() {
        let a = elem(&[0, 1, 32768, 32769, 65536], 16);
        let c = a.center(Q);
        assert_eq!(&c.coeffs[..5], &[0, 1, 32768, -32768, -1]);
    }
}
