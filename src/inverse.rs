//! Multiplicative inversion in `(Z/mZ)[x] / (x^n - 1)`.
//!
//! Odd prime moduli go through a polynomial extended Euclidean algorithm
//! over the field Z_m. Power-of-two moduli invert over GF(2) first and
//! Hensel-lift the result (the classic NTRU route for q = 2^k).

use crate::error::{Error, Result};
use crate::poly::RingElement;

/// Compute `b` with `a · b ≡ 1` in `(Z/mZ)[x] / (x^n - 1)`.
///
/// Returns [`Error::NotInvertible`] when `a` shares a factor with `x^n - 1`
/// under `m` (key generation treats that as a resample signal).
pub fn invert(a: &RingElement, modulus: u32) -> Result<RingElement> {
    if modulus > 1 << 30 {
        return Err(Error::Configuration(format!(
            "inversion modulus {modulus} exceeds the supported 2^30 bound"
        )));
    }
    if modulus.is_power_of_two() && modulus >= 2 {
        invert_pow2(a, modulus)
    } else if is_odd_prime(modulus) {
        invert_prime(a, modulus)
    } else {
        Err(Error::Configuration(format!(
            "inversion modulus {modulus} must be an odd prime or a power of two"
        )))
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

/// Extended Euclid over Z_m[x] against `x^n - 1`, m an odd prime.
fn invert_prime(a: &RingElement, m: u32) -> Result<RingElement> {
    let n = a.len();
    let mi = m as i64;

    // r0 = x^n - 1, r1 = a reduced mod m, invariant t_k·a ≡ r_k (mod x^n - 1).
    let mut r0 = vec![0i64; n + 1];
    r0[0] = mi - 1;
    r0[n] = 1;
    let mut r1: Vec<i64> = a.coeffs.iter().map(|c| c.rem_euclid(mi)).collect();
    let mut t0 = vec![0i64];
    let mut t1 = vec![1i64];

    loop {
        match degree(&r1) {
            // Remainder vanished before reaching a constant: gcd has
            // positive degree, no inverse exists.
            None => return Err(Error::NotInvertible(m)),
            Some(0) => break,
            Some(_) => {
                let (quot, rem) = divmod(&r0, &r1, mi)?;
                r0 = std::mem::replace(&mut r1, rem);
                let qt1 = mul_trim(&quot, &t1, mi);
                let next = sub_mod(&t0, &qt1, mi);
                t0 = std::mem::replace(&mut t1, next);
            }
        }
    }

    // Scale by the inverse of the residual constant.
    let c_inv = scalar_inverse(r1[0], mi).ok_or(Error::NotInvertible(m))?;
    let mut out = vec![0i64; n];
    for (i, &c) in t1.iter().enumerate() {
        let k = i % n;
        out[k] = (out[k] + c * c_inv) % mi;
    }
    Ok(RingElement::from_coeffs(out))
}

/// Invert modulo a power of two by lifting the GF(2) inverse: each Newton
/// step `v ← v·(2 - a·v)` doubles the number of correct bits.
fn invert_pow2(a: &RingElement, q: u32) -> Result<RingElement> {
    let base = invert_prime(a, 2).map_err(|_| Error::NotInvertible(q))?;
    let mut v = base;
    let mut bits = 1u32;
    while (1u64 << bits) < q as u64 {
        let av = a.multiply(&v, q);
        let two = RingElement::from_coeffs(
            av.coeffs.iter().map(|c| (2 - c).rem_euclid(q as i64)).collect(),
        );
        v = v.multiply(&two, q);
        bits *= 2;
    }
    Ok(v.reduce(q))
}

/// Degree of the highest nonzero coefficient, `None` for the zero polynomial.
fn degree(p: &[i64]) -> Option<usize> {
    p.iter().rposition(|&c| c != 0)
}

/// Polynomial long division over Z_m, m prime. Fails only when the divisor's
/// leading coefficient is not a unit (cannot happen for prime m and a
/// nonzero divisor, kept as a guard).
fn divmod(num: &[i64], den: &[i64], m: i64) -> Result<(Vec<i64>, Vec<i64>)> {
    let dd = degree(den).ok_or(Error::NotInvertible(m as u32))?;
    let lead_inv =
        scalar_inverse(den[dd], m).ok_or(Error::NotInvertible(m as u32))?;
    let mut rem: Vec<i64> = num.to_vec();
    let dn = match degree(&rem) {
        Some(d) if d >= dd => d,
        _ => return Ok((vec![0], rem)),
    };
    let mut quot = vec![0i64; dn - dd + 1];
    for k in (0..=dn - dd).rev() {
        let coeff = (rem[dd + k] * lead_inv) % m;
        if coeff == 0 {
            continue;
        }
        quot[k] = coeff;
        for (i, &dc) in den.iter().enumerate().take(dd + 1) {
            rem[i + k] = (rem[i + k] - coeff * dc).rem_euclid(m);
        }
    }
    Ok((quot, rem))
}

fn mul_trim(a: &[i64], b: &[i64], m: i64) -> Vec<i64> {
    let mut out = vec![0i64; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] = (out[i + j] + ai * bj) % m;
        }
    }
    out
}

fn sub_mod(a: &[i64], b: &[i64], m: i64) -> Vec<i64> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let av = a.get(i).copied().unwrap_or(0);
            let bv = b.get(i).copied().unwrap_or(0);
            (av - bv).rem_euclid(m)
        })
        .collect()
}

/// Inverse of a scalar modulo prime m via Fermat's little theorem.
fn scalar_inverse(c: i64, m: i64) -> Option<i64> {
    let c = c.rem_euclid(m);
    if c == 0 {
        return None;
    }
    Some(powmod(c, (m - 2) as u64, m))
}

fn powmod(base: i64, mut exp: u64, m: i64) -> i64 {
    let mut result = 1i64;
    let mut b = base.rem_euclid(m);
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    result
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
    fn inverts_fixture_mod_prime() {
        // 1 + x + x^2 shares no cyclotomic factor with x^16 - 1.
        let a = elem(&[1, 1, 1], 16);
        let inv = invert(&a, Q).unwrap();
        assert_eq!(a.multiply(&inv, Q), RingElement::identity(16));
    }

    #[test]
    fn identity_is_self_inverse() {
        let id = RingElement::identity(16);
        assert_eq!(invert(&id, Q).unwrap(), id);
    }

    #[test]
    fn rejects_known_non_unit() {
        // x - 1 divides x^n - 1 under every modulus.
        let a = elem(&[-1, 1], 16);
        assert!(matches!(invert(&a, Q), Err(Error::NotInvertible(Q))));
    }

    #[test]
    fn rejects_zero() {
        assert!(invert(&RingElement::zero(16), Q).is_err());
    }

    #[test]
    fn rejects_balanced_ternary_mod_p() {
        // 1 + x + x^2 evaluates to 0 at x = 1 mod 3, so it picks up the
        // (x - 1) factor there even though it is a unit mod 65537.
        let a = elem(&[1, 1, 1], 16);
        assert!(matches!(invert(&a, 3), Err(Error::NotInvertible(3))));
    }

    #[test]
    fn hensel_lift_mod_power_of_two() {
        // x^2 + x + 1 is coprime with (x - 1)^16 over GF(2), so the GF(2)
        // inverse exists and lifts all the way to 2^11.
        let a = elem(&[1, 1, 1], 16);
        let inv = invert(&a, 2048).unwrap();
        assert_eq!(a.multiply(&inv, 2048), RingElement::identity(16));
    }

    #[test]
    fn even_weight_is_no_unit_mod_power_of_two() {
        // a(1) even means a is divisible by (x - 1) over GF(2).
        let a = elem(&[1, 1, 0, 1, 0, 0, 1], 16);
        assert!(matches!(invert(&a, 2048), Err(Error::NotInvertible(2048))));
    }
}
