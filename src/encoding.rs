//! Message codec: bytes ↔ ring elements, one bit per coefficient.

use crate::error::{Error, Result};
use crate::poly::RingElement;

/// Encode a byte message into a ring element of degree `n`.
///
/// Messages longer than `n/8` bytes are rejected, never truncated. Shorter
/// messages are zero-padded to the full capacity; each byte unpacks
/// LSB-first into eight consecutive coefficients.
pub fn encode(message: &[u8], n: usize) -> Result<RingElement> {
    let max = n / 8;
    if message.len() > max {
        return Err(Error::MessageTooLarge {
            len: message.len(),
            max,
        });
    }
    let mut coeffs = vec![0i64; n];
    for (i, &byte) in message.iter().enumerate() {
        for b in 0..8 {
            coeffs[i * 8 + b] = ((byte >> b) & 1) as i64;
        }
    }
    Ok(RingElement::from_coeffs(coeffs))
}

/// Decode a ring element back into bytes, stripping the trailing
/// zero-padding. Best-effort: coefficients are reduced mod `modulus` and
/// anything other than 1 reads as a 0 bit, so garbage from a key or modulus
/// mismatch degrades instead of erroring.
pub fn decode(element: &RingElement, modulus: u32) -> Vec<u8> {
    let n = element.len();
    let m = modulus as i64;
    let mut bytes = vec![0u8; n / 8];
    for (i, byte) in bytes.iter_mut().enumerate() {
        for b in 0..8 {
            if element.coeffs[i * 8 + b].rem_euclid(m) == 1 {
                *byte |= 1 << b;
            }
        }
    }
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    bytes
}
