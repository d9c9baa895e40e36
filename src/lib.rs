//! NTRU-family post-quantum cryptographic engine.
//!
//! Exact modular polynomial-ring arithmetic over `(Z/qZ)[x] / (x^n - 1)`,
//! genuine extended-Euclidean ring inversion, deterministic byte ↔ ring
//! codec and CSPRNG-backed ternary sampling — the pieces a key pair,
//! encrypt/decrypt and an authentication tag need to stay bit-exact across
//! independently built devices.
//!
//! # ⚠️ WARNING: NOT PRODUCTION READY ⚠️
//!
//! This is a reference implementation. NOT audited, NOT constant-time in
//! the ring arithmetic, NOT safe against side-channel attacks.

pub mod params;
pub mod error;
pub mod poly;
pub mod sampling;
pub mod inverse;
pub mod keygen;
pub mod encoding;
pub mod encrypt;
pub mod decrypt;
pub mod sign;
pub mod serialize;
pub mod engine;

pub use engine::{Engine, MetricsDescriptor};
pub use error::{Error, Result};
pub use params::Params;
