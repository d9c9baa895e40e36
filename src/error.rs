//! Error types for the engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameters at construction or sampling.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Plaintext does not fit into the ring.
    #[error("message of {len} bytes exceeds ring capacity of {max} bytes")]
    MessageTooLarge { len: usize, max: usize },

    /// The polynomial is not a unit in the quotient ring under this modulus.
    #[error("polynomial has no inverse modulo {0}")]
    NotInvertible(u32),

    /// Resample budget exhausted without finding an invertible private polynomial.
    #[error("key generation exhausted {0} attempts")]
    KeyGeneration(u32),

    /// Malformed wire encoding (bad hex, wrong length).
    #[error("malformed {what}: {reason}")]
    Encoding { what: &'static str, reason: String },

    /// Facade wrapper carrying the operation name for the calling layer.
    #[error("{op} failed: {source}")]
    Operation {
        op: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error with the facade operation it occurred in.
    pub(crate) fn in_op(self, op: &'static str) -> Error {
        Error::Operation {
            op,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
