//! Error type for the handshake API.
//!
//! Precondition violations fail fast. An undecodable decrypted message is
//! its own variant so callers can report it without aborting. A handshake
//! whose two sides derive different secrets is *not* an error; see
//! [`crate::session::HandshakeReport::success`].

use std::string::FromUtf8Error;

use thiserror::Error;

/// Result alias used throughout `lwe-kem`.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Lattice dimension must be at least 1.
    #[error("invalid dimension {0}: must be at least 1")]
    InvalidDimension(usize),

    /// Modulus outside `2..=MAX_Q`.
    #[error("invalid modulus {0}: must be in 2..=i64::MAX")]
    InvalidModulus(u64),

    /// Noise scale negative, infinite or NaN.
    #[error("invalid noise scale {0}: must be finite and non-negative")]
    InvalidNoiseScale(f64),

    /// An input's length does not match the lattice dimension.
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An input entry is not reduced modulo `q`.
    #[error("{what} entry {value} is outside [0, {q})")]
    OutOfRange { what: &'static str, value: u64, q: u64 },

    /// A matrix supplied by the caller is not square.
    #[error("malformed matrix: {0}")]
    Shape(#[from] lwe_math::ShapeError),

    /// The two sides derived different secrets, so the message was not
    /// decrypted. Only ever stored in a handshake report.
    #[error("shared secrets differ; message not decrypted")]
    SecretMismatch,

    /// Decrypted bytes are not valid UTF-8; the plaintext cannot be recovered as text.
    #[error("plaintext not recoverable: {0}")]
    PlaintextNotRecoverable(#[from] FromUtf8Error),
}
