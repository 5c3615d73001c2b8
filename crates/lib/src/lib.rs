//! `lwe-kem` -- A toy Learning-With-Errors key encapsulation, for teaching.
//!
//! Alice publishes `(A, b = A s + e)`. Bob picks `r` and sends
//! `(u, v) = (A^T r + e1, b^T r + e2)`, keeping `ss = H(u || v)`. Alice
//! recomputes `v' = u^T s` and derives `H(u || v')`. The two secrets agree
//! only when the accumulated noise cancels exactly, so the handshake is
//! probabilistic and offers no security at the dimensions it targets.
//!
//! A shared secret then keys a SHAKE-256 stream pad for short text
//! messages; see [`codec`].

#![deny(unsafe_code)]

pub mod codec;
pub mod error;
pub mod hash;
pub mod kem;
pub mod params;
mod pke;
pub mod session;
pub mod types;

pub use codec::{decrypt, decrypt_utf8, derive_pad, encrypt};
pub use error::{Error, Result};
pub use kem::{
    decapsulate, encapsulate, encapsulate_fresh, keypair, keypair_from_parts, sample_ephemeral,
};
pub use lwe_math as math;
pub use params::Params;
pub use session::{HandshakeReport, Session, success_rate};
pub use types::{
    Ciphertext, Decapsulation, Encapsulation, KeyPair, PublicKey, SecretKey, SharedSecret,
};
