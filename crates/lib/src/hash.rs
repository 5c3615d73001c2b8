//! Keyed-hash derivations over SHAKE-256.
//!
//! Both sides of the handshake derive the shared secret from the same byte
//! string: `u` as consecutive 64-bit little-endian integers, then the
//! scalar (`v` on the sending side, `v'` on the receiving side) in the same
//! width. Any difference between `v` and `v'` therefore changes the secret.

use lwe_math::Vector;
use zeroize::Zeroizing;

use crate::params::{INT_BYTES, PAD_LABEL, SSBYTES};

/// Byte string absorbed for the shared secret: `ser(u) || ser(scalar)`.
#[must_use]
pub fn transcript(u: &Vector, scalar: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity((u.len() + 1) * INT_BYTES);
    u.write_le_bytes(&mut buf);
    buf.extend_from_slice(&scalar.to_le_bytes());
    buf
}

/// `ss = SHAKE-256(ser(u) || ser(scalar))` -> 16 bytes.
#[must_use]
pub fn shared_secret(u: &Vector, scalar: u64) -> [u8; SSBYTES] {
    lwe_hash::shake256_array([transcript(u, scalar)])
}

/// `pad = SHAKE-256(ss || "key")` -> `len` bytes.
#[must_use]
pub fn pad(ss: impl AsRef<[u8]>, len: usize) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; len]);
    lwe_hash::keyed_stream(ss, PAD_LABEL, &mut out);
    out
}
