//! `lwe-hash` -- SHAKE-256 adapters for the toy LWE handshake.
//!
//! Every derivation in the handshake goes through one extendable-output
//! function, absorbed over an ordered list of byte parts:
//!
//! | Derivation     | Absorbed input           | Squeezed length     |
//! |----------------|--------------------------|---------------------|
//! | shared secret  | `ser(u) || ser(v)`       | 16 bytes            |
//! | stream pad     | `ss || "key"`            | message length      |

#![deny(unsafe_code)]

pub use sha3::digest::XofReader;
use sha3::{
    Shake256,
    digest::{ExtendableOutput, Update},
};

/// SHAKE-256 block size in bytes.
pub const SHAKE256_RATE: usize = 136;

/// `SHAKE-256(input)`, squeezed to fill `output`.
#[inline]
pub fn shake256(input: impl AsRef<[u8]>, output: &mut [u8]) {
    Shake256::digest_xof(input, output);
}

/// Absorbs `parts` in order and returns the squeeze side of the sponge.
///
/// Absorbing `[a, b]` is identical to absorbing the single buffer `a || b`.
#[must_use]
pub fn shake256_xof<I>(parts: I) -> impl XofReader
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>, {
    let mut h = Shake256::default();
    for part in parts {
        h.update(part.as_ref());
    }
    h.finalize_xof()
}

/// `SHAKE-256(parts[0] || parts[1] || ...)` -> `LEN` bytes.
#[must_use]
pub fn shake256_array<const LEN: usize, I>(parts: I) -> [u8; LEN]
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>, {
    let mut out = [0u8; LEN];
    shake256_xof(parts).read(&mut out);
    out
}

/// `SHAKE-256(key || label)` squeezed to fill `output`.
pub fn keyed_stream(key: impl AsRef<[u8]>, label: impl AsRef<[u8]>, output: &mut [u8]) {
    shake256_xof([key.as_ref(), label.as_ref()]).read(output);
}
