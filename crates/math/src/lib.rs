//! `lwe-math` -- Integer lattice arithmetic over `Z_q` for the toy LWE handshake.
//!
//! Dense `n x n` matrices and length-`n` vectors with entries kept in
//! `[0, q)`, Euclidean reduction of signed noise, and the two samplers the
//! scheme needs: uniform entries and truncated-normal noise.
//!
//! Dimensions are tiny (the demo uses `n <= 5`), so everything is plain
//! `Vec<u64>` storage with `u128` intermediates; no NTT, no SIMD.

#![deny(unsafe_code)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

pub mod matrix;
pub mod reduce;
pub mod sample;
pub mod vector;

pub use matrix::{Matrix, ShapeError};
pub use sample::NoiseSampler;
pub use vector::Vector;

/// Width in bytes of one serialised integer (64-bit little-endian).
pub const INT_BYTES: usize = 8;

/// Largest supported modulus; reductions go through `i64`.
pub const MAX_Q: u64 = i64::MAX as u64;
