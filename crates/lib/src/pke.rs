//! The lattice equations of the scheme, without any hashing.
//!
//! | Step    | Equation                         |
//! |---------|----------------------------------|
//! | keygen  | `b = A s + e mod q`              |
//! | encrypt | `u = A^T r + e1`, `v = b^T r + e2` |
//! | decrypt | `v' = u^T s mod q`               |
//!
//! Inputs are validated by [`crate::kem`]; functions here assume matching
//! dimensions and reduced entries.

use lwe_math::{Matrix, NoiseSampler, Vector};
use rand::Rng;

/// `b = A s + e mod q` with fresh noise `e`.
pub(crate) fn public_vector(
    a: &Matrix, s: &Vector, q: u64, noise: &NoiseSampler, rng: &mut impl Rng,
) -> Vector {
    let e = noise.sample_vector(a.dim(), q, rng);
    let mut b = a.mul_vec(s, q);
    b.add_assign_mod(&e, q);
    b
}

/// `(u, v) = (A^T r + e1 mod q, b^T r + e2 mod q)` with fresh `e1`, `e2`.
pub(crate) fn encrypt(
    a: &Matrix, b: &Vector, r: &Vector, q: u64, noise: &NoiseSampler, rng: &mut impl Rng,
) -> (Vector, u64) {
    let e1 = noise.sample_vector(a.dim(), q, rng);
    let e2 = noise.sample(q, rng);

    let mut u = a.transpose_mul_vec(r, q);
    u.add_assign_mod(&e1, q);
    let v = lwe_math::reduce::add(b.dot(r, q), e2, q);
    (u, v)
}

/// `v' = u^T s mod q`.
#[inline]
pub(crate) fn recover(u: &Vector, s: &Vector, q: u64) -> u64 {
    u.dot(s, q)
}
