//! Modular reduction into the canonical range `[0, q)`.
//!
//! Noise is sampled as a signed integer and may be negative, so the
//! reduction here is Euclidean: `-3 mod 101 = 98`, never `-3`.

/// Euclidean remainder of `a` modulo `q`, always in `[0, q)`.
///
/// Requires `2 <= q <= MAX_Q`.
#[inline]
#[must_use]
pub const fn from_signed(a: i64, q: u64) -> u64 {
    debug_assert!(q >= 2 && q <= crate::MAX_Q);
    a.rem_euclid(q as i64) as u64
}

/// Centered representative of `a`, with magnitude at most `q / 2`.
#[inline]
#[must_use]
pub const fn to_signed(a: u64, q: u64) -> i64 {
    if a <= q / 2 { a as i64 } else { -((q - a) as i64) }
}

/// `(a + b) mod q` for canonical inputs.
#[inline]
#[must_use]
pub const fn add(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 + b as u128) % q as u128) as u64
}

/// `(acc + a * b) mod q`, widened so no intermediate overflows.
#[inline]
#[must_use]
pub const fn mul_add(acc: u64, a: u64, b: u64, q: u64) -> u64 {
    ((acc as u128 + a as u128 * b as u128) % q as u128) as u64
}

/// Distance between `a` and `b` on the ring `Z_q` (wrapping around `q`).
#[inline]
#[must_use]
pub const fn circular_distance(a: u64, b: u64, q: u64) -> u64 {
    let d = if a >= b { a - b } else { b - a };
    if d > q - d { q - d } else { d }
}
