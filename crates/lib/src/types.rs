//! Key, ciphertext and shared-secret types, plus the named results of each
//! handshake step.
//!
//! Secret types implement `ZeroizeOnDrop` and redact themselves in `Debug`.

use lwe_math::{Matrix, Vector};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::params::SSBYTES;

/// Public key `(A, b)` with `b = A s + e mod q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub(crate) a: Matrix,
    pub(crate) b: Vector,
}

impl PublicKey {
    /// The public matrix `A`.
    #[inline]
    #[must_use]
    pub const fn a(&self) -> &Matrix {
        &self.a
    }

    /// The noisy public vector `b`.
    #[inline]
    #[must_use]
    pub const fn b(&self) -> &Vector {
        &self.b
    }

    /// Lattice dimension `n`.
    #[inline]
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.a.dim()
    }
}

/// Secret vector `s`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) s: Vector,
}

impl SecretKey {
    #[inline]
    #[must_use]
    pub const fn s(&self) -> &Vector {
        &self.s
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.s.len()
    }
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecretKey")
            .field("dim", &self.s.len())
            .finish_non_exhaustive()
    }
}

/// Output of key generation.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public: PublicKey,
    pub secret: SecretKey,
}

impl KeyPair {
    /// The noiseless lattice point `A s mod q` that `b` perturbs.
    #[must_use]
    pub fn clean_point(&self, q: u64) -> Vector {
        self.public.a.mul_vec(&self.secret.s, q)
    }

    /// The noise actually added to `b`, as centered integers.
    #[must_use]
    pub fn noise(&self, q: u64) -> Vec<i64> {
        self.public.b.centered_diff(&self.clean_point(q), q)
    }
}

/// Ciphertext `(u, v)` sent from the encapsulating to the decapsulating side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    pub(crate) u: Vector,
    pub(crate) v: u64,
}

impl Ciphertext {
    /// Build from raw parts. No range check; `decapsulate` validates.
    #[must_use]
    pub const fn from_parts(u: Vector, v: u64) -> Self {
        Self { u, v }
    }

    #[inline]
    #[must_use]
    pub const fn u(&self) -> &Vector {
        &self.u
    }

    #[inline]
    #[must_use]
    pub const fn v(&self) -> u64 {
        self.v
    }
}

/// 16-byte shared secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    pub(crate) bytes: [u8; SSBYTES],
}

impl SharedSecret {
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SSBYTES] {
        &self.bytes
    }
}

impl From<&[u8; SSBYTES]> for SharedSecret {
    #[inline]
    fn from(arr: &[u8; SSBYTES]) -> Self {
        Self { bytes: *arr }
    }
}

impl From<[u8; SSBYTES]> for SharedSecret {
    #[inline]
    fn from(bytes: [u8; SSBYTES]) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for SharedSecret {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

/// Output of encapsulation: what is sent, and what the sender keeps.
#[derive(Debug, Clone)]
pub struct Encapsulation {
    pub ciphertext: Ciphertext,
    pub shared_secret: SharedSecret,
}

/// Output of decapsulation.
#[derive(Debug, Clone)]
pub struct Decapsulation {
    /// `v' = u^T s mod q`, the receiver's estimate of `v`.
    pub v_prime: u64,
    pub shared_secret: SharedSecret,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_redact_debug() {
        let sk = SecretKey { s: Vector::from([3, 4]) };
        let ss = SharedSecret::from([0xAB; SSBYTES]);
        assert_eq!(format!("{sk:?}"), "SecretKey { dim: 2, .. }");
        assert_eq!(format!("{ss:?}"), "SharedSecret { .. }");
    }

    #[test]
    fn zeroize_clears_secret_key() {
        let mut sk = SecretKey { s: Vector::from([3, 4]) };
        sk.zeroize();
        assert!(sk.s().iter().all(|&x| x == 0));
    }

    #[test]
    fn keypair_exposes_noise() {
        let kp = KeyPair {
            public: PublicKey {
                a: Matrix::identity(2),
                b: Vector::from([4, 100]),
            },
            secret: SecretKey { s: Vector::from([3, 1]) },
        };
        assert_eq!(kp.clean_point(101), Vector::from([3, 1]));
        assert_eq!(kp.noise(101), vec![1, -2]);
    }

    #[test]
    fn ciphertext_serde_shape() {
        let ct = Ciphertext::from_parts(Vector::from([1, 0]), 3);
        let json = serde_json::to_string(&ct).unwrap();
        assert_eq!(json, r#"{"u":[1,0],"v":3}"#);
        let back: Ciphertext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ct);
    }
}
