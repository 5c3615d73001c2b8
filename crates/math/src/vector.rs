//! Length-`n` integer vectors over `Z_q`.

use core::ops;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::{INT_BYTES, reduce};

/// Column vector with entries in `[0, q)`.
///
/// The modulus is not stored; every arithmetic method takes `q` explicitly
/// so the same type serves `s`, `b`, `r`, `u` and the noise vectors.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Zeroize)]
#[serde(transparent)]
pub struct Vector(pub(crate) Vec<u64>);

impl Vector {
    /// All-zero vector of length `n`.
    #[must_use]
    pub fn zero(n: usize) -> Self {
        Self(vec![0; n])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }

    /// True when every entry lies in `[0, q)`.
    #[must_use]
    pub fn is_reduced(&self, q: u64) -> bool {
        self.0.iter().all(|&x| x < q)
    }

    /// Inner product `self^T * other mod q`.
    ///
    /// # Panics
    /// If the lengths differ.
    #[must_use]
    pub fn dot(&self, other: &Self, q: u64) -> u64 {
        assert_eq!(self.len(), other.len(), "dot: length mismatch");
        self.0
            .iter()
            .zip(&other.0)
            .fold(0, |acc, (&a, &b)| reduce::mul_add(acc, a, b, q))
    }

    /// In-place `self = (self + other) mod q`.
    ///
    /// # Panics
    /// If the lengths differ.
    pub fn add_assign_mod(&mut self, other: &Self, q: u64) {
        assert_eq!(self.len(), other.len(), "add: length mismatch");
        for (a, &b) in self.0.iter_mut().zip(&other.0) {
            *a = reduce::add(*a, b, q);
        }
    }

    /// Entry-wise centered difference `self - other`, each in `[-(q/2), q/2]`.
    #[must_use]
    pub fn centered_diff(&self, other: &Self, q: u64) -> Vec<i64> {
        assert_eq!(self.len(), other.len(), "diff: length mismatch");
        self.0
            .iter()
            .zip(&other.0)
            .map(|(&a, &b)| reduce::to_signed(reduce::add(a, q - b, q), q))
            .collect()
    }

    /// Serialise as consecutive 64-bit little-endian integers.
    ///
    /// Entries are below `MAX_Q`, so this is also their `i64` two's
    /// complement encoding.
    pub fn write_le_bytes(&self, out: &mut Vec<u8>) {
        out.reserve(self.len() * INT_BYTES);
        for &x in &self.0 {
            out.extend_from_slice(&x.to_le_bytes());
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, u64> {
        self.0.iter()
    }
}

impl From<Vec<u64>> for Vector {
    #[inline]
    fn from(entries: Vec<u64>) -> Self {
        Self(entries)
    }
}

impl<const N: usize> From<[u64; N]> for Vector {
    #[inline]
    fn from(entries: [u64; N]) -> Self {
        Self(entries.to_vec())
    }
}

impl FromIterator<u64> for Vector {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[u64]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl ops::Index<usize> for Vector {
    type Output = u64;

    #[inline]
    fn index(&self, i: usize) -> &u64 {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a u64;
    type IntoIter = core::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl core::fmt::Debug for Vector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}
