//! Square integer matrices over `Z_q`, stored row-major.

use serde::{Deserialize, Serialize};

use crate::{Vector, reduce};

/// Rejected shape when building a [`Matrix`] from rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows at all.
    Empty,
    /// Row `row` has `len` entries instead of `expected`.
    NotSquare { row: usize, len: usize, expected: usize },
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => f.write_str("matrix has no rows"),
            Self::NotSquare { row, len, expected } => {
                write!(f, "row {row} has {len} entries, expected {expected}")
            }
        }
    }
}

impl core::error::Error for ShapeError {}

/// `n x n` matrix with entries in `[0, q)`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u64>>", try_from = "Vec<Vec<u64>>")]
pub struct Matrix {
    n: usize,
    entries: Vec<u64>,
}

impl Matrix {
    /// Build from `n` rows of `n` entries each.
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let n = rows.len();
        if n == 0 {
            return Err(ShapeError::Empty);
        }
        let mut entries = Vec::with_capacity(n * n);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != n {
                return Err(ShapeError::NotSquare { row, len: r.len(), expected: n });
            }
            entries.extend_from_slice(r);
        }
        Ok(Self { n, entries })
    }

    /// Build from a generator called as `f(row, col)`.
    #[must_use]
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> u64) -> Self {
        let mut entries = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                entries.push(f(i, j));
            }
        }
        Self { n, entries }
    }

    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, |i, j| u64::from(i == j))
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.entries[row * self.n + col]
    }

    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[u64] {
        &self.entries[i * self.n..(i + 1) * self.n]
    }

    /// Entries of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = u64> + '_ {
        (0..self.n).map(move |i| self.get(i, j))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.entries.chunks_exact(self.n.max(1))
    }

    /// True when every entry lies in `[0, q)`.
    #[must_use]
    pub fn is_reduced(&self, q: u64) -> bool {
        self.entries.iter().all(|&x| x < q)
    }

    /// `A * x mod q`.
    ///
    /// # Panics
    /// If `x.len() != self.dim()`.
    #[must_use]
    pub fn mul_vec(&self, x: &Vector, q: u64) -> Vector {
        assert_eq!(x.len(), self.n, "mul_vec: dimension mismatch");
        self.rows()
            .map(|row| {
                row.iter()
                    .zip(x)
                    .fold(0, |acc, (&a, &b)| reduce::mul_add(acc, a, b, q))
            })
            .collect()
    }

    /// `A^T * x mod q`, without materialising the transpose.
    ///
    /// # Panics
    /// If `x.len() != self.dim()`.
    #[must_use]
    pub fn transpose_mul_vec(&self, x: &Vector, q: u64) -> Vector {
        assert_eq!(x.len(), self.n, "transpose_mul_vec: dimension mismatch");
        (0..self.n)
            .map(|j| {
                self.column(j)
                    .zip(x)
                    .fold(0, |acc, (a, &b)| reduce::mul_add(acc, a, b, q))
            })
            .collect()
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.n, |i, j| self.get(j, i))
    }
}

impl TryFrom<Vec<Vec<u64>>> for Matrix {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Matrix> for Vec<Vec<u64>> {
    fn from(m: Matrix) -> Self {
        m.rows().map(<[u64]>::to_vec).collect()
    }
}

impl core::fmt::Debug for Matrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
