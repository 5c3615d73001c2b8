//! Randomised sampling: uniform entries in `[0, q)` and truncated-normal noise.
//!
//! The generator is always passed in; nothing here owns RNG state.

use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

use crate::{Matrix, Vector, reduce};

/// Uniform vector of length `n` with entries in `[0, q)`.
pub fn uniform_vector(n: usize, q: u64, rng: &mut impl Rng) -> Vector {
    (0..n).map(|_| rng.gen_range(0..q)).collect()
}

/// Uniform `n x n` matrix with entries in `[0, q)`.
pub fn uniform_matrix(n: usize, q: u64, rng: &mut impl Rng) -> Matrix {
    Matrix::from_fn(n, |_, _| rng.gen_range(0..q))
}

/// Noise from `Normal(0, scale)`, quantised by truncation toward zero.
///
/// Truncation (not rounding) biases small samples to zero: with
/// `scale = 0.05` almost every draw lands in `(-1, 1)` and becomes `0`.
#[derive(Debug, Clone, Copy)]
pub struct NoiseSampler {
    normal: Option<Normal<f64>>,
    scale: f64,
}

impl NoiseSampler {
    /// `scale = 0` yields a sampler that always returns zero without
    /// touching the generator. Negative or non-finite scales are rejected.
    pub fn new(scale: f64) -> Result<Self, NormalError> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(NormalError::BadVariance);
        }
        if scale == 0.0 {
            return Ok(Self { normal: None, scale });
        }
        let normal = Normal::new(0.0, scale)?;
        Ok(Self { normal: Some(normal), scale })
    }

    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// One signed noise value: `trunc(x)` for `x ~ Normal(0, scale)`.
    pub fn sample_signed(&self, rng: &mut impl Rng) -> i64 {
        match &self.normal {
            // `as` truncates toward zero and saturates out-of-range floats.
            Some(normal) => normal.sample(rng) as i64,
            None => 0,
        }
    }

    /// One noise value reduced into `[0, q)`.
    pub fn sample(&self, q: u64, rng: &mut impl Rng) -> u64 {
        reduce::from_signed(self.sample_signed(rng), q)
    }

    /// `n` independent noise values reduced into `[0, q)`.
    pub fn sample_vector(&self, n: usize, q: u64, rng: &mut impl Rng) -> Vector {
        (0..n).map(|_| self.sample(q, rng)).collect()
    }
}
