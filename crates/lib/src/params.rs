//! Handshake parameters and fixed sizes.
//!
//! `Params` is the only configuration value in the crate. It is validated on
//! construction, including when deserialised, so every operation downstream
//! can assume `n >= 1`, `2 <= q <= MAX_Q` and a finite, non-negative
//! noise scale.

use core::ops::RangeInclusive;

pub use lwe_math::{INT_BYTES, MAX_Q};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Size in bytes of a derived shared secret.
pub const SSBYTES: usize = 16;

/// Domain-separation tag appended to the shared secret for the stream pad.
pub const PAD_LABEL: &[u8] = b"key";

/// Dimensions the presentation layer can plot.
pub const VISUAL_DIMENSIONS: RangeInclusive<usize> = 2..=5;

/// Lattice dimension, modulus and noise scale for one handshake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParams")]
pub struct Params {
    n: usize,
    q: u64,
    noise_scale: f64,
}

#[derive(Deserialize)]
struct RawParams {
    n: usize,
    q: u64,
    noise_scale: f64,
}

impl TryFrom<RawParams> for Params {
    type Error = Error;

    fn try_from(raw: RawParams) -> Result<Self> {
        Self::new(raw.n, raw.q, raw.noise_scale)
    }
}

impl Params {
    /// Validate and build a parameter set.
    pub fn new(n: usize, q: u64, noise_scale: f64) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidDimension(n));
        }
        if !(2..=MAX_Q).contains(&q) {
            return Err(Error::InvalidModulus(q));
        }
        if !noise_scale.is_finite() || noise_scale < 0.0 {
            return Err(Error::InvalidNoiseScale(noise_scale));
        }
        Ok(Self { n, q, noise_scale })
    }

    #[inline]
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub const fn q(&self) -> u64 {
        self.q
    }

    #[inline]
    #[must_use]
    pub const fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Same parameters with `n` clamped into [`VISUAL_DIMENSIONS`].
    #[must_use]
    pub fn clamp_dimension(self) -> Self {
        Self {
            n: self.n.clamp(*VISUAL_DIMENSIONS.start(), *VISUAL_DIMENSIONS.end()),
            ..self
        }
    }

    /// Same parameters with a different noise scale.
    pub fn with_noise_scale(self, noise_scale: f64) -> Result<Self> {
        Self::new(self.n, self.q, noise_scale)
    }
}

impl Default for Params {
    /// `n = 3`, `q = 101`, `noise_scale = 0.05`.
    fn default() -> Self {
        Self {
            n: 3,
            q: 101,
            noise_scale: 0.05,
        }
    }
}
