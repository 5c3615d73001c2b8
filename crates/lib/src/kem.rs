//! Key generation, encapsulation and decapsulation.
//!
//! Every entry point validates shapes and ranges before touching the
//! lattice equations in [`crate::pke`], then derives secrets through
//! [`crate::hash`].

use lwe_math::{Matrix, NoiseSampler, Vector, sample};
use rand::Rng;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::{
    Error, Result, hash,
    params::{MAX_Q, Params},
    pke,
    types::{
        Ciphertext, Decapsulation, Encapsulation, KeyPair, PublicKey, SecretKey, SharedSecret,
    },
};

fn noise_sampler(params: &Params) -> Result<NoiseSampler> {
    NoiseSampler::new(params.noise_scale())
        .map_err(|_| Error::InvalidNoiseScale(params.noise_scale()))
}

fn check_dim(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { what, expected, actual })
    }
}

fn check_reduced<'a>(
    what: &'static str, mut entries: impl Iterator<Item = &'a u64>, q: u64,
) -> Result<()> {
    match entries.find(|&&x| x >= q) {
        Some(&value) => Err(Error::OutOfRange { what, value, q }),
        None => Ok(()),
    }
}

fn check_public(pk: &PublicKey, q: u64) -> Result<()> {
    check_dim("b", pk.dim(), pk.b.len())?;
    check_reduced("A", pk.a.rows().flatten(), q)?;
    check_reduced("b", pk.b.iter(), q)
}

/// Uniform ephemeral vector `r` in `[0, q)^n` for one encapsulation.
pub fn sample_ephemeral(n: usize, q: u64, rng: &mut impl Rng) -> Vector {
    sample::uniform_vector(n, q, rng)
}

/// Generate `(A, s, b)` with `A`, `s` uniform and `b = A s + e mod q`.
pub fn keypair(params: &Params, rng: &mut impl Rng) -> Result<KeyPair> {
    let (n, q) = (params.n(), params.q());
    let a = sample::uniform_matrix(n, q, rng);
    let s = sample::uniform_vector(n, q, rng);
    keypair_from_parts(a, s, params, rng)
}

/// Build a keypair around a caller-chosen `A` and `s`; only the noise `e`
/// is random.
pub fn keypair_from_parts(
    a: Matrix, s: Vector, params: &Params, rng: &mut impl Rng,
) -> Result<KeyPair> {
    let q = params.q();
    check_dim("A", params.n(), a.dim())?;
    check_dim("s", params.n(), s.len())?;
    check_reduced("A", a.rows().flatten(), q)?;
    check_reduced("s", s.iter(), q)?;

    let noise = noise_sampler(params)?;
    let b = pke::public_vector(&a, &s, q, &noise, rng);
    debug!(n = params.n(), q, noise_scale = params.noise_scale(), "generated keypair");

    Ok(KeyPair {
        public: PublicKey { a, b },
        secret: SecretKey { s },
    })
}

/// Encapsulate against `pk` with caller-supplied ephemeral `r`.
///
/// Returns `(u, v)` for the peer and `ss = H(u || v)` for the sender.
pub fn encapsulate(
    pk: &PublicKey, r: &Vector, params: &Params, rng: &mut impl Rng,
) -> Result<Encapsulation> {
    let q = params.q();
    check_public(pk, q)?;
    check_dim("r", pk.dim(), r.len())?;
    check_reduced("r", r.iter(), q)?;

    let noise = noise_sampler(params)?;
    let (u, v) = pke::encrypt(&pk.a, &pk.b, r, q, &noise, rng);
    let shared_secret = SharedSecret::from(hash::shared_secret(&u, v));
    debug!(n = pk.dim(), q, "encapsulated");
    trace!(v, "encapsulation scalar");

    Ok(Encapsulation {
        ciphertext: Ciphertext { u, v },
        shared_secret,
    })
}

/// Encapsulate against `pk` with a freshly sampled `r`.
pub fn encapsulate_fresh(
    pk: &PublicKey, params: &Params, rng: &mut impl Rng,
) -> Result<Encapsulation> {
    let r = Zeroizing::new(sample_ephemeral(pk.dim(), params.q(), rng));
    encapsulate(pk, &r, params, rng)
}

/// Recover `v' = u^T s mod q` and derive `ss = H(u || v')`.
///
/// `ct.v` is not used: the secret depends on `u` and `s` only, so it equals
/// the sender's secret exactly when `v' == v`. `pk` is only consulted for
/// its dimension.
pub fn decapsulate(
    pk: &PublicKey, sk: &SecretKey, ct: &Ciphertext, q: u64,
) -> Result<Decapsulation> {
    if !(2..=MAX_Q).contains(&q) {
        return Err(Error::InvalidModulus(q));
    }
    check_dim("s", pk.dim(), sk.dim())?;
    check_dim("u", pk.dim(), ct.u.len())?;
    check_reduced("u", ct.u.iter(), q)?;

    let v_prime = pke::recover(&ct.u, &sk.s, q);
    let shared_secret = SharedSecret::from(hash::shared_secret(&ct.u, v_prime));
    debug!(n = pk.dim(), q, "decapsulated");
    trace!(v = ct.v, v_prime, "decapsulation scalar");

    Ok(Decapsulation { v_prime, shared_secret })
}
