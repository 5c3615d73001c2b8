//! One full handshake with every intermediate value kept for display.
//!
//! A [`Session`] owns the parameters and the random generator, so a caller
//! (a web handler, a test, a benchmark) runs the whole flow with one call
//! and no global state:
//!
//! 1. generate `(A, s, b)`
//! 2. sample `r` and encapsulate: `(u, v)`, `ss_alice`
//! 3. decapsulate: `v'`, `ss_bob`
//! 4. encrypt the message under `ss_alice`; if the secrets agree, decrypt
//!    it under `ss_bob`

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use lwe_math::{Vector, reduce};

use crate::{
    Error, Result, codec, kem,
    params::Params,
    types::{Ciphertext, PublicKey, SharedSecret},
};

/// Everything one handshake produced.
#[derive(Debug, Clone, Serialize)]
pub struct HandshakeReport {
    pub params: Params,
    pub public_key: PublicKey,
    /// `A s mod q`, the lattice point before noise.
    pub clean_point: Vector,
    pub ciphertext: Ciphertext,
    pub v_prime: u64,
    /// Distance between `v` and `v'` on the ring; zero iff they are equal.
    pub v_distance: u64,
    #[serde(serialize_with = "serialize_secret")]
    pub ss_alice: SharedSecret,
    #[serde(serialize_with = "serialize_secret")]
    pub ss_bob: SharedSecret,
    /// Both sides derived the same secret.
    pub success: bool,
    pub message_ciphertext: Vec<u8>,
    /// The message as decrypted under `ss_bob`; only attempted on success.
    #[serde(serialize_with = "serialize_recovery")]
    pub decrypted: Result<String>,
}

fn serialize_secret<S: Serializer>(
    ss: &SharedSecret, serializer: S,
) -> core::result::Result<S::Ok, S::Error> {
    ss.as_bytes().serialize(serializer)
}

fn serialize_recovery<S: Serializer>(
    outcome: &Result<String>, serializer: S,
) -> core::result::Result<S::Ok, S::Error> {
    match outcome {
        Ok(text) => serializer.serialize_newtype_variant("Recovery", 0, "plaintext", text),
        Err(e) => serializer.serialize_newtype_variant("Recovery", 1, "error", &e.to_string()),
    }
}

/// Session-scoped context: parameters plus an owned generator.
#[derive(Debug, Clone)]
pub struct Session<R> {
    params: Params,
    rng: R,
}

impl Session<ChaCha20Rng> {
    /// Generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy(params: Params) -> Self {
        Self::new(params, ChaCha20Rng::from_entropy())
    }

    /// Reproducible generator for tests and demos.
    #[must_use]
    pub fn with_seed(params: Params, seed: u64) -> Self {
        Self::new(params, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    #[must_use]
    pub const fn new(params: Params, rng: R) -> Self {
        Self { params, rng }
    }

    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Run keygen, encapsulation, decapsulation and the message exchange.
    ///
    /// A secret mismatch is reported through `success`, not as an error;
    /// only invalid inputs make this fail.
    pub fn handshake(&mut self, message: &str) -> Result<HandshakeReport> {
        let params = self.params;
        let q = params.q();

        let keypair = kem::keypair(&params, &mut self.rng)?;
        let alice = kem::encapsulate_fresh(&keypair.public, &params, &mut self.rng)?;
        let bob = kem::decapsulate(&keypair.public, &keypair.secret, &alice.ciphertext, q)?;

        let success = alice.shared_secret == bob.shared_secret;
        let v = alice.ciphertext.v();

        let message_ciphertext = codec::encrypt(&alice.shared_secret, message.as_bytes());
        let decrypted = if success {
            codec::decrypt_utf8(&bob.shared_secret, &message_ciphertext)
        } else {
            Err(Error::SecretMismatch)
        };
        debug!(len = message.len(), recovered = decrypted.is_ok(), "message exchanged");
        info!(n = params.n(), q, noise_scale = params.noise_scale(), success, "handshake complete");

        Ok(HandshakeReport {
            params,
            clean_point: keypair.clean_point(q),
            public_key: keypair.public,
            ciphertext: alice.ciphertext,
            v_prime: bob.v_prime,
            v_distance: reduce::circular_distance(v, bob.v_prime, q),
            ss_alice: alice.shared_secret,
            ss_bob: bob.shared_secret,
            success,
            message_ciphertext,
            decrypted,
        })
    }

    /// Fraction of `trials` independent handshakes whose secrets matched.
    pub fn success_rate(&mut self, trials: usize) -> Result<f64> {
        success_rate(&self.params, trials, &mut self.rng)
    }
}

/// Fraction of `trials` independent keygen + encapsulate + decapsulate
/// runs whose two shared secrets matched. Returns `0.0` for zero trials.
pub fn success_rate(params: &Params, trials: usize, rng: &mut impl Rng) -> Result<f64> {
    if trials == 0 {
        return Ok(0.0);
    }
    let mut matched = 0usize;
    for _ in 0..trials {
        let keypair = kem::keypair(params, rng)?;
        let enc = kem::encapsulate_fresh(&keypair.public, params, rng)?;
        let dec = kem::decapsulate(&keypair.public, &keypair.secret, &enc.ciphertext, params.q())?;
        if enc.shared_secret == dec.shared_secret {
            matched += 1;
        }
    }
    let rate = matched as f64 / trials as f64;
    debug!(trials, matched, rate, noise_scale = params.noise_scale(), "measured success rate");
    Ok(rate)
}

impl HandshakeReport {
    /// `true` when the decrypted text equals `message`.
    #[must_use]
    pub fn recovered(&self, message: &str) -> bool {
        matches!(&self.decrypted, Ok(text) if text == message)
    }

    /// Why the message was not recovered, if it was not.
    #[must_use]
    pub fn decode_error(&self) -> Option<&Error> {
        self.decrypted.as_ref().err()
    }
}
