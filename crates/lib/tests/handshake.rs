//! End-to-end handshake checks through the public API.

use lwe_kem::{
    Ciphertext, Error, Params, Session, decapsulate, decrypt, encapsulate, encapsulate_fresh,
    encrypt, keypair, keypair_from_parts,
    math::{Matrix, Vector},
    success_rate,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

#[test]
fn identity_lattice_example() {
    let params = Params::new(2, 101, 0.0).unwrap();
    let kp = keypair_from_parts(Matrix::identity(2), Vector::from([3, 4]), &params, &mut rng(0))
        .unwrap();
    assert_eq!(kp.public.b(), &Vector::from([3, 4]));

    let enc = encapsulate(&kp.public, &Vector::from([1, 0]), &params, &mut rng(1)).unwrap();
    assert_eq!(enc.ciphertext.u(), &Vector::from([1, 0]));
    assert_eq!(enc.ciphertext.v(), 3);

    let dec = decapsulate(&kp.public, &kp.secret, &enc.ciphertext, 101).unwrap();
    assert_eq!(dec.v_prime, 3);
    assert_eq!(enc.shared_secret, dec.shared_secret);
}

#[test]
fn noiseless_roundtrip_across_dimensions() {
    let mut rng = rng(2);
    for n in 1..=8 {
        for q in [2, 17, 101, 7681] {
            let params = Params::new(n, q, 0.0).unwrap();
            let kp = keypair(&params, &mut rng).unwrap();
            let enc = encapsulate_fresh(&kp.public, &params, &mut rng).unwrap();
            let dec = decapsulate(&kp.public, &kp.secret, &enc.ciphertext, q).unwrap();
            assert_eq!(enc.ciphertext.v(), dec.v_prime, "n = {n}, q = {q}");
            assert_eq!(enc.shared_secret, dec.shared_secret, "n = {n}, q = {q}");
        }
    }
}

#[test]
fn outputs_are_reduced() {
    let params = Params::new(5, 97, 4.0).unwrap();
    let mut rng = rng(3);
    for _ in 0..100 {
        let kp = keypair(&params, &mut rng).unwrap();
        assert!(kp.public.a().is_reduced(97));
        assert!(kp.public.b().is_reduced(97));
        assert!(kp.secret.s().is_reduced(97));

        let enc = encapsulate_fresh(&kp.public, &params, &mut rng).unwrap();
        assert_eq!(enc.ciphertext.u().len(), 5);
        assert!(enc.ciphertext.u().is_reduced(97));
        assert!(enc.ciphertext.v() < 97);

        let dec = decapsulate(&kp.public, &kp.secret, &enc.ciphertext, 97).unwrap();
        assert!(dec.v_prime < 97);
    }
}

#[test]
fn decapsulate_is_deterministic() {
    let params = Params::new(4, 257, 1.0).unwrap();
    let kp = keypair(&params, &mut rng(4)).unwrap();
    let enc = encapsulate_fresh(&kp.public, &params, &mut rng(5)).unwrap();

    let first = decapsulate(&kp.public, &kp.secret, &enc.ciphertext, 257).unwrap();
    let second = decapsulate(&kp.public, &kp.secret, &enc.ciphertext, 257).unwrap();
    assert_eq!(first.v_prime, second.v_prime);
    assert_eq!(first.shared_secret, second.shared_secret);
}

#[test]
fn decapsulate_rejects_unreduced_u() {
    let params = Params::new(2, 101, 0.0).unwrap();
    let kp = keypair(&params, &mut rng(6)).unwrap();
    let ct = Ciphertext::from_parts(Vector::from([0, 101]), 0);
    assert_eq!(
        decapsulate(&kp.public, &kp.secret, &ct, 101).unwrap_err(),
        Error::OutOfRange { what: "u", value: 101, q: 101 }
    );
}

#[test]
fn success_rate_degrades_with_noise() {
    let rate = |noise_scale| {
        let params = Params::new(3, 101, noise_scale).unwrap();
        success_rate(&params, 400, &mut rng(7)).unwrap()
    };

    let quiet = rate(0.0);
    let faint = rate(0.05);
    let loud = rate(3.0);

    assert_eq!(quiet, 1.0);
    assert!(faint >= 0.9, "faint = {faint}");
    assert!(loud < faint, "loud = {loud}, faint = {faint}");
    assert!(loud < 0.5, "loud = {loud}");
}

#[test]
fn message_survives_successful_handshake() {
    let params = Params::new(3, 101, 0.0).unwrap();
    let report = Session::with_seed(params, 8).handshake("Hello, PQC!").unwrap();
    assert!(report.success);
    assert_eq!(report.message_ciphertext.len(), "Hello, PQC!".len());
    assert!(report.recovered("Hello, PQC!"));
    assert!(report.decode_error().is_none());
}

#[test]
fn codec_uses_either_side_of_a_handshake() {
    let params = Params::default().with_noise_scale(0.0).unwrap();
    let kp = keypair(&params, &mut rng(9)).unwrap();
    let enc = encapsulate_fresh(&kp.public, &params, &mut rng(10)).unwrap();
    let dec = decapsulate(&kp.public, &kp.secret, &enc.ciphertext, params.q()).unwrap();

    let ct = encrypt(&enc.shared_secret, b"lattice");
    assert_eq!(decrypt(&dec.shared_secret, &ct), b"lattice");
}

#[test]
fn params_load_from_json() {
    let params: Params = serde_json::from_str(r#"{"n": 4, "q": 257, "noise_scale": 1.5}"#).unwrap();
    assert_eq!(params, Params::new(4, 257, 1.5).unwrap());

    let echoed: Params = serde_json::from_str(&serde_json::to_string(&params).unwrap()).unwrap();
    assert_eq!(echoed, params);

    for bad in [
        r#"{"n": 0, "q": 101, "noise_scale": 0.0}"#,
        r#"{"n": 2, "q": 1, "noise_scale": 0.0}"#,
        r#"{"n": 2, "q": 101, "noise_scale": -1.0}"#,
    ] {
        assert!(serde_json::from_str::<Params>(bad).is_err(), "{bad}");
    }
}

#[test]
fn public_key_roundtrips_through_json() {
    let params = Params::new(3, 101, 0.5).unwrap();
    let kp = keypair(&params, &mut rng(11)).unwrap();
    let json = serde_json::to_string(&kp.public).unwrap();
    let back = serde_json::from_str(&json).unwrap();
    assert_eq!(kp.public, back);
}
