//! Stream codec keyed by a shared secret.
//!
//! The pad is `SHAKE-256(ss || "key")` squeezed to the message length and
//! XORed byte-wise, so ciphertext length always equals plaintext length and
//! decryption is the same operation as encryption. There is no framing and
//! no authentication: decrypting under the wrong secret silently yields
//! garbage, which [`decrypt_utf8`] reports as
//! [`Error::PlaintextNotRecoverable`].

use tracing::warn;
use zeroize::Zeroizing;

use crate::{Error, Result, hash};

/// Key stream of exactly `len` bytes for `ss`.
#[must_use]
pub fn derive_pad(ss: impl AsRef<[u8]>, len: usize) -> Zeroizing<Vec<u8>> {
    hash::pad(ss, len)
}

fn xor_with_pad(ss: impl AsRef<[u8]>, data: &[u8]) -> Vec<u8> {
    let pad = derive_pad(ss, data.len());
    data.iter().zip(pad.iter()).map(|(&d, &p)| d ^ p).collect()
}

/// `ciphertext[i] = plaintext[i] ^ pad[i]`.
#[must_use]
pub fn encrypt(ss: impl AsRef<[u8]>, plaintext: &[u8]) -> Vec<u8> {
    xor_with_pad(ss, plaintext)
}

/// `plaintext[i] = ciphertext[i] ^ pad[i]`. Never fails; a wrong `ss`
/// produces unrelated bytes.
#[must_use]
pub fn decrypt(ss: impl AsRef<[u8]>, ciphertext: &[u8]) -> Vec<u8> {
    xor_with_pad(ss, ciphertext)
}

/// Decrypt and decode as UTF-8.
pub fn decrypt_utf8(ss: impl AsRef<[u8]>, ciphertext: &[u8]) -> Result<String> {
    String::from_utf8(decrypt(ss, ciphertext)).map_err(|e| {
        let valid_up_to = e.utf8_error().valid_up_to();
        warn!(len = ciphertext.len(), valid_up_to, "decrypted bytes are not UTF-8");
        Error::PlaintextNotRecoverable(e)
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::params::SSBYTES;

    #[test]
    fn zero_secret_example() {
        let ss = [0u8; SSBYTES];
        let ct = encrypt(ss, b"AB");

        let mut input = [0u8; SSBYTES].to_vec();
        input.extend_from_slice(b"key");
        let mut pad = [0u8; 2];
        lwe_hash::shake256(input, &mut pad);
        assert_eq!(ct, vec![b'A' ^ pad[0], b'B' ^ pad[1]]);
        assert_eq!(decrypt(ss, &ct), b"AB");
    }

    #[test]
    fn empty_message() {
        let ss = [9u8; SSBYTES];
        assert!(encrypt(ss, b"").is_empty());
        assert_eq!(decrypt_utf8(ss, b"").unwrap(), "");
    }

    #[test]
    fn wrong_secret_garbles() {
        let msg = "Hello, PQC!".repeat(8);
        let ct = encrypt([1u8; SSBYTES], msg.as_bytes());
        let out = decrypt([2u8; SSBYTES], &ct);
        assert_eq!(out.len(), msg.len());
        assert_ne!(out, msg.as_bytes());
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let ss = [3u8; SSBYTES];
        // Encrypt bytes that are not UTF-8 so decryption is guaranteed to fail decoding.
        let ct = encrypt(ss, &[0xFF, 0xFE, 0x80]);
        match decrypt_utf8(ss, &ct) {
            Err(Error::PlaintextNotRecoverable(e)) => {
                assert_eq!(e.as_bytes(), &[0xFF, 0xFE, 0x80]);
            }
            other => panic!("expected decode failure, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn roundtrip(
            ss in any::<[u8; SSBYTES]>(),
            msg in proptest::collection::vec(any::<u8>(), 0..512)
        ) {
            let ct = encrypt(ss, &msg);
            prop_assert_eq!(ct.len(), msg.len());
            prop_assert_eq!(decrypt(ss, &ct), msg);
        }

        #[test]
        fn utf8_roundtrip(ss in any::<[u8; SSBYTES]>(), text in ".{0,64}") {
            let ct = encrypt(ss, text.as_bytes());
            prop_assert_eq!(decrypt_utf8(ss, &ct).unwrap(), text);
        }
    }
}
