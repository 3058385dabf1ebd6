pub mod blob;

pub use blob::{read_blob, write_blob, EncryptedBlob};

use crate::error::{PrivlabError, Result};
use aes::Aes128;
use eax::aead::generic_array::GenericArray;
use eax::aead::{AeadInPlace, KeyInit};
use eax::Eax;
use rand::rngs::OsRng;
use rand::RngCore;

/// AES-128 in EAX mode: 16-byte key, 16-byte nonce, 16-byte tag
pub type Aes128Eax = Eax<Aes128>;

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG_SIZE: usize = 16;

/// Generate a fresh 128-bit key using the system CSPRNG
/// The key lives only in process memory and is never persisted
pub fn generate_key() -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    OsRng.fill_bytes(&mut key);
    key
}

/// Generate a fresh nonce using the system CSPRNG
/// One nonce per seal call, never reused under the same key
pub fn generate_nonce() -> [u8; NONCE_SIZE] {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt and authenticate plaintext under a fresh nonce
/// Ciphertext length equals plaintext length; the tag is detached
pub fn seal(plaintext: &[u8], key: &[u8; KEY_SIZE]) -> Result<EncryptedBlob> {
    let cipher = Aes128Eax::new(GenericArray::from_slice(key));
    let nonce = generate_nonce();

    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&nonce), b"", &mut ciphertext)
        .map_err(|_| PrivlabError::Integrity("encryption failed".into()))?;

    let mut tag_bytes = [0u8; TAG_SIZE];
    tag_bytes.copy_from_slice(&tag);

    Ok(EncryptedBlob {
        nonce,
        tag: tag_bytes,
        ciphertext,
    })
}

/// Decrypt and verify a blob
/// Fails closed: a tag mismatch (tamper or wrong key) returns an error and
/// releases no plaintext
pub fn open(blob: &EncryptedBlob, key: &[u8; KEY_SIZE]) -> Result<Vec<u8>> {
    let cipher = Aes128Eax::new(GenericArray::from_slice(key));

    let mut plaintext = blob.ciphertext.clone();
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(&blob.nonce),
            b"",
            &mut plaintext,
            GenericArray::from_slice(&blob.tag),
        )
        .map_err(|_| PrivlabError::Integrity("authentication tag mismatch".into()))?;

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seal_open_roundtrip() {
        let key = generate_key();
        let plaintext = b"not actually a jpeg, but any bytes will do";

        let blob = seal(plaintext, &key).unwrap();
        assert_eq!(blob.ciphertext.len(), plaintext.len());
        assert_ne!(blob.ciphertext.as_slice(), plaintext.as_slice());

        let recovered = open(&blob, &key).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_seal_empty_plaintext() {
        let key = generate_key();
        let blob = seal(b"", &key).unwrap();
        assert!(blob.ciphertext.is_empty());
        assert_eq!(open(&blob, &key).unwrap(), b"");
    }

    #[test]
    fn test_fresh_nonce_per_seal() {
        let key = generate_key();
        let first = seal(b"same plaintext", &key).unwrap();
        let second = seal(b"same plaintext", &key).unwrap();
        assert_ne!(first.nonce, second.nonce);
        assert_ne!(first.ciphertext, second.ciphertext);
    }

    #[test]
    fn test_wrong_key_rejected() {
        let key = generate_key();
        let blob = seal(b"secret payload", &key).unwrap();

        let mut wrong = key;
        wrong[0] ^= 0x01;
        let result = open(&blob, &wrong);
        assert!(matches!(result, Err(crate::PrivlabError::Integrity(_))));
    }

    #[test]
    fn test_tampered_ciphertext_rejected() {
        let key = generate_key();
        let mut blob = seal(b"secret payload", &key).unwrap();

        blob.ciphertext[3] ^= 0x80;
        let result = open(&blob, &key);
        assert!(matches!(result, Err(crate::PrivlabError::Integrity(_))));
    }

    #[test]
    fn test_tampered_tag_rejected() {
        let key = generate_key();
        let mut blob = seal(b"secret payload", &key).unwrap();

        blob.tag[15] ^= 0x01;
        let result = open(&blob, &key);
        assert!(matches!(result, Err(crate::PrivlabError::Integrity(_))));
    }

    #[test]
    fn test_every_ciphertext_bit_is_covered() {
        let key = generate_key();
        let original = seal(b"ab", &key).unwrap();

        for byte in 0..original.ciphertext.len() {
            for bit in 0..8 {
                let mut blob = EncryptedBlob {
                    nonce: original.nonce,
                    tag: original.tag,
                    ciphertext: original.ciphertext.clone(),
                };
                blob.ciphertext[byte] ^= 1 << bit;
                assert!(open(&blob, &key).is_err(), "flip at byte {} bit {}", byte, bit);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_roundtrip_any_bytes(plaintext in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let key = generate_key();
            let blob = seal(&plaintext, &key).unwrap();
            prop_assert_eq!(open(&blob, &key).unwrap(), plaintext);
        }
    }
}
