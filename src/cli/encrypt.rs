use crate::cipher::{generate_key, open, read_blob, seal, write_blob};
use crate::error::Result;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Options for the encrypt command
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    /// Destination for the nonce-tag-ciphertext blob
    pub encrypted: PathBuf,
    /// Destination for the recovered plaintext
    pub decrypted: PathBuf,
}

impl Default for EncryptOptions {
    fn default() -> Self {
        Self {
            encrypted: PathBuf::from("encrypted.img"),
            decrypted: PathBuf::from("decrypted.jpg"),
        }
    }
}

/// What the round trip produced, for status output
#[derive(Debug, Clone)]
pub struct EncryptReport {
    pub plaintext_len: usize,
    pub source_digest: String,
    pub recovered_digest: String,
}

/// Encrypt a file under a fresh ephemeral key, persist the blob, then read
/// it back, decrypt, verify, and write the recovered bytes
///
/// The key exists only for the duration of this call; the decrypt leg reads
/// the blob from disk exactly as a separate consumer would. A tag mismatch
/// aborts before any plaintext is written.
pub fn run_encrypt(input: &Path, options: &EncryptOptions) -> Result<EncryptReport> {
    let plaintext = std::fs::read(input)?;

    let key = generate_key();
    let blob = seal(&plaintext, &key)?;
    write_blob(&options.encrypted, &blob)?;

    let loaded = read_blob(&options.encrypted)?;
    let recovered = open(&loaded, &key)?;
    std::fs::write(&options.decrypted, &recovered)?;

    Ok(EncryptReport {
        plaintext_len: plaintext.len(),
        source_digest: hex::encode(Sha256::digest(&plaintext)),
        recovered_digest: hex::encode(Sha256::digest(&recovered)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::EncryptedBlob;
    use tempfile::tempdir;

    #[test]
    fn test_encrypt_roundtrip_on_disk() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("original.jpg");
        let options = EncryptOptions {
            encrypted: dir.path().join("encrypted.img"),
            decrypted: dir.path().join("decrypted.jpg"),
        };

        let payload = b"opaque image bytes \xFF\xD8\xFF\xE0 and then some";
        std::fs::write(&input, payload).unwrap();

        let report = run_encrypt(&input, &options).unwrap();

        assert_eq!(report.plaintext_len, payload.len());
        assert_eq!(report.source_digest, report.recovered_digest);
        assert_eq!(std::fs::read(&options.decrypted).unwrap(), payload);

        // Blob carries the 32-byte header plus same-length ciphertext
        let blob = std::fs::read(&options.encrypted).unwrap();
        assert_eq!(blob.len(), EncryptedBlob::HEADER_SIZE + payload.len());
        assert_ne!(&blob[EncryptedBlob::HEADER_SIZE..], payload.as_slice());
    }

    #[test]
    fn test_missing_input_propagates_io_error() {
        let dir = tempdir().unwrap();
        let options = EncryptOptions {
            encrypted: dir.path().join("encrypted.img"),
            decrypted: dir.path().join("decrypted.jpg"),
        };

        let result = run_encrypt(&dir.path().join("no-such-file.jpg"), &options);
        assert!(result.is_err());
        assert!(!options.encrypted.exists());
        assert!(!options.decrypted.exists());
    }

    #[test]
    fn test_fresh_key_per_run() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("original.jpg");
        std::fs::write(&input, b"same input twice").unwrap();

        let first = EncryptOptions {
            encrypted: dir.path().join("first.img"),
            decrypted: dir.path().join("first.jpg"),
        };
        let second = EncryptOptions {
            encrypted: dir.path().join("second.img"),
            decrypted: dir.path().join("second.jpg"),
        };

        run_encrypt(&input, &first).unwrap();
        run_encrypt(&input, &second).unwrap();

        // Different key and nonce per run, so the blobs differ
        assert_ne!(
            std::fs::read(&first.encrypted).unwrap(),
            std::fs::read(&second.encrypted).unwrap()
        );
    }
}
