use crate::cipher::{NONCE_SIZE, TAG_SIZE};
use crate::error::{PrivlabError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// An encrypted payload as persisted on disk
/// Layout: [nonce: 16][tag: 16][ciphertext...] - fixed 32-byte header, then
/// a ciphertext of the same length as the original plaintext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    pub nonce: [u8; NONCE_SIZE],
    pub tag: [u8; TAG_SIZE],
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    /// Header size: 16 bytes (nonce) + 16 bytes (tag) = 32 bytes
    pub const HEADER_SIZE: usize = NONCE_SIZE + TAG_SIZE;

    /// Serialize to the wire layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::HEADER_SIZE + self.ciphertext.len());
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.tag);
        buf.extend_from_slice(&self.ciphertext);
        buf
    }

    /// Deserialize from the wire layout
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::HEADER_SIZE {
            return Err(PrivlabError::InvalidFormat(
                "Blob shorter than nonce and tag header".into(),
            ));
        }
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&data[..NONCE_SIZE]);
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&data[NONCE_SIZE..Self::HEADER_SIZE]);
        Ok(Self {
            nonce,
            tag,
            ciphertext: data[Self::HEADER_SIZE..].to_vec(),
        })
    }
}

/// Write a blob to disk: nonce, then tag, then ciphertext
pub fn write_blob(path: &Path, blob: &EncryptedBlob) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&blob.nonce)?;
    writer.write_all(&blob.tag)?;
    writer.write_all(&blob.ciphertext)?;
    writer.flush()?;
    Ok(())
}

/// Read a blob back from disk, splitting the fixed header apart
pub fn read_blob(path: &Path) -> Result<EncryptedBlob> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut nonce = [0u8; NONCE_SIZE];
    reader.read_exact(&mut nonce).map_err(|_| {
        PrivlabError::InvalidFormat("Blob shorter than nonce and tag header".into())
    })?;

    let mut tag = [0u8; TAG_SIZE];
    reader.read_exact(&mut tag).map_err(|_| {
        PrivlabError::InvalidFormat("Blob shorter than nonce and tag header".into())
    })?;

    let mut ciphertext = Vec::new();
    reader.read_to_end(&mut ciphertext)?;

    Ok(EncryptedBlob {
        nonce,
        tag,
        ciphertext,
    })
}
