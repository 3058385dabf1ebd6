use crate::cipher::read_blob;
use crate::error::Result;
use std::path::Path;

/// Describe a persisted encrypted blob without decrypting it
/// The key is ephemeral to the encrypt run, so inspection is all that is
/// possible after the fact
pub fn show_blob_info(path: &Path) -> Result<String> {
    let blob = read_blob(path)?;

    let mut output = String::new();
    output.push_str("Encrypted Blob Information\n");
    output.push_str("==========================\n\n");

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Nonce: {}\n", hex::encode(blob.nonce)));
    output.push_str(&format!("Tag: {}\n", hex::encode(blob.tag)));
    output.push_str(&format!(
        "Ciphertext: {} ({} bytes)\n",
        format_size(blob.ciphertext.len() as u64),
        blob.ciphertext.len()
    ));

    Ok(output)
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
