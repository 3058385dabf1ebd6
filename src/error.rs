use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrivlabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Image encode error: {0}")]
    Encode(String),

    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, PrivlabError>;
