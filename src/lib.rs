//! Privlab - Cloud Security Lab Toolkit
//!
//! Three independent lab experiments behind one binary, each a single pass
//! of read, transform, write:
//!
//! ```text
//! anonymize:  dataset → mask identifiers → k-anonymity filter → stdout tables
//! encrypt:    file → AES-128-EAX seal → [nonce|tag|ciphertext] → open → file
//! obfuscate:  image → cyclic column shift → image
//! access:     role/attribute tables → grant or deny decisions
//! logmon:     log file → incident scan → alerts
//! ```
//!
//! - **anonymize**: masks direct identifiers (name, ZIP suffix) and drops
//!   every record whose (age, ZIP) combination occurs fewer than k times
//! - **encrypt**: authenticated round trip under an ephemeral key; the tag
//!   is verified before any plaintext is released
//! - **obfuscate**: reversible positional scrambling, explicitly NOT
//!   encryption - a shift by the remaining width restores the original
//! - **access**: role-based and attribute-based access decisions over fixed
//!   lab policies
//! - **logmon**: single-pass scan for failed logins and unauthorized access
//!
//! ## Example
//!
//! ```no_run
//! use privlab::cli::{run_encrypt, EncryptOptions};
//! use std::path::Path;
//!
//! let options = EncryptOptions::default();
//! let report = run_encrypt(Path::new("original.jpg"), &options).unwrap();
//! assert_eq!(report.source_digest, report.recovered_digest);
//! ```

pub mod access;
pub mod anonymize;
pub mod cipher;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod logmon;
pub mod obfuscate;

pub use cipher::{read_blob, write_blob, EncryptedBlob};
pub use dataset::{sample_records, Record};
pub use error::{PrivlabError, Result};
pub use obfuscate::PixelGrid;
