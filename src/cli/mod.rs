pub mod access;
pub mod anonymize;
pub mod encrypt;
pub mod info;
pub mod logmon;
pub mod obfuscate;

pub use access::{run_access, AccessOptions};
pub use anonymize::{run_anonymize, AnonymizeOptions};
pub use encrypt::{run_encrypt, EncryptOptions, EncryptReport};
pub use info::show_blob_info;
pub use logmon::{run_logmon, LogmonOptions};
pub use obfuscate::{run_obfuscate, ObfuscateOptions};
