use clap::{Parser, Subcommand};
use privlab::access::{Permission, Role};
use privlab::anonymize::MaskPolicy;
use privlab::cli::{
    run_access, run_anonymize, run_encrypt, run_logmon, run_obfuscate, show_blob_info,
    AccessOptions, AnonymizeOptions, EncryptOptions, LogmonOptions, ObfuscateOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("PRIVLAB_VERSION");
const BUILD: &str = env!("PRIVLAB_BUILD");
const PROFILE: &str = env!("PRIVLAB_PROFILE");
const GIT_HASH: &str = env!("PRIVLAB_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "privlab")]
#[command(author, about = "Cloud security lab toolkit", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Mask identifiers and k-anonymize the lab dataset
    #[command(alias = "a")]
    Anonymize {
        /// Minimum group size for a record to survive
        #[arg(long, default_value = "2")]
        k: usize,

        /// JSON dataset file (uses the embedded lab dataset when omitted)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Replacement for the name column
        #[arg(long, default_value = "XXXX")]
        placeholder: String,

        /// How many leading ZIP characters to keep
        #[arg(long, default_value = "3")]
        zip_keep: usize,

        /// Token appended after the kept ZIP prefix
        #[arg(long, default_value = "***")]
        zip_mask: String,
    },

    /// Encrypt a file under a fresh key, then decrypt and verify it
    #[command(alias = "e")]
    Encrypt {
        /// Input file, read as opaque bytes
        #[arg(default_value = "original.jpg")]
        input: PathBuf,

        /// Output blob: nonce, tag, then ciphertext
        #[arg(long, default_value = "encrypted.img")]
        encrypted: PathBuf,

        /// Output file for the recovered bytes
        #[arg(long, default_value = "decrypted.jpg")]
        decrypted: PathBuf,
    },

    /// Shift image pixel columns for casual obfuscation
    #[command(alias = "o")]
    Obfuscate {
        /// Input image
        #[arg(default_value = "original.jpg")]
        input: PathBuf,

        /// Output image (codec follows the extension)
        #[arg(long, default_value = "obfuscated.jpg")]
        output: PathBuf,

        /// Columns to shift right (wraps around the width)
        #[arg(long, default_value = "100")]
        offset: usize,
    },

    /// Show information about an encrypted blob
    #[command(alias = "i")]
    Info {
        /// Blob file to inspect
        file: PathBuf,
    },

    /// Run role-based and attribute-based access checks
    #[command(alias = "c")]
    Access {
        /// Check a single role instead of the demo matrix
        #[arg(long, value_parser = parse_role, requires = "permission")]
        role: Option<Role>,

        /// Permission to check the role against
        #[arg(long, value_parser = parse_permission, requires = "role")]
        permission: Option<Permission>,
    },

    /// Generate and scan the system log for incidents
    #[command(alias = "l")]
    Logmon {
        /// Log file to write and scan
        #[arg(long, default_value = "system_logs.txt")]
        log_file: PathBuf,

        /// Failed-login count that raises a brute-force alert
        #[arg(long, default_value = "3")]
        threshold: usize,

        /// Scan the file as-is instead of writing the sample log first
        #[arg(long)]
        use_existing: bool,
    },
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_permission(s: &str) -> Result<Permission, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("privlab {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Anonymize {
            k,
            dataset,
            placeholder,
            zip_keep,
            zip_mask,
        } => {
            let options = AnonymizeOptions {
                k,
                dataset,
                policy: MaskPolicy {
                    placeholder,
                    zip_keep,
                    zip_mask,
                },
            };

            match run_anonymize(&options) {
                Ok(report) => {
                    print!("{}", report);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Encrypt {
            input,
            encrypted,
            decrypted,
        } => {
            let options = EncryptOptions {
                encrypted: encrypted.clone(),
                decrypted: decrypted.clone(),
            };

            match run_encrypt(&input, &options) {
                Ok(report) => {
                    println!(
                        "Encrypted {} bytes to {}",
                        report.plaintext_len,
                        encrypted.display()
                    );
                    println!("Decrypted to {}", decrypted.display());
                    println!("SHA-256 source    {}", report.source_digest);
                    println!("SHA-256 recovered {}", report.recovered_digest);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Obfuscate {
            input,
            output,
            offset,
        } => {
            let options = ObfuscateOptions {
                output: output.clone(),
                offset,
            };

            match run_obfuscate(&input, &options) {
                Ok(grid) => {
                    println!(
                        "Obfuscated {}x{} image written to {}",
                        grid.width(),
                        grid.height(),
                        output.display()
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Info { file } => match show_blob_info(&file) {
            Ok(info) => {
                print!("{}", info);
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Access { role, permission } => {
            let options = AccessOptions {
                query: role.zip(permission),
            };
            print!("{}", run_access(&options));
            Ok(())
        }

        Commands::Logmon {
            log_file,
            threshold,
            use_existing,
        } => {
            let options = LogmonOptions {
                log_file,
                threshold,
                use_existing,
            };

            match run_logmon(&options) {
                Ok(report) => {
                    print!("{}", report);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
