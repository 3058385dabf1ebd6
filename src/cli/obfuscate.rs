use crate::error::Result;
use crate::obfuscate::{load_image, save_image, PixelGrid};
use std::path::{Path, PathBuf};

/// Options for the obfuscate command
#[derive(Debug, Clone)]
pub struct ObfuscateOptions {
    /// Destination image; the codec follows the file extension
    pub output: PathBuf,
    /// How many columns to shift right (wraps around)
    pub offset: usize,
}

impl Default for ObfuscateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("obfuscated.jpg"),
            offset: 100,
        }
    }
}

/// Decode the input image, shift its pixel columns, and re-encode
/// Returns the shifted grid so callers can report its dimensions
pub fn run_obfuscate(input: &Path, options: &ObfuscateOptions) -> Result<PixelGrid> {
    let grid = load_image(input)?;
    let shifted = grid.shift_columns(options.offset);
    save_image(&shifted, &options.output)?;
    Ok(shifted)
}
