use crate::error::{PrivlabError, Result};
use std::path::Path;

/// Decoded pixel data as a row-major flat buffer
/// height x width x channels, one u8 per sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    channels: usize,
    samples: Vec<u8>,
}

impl PixelGrid {
    /// Build a grid from raw samples, validating the buffer length
    pub fn from_samples(
        width: usize,
        height: usize,
        channels: usize,
        samples: Vec<u8>,
    ) -> Result<Self> {
        if samples.len() != width * height * channels {
            return Err(PrivlabError::InvalidFormat(format!(
                "Sample buffer of {} bytes does not match {}x{}x{}",
                samples.len(),
                height,
                width,
                channels
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Cyclically shift pixel columns right by `offset` positions
    /// Column x moves to (x + offset) % width; the offset is reduced modulo
    /// the width, so any offset is valid and offset == width is the identity
    pub fn shift_columns(&self, offset: usize) -> PixelGrid {
        if self.width == 0 {
            return self.clone();
        }
        let offset = offset % self.width;
        if offset == 0 {
            return self.clone();
        }

        let row_stride = self.width * self.channels;
        let mut shifted = vec![0u8; self.samples.len()];

        for y in 0..self.height {
            let row = &self.samples[y * row_stride..(y + 1) * row_stride];
            let out = &mut shifted[y * row_stride..(y + 1) * row_stride];
            for x in 0..self.width {
                let nx = (x + offset) % self.width;
                out[nx * self.channels..(nx + 1) * self.channels]
                    .copy_from_slice(&row[x * self.channels..(x + 1) * self.channels]);
            }
        }

        PixelGrid {
            width: self.width,
            height: self.height,
            channels: self.channels,
            samples: shifted,
        }
    }

    /// Undo a `shift_columns(offset)` by shifting the remaining distance
    pub fn unshift_columns(&self, offset: usize) -> PixelGrid {
        if self.width == 0 {
            return self.clone();
        }
        self.shift_columns(self.width - offset % self.width)
    }
}

/// Decode an image file into an RGB8 pixel grid
/// A missing path is reported before any decode is attempted, so no output
/// is ever produced for a nonexistent input
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    if !path.exists() {
        return Err(PrivlabError::MissingInput(path.to_path_buf()));
    }

    let img = image::open(path)
        .map_err(|e| PrivlabError::Decode(e.to_string()))?
        .to_rgb8();

    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelGrid::from_samples(width, height, 3, img.into_raw())
}

/// Encode a grid back to an image file in the format implied by the extension
pub fn save_image(grid: &PixelGrid, path: &Path) -> Result<()> {
    if grid.channels() != 3 {
        return Err(PrivlabError::Encode(format!(
            "Expected 3 channels, got {}",
            grid.channels()
        )));
    }

    let buffer = image::RgbImage::from_raw(
        grid.width() as u32,
        grid.height() as u32,
        grid.samples().to_vec(),
    )
    .ok_or_else(|| PrivlabError::Encode("Sample buffer does not match dimensions".into()))?;

    buffer
        .save(path)
        .map_err(|e| PrivlabError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// 4x2 RGB grid whose samples encode their own (row, column) position
    fn position_grid() -> PixelGrid {
        let width = 4;
        let height = 2;
        let mut samples = Vec::new();
        for y in 0..height {
            for x in 0..width {
                samples.extend_from_slice(&[y as u8, x as u8, 0]);
            }
        }
        PixelGrid::from_samples(width, height, 3, samples).unwrap()
    }

    fn pixel(grid: &PixelGrid, x: usize, y: usize) -> &[u8] {
        let i = (y * grid.width() + x) * grid.channels();
        &grid.samples()[i..i + grid.channels()]
    }

    #[test]
    fn test_shift_moves_columns_right() {
        let grid = position_grid();
        let shifted = grid.shift_columns(1);

        // Column 0 lands at column 1; the last column wraps to 0
        assert_eq!(pixel(&shifted, 1, 0), pixel(&grid, 0, 0));
        assert_eq!(pixel(&shifted, 0, 0), pixel(&grid, 3, 0));
        assert_eq!(pixel(&shifted, 0, 1), pixel(&grid, 3, 1));
    }

    #[test]
    fn test_shift_unshift_roundtrip() {
        let grid = position_grid();
        for offset in [1, 2, 3, 100] {
            let restored = grid.shift_columns(offset).unshift_columns(offset);
            assert_eq!(grid, restored, "offset {}", offset);
        }
    }

    #[test]
    fn test_offset_wraps_modulo_width() {
        let grid = position_grid();
        // 100 % 4 == 0, so a 100-column shift of a 4-wide grid is the identity
        assert_eq!(grid.shift_columns(100), grid);
        assert_eq!(grid.shift_columns(5), grid.shift_columns(1));
    }

    #[test]
    fn test_identity_offsets() {
        let grid = position_grid();
        assert_eq!(grid.shift_columns(0), grid);
        assert_eq!(grid.shift_columns(grid.width()), grid);
    }

    #[test]
    fn test_shape_preserved() {
        let grid = position_grid();
        let shifted = grid.shift_columns(2);
        assert_eq!(shifted.width(), grid.width());
        assert_eq!(shifted.height(), grid.height());
        assert_eq!(shifted.channels(), grid.channels());
        assert_eq!(shifted.samples().len(), grid.samples().len());
    }

    #[test]
    fn test_from_samples_length_check() {
        let result = PixelGrid::from_samples(4, 2, 3, vec![0u8; 23]);
        assert!(matches!(result, Err(PrivlabError::InvalidFormat(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.jpg");

        let result = load_image(&path);
        assert!(matches!(result, Err(PrivlabError::MissingInput(_))));
    }

    #[test]
    fn test_load_undecodable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let result = load_image(&path);
        assert!(matches!(result, Err(PrivlabError::Decode(_))));
    }

    #[test]
    fn test_image_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.png");

        let grid = position_grid();
        save_image(&grid, &path).unwrap();

        // PNG is lossless, so the decoded samples come back exactly
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, grid);
    }
}
