//! Icon resizing and PNG encoding.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};

use crate::error::{Error, Result};

use super::IconImage;

/// Resize a square image to `size` x `size` and save it as PNG.
///
/// The image is:
/// 1. Resized with Lanczos3 to keep downscaled icons free of aliasing
/// 2. Encoded losslessly with best compression and adaptive row filters
/// 3. Written to `path`, creating parent directories and replacing any existing file
///
/// # Errors
///
/// Returns an error if `size` is zero, the parent directory cannot be
/// created, or the file cannot be written.
pub fn save_png<P: AsRef<Path>>(img: &IconImage, size: u32, path: P) -> Result<()> {
    let path = path.as_ref();

    if size == 0 {
        return Err(Error::InvalidSize { size });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let resized = imageops::resize(img, size, size, FilterType::Lanczos3);

    let write_err = |source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(fs::File::create(path).map_err(write_err)?);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilter::Adaptive);
    resized
        .write_with_encoder(encoder)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(write_err)?;

    Ok(())
}
