//! Source image loading.

use std::path::Path;

use crate::error::{Error, Result};

use super::IconImage;

/// Load an image from disk and normalize it to RGBA.
///
/// The format is detected from the file contents, so a PNG saved with a
/// `.jpg` extension still loads.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file cannot be read or decoded.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<IconImage> {
    let path = path.as_ref();

    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(source),
        })?
        .decode()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgba8())
}
