//! Custom error types for launcher-icons.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the launcher-icons library.
#[derive(Error, Debug)]
pub enum Error {
    /// The source logo does not exist.
    #[error("source logo not found: {}", path.display())]
    MissingSource { path: PathBuf },

    /// Failed to load an image file.
    #[error("failed to load image from {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to create an output directory.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or write an icon.
    #[error("failed to save image to {}: {source}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Icon size must be at least one pixel.
    #[error("invalid icon size {size}: must be greater than 0")]
    InvalidSize { size: u32 },

    /// Failed to create or flush an icon file.
    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type alias for launcher-icons operations.
pub type Result<T> = std::result::Result<T, Error>;
