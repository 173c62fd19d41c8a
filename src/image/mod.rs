//! Image loading, cropping, and saving utilities.

mod crop;
mod load;
mod save;

pub use crop::{crop_region, square_crop};
pub use load::load_source;
pub use save::save_png;

/// Pixel buffer used throughout the pipeline: 8-bit RGBA with explicit alpha.
pub type IconImage = image::RgbaImage;
