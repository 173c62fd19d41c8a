//! # launcher-icons
//!
//! Generates Android and iOS launcher icons from a single source logo.
//!
//! The logo is cropped once to its centered square, then resized with
//! Lanczos3 into every density bucket under `android/app/src/main/res` and
//! every entry of the iOS `AppIcon.appiconset` catalog.
//!
//! ## Example
//!
//! ```no_run
//! use launcher_icons::{Config, Generator};
//!
//! # fn main() -> launcher_icons::Result<()> {
//! let generator = Generator::new(Config::with_root("path/to/app"))?;
//! let report = generator.run()?;
//!
//! println!("{} icons from {}", report.written.len(), report.source.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{Config, Generator, OutputSpec, Platform, Report};
