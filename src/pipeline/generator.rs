//! Icon generation pipeline.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::image;

use super::targets::{default_outputs, OutputSpec, Platform};

/// Source logo, relative to the project root.
pub const SOURCE_LOGO: &str = "src/assets/images/logo.jpg";

/// Android resource directory, relative to the project root.
pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";

/// iOS app icon asset catalog, relative to the project root.
pub const IOS_APPICONSET_DIR: &str = "ios/EduOne/Images.xcassets/AppIcon.appiconset";

/// Configuration for an icon generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root every other path is resolved against.
    pub root: PathBuf,

    /// Source logo path, relative to `root` unless absolute.
    pub source: PathBuf,

    /// Icons to write, in order. Paths are relative to `root` unless absolute.
    pub outputs: Vec<OutputSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source: PathBuf::from(SOURCE_LOGO),
            outputs: default_outputs(Path::new(ANDROID_RES_DIR), Path::new(IOS_APPICONSET_DIR)),
        }
    }
}

impl Config {
    /// Default configuration rooted at `root`.
    #[must_use]
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Keep only the outputs for `platform`.
    #[must_use]
    pub fn only(mut self, platform: Platform) -> Self {
        self.outputs.retain(|output| output.platform == platform);
        self
    }

    /// Absolute-or-root-relative path of the source logo.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to generate or an output has a zero size.
    pub fn validate(&self) -> Result<()> {
        if self.outputs.is_empty() {
            return Err(Error::InvalidParameter {
                name: "outputs".to_string(),
                reason: "must contain at least one icon".to_string(),
            });
        }

        if let Some(output) = self.outputs.iter().find(|output| output.size == 0) {
            return Err(Error::InvalidParameter {
                name: "outputs".to_string(),
                reason: format!("{} has size 0", output.path.display()),
            });
        }

        Ok(())
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Source logo the icons were generated from.
    pub source: PathBuf,

    /// Written files, in generation order.
    pub written: Vec<PathBuf>,
}

/// Generates launcher icons from a single source logo.
#[derive(Debug)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a new generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator runs with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Crop the source logo once and write every configured icon.
    ///
    /// Stops at the first failure. Icons written before the failure are
    /// left in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] before touching the filesystem if the
    /// source logo does not exist, or the first load or write error.
    pub fn run(&self) -> Result<Report> {
        let source = self.config.source_path();

        if !source.exists() {
            return Err(Error::MissingSource { path: source });
        }

        tracing::info!("Loading source logo: {}", source.display());
        let base = image::load_source(&source)?;
        let square = image::square_crop(&base);

        tracing::info!(
            "Writing {} icons from {}x{} crop",
            self.config.outputs.len(),
            square.width(),
            square.height()
        );

        let pb = ProgressBar::new(self.config.outputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Icons [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("valid template")
                .progress_chars("#>-"),
        );

        let mut written = Vec::with_capacity(self.config.outputs.len());
        for output in &self.config.outputs {
            let path = self.config.root.join(&output.path);
            pb.set_message(format!("{} {}px", output.platform, output.size));

            if let Err(err) = image::save_png(&square, output.size, &path) {
                pb.abandon();
                return Err(err);
            }

            tracing::debug!("Wrote {} ({}x{})", path.display(), output.size, output.size);
            written.push(path);
            pb.inc(1);
        }

        pb.finish_and_clear();
        tracing::info!("Generated {} icons", written.len());

        Ok(Report { source, written })
    }
}
