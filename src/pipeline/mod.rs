//! Crop-then-resize pipeline producing Android and iOS launcher icons.

mod generator;
mod targets;

pub use generator::{Config, Generator, Report, ANDROID_RES_DIR, IOS_APPICONSET_DIR, SOURCE_LOGO};
pub use targets::{
    android_outputs, default_outputs, ios_outputs, Density, IosIcon, OutputSpec, Platform,
    ANDROID_DENSITIES, ANDROID_VARIANTS, IOS_ICONS,
};
