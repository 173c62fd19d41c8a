//! Fixed output tables for each platform.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Target platform of a generated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Android launcher icons under `res/mipmap-*`.
    Android,
    /// iOS `AppIcon.appiconset` asset catalog.
    Ios,
}

impl Platform {
    /// Lowercase name used on the command line and in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            other => Err(format!("unknown platform `{other}` (expected `android` or `ios`)")),
        }
    }
}

/// An Android screen-density bucket and its launcher icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    pub name: &'static str,
    pub size: u32,
}

/// An iOS app icon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosIcon {
    pub size: u32,
    pub filename: &'static str,
}

/// Android density buckets, smallest first.
pub const ANDROID_DENSITIES: &[Density] = &[
    Density { name: "mdpi", size: 48 },
    Density { name: "hdpi", size: 72 },
    Density { name: "xhdpi", size: 96 },
    Density { name: "xxhdpi", size: 144 },
    Density { name: "xxxhdpi", size: 192 },
];

/// Icon variants written into every density directory.
pub const ANDROID_VARIANTS: &[&str] = &["ic_launcher.png", "ic_launcher_round.png"];

/// Icons expected by the iOS `AppIcon` asset catalog.
pub const IOS_ICONS: &[IosIcon] = &[
    IosIcon { size: 40, filename: "Icon-20@2x.png" },
    IosIcon { size: 60, filename: "Icon-20@3x.png" },
    IosIcon { size: 58, filename: "Icon-29@2x.png" },
    IosIcon { size: 87, filename: "Icon-29@3x.png" },
    IosIcon { size: 80, filename: "Icon-40@2x.png" },
    IosIcon { size: 120, filename: "Icon-40@3x.png" },
    IosIcon { size: 120, filename: "Icon-60@2x.png" },
    IosIcon { size: 180, filename: "Icon-60@3x.png" },
    IosIcon { size: 1024, filename: "Icon-1024.png" },
];

/// A single icon to generate: pixel size and destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub platform: Platform,
    pub size: u32,
    pub path: PathBuf,
}

/// Expand the Android table under `res_dir`.
#[must_use]
pub fn android_outputs(res_dir: &Path) -> Vec<OutputSpec> {
    ANDROID_DENSITIES
        .iter()
        .flat_map(|density| {
            let dir = res_dir.join(format!("mipmap-{}", density.name));
            ANDROID_VARIANTS.iter().map(move |variant| OutputSpec {
                platform: Platform::Android,
                size: density.size,
                path: dir.join(variant),
            })
        })
        .collect()
}

/// Expand the iOS table under `appiconset_dir`.
#[must_use]
pub fn ios_outputs(appiconset_dir: &Path) -> Vec<OutputSpec> {
    IOS_ICONS
        .iter()
        .map(|icon| OutputSpec {
            platform: Platform::Ios,
            size: icon.size,
            path: appiconset_dir.join(icon.filename),
        })
        .collect()
}

/// All outputs, Android first, in table order.
#[must_use]
pub fn default_outputs(res_dir: &Path, appiconset_dir: &Path) -> Vec<OutputSpec> {
    let mut outputs = android_outputs(res_dir);
    outputs.extend(ios_outputs(appiconset_dir));
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_table() {
        let outputs = android_outputs(Path::new("res"));

        assert_eq!(outputs.len(), 10);
        assert_eq!(outputs[0].path, Path::new("res/mipmap-mdpi/ic_launcher.png"));
        assert_eq!(outputs[1].path, Path::new("res/mipmap-mdpi/ic_launcher_round.png"));
        assert_eq!(outputs[9].path, Path::new("res/mipmap-xxxhdpi/ic_launcher_round.png"));

        let sizes: Vec<u32> = outputs.iter().map(|o| o.size).collect();
        assert_eq!(sizes, [48, 48, 72, 72, 96, 96, 144, 144, 192, 192]);
        assert!(outputs.iter().all(|o| o.platform == Platform::Android));
    }

    #[test]
    fn test_ios_table() {
        let outputs = ios_outputs(Path::new("AppIcon.appiconset"));

        assert_eq!(outputs.len(), 9);
        let sizes: Vec<u32> = outputs.iter().map(|o| o.size).collect();
        assert_eq!(sizes, [40, 60, 58, 87, 80, 120, 120, 180, 1024]);
        assert_eq!(outputs[8].path, Path::new("AppIcon.appiconset/Icon-1024.png"));
        assert!(outputs.iter().all(|o| o.platform == Platform::Ios));
    }

    #[test]
    fn test_default_outputs_android_first() {
        let outputs = default_outputs(Path::new("res"), Path::new("icons"));

        assert_eq!(outputs.len(), 19);
        assert_eq!(outputs[9].platform, Platform::Android);
        assert_eq!(outputs[10].platform, Platform::Ios);
    }

    #[test]
    fn test_paths_are_unique() {
        let outputs = default_outputs(Path::new("res"), Path::new("icons"));
        let unique: std::collections::HashSet<_> = outputs.iter().map(|o| &o.path).collect();

        assert_eq!(unique.len(), outputs.len());
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert!("windows".parse::<Platform>().is_err());
        assert_eq!(Platform::Ios.to_string(), "ios");
    }
}
