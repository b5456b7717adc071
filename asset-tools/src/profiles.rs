//! Fixed size tables: app icons, App Store devices and web icons.

use asset_imaging::Orientation;

use crate::{AssetError, Result};

/// One required output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

impl SizeSpec {
    pub const fn new(width: u32, height: u32, label: &'static str) -> Self {
        Self {
            width,
            height,
            label,
        }
    }

    pub const fn square(side: u32, label: &'static str) -> Self {
        Self::new(side, side, label)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// A store device class with its required screenshot sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub name: &'static str,
    pub portrait: SizeSpec,
    pub landscape: SizeSpec,
    pub description: &'static str,
}

impl DeviceProfile {
    const fn new(name: &'static str, width: u32, height: u32, description: &'static str) -> Self {
        Self {
            name,
            portrait: SizeSpec::new(width, height, "portrait"),
            landscape: SizeSpec::new(height, width, "landscape"),
            description,
        }
    }

    pub fn size(&self, orientation: Orientation) -> SizeSpec {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }
}

/// App icon sizes and the file names the asset catalog expects.
pub const ICON_SPECS: [SizeSpec; 16] = [
    // iPhone
    SizeSpec::square(40, "icon_40x40 2.png"),    // 20pt@2x
    SizeSpec::square(60, "icon_60x60 1.png"),    // 20pt@3x
    SizeSpec::square(58, "icon_58x58 1.png"),    // 29pt@2x
    SizeSpec::square(87, "icon_87x87.png"),      // 29pt@3x
    SizeSpec::square(80, "icon_80x80 1.png"),    // 40pt@2x
    SizeSpec::square(120, "icon_120x120.png"),   // 40pt@3x
    SizeSpec::square(120, "icon_120x120 1.png"), // 60pt@2x
    SizeSpec::square(180, "icon_180x180.png"),   // 60pt@3x
    // iPad
    SizeSpec::square(20, "icon_20x20 1.png"),   // 20pt@1x
    SizeSpec::square(40, "icon_40x40 1.png"),   // 20pt@2x
    SizeSpec::square(29, "icon_29x29 1.png"),   // 29pt@1x
    SizeSpec::square(58, "icon_58x58.png"),     // 29pt@2x
    SizeSpec::square(80, "icon_80x80.png"),     // 40pt@2x
    SizeSpec::square(152, "icon_152x152.png"),  // 76pt@2x
    SizeSpec::square(167, "icon_167x167.png"),  // 83.5pt@2x
    // App Store
    SizeSpec::square(1024, "icon_1024x1024.png"),
];

/// App Store screenshot device classes.
pub const DEVICE_PROFILES: [DeviceProfile; 4] = [
    DeviceProfile::new(
        "iPhone_6_7",
        1290,
        2796,
        "iPhone 6.7\" (iPhone 14 Pro Max, 15 Pro Max)",
    ),
    DeviceProfile::new(
        "iPhone_6_5",
        1242,
        2688,
        "iPhone 6.5\" (iPhone Xs Max, 11 Pro Max)",
    ),
    DeviceProfile::new("iPhone_5_5", 1242, 2208, "iPhone 5.5\" (iPhone 8 Plus)"),
    DeviceProfile::new("iPad_Pro_12_9", 2048, 2732, "iPad Pro 12.9\""),
];

pub const DEVICE_NAMES: [&str; 4] = [
    DEVICE_PROFILES[0].name,
    DEVICE_PROFILES[1].name,
    DEVICE_PROFILES[2].name,
    DEVICE_PROFILES[3].name,
];

/// Web icons must come from exactly this square size.
pub const WEB_SOURCE_SIDE: u32 = 1024;

/// Web distribution icon sizes.
pub const WEB_ICON_SIZES: [u32; 2] = [57, 512];

/// Look up a device profile by name.
pub fn device(name: &str) -> Result<&'static DeviceProfile> {
    DEVICE_PROFILES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| AssetError::UnsupportedDevice(name.to_string()))
}

/// Help text listing every device class.
pub fn device_help() -> String {
    let mut out = String::from("Available device types:\n");
    for profile in &DEVICE_PROFILES {
        out.push_str(&format!("  {}: {}\n", profile.name, profile.description));
    }
    out
}
