//! App Store screenshot resizing and placeholder generation.
//!
//! A source screenshot is rotated to the requested orientation, flattened
//! onto white, scaled to fit the device size and padded to the exact
//! dimensions the store requires.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use asset_imaging::text::{self, line_height};
use asset_imaging::thermometer::draw_sample_thermometer;
use asset_imaging::{
    Orientation, PngCompression, STEEL_BLUE, WHITE, WHITE_RGB, fit_within, flatten_onto,
    open_image, orient_for, pad_centered, save_png,
};
use image::{DynamicImage, RgbImage, RgbaImage};
use tracing::{debug, info};

use crate::profiles::{DEVICE_PROFILES, DeviceProfile};
use crate::{AssetError, BatchTally, Result};

const SAMPLE_TITLE: &str = "Temperature Sensor Monitor";
const SAMPLE_SUBTITLE: &str = "App Store Screenshot Sample";
const SAMPLE_FONT_PX: f32 = 48.0;

/// One (device, orientation) combination to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub profile: &'static DeviceProfile,
    pub orientation: Orientation,
}

impl Target {
    pub fn dimensions(&self) -> (u32, u32) {
        self.profile.size(self.orientation).dimensions()
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.profile.name, self.orientation)
    }
}

/// Device × orientation product, optionally restricted to one of each.
///
/// Devices keep table order; portrait comes before landscape.
pub fn targets(
    device: Option<&'static DeviceProfile>,
    orientation: Option<Orientation>,
) -> Vec<Target> {
    let devices: Vec<&'static DeviceProfile> = match device {
        Some(d) => vec![d],
        None => DEVICE_PROFILES.iter().collect(),
    };
    let orientations: Vec<Orientation> = match orientation {
        Some(o) => vec![o],
        None => Orientation::ALL.to_vec(),
    };

    devices
        .into_iter()
        .flat_map(|profile| {
            orientations
                .iter()
                .map(move |&orientation| Target {
                    profile,
                    orientation,
                })
        })
        .collect()
}

/// `{stem}_{device}_{orientation}_{w}x{h}.png`
pub fn output_file_name(stem: &str, target: &Target) -> String {
    let (w, h) = target.dimensions();
    format!(
        "{stem}_{}_{}_{w}x{h}.png",
        target.profile.name, target.orientation
    )
}

/// Resize `img` to the exact target dimensions.
pub fn fit_image(img: DynamicImage, target: &Target) -> RgbImage {
    let (w, h) = target.dimensions();
    let oriented = orient_for(img, target.orientation);
    let flat = DynamicImage::ImageRgb8(flatten_onto(&oriented, WHITE_RGB));
    let scaled = fit_within(flat, w, h).to_rgb8();
    pad_centered(&scaled, w, h, WHITE_RGB)
}

/// Fit the screenshot at `input` to `target` and write it into `output_dir`.
///
/// Returns the path of the written file.
pub fn fit(input: &Path, target: &Target, output_dir: &Path) -> Result<PathBuf> {
    let img = open_image(input)?;
    debug!(
        w = img.width(),
        h = img.height(),
        "Loaded source {}",
        input.display()
    );

    let canvas = fit_image(img, target);

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("screenshot");
    let output_path = output_dir.join(output_file_name(stem, target));
    save_png(
        &DynamicImage::ImageRgb8(canvas),
        &output_path,
        PngCompression::Standard,
    )?;

    let (w, h) = target.dimensions();
    info!("Created: {} ({w}x{h})", output_path.display());
    Ok(output_path)
}

/// Fit `input` to every target, isolating per-target failures.
pub fn fit_all(input: &Path, targets: &[Target], output_dir: &Path) -> Result<BatchTally> {
    if !input.exists() {
        return Err(AssetError::InputMissing(input.to_path_buf()));
    }
    std::fs::create_dir_all(output_dir)?;

    let mut tally = BatchTally::default();
    for target in targets {
        tally.record(&target.label(), fit(input, target, output_dir));
    }
    Ok(tally)
}

/// Draw a placeholder screenshot at the target size.
///
/// Title and subtitle are only drawn when a font is available.
pub fn render_sample(target: &Target, font: Option<&FontVec>) -> RgbImage {
    let (w, h) = target.dimensions();
    let mut img = RgbaImage::from_pixel(w, h, STEEL_BLUE);

    if let Some(font) = font {
        draw_sample_text(&mut img, font, target);
    } else {
        debug!("No font configured, sample has no text");
    }
    draw_sample_thermometer(&mut img);

    DynamicImage::ImageRgba8(img).to_rgb8()
}

fn draw_sample_text(img: &mut RgbaImage, font: &FontVec, target: &Target) {
    let scale = PxScale::from(SAMPLE_FONT_PX);
    let lh = line_height(font, scale) as i32;
    let (w, h) = target.dimensions();

    let title_y = (img.height() as i32 - lh) / 2 - 50;
    text::draw_centered_text(img, font, scale, title_y, SAMPLE_TITLE, WHITE);

    let size_line = format!("{w}x{h}");
    let subtitle = [SAMPLE_SUBTITLE, target.profile.description, &size_line];
    let mut y = title_y + lh + 20;
    for line in subtitle {
        text::draw_centered_text(img, font, scale, y, line, WHITE);
        y += lh;
    }
}

/// Write a placeholder for each target into `output_dir`.
pub fn generate_samples(
    targets: &[Target],
    output_dir: &Path,
    font: Option<&FontVec>,
) -> Result<BatchTally> {
    std::fs::create_dir_all(output_dir)?;

    let mut tally = BatchTally::default();
    for target in targets {
        let path = output_dir.join(output_file_name("sample", target));
        let img = DynamicImage::ImageRgb8(render_sample(target, font));
        let written = save_png(&img, &path, PngCompression::Standard);
        if tally.record(&target.label(), written).is_some() {
            info!("Created sample: {}", path.display());
        }
    }
    Ok(tally)
}
