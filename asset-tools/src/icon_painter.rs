//! Thermometer app icon generation.

use std::path::Path;

use ab_glyph::FontVec;
use asset_imaging::{IconLayout, PngCompression, save_png};
use image::DynamicImage;
use tracing::info;

use crate::profiles::{ICON_SPECS, SizeSpec};
use crate::{AssetError, BatchTally, Result};

/// Paint one `size × size` icon and write it as PNG to `output_path`.
pub fn paint(size: u32, output_path: &Path, font: Option<&FontVec>) -> Result<()> {
    let img = IconLayout::for_size(size).render(font);
    save_png(
        &DynamicImage::ImageRgba8(img),
        output_path,
        PngCompression::Standard,
    )?;
    info!("Created: {} ({size}x{size})", output_path.display());
    Ok(())
}

/// Paint every entry of `specs` into `icon_dir`.
///
/// The directory must already exist; it is never created here.
pub fn paint_all(
    icon_dir: &Path,
    specs: &[SizeSpec],
    font: Option<&FontVec>,
) -> Result<BatchTally> {
    if !icon_dir.is_dir() {
        return Err(AssetError::IconDirMissing(icon_dir.to_path_buf()));
    }

    let mut tally = BatchTally::default();
    for spec in specs {
        let path = icon_dir.join(spec.label);
        tally.record(spec.label, paint(spec.width, &path, font));
    }
    Ok(tally)
}

/// Paint the full app icon set.
pub fn paint_icon_set(icon_dir: &Path, font: Option<&FontVec>) -> Result<BatchTally> {
    paint_all(icon_dir, &ICON_SPECS, font)
}
