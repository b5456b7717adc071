//! Web distribution icons derived from 1024×1024 app icons.

use std::path::{Path, PathBuf};

use asset_imaging::{PngCompression, open_image, resize_square, save_png};
use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::profiles::{WEB_ICON_SIZES, WEB_SOURCE_SIDE};
use crate::{AssetError, Result};

const SOURCE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Outcome of one directory run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebIconSummary {
    pub total: usize,
    pub succeeded: usize,
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SOURCE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// List the exactly-1024×1024 images in `dir`, sorted by file name.
///
/// Files with other sizes, or that fail to decode, are skipped.
pub fn find_source_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AssetError::SourceDirMissing(dir.to_path_buf()));
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();
    candidates.sort();

    let sources = candidates
        .into_iter()
        .filter(|path| match image::image_dimensions(path) {
            Ok(dims) if dims == (WEB_SOURCE_SIDE, WEB_SOURCE_SIDE) => true,
            Ok((w, h)) => {
                debug!("Skipping {} ({w}x{h})", path.display());
                false
            }
            Err(e) => {
                debug!("Skipping unreadable {}: {e}", path.display());
                false
            }
        })
        .collect();
    Ok(sources)
}

/// Write `{base}_{N}x{N}.png` for every web icon size into `output_dir`.
pub fn create_web_icons(source: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let img = open_image(source)?;
    if img.width() != WEB_SOURCE_SIDE || img.height() != WEB_SOURCE_SIDE {
        warn!(
            "Source image {} is {}x{}, expected {WEB_SOURCE_SIDE}x{WEB_SOURCE_SIDE}",
            source.display(),
            img.width(),
            img.height()
        );
    }
    let img = DynamicImage::ImageRgba8(img.into_rgba8());

    let base = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("icon");
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(WEB_ICON_SIZES.len());
    for side in WEB_ICON_SIZES {
        let path = output_dir.join(format!("{base}_{side}x{side}.png"));
        save_png(&resize_square(&img, side), &path, PngCompression::Optimized)?;
        info!("Created: {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Generate web icons for every 1024×1024 image in `source_dir`.
///
/// Fails when the directory is missing or holds no usable source.
/// Per-image failures are logged and excluded from `succeeded`.
pub fn process_directory(source_dir: &Path, output_dir: &Path) -> Result<WebIconSummary> {
    let sources = find_source_images(source_dir)?;
    if sources.is_empty() {
        return Err(AssetError::NoSourceImages(source_dir.to_path_buf()));
    }

    info!("Found {} 1024x1024 image(s):", sources.len());
    for path in &sources {
        info!(
            "  - {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
    }
    info!(
        "Generating web icons (57x57 and 512x512) in '{}'...",
        output_dir.display()
    );

    let mut succeeded = 0;
    for source in &sources {
        match create_web_icons(source, output_dir) {
            Ok(_) => succeeded += 1,
            Err(e) => tracing::error!("Error processing {}: {e}", source.display()),
        }
    }

    Ok(WebIconSummary {
        total: sources.len(),
        succeeded,
    })
}
