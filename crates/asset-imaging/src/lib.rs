//! Imaging primitives for app asset generation.
//!
//! Provides shape drawing, the thermometer glyph, best-effort text overlays,
//! orientation, alpha flattening, fit-within resizing (Lanczos3), centred
//! padding and PNG encoding.

use std::path::PathBuf;

use image::{Rgb, Rgba};

pub mod compose;
pub mod encode;
pub mod resize;
pub mod rotate;
pub mod shapes;
pub mod text;
pub mod thermometer;

// Re-exports for convenience
pub use compose::{flatten_onto, pad_centered};
pub use encode::{PngCompression, save_png};
pub use resize::{fit_within, fit_within_dimensions, resize_square};
pub use rotate::{Orientation, orient_for};
pub use thermometer::{IconLayout, Thermometer};

/// Icon background (steel blue).
pub const STEEL_BLUE: Rgba<u8> = Rgba([70, 130, 180, 255]);

/// Thermometer bulb and liquid colour (`#FF4444`).
pub const ALERT_RED: Rgba<u8> = Rgba([255, 68, 68, 255]);

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Opaque white used as the flatten/pad background.
pub const WHITE_RGB: Rgb<u8> = Rgb([255, 255, 255]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Errors that can occur while decoding, drawing or encoding assets.
#[derive(Debug, thiserror::Error)]
pub enum ImagingError {
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read font {}: {source}", .path.display())]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid font format (only TTF/OTF supported): {}", .0.display())]
    InvalidFont(PathBuf),

    #[error("Unsupported orientation: {0}")]
    UnknownOrientation(String),
}

/// Result type alias for imaging operations.
pub type Result<T> = std::result::Result<T, ImagingError>;

/// Decode an image file, attaching the path to any error.
pub fn open_image(path: impl Into<PathBuf>) -> Result<image::DynamicImage> {
    let path = path.into();
    image::open(&path).map_err(|source| ImagingError::Decode { path, source })
}
