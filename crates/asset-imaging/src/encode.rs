//! PNG encoding to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, ImageError};
use tracing::debug;

use crate::{ImagingError, Result};

/// PNG encoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PngCompression {
    /// Encoder defaults.
    #[default]
    Standard,
    /// Maximum compression with adaptive filtering (smallest files).
    Optimized,
}

/// Encode `img` as PNG and write it to `path`.
pub fn save_png(img: &DynamicImage, path: &Path, compression: PngCompression) -> Result<()> {
    let encode_err = |source: ImageError| ImagingError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| encode_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);

    let encoder = match compression {
        PngCompression::Standard => PngEncoder::new(&mut writer),
        PngCompression::Optimized => PngEncoder::new_with_quality(
            &mut writer,
            CompressionType::Best,
            PngFilterType::Adaptive,
        ),
    };

    debug!(path = %path.display(), ?compression, "Encoding PNG");
    img.write_with_encoder(encoder).map_err(encode_err)?;
    // The tail of the stream is still buffered here.
    writer
        .flush()
        .map_err(|e| encode_err(ImageError::IoError(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    #[test]
    fn saved_png_decodes_with_same_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(13, 7, Rgba([1, 2, 3, 255])));

        save_png(&img, &path, PngCompression::Standard).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.dimensions(), (13, 7));
        // PNG signature
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn optimized_png_keeps_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(9, 9, Rgba([200, 10, 10, 128])));

        save_png(&img, &path, PngCompression::Optimized).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(4, 4), &Rgba([200, 10, 10, 128]));
    }

    #[test]
    fn missing_parent_directory_is_encode_error() {
        let img = DynamicImage::new_rgb8(2, 2);
        let err = save_png(
            &img,
            Path::new("no/such/dir/out.png"),
            PngCompression::Standard,
        )
        .unwrap_err();
        assert!(matches!(err, ImagingError::Encode { .. }));
    }

    #[test]
    fn saved_png_ends_with_iend_chunk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, Rgba([9, 8, 7, 255])));

        save_png(&img, &path, PngCompression::Optimized).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[bytes.len() - 8..bytes.len() - 4], b"IEND");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn buffered_write_failure_is_encode_error() {
        // Every write to /dev/full fails with ENOSPC. A small image stays in
        // the buffer until the final flush.
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        let img = DynamicImage::new_rgb8(2, 2);

        let err = save_png(&img, full, PngCompression::Standard).unwrap_err();
        assert!(matches!(err, ImagingError::Encode { .. }));
    }
}
