//! Image resizing utilities for store and web assets.
//!
//! Provides aspect-ratio-preserving fit and exact square resizes using
//! Lanczos3 filtering.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Compute the dimensions of `src` scaled to fit inside `bounds`.
///
/// The scale is `min(bw/sw, bh/sh)` capped at 1.0, so images are never
/// enlarged. Each side is at least 1px and never exceeds its bound.
pub fn fit_within_dimensions(src: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = src;
    let (bound_w, bound_h) = bounds;

    let scale_w = f64::from(bound_w) / f64::from(src_w.max(1));
    let scale_h = f64::from(bound_h) / f64::from(src_h.max(1));
    let scale = scale_w.min(scale_h).min(1.0);

    let new_w = (f64::from(src_w) * scale).round() as u32;
    let new_h = (f64::from(src_h) * scale).round() as u32;

    (new_w.clamp(1, bound_w.max(1)), new_h.clamp(1, bound_h.max(1)))
}

/// Scale an image down to fit inside `(width, height)` preserving aspect ratio.
///
/// Returns the original image unchanged if it already fits.
pub fn fit_within(img: DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());
    let (new_w, new_h) = fit_within_dimensions((orig_w, orig_h), (width, height));

    if (new_w, new_h) == (orig_w, orig_h) {
        debug!(orig_w, orig_h, "Image already fits target, skipping resize");
        return img;
    }

    debug!(
        orig_w,
        orig_h,
        new_width = new_w,
        new_height = new_h,
        "Fitting image within target"
    );

    img.resize_exact(new_w, new_h, FilterType::Lanczos3)
}

/// Resize an image to an exact `side × side` square.
pub fn resize_square(img: &DynamicImage, side: u32) -> DynamicImage {
    debug!(
        orig_w = img.width(),
        orig_h = img.height(),
        side,
        "Resizing image to square"
    );
    img.resize_exact(side, side, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    /// Create a test DynamicImage with given dimensions.
    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let gray = GrayImage::from_pixel(width, height, Luma([128]));
        DynamicImage::ImageLuma8(gray)
    }

    #[test]
    fn test_fit_wide_into_square() {
        assert_eq!(fit_within_dimensions((1000, 500), (400, 400)), (400, 200));
    }

    #[test]
    fn test_fit_tall_into_square() {
        assert_eq!(fit_within_dimensions((500, 1000), (400, 400)), (200, 400));
    }

    #[test]
    fn test_fit_never_enlarges() {
        assert_eq!(fit_within_dimensions((100, 100), (200, 200)), (100, 100));
        assert_eq!(fit_within_dimensions((1200, 2000), (1242, 2208)), (1200, 2000));
    }

    #[test]
    fn test_fit_screenshot_into_device() {
        // 2000x4000 -> limited by width 1290: scale 0.645
        assert_eq!(fit_within_dimensions((2000, 4000), (1290, 2796)), (1290, 2580));
    }

    #[test]
    fn test_fit_preserves_non_zero_dimensions() {
        assert_eq!(fit_within_dimensions((10000, 1), (10, 10)), (10, 1));
        assert_eq!(fit_within_dimensions((1, 10000), (10, 10)), (1, 10));
    }

    #[test]
    fn test_fit_within_resizes_image() {
        let result = fit_within(create_test_image(800, 600), 400, 400);
        assert_eq!(result.width(), 400);
        assert_eq!(result.height(), 300);
    }

    #[test]
    fn test_fit_within_small_image_unchanged() {
        let result = fit_within(create_test_image(120, 80), 400, 400);
        assert_eq!((result.width(), result.height()), (120, 80));
    }

    #[test]
    fn test_resize_square_exact() {
        let img = create_test_image(1024, 1024);
        let small = resize_square(&img, 57);
        assert_eq!((small.width(), small.height()), (57, 57));
        let large = resize_square(&img, 512);
        assert_eq!((large.width(), large.height()), (512, 512));
    }
}
