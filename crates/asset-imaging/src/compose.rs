//! Image composition utilities — alpha flattening and centred padding.

use image::{DynamicImage, Rgb, RgbImage, Rgba, imageops};
use tracing::debug;

/// Flatten any transparency onto an opaque `background`.
///
/// Images without an alpha channel are simply converted to RGB. Palette
/// transparency is already expanded to an alpha channel by the decoder.
pub fn flatten_onto(img: &DynamicImage, background: Rgb<u8>) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    debug!(
        w = img.width(),
        h = img.height(),
        "Flattening alpha onto opaque background"
    );
    let rgba = img.to_rgba8();
    let mut result = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        result.put_pixel(x, y, blend_pixel(&background, pixel));
    }
    result
}

/// Paste `img` centred on a `width × height` canvas filled with `background`.
///
/// Offsets are `((width - w) / 2, (height - h) / 2)`; an image larger than
/// the canvas is clipped.
pub fn pad_centered(img: &RgbImage, width: u32, height: u32, background: Rgb<u8>) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, background);
    let x = (i64::from(width) - i64::from(img.width())) / 2;
    let y = (i64::from(height) - i64::from(img.height())) / 2;
    debug!(width, height, x, y, "Padding image onto canvas");
    imageops::replace(&mut canvas, img, x, y);
    canvas
}

fn blend_pixel(bg: &Rgb<u8>, fg: &Rgba<u8>) -> Rgb<u8> {
    let alpha = f32::from(fg[3]) / 255.0;
    let inv = 1.0 - alpha;
    let mix = |f: u8, b: u8| (f32::from(f) * alpha + f32::from(b) * inv).round() as u8;
    Rgb([mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2])])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, RgbaImage};

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn flatten_turns_transparent_pixels_white() {
        let mut rgba = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        rgba.put_pixel(1, 1, Rgba([10, 20, 30, 255]));
        let flat = flatten_onto(&DynamicImage::ImageRgba8(rgba), WHITE);

        assert_eq!(flat.get_pixel(0, 0), &WHITE);
        assert_eq!(flat.get_pixel(1, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn flatten_blends_partial_alpha() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let flat = flatten_onto(&DynamicImage::ImageRgba8(rgba), WHITE);
        let v = flat.get_pixel(0, 0)[0];
        assert!((126..=128).contains(&v), "got {v}");
    }

    #[test]
    fn flatten_handles_gray_alpha() {
        let la = GrayAlphaImage::from_pixel(2, 2, LumaA([0, 0]));
        let flat = flatten_onto(&DynamicImage::ImageLumaA8(la), WHITE);
        assert!(flat.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn flatten_converts_opaque_images() {
        let rgb = DynamicImage::new_rgb8(3, 2);
        let flat = flatten_onto(&rgb, WHITE);
        assert_eq!(flat.dimensions(), (3, 2));
        assert_eq!(flat.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn pad_centres_image() {
        let img = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let padded = pad_centered(&img, 6, 5, WHITE);

        assert_eq!(padded.dimensions(), (6, 5));
        // offset (2, 1)
        assert_eq!(padded.get_pixel(2, 1), &Rgb([0, 0, 0]));
        assert_eq!(padded.get_pixel(3, 2), &Rgb([0, 0, 0]));
        assert_eq!(padded.get_pixel(1, 1), &WHITE);
        assert_eq!(padded.get_pixel(4, 3), &WHITE);
    }

    #[test]
    fn pad_clips_oversized_image() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let padded = pad_centered(&img, 4, 4, WHITE);
        assert_eq!(padded.dimensions(), (4, 4));
        assert!(padded.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
