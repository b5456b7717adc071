//! Orientation handling for store screenshots.
//!
//! Rotates a source image by a quarter turn when its aspect disagrees with
//! the requested orientation.

use std::fmt;
use std::str::FromStr;

use image::DynamicImage;
use tracing::debug;

use crate::ImagingError;

/// Screen orientation of a store screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ImagingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(ImagingError::UnknownOrientation(other.to_string())),
        }
    }
}

/// Rotate `img` so its content matches `target`.
///
/// A landscape source (wider than tall) bound for portrait is turned 90
/// degrees clockwise. A portrait or square source bound for landscape is
/// turned 90 degrees counter-clockwise. Anything else is returned unchanged.
pub fn orient_for(img: DynamicImage, target: Orientation) -> DynamicImage {
    let (w, h) = (img.width(), img.height());
    let is_landscape = w > h;

    match target {
        Orientation::Portrait if is_landscape => {
            debug!(w, h, "Landscape source, rotating clockwise for portrait");
            img.rotate90()
        }
        Orientation::Landscape if !is_landscape => {
            debug!(w, h, "Portrait source, rotating counter-clockwise for landscape");
            img.rotate270()
        }
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, GrayImage, Luma, Pixel};

    /// Create a test image with unique pixel values at corners.
    /// Top-left=10, Top-right=20, Bottom-left=30, Bottom-right=40
    fn create_corner_image(width: u32, height: u32) -> DynamicImage {
        let mut img = GrayImage::from_pixel(width, height, Luma([128]));
        img.put_pixel(0, 0, Luma([10]));
        img.put_pixel(width - 1, 0, Luma([20]));
        img.put_pixel(0, height - 1, Luma([30]));
        img.put_pixel(width - 1, height - 1, Luma([40]));
        DynamicImage::ImageLuma8(img)
    }

    fn pixel_value(img: &DynamicImage, x: u32, y: u32) -> u8 {
        img.to_luma8().get_pixel(x, y).channels()[0]
    }

    #[test]
    fn landscape_source_becomes_tall_for_portrait() {
        let result = orient_for(create_corner_image(6, 3), Orientation::Portrait);
        assert_eq!(result.dimensions(), (3, 6));

        // Clockwise: bottom-left lands top-left, top-left lands top-right
        assert_eq!(pixel_value(&result, 0, 0), 30);
        assert_eq!(pixel_value(&result, 2, 0), 10);
        assert_eq!(pixel_value(&result, 2, 5), 20);
        assert_eq!(pixel_value(&result, 0, 5), 40);
    }

    #[test]
    fn portrait_source_becomes_wide_for_landscape() {
        let result = orient_for(create_corner_image(3, 6), Orientation::Landscape);
        assert_eq!(result.dimensions(), (6, 3));

        // Counter-clockwise: top-right lands top-left
        assert_eq!(pixel_value(&result, 0, 0), 20);
        assert_eq!(pixel_value(&result, 0, 2), 10);
        assert_eq!(pixel_value(&result, 5, 2), 30);
        assert_eq!(pixel_value(&result, 5, 0), 40);
    }

    #[test]
    fn matching_orientation_is_unchanged() {
        let result = orient_for(create_corner_image(4, 8), Orientation::Portrait);
        assert_eq!(result.dimensions(), (4, 8));
        assert_eq!(pixel_value(&result, 0, 0), 10);

        let result = orient_for(create_corner_image(8, 4), Orientation::Landscape);
        assert_eq!(result.dimensions(), (8, 4));
        assert_eq!(pixel_value(&result, 0, 0), 10);
    }

    #[test]
    fn square_source_rotates_for_landscape_only() {
        let portrait = orient_for(create_corner_image(5, 5), Orientation::Portrait);
        assert_eq!(pixel_value(&portrait, 0, 0), 10);

        let landscape = orient_for(create_corner_image(5, 5), Orientation::Landscape);
        assert_eq!(pixel_value(&landscape, 0, 0), 20);
    }

    #[test]
    fn orientation_round_trips_through_text() {
        for o in Orientation::ALL {
            assert_eq!(o.as_str().parse::<Orientation>().unwrap(), o);
        }
        assert!(matches!(
            "sideways".parse::<Orientation>(),
            Err(ImagingError::UnknownOrientation(_))
        ));
    }
}
