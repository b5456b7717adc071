//! Thermometer glyph geometry and rendering.
//!
//! All coordinates are integer with floor division, so a given size always
//! produces the same pixels.

use ab_glyph::{FontVec, PxScale};
use image::RgbaImage;
use tracing::debug;

use crate::shapes::{self, PixelBox};
use crate::text;
use crate::{ALERT_RED, STEEL_BLUE, TRANSPARENT, WHITE};

/// Number of tick marks along the stem.
pub const TICK_COUNT: i32 = 5;

/// Smallest icon that carries the degree-Celsius glyph.
pub const GLYPH_MIN_SIZE: u32 = 60;

/// Glyph candidates, tried in order until the font can render one.
const CELSIUS_GLYPHS: &[&str] = &["℃", "°C"];

/// Stem and bulb of a thermometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thermometer {
    pub stem: PixelBox,
    pub stem_height: i32,
    pub bulb_center: (i32, i32),
    pub bulb_radius: i32,
}

impl Thermometer {
    /// Lay out a thermometer whose stem is centred horizontally on `center.0`.
    ///
    /// The stem spans from `center.1 - height/2` down to `center.1 + height/4`
    /// and the bulb sits half a radius below the stem bottom.
    pub fn new(center: (i32, i32), stem_width: i32, stem_height: i32, bulb_radius: i32) -> Self {
        let (cx, cy) = center;
        let stem = PixelBox::new(
            cx - stem_width / 2,
            cy - stem_height / 2,
            cx + stem_width / 2,
            cy + stem_height / 4,
        );
        Self {
            stem,
            stem_height,
            bulb_center: (cx, stem.bottom + bulb_radius / 2),
            bulb_radius,
        }
    }

    /// Draw the white stem and the red, white-rimmed bulb.
    pub fn draw(&self, img: &mut RgbaImage) {
        shapes::fill_box(img, self.stem, WHITE);
        shapes::fill_outlined_circle(img, self.bulb_center, self.bulb_radius, ALERT_RED, WHITE);
    }
}

/// Every shape of the app icon at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    pub background: PixelBox,
    pub corner_radius: i32,
    pub thermometer: Thermometer,
    /// `None` when the computed liquid bounds are degenerate.
    pub liquid: Option<PixelBox>,
    pub ticks: Vec<PixelBox>,
    pub glyph_origin: Option<(i32, i32)>,
    pub glyph_px: f32,
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        let margin = s / 8;
        let center = s / 2;

        let stem_width = s / 12;
        let stem_height = s / 2;
        let thermometer = Thermometer::new((center, center), stem_width, stem_height, s / 8);
        let stem = thermometer.stem;

        let liquid_width = (stem_width - 4).max(2);
        let liquid_height = (stem_height / 2).max(4);
        let liquid = PixelBox::new(
            center - liquid_width / 2,
            stem.bottom - liquid_height,
            center + liquid_width / 2,
            stem.bottom,
        );
        let liquid = (!liquid.is_degenerate()).then_some(liquid);

        let tick_start = stem.right + 2;
        let tick_end = tick_start + s / 20;
        let tick_thickness = (s / 200).max(1);
        let ticks = (0..TICK_COUNT)
            .map(|i| {
                let y = stem.top + (stem_height * i) / (TICK_COUNT - 1);
                let top = y - (tick_thickness - 1) / 2;
                PixelBox::new(tick_start, top, tick_end, top + tick_thickness - 1)
            })
            .collect();

        let glyph_origin = (size >= GLYPH_MIN_SIZE).then_some((s - s / 4, s / 4));

        Self {
            size,
            background: PixelBox::new(margin, margin, s - margin, s - margin),
            corner_radius: s / 8,
            thermometer,
            liquid,
            ticks,
            glyph_origin,
            glyph_px: (s / 12).max(8) as f32,
        }
    }

    /// Render the icon onto a fresh transparent canvas.
    ///
    /// The degree-Celsius glyph is best effort: it is skipped when no font
    /// is given or the font cannot render it.
    pub fn render(&self, font: Option<&FontVec>) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.size, self.size, TRANSPARENT);

        shapes::fill_rounded_box(&mut img, self.background, self.corner_radius, STEEL_BLUE);
        self.thermometer.draw(&mut img);

        if let Some(liquid) = self.liquid {
            shapes::fill_box(&mut img, liquid, ALERT_RED);
        } else {
            debug!(size = self.size, "Liquid bounds degenerate, skipping");
        }

        for tick in &self.ticks {
            shapes::fill_box(&mut img, *tick, WHITE);
        }

        if let Some((x, y)) = self.glyph_origin {
            self.draw_glyph(&mut img, font, x, y);
        }

        img
    }

    fn draw_glyph(&self, img: &mut RgbaImage, font: Option<&FontVec>, x: i32, y: i32) {
        let Some(font) = font else {
            debug!(size = self.size, "No font configured, skipping glyph");
            return;
        };
        match text::first_renderable(font, CELSIUS_GLYPHS) {
            Some(glyph) => {
                text::draw_label(img, font, PxScale::from(self.glyph_px), x, y, glyph, WHITE);
            }
            None => debug!(size = self.size, "Font has no Celsius glyph, skipping"),
        }
    }
}

/// Draw the thermometer used on placeholder screenshots.
///
/// Proportions derive from `min(width, height) / 8` and the thermometer is shifted
/// 100px below the canvas centre to leave room for the title.
pub fn draw_sample_thermometer(img: &mut RgbaImage) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    let icon = w.min(h) / 8;
    let thermometer = Thermometer::new((w / 2, h / 2 + 100), icon / 6, icon, icon / 4);
    thermometer.draw(img);
}
