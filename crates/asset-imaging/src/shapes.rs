//! Filled shape primitives with inclusive pixel bounds.
//!
//! Boxes follow the `[(x0, y0), (x1, y1)]` convention where both corners
//! are painted, so a box from 10 to 10 is one pixel wide.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut,
    draw_hollow_ellipse_mut,
};
use imageproc::rect::Rect;

/// An axis-aligned box with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelBox {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// True unless the box spans at least two pixels in both directions.
    pub fn is_degenerate(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }
}

/// Fill a box. Boxes with a negative extent are ignored.
pub fn fill_box(img: &mut RgbaImage, b: PixelBox, color: Rgba<u8>) {
    if b.right < b.left || b.bottom < b.top {
        return;
    }
    let rect = Rect::at(b.left, b.top).of_size(b.width() as u32, b.height() as u32);
    draw_filled_rect_mut(img, rect, color);
}

/// Fill a rectangle with rounded corners of the given radius.
pub fn fill_rounded_box(img: &mut RgbaImage, b: PixelBox, radius: i32, color: Rgba<u8>) {
    let radius = radius.min(b.width() / 2).min(b.height() / 2).max(0);
    if radius == 0 {
        fill_box(img, b, color);
        return;
    }

    // Cross of two boxes, then a disc in each corner.
    fill_box(
        img,
        PixelBox::new(b.left + radius, b.top, b.right - radius, b.bottom),
        color,
    );
    fill_box(
        img,
        PixelBox::new(b.left, b.top + radius, b.right, b.bottom - radius),
        color,
    );
    for (cx, cy) in [
        (b.left + radius, b.top + radius),
        (b.right - radius, b.top + radius),
        (b.left + radius, b.bottom - radius),
        (b.right - radius, b.bottom - radius),
    ] {
        draw_filled_circle_mut(img, (cx, cy), radius, color);
    }
}

/// Fill a circle and trace a one-pixel outline around it.
pub fn fill_outlined_circle(
    img: &mut RgbaImage,
    center: (i32, i32),
    radius: i32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    if radius <= 0 {
        return;
    }
    draw_filled_ellipse_mut(img, center, radius, radius, fill);
    draw_hollow_ellipse_mut(img, center, radius, radius, outline);
}
