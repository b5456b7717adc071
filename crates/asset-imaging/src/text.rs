//! Text overlays for icons and placeholder screenshots.
//!
//! Text is decorative: callers pass `Option<&FontVec>` and every drawing
//! helper degrades to a no-op when no usable font or glyph is available.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::debug;

use crate::{ImagingError, Result};

const VALID_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// Load a TTF/OTF font from disk. For a `.ttc` collection the first face is used.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !VALID_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ImagingError::InvalidFont(path.to_path_buf()));
    }

    let data = std::fs::read(path).map_err(|source| ImagingError::FontIo {
        path: path.to_path_buf(),
        source,
    })?;
    FontVec::try_from_vec(data).map_err(|_| ImagingError::InvalidFont(path.to_path_buf()))
}

/// Well-known font files that ship with the operating system.
pub fn system_font_candidates() -> Vec<PathBuf> {
    #[cfg(target_os = "macos")]
    let candidates = [
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/Library/Fonts/Arial Unicode.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
    ];

    #[cfg(target_os = "windows")]
    let candidates = [
        "C:\\Windows\\Fonts\\arial.ttf",
        "C:\\Windows\\Fonts\\segoeui.ttf",
        "C:\\Windows\\Fonts\\YuGothM.ttc",
    ];

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ];

    candidates.iter().map(PathBuf::from).collect()
}

/// Load the first candidate that exists and parses as a font.
pub fn load_first_font<P: AsRef<Path>>(candidates: &[P]) -> Option<(PathBuf, FontVec)> {
    for candidate in candidates {
        let path: &Path = candidate.as_ref();
        if !path.exists() {
            continue;
        }
        match load_font(path) {
            Ok(font) => return Some((path.to_path_buf(), font)),
            Err(e) => debug!(path = %path.display(), "Skipping font candidate: {e}"),
        }
    }
    None
}

/// True if the font has a real glyph (not `.notdef`) for every character.
pub fn has_glyphs(font: &impl Font, text: &str) -> bool {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| font.glyph_id(c).0 != 0)
}

/// Return the first candidate the font can fully render.
pub fn first_renderable<'a>(font: &impl Font, candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|t| has_glyphs(font, t))
}

/// Compute the line height for the given font and scale.
pub fn line_height(font: &impl Font, scale: PxScale) -> u32 {
    let scaled = font.as_scaled(scale);
    (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Returns false (drawing nothing) if the font lacks any of the glyphs.
pub fn draw_label(
    img: &mut RgbaImage,
    font: &impl Font,
    scale: PxScale,
    x: i32,
    y: i32,
    text: &str,
    color: Rgba<u8>,
) -> bool {
    if !has_glyphs(font, text) {
        debug!(text, "Font is missing glyphs, skipping label");
        return false;
    }
    draw_text_mut(img, color, x, y, scale, font, text);
    true
}

/// Draw text horizontally centred on the image with its top at `y`.
///
/// Returns the rendered height, or 0 when nothing was drawn.
pub fn draw_centered_text(
    img: &mut RgbaImage,
    font: &impl Font,
    scale: PxScale,
    y: i32,
    text: &str,
    color: Rgba<u8>,
) -> u32 {
    let (width, height) = text_size(scale, font, text);
    let x = ((img.width() as i32) - width as i32).max(0) / 2;
    if draw_label(img, font, scale, x, y, text, color) {
        height
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_font_rejects_unknown_extension() {
        let err = load_font(Path::new("fonts/readme.txt")).unwrap_err();
        assert!(matches!(err, ImagingError::InvalidFont(_)));
    }

    #[test]
    fn load_font_reports_missing_file() {
        let err = load_font(Path::new("definitely/not/here.ttf")).unwrap_err();
        assert!(matches!(err, ImagingError::FontIo { .. }));
    }

    #[test]
    fn load_font_rejects_garbage_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let err = load_font(&path).unwrap_err();
        assert!(matches!(err, ImagingError::InvalidFont(_)));
    }

    #[test]
    fn first_font_skips_missing_and_broken_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.ttf");
        std::fs::write(&broken, b"not a font").unwrap();
        let candidates = [dir.path().join("missing.ttf"), broken];

        assert!(load_first_font(&candidates).is_none());
    }

    #[test]
    fn first_font_returns_the_candidate_that_loaded() {
        let Some(system) = system_font_candidates().into_iter().find(|p| load_font(p).is_ok())
        else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let candidates = [dir.path().join("missing.ttf"), system.clone()];

        let (path, _) = load_first_font(&candidates).unwrap();
        assert_eq!(path, system);
    }
}
