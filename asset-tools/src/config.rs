//! Tool configuration: built-in defaults, `.env` files and environment overrides.

use std::path::PathBuf;

use ab_glyph::FontVec;
use asset_imaging::text;

/// Directories and font used by the asset pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub icon_dir: PathBuf,
    pub screenshot_output_dir: PathBuf,
    pub web_source_dir: PathBuf,
    pub web_output_dir: PathBuf,
    /// TTF/OTF used for text overlays. Overlays are skipped without one.
    pub font_path: Option<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            icon_dir: "EtoTHSensorMonitor/Assets.xcassets/AppIcon.appiconset".into(),
            screenshot_output_dir: "app_store_screenshots".into(),
            web_source_dir: "app_icons".into(),
            web_output_dir: "web_icons".into(),
            font_path: None,
        }
    }
}

impl ToolConfig {
    /// Load `.env` if present, then apply environment overrides.
    pub fn load() -> Self {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from defaults plus whatever `lookup` returns.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = get("ICON_ASSET_DIR") {
            config.icon_dir = v.into();
        }
        if let Some(v) = get("SCREENSHOT_OUTPUT_DIR") {
            config.screenshot_output_dir = v.into();
        }
        if let Some(v) = get("WEB_ICON_SOURCE_DIR") {
            config.web_source_dir = v.into();
        }
        if let Some(v) = get("WEB_ICON_OUTPUT_DIR") {
            config.web_output_dir = v.into();
        }
        if let Some(v) = get("ASSET_FONT_PATH") {
            config.font_path = Some(v.into());
        }

        config
    }

    /// Load the overlay font.
    ///
    /// The configured font wins. Without one, or when it fails to load, the
    /// first usable system font is tried. `None` only when nothing loads.
    pub fn load_font(&self) -> Option<FontVec> {
        self.load_font_from(&text::system_font_candidates())
    }

    fn load_font_from(&self, fallbacks: &[PathBuf]) -> Option<FontVec> {
        if let Some(path) = self.font_path.as_deref() {
            match text::load_font(path) {
                Ok(font) => {
                    tracing::info!(path = %path.display(), "Loaded overlay font");
                    return Some(font);
                }
                Err(e) => tracing::warn!("Configured font unusable, trying system fonts: {e}"),
            }
        }

        match text::load_first_font(fallbacks) {
            Some((path, font)) => {
                tracing::info!(path = %path.display(), "Loaded system font");
                Some(font)
            }
            None => {
                tracing::warn!("No usable font found, text overlays disabled");
                None
            }
        }
    }
}

fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::debug!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}
