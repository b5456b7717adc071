//! Asset generation pipelines for the EtoTH sensor monitor app.
//!
//! Three independent pipelines share this crate: the icon painter, the
//! App Store screenshot fitter and the web icon resizer. Each binary under
//! `src/bin` drives one of them.

use std::fmt::Display;
use std::path::PathBuf;

use asset_imaging::ImagingError;

pub mod config;
pub mod icon_painter;
pub mod logging;
pub mod profiles;
pub mod screenshot_fitter;
pub mod web_icon_resizer;

pub use config::ToolConfig;
pub use profiles::{DeviceProfile, SizeSpec};

/// Errors raised by the asset pipelines.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Icon directory not found: {}", .0.display())]
    IconDirMissing(PathBuf),

    #[error("Input file not found: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("Source directory '{}' does not exist", .0.display())]
    SourceDirMissing(PathBuf),

    #[error("No 1024x1024 images found in '{}'", .0.display())]
    NoSourceImages(PathBuf),

    #[error("Unsupported device type: {0}")]
    UnsupportedDevice(String),

    #[error(transparent)]
    Imaging(#[from] ImagingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    /// Process exit status for a run that stopped with this error.
    ///
    /// A missing icon directory or screenshot input is reported but still
    /// counts as a clean run.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::IconDirMissing(_) | Self::InputMissing(_) => 0,
            _ => 1,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Log a pipeline's error, if any, and return the process exit status.
pub fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            tracing::error!("{e}");
            e.exit_status()
        }
    }
}

/// Success/failure counts of one batch run.
///
/// Every unit of work is recorded independently, so one failure never
/// aborts the rest of the batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchTally {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchTally {
    /// Record one unit's outcome, logging failures under `label`.
    pub fn record<T, E: Display>(
        &mut self,
        label: &str,
        result: std::result::Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => {
                self.succeeded += 1;
                Some(value)
            }
            Err(e) => {
                tracing::error!("{label}: {e}");
                self.failed += 1;
                None
            }
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}
