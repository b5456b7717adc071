//! Paint the thermometer app icon set into the Xcode asset catalog.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use asset_tools::{ToolConfig, exit_status, icon_painter, logging};

#[derive(Debug, Parser)]
#[command(
    name = "create-icons",
    about = "Generate the thermometer app icons for the sensor monitor app"
)]
struct Args {
    /// AppIcon.appiconset directory (must already exist).
    #[arg(long, value_name = "DIR")]
    icon_dir: Option<PathBuf>,

    /// TTF/OTF font for the degree-Celsius mark.
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    logging::init();
    let args = Args::parse();

    let mut config = ToolConfig::load();
    if let Some(dir) = args.icon_dir {
        config.icon_dir = dir;
    }
    if args.font.is_some() {
        config.font_path = args.font;
    }
    let font = config.load_font();

    tracing::info!("Creating sensor monitor app icons...");
    let result = icon_painter::paint_icon_set(&config.icon_dir, font.as_ref());
    if let Ok(tally) = &result {
        tracing::info!(
            "Icon generation finished: {} created, {} failed",
            tally.succeeded,
            tally.failed
        );
        tracing::info!("Reopen the project in Xcode to check the icons.");
    }
    Ok(ExitCode::from(exit_status(&result)))
}
