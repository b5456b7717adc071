//! Resize screenshots to App Store sizes, or generate placeholder samples.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, ValueEnum, builder::PossibleValuesParser};

use asset_imaging::Orientation;
use asset_tools::profiles::{self, DEVICE_NAMES};
use asset_tools::{BatchTally, ToolConfig, exit_status, logging, screenshot_fitter};

const EXAMPLES: &str = "\
Examples:
  # All devices and orientations
  create-screenshots screenshot.png

  # iPhone 6.7\" only, portrait only
  create-screenshots screenshot.png --device iPhone_6_7 --orientation portrait

  # Placeholder samples for one device
  create-screenshots --sample --device iPhone_6_7";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "create-screenshots",
    about = "Resize screenshots to the sizes required by the App Store",
    after_help = format!("{}\n{EXAMPLES}", profiles::device_help())
)]
struct Args {
    /// Image file to convert.
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Generate placeholder screenshots instead of resizing a file.
    #[arg(long)]
    sample: bool,

    /// Only generate for this device.
    #[arg(short, long, value_parser = PossibleValuesParser::new(DEVICE_NAMES))]
    device: Option<String>,

    /// Only generate this orientation.
    #[arg(short, long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Output directory [default: app_store_screenshots]
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// TTF/OTF font for sample screenshot text.
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,
}

fn report(tally: BatchTally, output_dir: &std::path::Path) {
    tracing::info!(
        "Finished: succeeded {}, failed {}",
        tally.succeeded,
        tally.failed
    );
    if tally.succeeded > 0 {
        tracing::info!("Output: {}/", output_dir.display());
    }
}

fn main() -> anyhow::Result<ExitCode> {
    logging::init();
    let args = Args::parse();

    let mut config = ToolConfig::load();
    if let Some(dir) = args.output_dir {
        config.screenshot_output_dir = dir;
    }
    if args.font.is_some() {
        config.font_path = args.font;
    }
    let output_dir = config.screenshot_output_dir.clone();

    let device = args.device.as_deref().map(profiles::device).transpose()?;
    let orientation = args.orientation.map(Orientation::from);
    let targets = screenshot_fitter::targets(device, orientation);

    if let Some(profile) = device {
        tracing::info!("Device: {} ({})", profile.name, profile.description);
    }
    if let Some(o) = orientation {
        tracing::info!("Orientation: {o}");
    }

    if args.sample {
        tracing::info!("Generating sample screenshots...");
        let font = config.load_font();
        let tally = screenshot_fitter::generate_samples(&targets, &output_dir, font.as_ref())?;
        report(tally, &output_dir);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(input) = args.input_file else {
        Args::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    tracing::info!("Processing image: {}", input.display());
    let result = screenshot_fitter::fit_all(&input, &targets, &output_dir);
    if let Ok(tally) = &result {
        report(*tally, &output_dir);
    }
    Ok(ExitCode::from(exit_status(&result)))
}
