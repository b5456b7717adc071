//! Generate 57x57 and 512x512 web icons from 1024x1024 sources.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use asset_tools::{ToolConfig, exit_status, logging, web_icon_resizer};

#[derive(Debug, Parser)]
#[command(
    name = "create-web-icons",
    about = "Generate web distribution icons from 1024x1024 source images"
)]
struct Args {
    /// Source directory containing 1024x1024 images [default: app_icons]
    #[arg(long, value_name = "DIR")]
    source_dir: Option<PathBuf>,

    /// Output directory for generated icons [default: web_icons]
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    logging::init();
    let args = Args::parse();

    let config = ToolConfig::load();
    let source_dir = args.source_dir.unwrap_or(config.web_source_dir);
    let output_dir = args.output_dir.unwrap_or(config.web_output_dir);

    let result = web_icon_resizer::process_directory(&source_dir, &output_dir);
    if let Ok(summary) = &result {
        tracing::info!(
            "Completed: {}/{} images processed successfully",
            summary.succeeded,
            summary.total
        );
    }
    Ok(ExitCode::from(exit_status(&result)))
}
