//! ig-to-csv - Bezier track curves from iSpy event files
//!
//! Reads a single event (`.json` or no extension) or an event archive (`.ig`)
//! and writes one CSV row per track, one file per event or, with `--combine`,
//! one file for the whole archive.
use std::path::PathBuf;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use igcurve::batch::driver::export;
use igcurve::batch::params::{ErrorPolicy, ExportParams};
use igcurve::batch::source::EventSource;
use igcurve::constants::DEFAULT_OUTPUT_DIR;

/// Command-line arguments for ig-to-csv
#[derive(Parser, Debug)]
#[command(name = "ig-to-csv")]
#[command(about = "Derive Bezier track curves from iSpy event files and write them as CSV")]
#[command(version)]
struct Args {
    /// Event document (.json or no extension) or event archive (.ig)
    #[arg(long)]
    file: PathBuf,

    /// Merge the curves of every archive member into a single CSV file
    #[arg(long)]
    combine: bool,

    /// Directory receiving the CSV files
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Leave failing events out instead of stopping the batch
    #[arg(long)]
    skip_failed: bool,

    /// Write a header-only file when an output has no curves
    #[arg(long)]
    write_empty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "igcurve=info,ig_to_csv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let file = Utf8PathBuf::from_path_buf(args.file)
        .map_err(|p| anyhow::anyhow!("input path is not valid UTF-8: {}", p.display()))?;
    let output_dir = Utf8PathBuf::from_path_buf(args.output_dir)
        .map_err(|p| anyhow::anyhow!("output directory is not valid UTF-8: {}", p.display()))?;

    let source = EventSource::from_path(file).context("I don't recognize this format")?;

    let params = ExportParams::builder()
        .output_dir(output_dir)
        .combine(args.combine)
        .error_policy(if args.skip_failed {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        })
        .write_empty(args.write_empty)
        .build()?;
    info!("{params}");

    let report = export(&source, &params)
        .with_context(|| format!("Failed to process {}", source.path()))?;

    for path in &report.written {
        info!("Written to {path}");
    }
    println!("{:#}", report.summary);
    Ok(())
}
