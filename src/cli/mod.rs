//! Command-line parsing for the Phillips curve animator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the data and rendering code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "phillips",
    version,
    about = "Phillips Curve animation by Fed Chair (FRED-based)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the full animated GIF (the default when no subcommand is given).
    Render(RenderArgs),
    /// Render the preview frame (all tenures filled) to a PNG.
    Preview(PreviewArgs),
    /// Fetch both series, refresh the cache, and print a dataset summary.
    Fetch(DataArgs),
}

/// Where the data comes from.
#[derive(Debug, Parser, Clone)]
pub struct DataArgs {
    /// First observation date requested from FRED.
    #[arg(long, default_value = "1970-01-01")]
    pub start: NaiveDate,

    /// Last observation date requested from FRED (defaults to today).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Directory for cached series CSVs.
    #[arg(long, default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Skip the network and load from the cache only.
    #[arg(long)]
    pub offline: bool,
}

/// Chart geometry shared by `render` and `preview`.
#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    /// Output image width in pixels.
    #[arg(long, default_value_t = 960)]
    pub width: u32,

    /// Output image height in pixels.
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

/// Options for the full animation.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub chart: ChartArgs,

    /// Output GIF path.
    #[arg(short, long, default_value = "phillips_curve.gif")]
    pub output: PathBuf,

    /// Animation frames per data point (playback speed).
    #[arg(long, default_value_t = 1)]
    pub frames_per_point: usize,

    /// Extra copies of the final frame held at the end.
    #[arg(long, default_value_t = 25)]
    pub pause_frames: usize,

    /// Delay between GIF frames, in milliseconds.
    #[arg(long, default_value_t = 50)]
    pub frame_delay_ms: u32,

    /// Skip the preview frame at the start of the animation.
    #[arg(long)]
    pub no_preview_frame: bool,
}

/// Options for the standalone preview image.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub chart: ChartArgs,

    /// Output PNG path.
    #[arg(short, long, default_value = "phillips_preview.png")]
    pub output: PathBuf,
}
