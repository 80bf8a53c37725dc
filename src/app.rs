//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads and joins the FRED series (network with cache fallback)
//! - segments the joined series by Fed Chair tenure
//! - renders the animation, preview image, or dataset summary

use clap::Parser;

use crate::cli::{Command, DataArgs, PreviewArgs, RenderArgs};
use crate::domain::{DataConfig, RenderConfig, default_chairs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `phillips` binary.
pub fn run() -> Result<(), AppError> {
    // We want `phillips` and `phillips --offline` to behave like
    // `phillips render ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the one-shot UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Render(args) => handle_render(args),
        Command::Preview(args) => handle_preview(args),
        Command::Fetch(args) => handle_fetch(args),
    }
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let data_config = data_config_from_args(&args.data);
    let render_config = RenderConfig {
        width: args.chart.width,
        height: args.chart.height,
        frames_per_point: args.frames_per_point.max(1),
        pause_frames: args.pause_frames,
        frame_delay_ms: args.frame_delay_ms,
        preview_frame: !args.no_preview_frame,
        ..RenderConfig::default()
    };

    let dataset = pipeline::prepare(&data_config, &default_chairs())?;
    print!("{}", pipeline::format_summary(&dataset));

    crate::anim::export_gif(&args.output, &dataset.points, &dataset.paths, &render_config)
}

fn handle_preview(args: PreviewArgs) -> Result<(), AppError> {
    let data_config = data_config_from_args(&args.data);
    let render_config = RenderConfig {
        width: args.chart.width,
        height: args.chart.height,
        ..RenderConfig::default()
    };

    let dataset = pipeline::prepare(&data_config, &default_chairs())?;
    print!("{}", pipeline::format_summary(&dataset));

    crate::anim::export_preview_png(&args.output, &dataset.points, &dataset.paths, &render_config)
}

fn handle_fetch(args: DataArgs) -> Result<(), AppError> {
    let dataset = pipeline::prepare(&data_config_from_args(&args), &default_chairs())?;
    print!("{}", pipeline::format_summary(&dataset));
    Ok(())
}

pub fn data_config_from_args(args: &DataArgs) -> DataConfig {
    DataConfig {
        unemployment_series: "UNRATE".to_string(),
        inflation_series: "CPILFESL".to_string(),
        start: args.start,
        end: args.end.unwrap_or_else(|| chrono::Local::now().date_naive()),
        cache_dir: args.cache_dir.clone(),
        offline: args.offline,
    }
}

/// Rewrite argv so `phillips` defaults to `phillips render`.
///
/// Rules:
/// - `phillips`                      -> `phillips render`
/// - `phillips --offline ...`        -> `phillips render --offline ...`
/// - `phillips --help/--version/-h`  -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("render".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "render" | "preview" | "fetch");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "render flags".
    if arg1.starts_with('-') {
        argv.insert(1, "render".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_render() {
        assert_eq!(rewrite_args(args(&["phillips"])), args(&["phillips", "render"]));
        assert_eq!(
            rewrite_args(args(&["phillips", "--offline"])),
            args(&["phillips", "render", "--offline"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["phillips", "fetch"])),
            args(&["phillips", "fetch"])
        );
        assert_eq!(
            rewrite_args(args(&["phillips", "--help"])),
            args(&["phillips", "--help"])
        );
    }
}
