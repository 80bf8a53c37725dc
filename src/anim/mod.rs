//! Animation assembly: frame sequencing and GIF/PNG output.
//!
//! Frame generation is strictly sequential; each frame is recomputed from
//! the immutable dataset, so an interrupted run leaves a truncated file and
//! nothing else. There are no resume semantics.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::{RenderConfig, TenurePath, TimeSeriesPoint};
use crate::error::AppError;
use crate::render::{FrameKind, FramePlan, draw_frame};

/// One entry in the animation's frame sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// The all-tenures preview frame.
    Preview,
    /// Animation frame with the given index.
    Animate(usize),
}

/// Build the full frame sequence: optional preview, one step per animation
/// frame, then the final frame held for the configured pause.
pub fn frame_sequence(n_points: usize, config: &RenderConfig) -> Vec<FrameStep> {
    let per_point = config.frames_per_point.max(1);
    let total = n_points * per_point;

    let mut steps = Vec::with_capacity(total + config.pause_frames + 1);
    if config.preview_frame {
        steps.push(FrameStep::Preview);
    }
    steps.extend((0..total).map(FrameStep::Animate));
    if total > 0 {
        steps.extend(std::iter::repeat_n(FrameStep::Animate(total - 1), config.pause_frames));
    }
    steps
}

/// Render the full animation to `path` as a looping GIF.
pub fn export_gif(
    path: &Path,
    points: &[TimeSeriesPoint],
    paths: &[TenurePath],
    config: &RenderConfig,
) -> Result<(), AppError> {
    let steps = frame_sequence(points.len(), config);
    println!(
        "Rendering {} frames ({}x{}, {}ms/frame) to {} ...",
        steps.len(),
        config.width,
        config.height,
        config.frame_delay_ms,
        path.display()
    );

    let backend = BitMapBackend::gif(path, (config.width, config.height), config.frame_delay_ms)
        .map_err(|e| AppError::usage(format!("Failed to create GIF '{}': {e}", path.display())))?;
    let area = backend.into_drawing_area();

    for (i, step) in steps.iter().enumerate() {
        let (kind, plan) = match *step {
            FrameStep::Preview => (FrameKind::Preview, FramePlan::preview(paths, points.len())),
            FrameStep::Animate(frame) => (
                FrameKind::Animation,
                FramePlan::at(frame, paths, points.len(), config),
            ),
        };
        draw_frame(&area, kind, &plan, paths, points, config)?;
        area.present()
            .map_err(|e| AppError::render(format!("Failed to emit frame {i}: {e}")))?;

        if (i + 1) % 25 == 0 {
            println!("  {}/{} frames", i + 1, steps.len());
        }
    }

    println!("Animation complete: {}", path.display());
    Ok(())
}

/// Render the preview frame alone to `path` as a PNG.
pub fn export_preview_png(
    path: &Path,
    points: &[TimeSeriesPoint],
    paths: &[TenurePath],
    config: &RenderConfig,
) -> Result<(), AppError> {
    let area = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    let plan = FramePlan::preview(paths, points.len());

    draw_frame(&area, FrameKind::Preview, &plan, paths, points, config)?;
    area.present()
        .map_err(|e| AppError::render(format!("Failed to write '{}': {e}", path.display())))?;

    println!("Preview written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_preview_then_animation_then_pause() {
        let config = RenderConfig {
            frames_per_point: 2,
            pause_frames: 4,
            preview_frame: true,
            ..RenderConfig::default()
        };
        let steps = frame_sequence(3, &config);

        assert_eq!(steps.len(), 1 + 6 + 4);
        assert_eq!(steps[0], FrameStep::Preview);
        assert_eq!(steps[1], FrameStep::Animate(0));
        assert_eq!(steps[6], FrameStep::Animate(5));
        assert!(steps[7..].iter().all(|s| *s == FrameStep::Animate(5)));
    }

    #[test]
    fn preview_frame_can_be_disabled() {
        let config = RenderConfig {
            frames_per_point: 1,
            pause_frames: 0,
            preview_frame: false,
            ..RenderConfig::default()
        };
        let steps = frame_sequence(2, &config);
        assert_eq!(steps, vec![FrameStep::Animate(0), FrameStep::Animate(1)]);
    }

    #[test]
    fn empty_dataset_yields_no_animation_frames() {
        let config = RenderConfig {
            preview_frame: false,
            pause_frames: 10,
            ..RenderConfig::default()
        };
        assert!(frame_sequence(0, &config).is_empty());
    }
}
