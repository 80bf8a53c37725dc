//! Backend-free per-frame classification.
//!
//! Everything the drawing code needs is derived here from the frame index
//! and the immutable dataset, so the "completed vs. growing" logic can be
//! unit-tested without touching a drawing backend, and identical inputs
//! always produce identical frames.

use crate::domain::{RenderConfig, TenurePath};

/// How one tenure path is drawn in a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    /// Closed tenure fully in the past: filled polygon.
    Completed,
    /// Tenure in progress: open line through the first `upto` points.
    Growing { upto: usize },
    /// Tenure not reached yet: not drawn.
    Pending,
}

/// Drawing plan for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    /// Index of the frame's current data point in the segmented series.
    pub current: usize,
    /// Per-path states, parallel to the segmenter's path list.
    pub states: Vec<PathState>,
    /// Ring highlight on the current point (off once the series is done).
    pub highlight_current: bool,
    /// "We are here" annotation on the last data point.
    pub annotate_here: bool,
}

impl FramePlan {
    /// Classify every path for animation frame `frame`.
    pub fn at(frame: usize, paths: &[TenurePath], n_points: usize, config: &RenderConfig) -> Self {
        let per_point = config.frames_per_point.max(1);
        let current = (frame / per_point).min(n_points.saturating_sub(1));
        let at_end = current + 1 >= n_points;

        FramePlan {
            current,
            states: paths.iter().map(|p| classify(p, current)).collect(),
            highlight_current: !at_end,
            annotate_here: at_end,
        }
    }

    /// The preview plan: every tenure shown filled, final point annotated.
    pub fn preview(paths: &[TenurePath], n_points: usize) -> Self {
        FramePlan {
            current: n_points.saturating_sub(1),
            states: vec![PathState::Completed; paths.len()],
            highlight_current: false,
            annotate_here: true,
        }
    }
}

fn classify(path: &TenurePath, current: usize) -> PathState {
    if path.first_idx > current {
        return PathState::Pending;
    }
    // An open-ended tenure is never "fully in the past": it keeps growing
    // even while the final frame is held.
    if !path.tenure.is_open_ended() && path.last_idx() < current {
        return PathState::Completed;
    }
    let upto = current.min(path.last_idx()) - path.first_idx + 1;
    PathState::Growing { upto }
}
