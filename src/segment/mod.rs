//! Tenure segmentation: partition the joined series into per-chair paths.
//!
//! The segmenter owns two contracts:
//!
//! - structural validation of the tenure table (contiguous, non-overlapping,
//!   only the last tenure open-ended)
//! - the partition property: every kept point lands in exactly one path, in
//!   order, with a point on a tenure boundary assigned to the later tenure

use crate::domain::{ChairTenure, TenurePath, TimeSeriesPoint};
use crate::error::AppError;

/// Check the structural invariants of a tenure table.
pub fn validate_tenures(tenures: &[ChairTenure]) -> Result<(), AppError> {
    if tenures.is_empty() {
        return Err(AppError::usage("Tenure table is empty."));
    }

    for (i, tenure) in tenures.iter().enumerate() {
        let is_last = i + 1 == tenures.len();
        match tenure.end {
            None => {
                if !is_last {
                    return Err(AppError::usage(format!(
                        "Only the last tenure may be open-ended, but '{}' has no end date.",
                        tenure.name
                    )));
                }
            }
            Some(end) => {
                if end <= tenure.start {
                    return Err(AppError::usage(format!(
                        "Tenure '{}' ends on or before it starts ({} vs {}).",
                        tenure.name, end, tenure.start
                    )));
                }
                if !is_last && end != tenures[i + 1].start {
                    return Err(AppError::usage(format!(
                        "Tenures must be contiguous: '{}' ends {} but '{}' starts {}.",
                        tenure.name,
                        end,
                        tenures[i + 1].name,
                        tenures[i + 1].start
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Split the joined series into one path per tenure.
///
/// Points that predate the first tenure are dropped. A tenure that captures
/// zero points (e.g., one shorter than the series resolution, or entirely
/// before the data starts) is reported on stderr and skipped; rendering
/// simply never sees it.
pub fn segment(
    points: &[TimeSeriesPoint],
    tenures: &[ChairTenure],
) -> Result<Vec<TenurePath>, AppError> {
    validate_tenures(tenures)?;

    let mut paths = Vec::with_capacity(tenures.len());
    let mut next_idx = 0usize;

    for tenure in tenures {
        let segment_points: Vec<TimeSeriesPoint> = points
            .iter()
            .copied()
            .filter(|p| tenure.contains(p.date))
            .collect();

        if segment_points.is_empty() {
            let end = tenure
                .end
                .map(|d| d.to_string())
                .unwrap_or_else(|| "present".to_string());
            eprintln!(
                "warning: no data points in {}'s tenure ({} to {}); skipping.",
                tenure.name, tenure.start, end
            );
            continue;
        }

        let first_idx = next_idx;
        next_idx += segment_points.len();
        paths.push(TenurePath {
            tenure: tenure.clone(),
            points: segment_points,
            first_idx,
        });
    }

    Ok(paths)
}
