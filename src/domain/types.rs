//! Shared domain types.
//!
//! These types are intentionally lightweight and serializable so they can be:
//!
//! - held in memory during frame generation
//! - exported to JSON/CSV if a downstream tool wants the joined series
//! - inspected in tests without any drawing backend

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One joined monthly observation.
///
/// Immutable once loaded; the joined series is sorted ascending by date and
/// dates are unique (inner join of two monthly series).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    /// Unemployment rate, percent.
    pub unemployment: f64,
    /// Core CPI year-over-year change, percent.
    pub inflation: f64,
}

/// One Fed Chair's tenure, with its display color.
///
/// The table of tenures is contiguous and non-overlapping: each tenure's
/// `end` equals the next tenure's `start`, and only the last tenure may be
/// open-ended (`end = None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChairTenure {
    pub name: String,
    pub start: NaiveDate,
    /// `None` marks the open-ended (current) tenure.
    pub end: Option<NaiveDate>,
    /// Display color as (r, g, b).
    pub color: (u8, u8, u8),
}

impl ChairTenure {
    /// Whether `date` falls within `[start, end)`.
    ///
    /// A date exactly on `end` belongs to the *next* tenure. An open-ended
    /// tenure contains every date from `start` onward.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.is_none_or(|end| date < end)
    }

    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}

/// The slice of the joined series that falls within one tenure.
///
/// Derived data: recomputed from the joined series, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TenurePath {
    pub tenure: ChairTenure,
    /// Points within the tenure, ascending by date; never empty.
    pub points: Vec<TimeSeriesPoint>,
    /// Index of the first point within the segmented series.
    pub first_idx: usize,
}

impl TenurePath {
    /// Index of the last point within the segmented series.
    pub fn last_idx(&self) -> usize {
        self.first_idx + self.points.len() - 1
    }

    /// `(unemployment, inflation)` pairs in chart coordinates.
    pub fn xy(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.unemployment, p.inflation))
    }
}

/// Where the series come from and how they are cached.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// FRED series id for the unemployment rate (UNRATE).
    pub unemployment_series: String,
    /// FRED series id for the core CPI index (CPILFESL).
    pub inflation_series: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Directory holding one `<SERIES>.csv` per cached series.
    pub cache_dir: PathBuf,
    /// Skip the network entirely and read the cache only.
    pub offline: bool,
}

/// The Fed's informal dual-mandate comfort region, drawn as a reference box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetZone {
    /// Unemployment range, percent (x axis).
    pub unemployment: (f64, f64),
    /// Inflation range, percent (y axis).
    pub inflation: (f64, f64),
}

impl Default for TargetZone {
    fn default() -> Self {
        Self {
            unemployment: (4.0, 6.0),
            inflation: (2.0, 3.0),
        }
    }
}

/// Chart geometry and playback knobs.
///
/// Playback speed (`frames_per_point`), the end-of-animation hold
/// (`pause_frames`), and the inter-frame delay are cosmetic parameters, so
/// they are configuration rather than constants.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Animation frames emitted per data point (>= 1).
    pub frames_per_point: usize,
    /// Extra copies of the final frame appended at the end.
    pub pause_frames: usize,
    /// Delay between GIF frames, milliseconds.
    pub frame_delay_ms: u32,
    /// Prepend the all-tenures preview frame to the animation.
    pub preview_frame: bool,
    /// Unemployment axis range, percent.
    pub x_range: (f64, f64),
    /// Inflation axis range, percent.
    pub y_range: (f64, f64),
    pub target_zone: TargetZone,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
            frames_per_point: 1,
            pause_frames: 25,
            frame_delay_ms: 50,
            preview_frame: true,
            x_range: (0.0, 15.0),
            y_range: (0.0, 15.0),
            target_zone: TargetZone::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn tenure_boundary_is_half_open() {
        let tenure = ChairTenure {
            name: "X".to_string(),
            start: date(2000, 1),
            end: Some(date(2000, 3)),
            color: (0, 0, 0),
        };
        assert!(tenure.contains(date(2000, 1)));
        assert!(tenure.contains(date(2000, 2)));
        // A point exactly on the end date belongs to the next tenure.
        assert!(!tenure.contains(date(2000, 3)));
    }

    #[test]
    fn open_ended_tenure_has_no_upper_bound() {
        let tenure = ChairTenure {
            name: "X".to_string(),
            start: date(2018, 2),
            end: None,
            color: (0, 0, 0),
        };
        assert!(tenure.contains(date(2099, 12)));
        assert!(!tenure.contains(date(2018, 1)));
    }

    #[test]
    fn tenure_path_index_range() {
        let points: Vec<TimeSeriesPoint> = (1..=3)
            .map(|m| TimeSeriesPoint {
                date: date(2020, m),
                unemployment: 4.0,
                inflation: 2.0,
            })
            .collect();
        let path = TenurePath {
            tenure: ChairTenure {
                name: "X".to_string(),
                start: date(2020, 1),
                end: None,
                color: (0, 0, 0),
            },
            points,
            first_idx: 5,
        };
        assert_eq!(path.last_idx(), 7);
    }
}
