//! Shared load→segment pipeline used by all subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! FRED fetch (with cache fallback) -> YoY transform -> join -> segmentation
//!
//! The subcommands then focus on presentation (GIF, PNG, or summary text).

use crate::data;
use crate::domain::{ChairTenure, DataConfig, TenurePath, TimeSeriesPoint};
use crate::error::AppError;
use crate::segment;

/// The fully prepared inputs for rendering.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Points covered by some tenure, ascending; frame indices refer here.
    pub points: Vec<TimeSeriesPoint>,
    /// One path per tenure that has data, in tenure order.
    pub paths: Vec<TenurePath>,
}

/// Load both series and partition the joined result by chair tenure.
pub fn prepare(config: &DataConfig, chairs: &[ChairTenure]) -> Result<Dataset, AppError> {
    let joined = data::load_joined_series(config)?;
    let paths = segment::segment(&joined, chairs)?;
    if paths.is_empty() {
        return Err(AppError::data_unavailable(
            "No tenure contains any data points.",
        ));
    }

    let points: Vec<TimeSeriesPoint> = paths
        .iter()
        .flat_map(|p| p.points.iter().copied())
        .collect();

    Ok(Dataset { points, paths })
}

/// Format the dataset summary printed before rendering.
pub fn format_summary(dataset: &Dataset) -> String {
    let mut out = String::new();
    out.push_str("=== phillips - Phillips Curve by Fed Chair ===\n");

    if let (Some(first), Some(last)) = (dataset.points.first(), dataset.points.last()) {
        out.push_str(&format!(
            "Span: {} to {} ({} monthly points)\n",
            first.date,
            last.date,
            dataset.points.len()
        ));
    }
    for path in &dataset.paths {
        out.push_str(&format!(
            "  {:<18} {:>4} points\n",
            path.tenure.name,
            path.points.len()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn summary_lists_span_and_chairs() {
        let date = |m: u32| NaiveDate::from_ymd_opt(2022, m, 1).unwrap();
        let points: Vec<TimeSeriesPoint> = (1..=2)
            .map(|m| TimeSeriesPoint {
                date: date(m),
                unemployment: 4.0,
                inflation: 5.0,
            })
            .collect();
        let dataset = Dataset {
            points: points.clone(),
            paths: vec![TenurePath {
                tenure: ChairTenure {
                    name: "Jerome Powell".to_string(),
                    start: date(1),
                    end: None,
                    color: (166, 86, 40),
                },
                points,
                first_idx: 0,
            }],
        };

        let summary = format_summary(&dataset);
        assert!(summary.contains("2022-01-01 to 2022-02-01 (2 monthly points)"));
        assert!(summary.contains("Jerome Powell"));
    }
}
