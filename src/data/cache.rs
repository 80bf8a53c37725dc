//! Local CSV cache of raw FRED series (`date,value` per row).
//!
//! The cache is the only fallback when FRED is unreachable; it is refreshed
//! after every successful fetch. The format is deliberately dumb so the
//! files stay inspectable in a text editor or spreadsheet.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::AppError;

fn cache_path(dir: &Path, series_id: &str) -> PathBuf {
    dir.join(format!("{series_id}.csv"))
}

/// Write a raw series to `<dir>/<series_id>.csv`.
pub fn write_series(dir: &Path, series_id: &str, series: &[(NaiveDate, f64)]) -> Result<(), AppError> {
    create_dir_all(dir)
        .map_err(|e| AppError::usage(format!("Failed to create cache dir '{}': {e}", dir.display())))?;

    let path = cache_path(dir, series_id);
    let mut file = File::create(&path)
        .map_err(|e| AppError::usage(format!("Failed to create cache file '{}': {e}", path.display())))?;

    writeln!(file, "date,value")
        .map_err(|e| AppError::usage(format!("Failed to write cache header: {e}")))?;
    for (date, value) in series {
        writeln!(file, "{date},{value}")
            .map_err(|e| AppError::usage(format!("Failed to write cache row: {e}")))?;
    }

    Ok(())
}

/// Read a previously cached series, ascending by date.
pub fn read_series(dir: &Path, series_id: &str) -> Result<Vec<(NaiveDate, f64)>, AppError> {
    let path = cache_path(dir, series_id);
    let file = File::open(&path)
        .map_err(|e| AppError::data_unavailable(format!("no cache at '{}': {e}", path.display())))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            AppError::data_unavailable(format!("bad cache row in '{}': {e}", path.display()))
        })?;
        let date_field = record.get(0).unwrap_or("");
        let value_field = record.get(1).unwrap_or("");

        let date = NaiveDate::parse_from_str(date_field, "%Y-%m-%d").map_err(|e| {
            AppError::data_unavailable(format!(
                "bad cache date '{date_field}' in '{}': {e}",
                path.display()
            ))
        })?;
        let value: f64 = value_field.trim().parse().map_err(|e| {
            AppError::data_unavailable(format!(
                "bad cache value '{value_field}' in '{}': {e}",
                path.display()
            ))
        })?;
        out.push((date, value));
    }

    out.sort_by_key(|&(d, _)| d);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn cache_round_trips_a_series() {
        let dir = std::env::temp_dir().join(format!("phillips-cache-test-{}", std::process::id()));
        let series = vec![(date(2022, 1), 4.0), (date(2022, 2), 3.85)];

        write_series(&dir, "TESTSERIES", &series).unwrap();
        let back = read_series(&dir, "TESTSERIES").unwrap();
        assert_eq!(back, series);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_cache_is_an_error() {
        let dir = std::env::temp_dir().join("phillips-cache-test-missing");
        assert!(read_series(&dir, "NOPE").is_err());
    }
}
