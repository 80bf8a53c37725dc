//! Data acquisition: FRED fetch, local CSV cache, and series preparation.
//!
//! The loader tries the network first and falls back to the local cache; a
//! successful fetch refreshes the cache for the next run. Only when both
//! sources fail is the run aborted (exit code 3).

pub mod cache;
pub mod fred;

pub use fred::FredClient;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{DataConfig, TimeSeriesPoint};
use crate::error::AppError;

/// Load both raw series, derive core inflation, and inner-join on date.
pub fn load_joined_series(config: &DataConfig) -> Result<Vec<TimeSeriesPoint>, AppError> {
    let unemployment = load_series(config, &config.unemployment_series)?;
    let core_cpi = load_series(config, &config.inflation_series)?;
    let inflation = year_over_year(&core_cpi);

    let joined = inner_join(&unemployment, &inflation);
    if joined.is_empty() {
        return Err(AppError::data_unavailable(
            "Joined series is empty: no dates common to both series.",
        ));
    }
    Ok(joined)
}

/// Fetch one raw series, falling back to the local cache on any failure.
fn load_series(config: &DataConfig, series_id: &str) -> Result<Vec<(NaiveDate, f64)>, AppError> {
    if !config.offline {
        match fetch_remote(config, series_id) {
            Ok(obs) => {
                if let Err(e) = cache::write_series(&config.cache_dir, series_id, &obs) {
                    eprintln!("warning: could not cache {series_id}: {e}");
                }
                return Ok(obs);
            }
            Err(e) => {
                eprintln!("warning: fetch of {series_id} failed ({e}); trying local cache.");
            }
        }
    }

    cache::read_series(&config.cache_dir, series_id)
        .map_err(|e| AppError::data_unavailable(format!("Series {series_id} unavailable: {e}")))
}

fn fetch_remote(config: &DataConfig, series_id: &str) -> Result<Vec<(NaiveDate, f64)>, AppError> {
    let client = FredClient::from_env()?;
    let obs = client.fetch_series(series_id, config.start, config.end)?;
    if obs.is_empty() {
        return Err(AppError::data_unavailable(format!(
            "No observations returned for series {series_id}."
        )));
    }
    Ok(obs)
}

/// Year-over-year percent change with a 12-observation positional offset.
///
/// This mirrors a monthly `pct_change(12)`: the first 12 observations drop
/// out, and each remaining value is `(v[i] / v[i-12] - 1) * 100`, keyed by
/// the later date. Observations with a zero base are skipped.
pub fn year_over_year(series: &[(NaiveDate, f64)]) -> Vec<(NaiveDate, f64)> {
    series
        .iter()
        .enumerate()
        .skip(12)
        .filter_map(|(i, &(date, value))| {
            let base = series[i - 12].1;
            if base != 0.0 {
                Some((date, (value / base - 1.0) * 100.0))
            } else {
                None
            }
        })
        .collect()
}

/// Inner join on date: only dates present in both series are kept.
pub fn inner_join(
    unemployment: &[(NaiveDate, f64)],
    inflation: &[(NaiveDate, f64)],
) -> Vec<TimeSeriesPoint> {
    let by_date: HashMap<NaiveDate, f64> = inflation.iter().copied().collect();

    let mut out: Vec<TimeSeriesPoint> = unemployment
        .iter()
        .filter_map(|&(date, unemployment)| {
            by_date.get(&date).map(|&inflation| TimeSeriesPoint {
                date,
                unemployment,
                inflation,
            })
        })
        .collect();
    out.sort_by_key(|p| p.date);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn monthly(start_year: i32, values: &[f64]) -> Vec<(NaiveDate, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let months = i as u32;
                (date(start_year + (months / 12) as i32, months % 12 + 1), v)
            })
            .collect()
    }

    #[test]
    fn year_over_year_drops_first_twelve_observations() {
        let values: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let series = monthly(2000, &values);
        let yoy = year_over_year(&series);

        assert_eq!(yoy.len(), 3);
        assert_eq!(yoy[0].0, date(2001, 1));
        // 112 / 100 - 1 = 12%
        assert!((yoy[0].1 - 12.0).abs() < 1e-12);
        // 114 / 102 - 1
        assert!((yoy[2].1 - (114.0 / 102.0 - 1.0) * 100.0).abs() < 1e-12);
    }

    #[test]
    fn inner_join_keeps_only_common_dates() {
        let unemployment = vec![
            (date(2022, 1), 4.0),
            (date(2022, 2), 3.8),
            (date(2022, 3), 3.6),
        ];
        let inflation = vec![(date(2022, 2), 5.2), (date(2022, 3), 5.5), (date(2022, 4), 5.9)];

        let joined = inner_join(&unemployment, &inflation);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].date, date(2022, 2));
        assert_eq!(joined[0].unemployment, 3.8);
        assert_eq!(joined[0].inflation, 5.2);
        assert_eq!(joined[1].date, date(2022, 3));
    }

    #[test]
    fn inner_join_output_is_ascending() {
        let unemployment = vec![(date(2022, 3), 3.6), (date(2022, 1), 4.0)];
        let inflation = vec![(date(2022, 1), 5.0), (date(2022, 3), 5.5)];

        let joined = inner_join(&unemployment, &inflation);
        assert_eq!(joined.len(), 2);
        assert!(joined[0].date < joined[1].date);
    }
}
