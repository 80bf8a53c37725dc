//! FRED API integration for the unemployment and core CPI series.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::AppError;

const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";

pub struct FredClient {
    client: Client,
    api_key: String,
}

impl FredClient {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| AppError::data_unavailable("Missing FRED_API_KEY in environment (.env)."))?;
        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    /// Fetch all observations for `series_id` within `[start, end]`, ascending.
    ///
    /// Observations FRED reports as missing (value `"."`) are skipped.
    pub fn fetch_series(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, f64)>, AppError> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("series_id", series_id),
                ("api_key", &self.api_key),
                ("file_type", "json"),
                ("sort_order", "asc"),
                ("observation_start", &start.to_string()),
                ("observation_end", &end.to_string()),
            ])
            .send()
            .map_err(|e| AppError::data_unavailable(format!("FRED request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::data_unavailable(format!(
                "FRED request failed with status {}.",
                resp.status()
            )));
        }

        let body: ObservationsResponse = resp
            .json()
            .map_err(|e| AppError::data_unavailable(format!("Failed to parse FRED response: {e}")))?;

        let mut out = Vec::with_capacity(body.observations.len());
        for obs in body.observations {
            let value = match parse_value(&obs.value) {
                Some(v) => v,
                None => continue,
            };
            let date = NaiveDate::parse_from_str(&obs.date, "%Y-%m-%d").map_err(|e| {
                AppError::data_unavailable(format!("Invalid FRED date '{}': {e}", obs.date))
            })?;
            out.push((date, value));
        }

        Ok(out)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    date: String,
    value: String,
}

fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "." || trimmed.is_empty() {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_handles_missing_markers() {
        assert_eq!(parse_value("4.1"), Some(4.1));
        assert_eq!(parse_value(" 4.1 "), Some(4.1));
        assert_eq!(parse_value("."), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("not-a-number"), None);
        assert_eq!(parse_value("inf"), None);
    }
}
