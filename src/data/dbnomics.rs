//! DBnomics API integration.
//!
//! One request fetches several series at once:
//!
//! ```text
//! GET {base}/series?series_ids=A/B/C,D/E/F&observations=1&format=json
//! ```
//!
//! Each returned document holds parallel `period[]` / `value[]` arrays. Values
//! are numbers, or text such as `"NA"` for missing observations; coercion is
//! left to the curve builder.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Request};
use serde::Deserialize;
use tracing::{debug, info};

use crate::data::{LoadError, SeriesProvider};
use crate::domain::{Country, RawValue, SeriesRow};

pub const DEFAULT_BASE_URL: &str = "https://api.db.nomics.world/v22";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DOC_LIMIT: usize = 1000;

pub struct DbnomicsClient {
    client: Client,
    base_url: String,
}

impl DbnomicsClient {
    /// Build a client from `DBNOMICS_API_URL` / `DBNOMICS_TIMEOUT_SECS` (and `.env`).
    pub fn from_env() -> Result<Self, LoadError> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("DBNOMICS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = match std::env::var("DBNOMICS_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        Self::new(base_url, timeout)
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/series` for all `codes` in one call.
    fn series_request(&self, codes: &[&str]) -> Result<Request, LoadError> {
        let url = format!("{}/series", self.base_url());
        let ids = codes.join(",");
        let limit = DOC_LIMIT.to_string();
        let request = self
            .client
            .get(&url)
            .query(&[
                ("series_ids", ids.as_str()),
                ("observations", "1"),
                ("format", "json"),
                ("limit", limit.as_str()),
            ])
            .build()?;
        Ok(request)
    }
}

impl SeriesProvider for DbnomicsClient {
    fn fetch_series(&self, codes: &[&str]) -> Result<Vec<SeriesRow>, LoadError> {
        let request = self.series_request(codes)?;
        info!(url = %request.url(), series = codes.len(), "fetching DBnomics series");

        let resp = self.client.execute(request)?;
        let status = resp.status();
        let body = if status.is_success() {
            resp.text()?
        } else {
            resp.text().unwrap_or_default()
        };

        let body = check_response(status, body)?;
        let parsed: SeriesResponse = serde_json::from_str(&body)?;
        let rows = rows_from_response(parsed);
        debug!(rows = rows.len(), "decoded DBnomics observations");
        Ok(rows)
    }
}

/// Pass the body through on 2xx; anything else is a server error.
fn check_response(status: StatusCode, body: String) -> Result<String, LoadError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(LoadError::Server {
            status: status.as_u16(),
            body,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, LoadError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(LoadError::Config(format!(
            "DBNOMICS_TIMEOUT_SECS must be a positive number of seconds (got '{raw}')."
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    series: SeriesPage,
}

#[derive(Debug, Deserialize)]
struct SeriesPage {
    #[serde(default)]
    docs: Vec<SeriesDoc>,
}

#[derive(Debug, Deserialize)]
struct SeriesDoc {
    series_code: String,
    #[serde(default)]
    period: Vec<String>,
    #[serde(default)]
    value: Vec<serde_json::Value>,
}

/// Flatten response documents into `(period, country_label, value)` rows.
fn rows_from_response(resp: SeriesResponse) -> Vec<SeriesRow> {
    let mut out = Vec::new();
    for doc in resp.series.docs {
        let label = country_label(&doc.series_code);
        for (period, value) in doc.period.into_iter().zip(doc.value) {
            out.push(SeriesRow {
                period,
                country_label: label.clone(),
                value: RawValue::from(value),
            });
        }
    }
    out
}

/// Series codes start with the ISO-3 area code (`FRA.PCPIPCH.pcent_change`).
fn country_label(series_code: &str) -> String {
    let iso = series_code.split('.').next().unwrap_or(series_code);
    Country::from_iso3(iso)
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| iso.to_string())
}
