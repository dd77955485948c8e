//! Country → merged unemployment/inflation table.
//!
//! Both indicators are fetched with one provider call each (all supported
//! countries at once), filtered down to the requested country, and inner-joined
//! on the period key.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Country, Indicator, MergedObservation, RawValue, SeriesRow};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unknown country '{0}' (supported: France, United States, Argentina, Japan)")]
    UnknownCountry(String),

    #[error("no data available for {country}: {reason}")]
    DataUnavailable { country: String, reason: String },

    #[error("DBnomics request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("DBnomics returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("failed to parse DBnomics response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Config(String),
}

/// External time-series source.
pub trait SeriesProvider {
    /// Fetch every observation of the given series codes.
    fn fetch_series(&self, codes: &[&str]) -> Result<Vec<SeriesRow>, LoadError>;
}

/// Load the merged table for a country given by name or ISO-3 code.
///
/// Unknown names fail before the provider is touched.
pub fn load<P: SeriesProvider + ?Sized>(provider: &P, country: &str) -> Result<Vec<MergedObservation>, LoadError> {
    let country: Country = country.parse()?;
    load_country(provider, country)
}

/// Load the merged table for a supported country.
pub fn load_country<P: SeriesProvider + ?Sized>(
    provider: &P,
    country: Country,
) -> Result<Vec<MergedObservation>, LoadError> {
    let unemployment = fetch_indicator(provider, Indicator::Unemployment, country)?;
    let inflation = fetch_indicator(provider, Indicator::Inflation, country)?;

    let merged = join_on_period(&unemployment, &inflation);
    info!(
        country = %country,
        unemployment = unemployment.len(),
        inflation = inflation.len(),
        merged = merged.len(),
        "joined series"
    );

    if merged.is_empty() {
        return Err(LoadError::DataUnavailable {
            country: country.display_name().to_string(),
            reason: "no overlapping periods between unemployment and inflation".to_string(),
        });
    }
    Ok(merged)
}

/// Fetch one indicator for all countries and keep `(period, value)` for `country`.
fn fetch_indicator<P: SeriesProvider + ?Sized>(
    provider: &P,
    indicator: Indicator,
    country: Country,
) -> Result<Vec<(String, RawValue)>, LoadError> {
    let codes = indicator.series_codes();
    let rows = provider.fetch_series(&codes)?;
    let total = rows.len();

    let series = filter_country(rows, country);
    debug!(
        indicator = indicator.column(),
        country = %country,
        total,
        kept = series.len(),
        "filtered provider rows"
    );

    if series.is_empty() {
        return Err(LoadError::DataUnavailable {
            country: country.display_name().to_string(),
            reason: format!("no {} observations returned", indicator.column()),
        });
    }
    Ok(series)
}

fn filter_country(rows: Vec<SeriesRow>, country: Country) -> Vec<(String, RawValue)> {
    rows.into_iter()
        .filter(|row| row.country_label == country.display_name())
        .map(|row| (row.period, row.value))
        .collect()
}

/// Inner join on period, in unemployment order.
///
/// A period repeated within one series keeps its first occurrence.
pub fn join_on_period(unemployment: &[(String, RawValue)], inflation: &[(String, RawValue)]) -> Vec<MergedObservation> {
    let mut by_period: HashMap<&str, &RawValue> = HashMap::with_capacity(inflation.len());
    for (period, value) in inflation {
        by_period.entry(period.as_str()).or_insert(value);
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (period, unemployment_rate) in unemployment {
        if !seen.insert(period.as_str()) {
            continue;
        }
        if let Some(inflation_rate) = by_period.get(period.as_str()) {
            out.push(MergedObservation {
                period: period.clone(),
                unemployment_rate: unemployment_rate.clone(),
                inflation_rate: (*inflation_rate).clone(),
            });
        }
    }
    out
}
