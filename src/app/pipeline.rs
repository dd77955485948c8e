//! Shared "load → build" logic used by both the CLI and TUI front-ends.
//!
//! Errors that mean "nothing to show for this country" become values here so
//! the dashboard can render a message instead of stopping.

use tracing::{info, warn};

use crate::data::{LoadError, SeriesProvider, load_country};
use crate::domain::{ChartSpec, Country};
use crate::fit::{CurveError, build};

/// Result of charting one country.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Ready(ChartSpec),
    /// The provider had nothing usable (no rows, no overlap, too few points).
    NoData { country: Country, reason: String },
    /// The fetch itself failed.
    Failed { country: Country, reason: String },
}

impl ChartOutcome {
    pub fn chart(&self) -> Option<&ChartSpec> {
        match self {
            ChartOutcome::Ready(chart) => Some(chart),
            _ => None,
        }
    }
}

/// Fetch, merge, fit and assemble the chart for `country`.
pub fn run_chart<P: SeriesProvider + ?Sized>(provider: &P, country: Country) -> Result<ChartSpec, PipelineError> {
    let merged = load_country(provider, country)?;
    let chart = build(&merged, country.display_name())?;
    Ok(chart)
}

/// Same as [`run_chart`], with errors folded into a [`ChartOutcome`].
pub fn chart_for<P: SeriesProvider + ?Sized>(provider: &P, country: Country) -> ChartOutcome {
    match run_chart(provider, country) {
        Ok(chart) => {
            info!(country = %country, points = chart.scatter.len(), "chart ready");
            ChartOutcome::Ready(chart)
        }
        Err(err) if err.is_no_data() => {
            warn!(country = %country, error = %err, "nothing to display");
            ChartOutcome::NoData {
                country,
                reason: err.to_string(),
            }
        }
        Err(err) => {
            warn!(country = %country, error = %err, "chart failed");
            ChartOutcome::Failed {
                country,
                reason: err.to_string(),
            }
        }
    }
}

/// Chart every selected country, one after the other.
pub fn charts_for<P: SeriesProvider + ?Sized>(provider: &P, countries: &[Country]) -> Vec<(Country, ChartOutcome)> {
    countries
        .iter()
        .map(|&country| (country, chart_for(provider, country)))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl PipelineError {
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            PipelineError::Load(LoadError::DataUnavailable { .. }) | PipelineError::Curve(CurveError::InsufficientData { .. })
        )
    }
}

impl From<PipelineError> for crate::error::AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Load(e) => e.into(),
            PipelineError::Curve(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Indicator, RawValue, SeriesRow};

    struct StaticProvider {
        unemployment: Vec<SeriesRow>,
        inflation: Vec<SeriesRow>,
    }

    impl SeriesProvider for StaticProvider {
        fn fetch_series(&self, codes: &[&str]) -> Result<Vec<SeriesRow>, LoadError> {
            if codes[0].starts_with(Indicator::Unemployment.dataset()) {
                Ok(self.unemployment.clone())
            } else {
                Ok(self.inflation.clone())
            }
        }
    }

    struct DownProvider;

    impl SeriesProvider for DownProvider {
        fn fetch_series(&self, _codes: &[&str]) -> Result<Vec<SeriesRow>, LoadError> {
            Err(LoadError::Server {
                status: 503,
                body: "maintenance".into(),
            })
        }
    }

    fn rows(label: &str, values: &[(&str, f64)]) -> Vec<SeriesRow> {
        values
            .iter()
            .map(|(period, v)| SeriesRow {
                period: period.to_string(),
                country_label: label.to_string(),
                value: RawValue::Number(*v),
            })
            .collect()
    }

    fn provider() -> StaticProvider {
        StaticProvider {
            unemployment: [
                rows("France", &[("2018", 9.0), ("2019", 8.4), ("2020", 8.0), ("2021", 7.9)]),
                rows("Japan", &[("2020", 2.8), ("2021", 2.8)]),
            ]
            .concat(),
            inflation: [
                rows("France", &[("2018", 2.1), ("2019", 1.3), ("2020", 0.5), ("2021", 2.1)]),
                rows("Japan", &[("2020", 0.0), ("2021", -0.2)]),
            ]
            .concat(),
        }
    }

    #[test]
    fn ready_when_data_is_sufficient() {
        let outcome = chart_for(&provider(), Country::France);
        let chart = outcome.chart().expect("chart");
        assert_eq!(chart.title, "Phillips Curve for France");
        assert_eq!(chart.scatter.len(), 4);
    }

    #[test]
    fn short_or_missing_series_are_no_data() {
        let p = provider();
        let outcomes = charts_for(&p, &[Country::Japan, Country::Argentina]);
        assert_eq!(outcomes.len(), 2);
        for (country, outcome) in outcomes {
            match outcome {
                ChartOutcome::NoData { country: c, .. } => assert_eq!(c, country),
                other => panic!("expected no data for {country}, got {other:?}"),
            }
        }
    }

    #[test]
    fn fetch_errors_are_reported_not_raised() {
        match chart_for(&DownProvider, Country::France) {
            ChartOutcome::Failed { country, reason } => {
                assert_eq!(country, Country::France);
                assert!(reason.contains("503"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
