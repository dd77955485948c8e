//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - passed by value between the loader, the curve builder and the renderers
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::LoadError;
use crate::math::polyval;

/// Countries the dashboard knows how to chart.
///
/// The set is closed: every variant has exactly one row in [`SERIES_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    France,
    UnitedStates,
    Argentina,
    Japan,
}

impl Country {
    /// Table order, which is also the order charts are shown in.
    pub const ALL: [Country; 4] = [
        Country::France,
        Country::UnitedStates,
        Country::Argentina,
        Country::Japan,
    ];

    /// Human-readable name. Also the country label used by the provider.
    pub fn display_name(self) -> &'static str {
        match self {
            Country::France => "France",
            Country::UnitedStates => "United States",
            Country::Argentina => "Argentina",
            Country::Japan => "Japan",
        }
    }

    pub fn iso3(self) -> &'static str {
        match self {
            Country::France => "FRA",
            Country::UnitedStates => "USA",
            Country::Argentina => "ARG",
            Country::Japan => "JPN",
        }
    }

    pub fn from_iso3(code: &str) -> Option<Country> {
        Country::ALL
            .into_iter()
            .find(|c| c.iso3().eq_ignore_ascii_case(code.trim()))
    }

    /// Series codes for this country.
    pub fn series(self) -> &'static CountrySeries {
        match self {
            Country::UnitedStates => &SERIES_TABLE[0],
            Country::France => &SERIES_TABLE[1],
            Country::Argentina => &SERIES_TABLE[2],
            Country::Japan => &SERIES_TABLE[3],
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Country {
    type Err = LoadError;

    /// Accepts the display name (case-insensitive, `-`/`_` for spaces) or the
    /// ISO-3 code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Country::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(&wanted))
            .or_else(|| Country::from_iso3(&wanted))
            .ok_or_else(|| LoadError::UnknownCountry(s.trim().to_string()))
    }
}

/// The two macroeconomic indicators plotted against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Unemployment,
    Inflation,
}

impl Indicator {
    /// Semantic column name for the indicator's values.
    pub fn column(self) -> &'static str {
        match self {
            Indicator::Unemployment => "unemployment_rate",
            Indicator::Inflation => "inflation_rate",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Indicator::Unemployment => "Unemployment Rate (%)",
            Indicator::Inflation => "Inflation Rate (%)",
        }
    }

    /// Provider dataset the series codes live in.
    pub fn dataset(self) -> &'static str {
        match self {
            Indicator::Unemployment => "ILO/UNE_DEAP_SEX_AGE_EDU_RT",
            Indicator::Inflation => "IMF/WEO:2024-04",
        }
    }

    /// Public page listing the dataset's series.
    pub fn source_url(self) -> &'static str {
        match self {
            Indicator::Unemployment => "https://db.nomics.world/ILO/UNE_DEAP_SEX_AGE_EDU_RT?tab=list",
            Indicator::Inflation => "https://db.nomics.world/IMF/WEO:2024-04?tab=list",
        }
    }

    /// Series codes for every supported country, in table order.
    pub fn series_codes(self) -> Vec<&'static str> {
        SERIES_TABLE.iter().map(|row| row.code(self)).collect()
    }
}

/// One row of the static country → series code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountrySeries {
    pub country: Country,
    pub unemployment: &'static str,
    pub inflation: &'static str,
}

impl CountrySeries {
    pub fn code(&self, indicator: Indicator) -> &'static str {
        match indicator {
            Indicator::Unemployment => self.unemployment,
            Indicator::Inflation => self.inflation,
        }
    }
}

/// DBnomics series codes per supported country.
pub const SERIES_TABLE: [CountrySeries; 4] = [
    CountrySeries {
        country: Country::UnitedStates,
        unemployment: "ILO/UNE_DEAP_SEX_AGE_EDU_RT/USA.BA_453.AGE_YTHADULT_YGE15.EDU_AGGREGATE_TOTAL.SEX_T.A",
        inflation: "IMF/WEO:2024-04/USA.PCPIPCH.pcent_change",
    },
    CountrySeries {
        country: Country::France,
        unemployment: "ILO/UNE_DEAP_SEX_AGE_EDU_RT/FRA.BA_148.AGE_YTHADULT_YGE15.EDU_AGGREGATE_TOTAL.SEX_T.A",
        inflation: "IMF/WEO:2024-04/FRA.PCPIPCH.pcent_change",
    },
    CountrySeries {
        country: Country::Argentina,
        unemployment: "ILO/UNE_DEAP_SEX_AGE_EDU_RT/ARG.BA_150.AGE_YTHADULT_YGE15.EDU_AGGREGATE_TOTAL.SEX_T.A",
        inflation: "IMF/WEO:2024-04/ARG.PCPIPCH.pcent_change",
    },
    CountrySeries {
        country: Country::Japan,
        unemployment: "ILO/UNE_DEAP_SEX_AGE_EDU_RT/JPN.BA_259.AGE_YTHADULT_YGE15.EDU_AGGREGATE_TOTAL.SEX_T.A",
        inflation: "IMF/WEO:2024-04/JPN.PCPIPCH.pcent_change",
    },
];

/// A value as delivered by the provider, before numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    /// Non-numeric artifacts such as `"NA"`, or numbers shipped as text.
    Text(String),
    Missing,
}

impl RawValue {
    /// Coerce to a finite number; anything else is treated as missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(v) if v.is_finite() => Some(*v),
            RawValue::Number(_) | RawValue::Missing => None,
            RawValue::Text(raw) => parse_value(raw),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map_or(RawValue::Missing, RawValue::Number),
            serde_json::Value::String(s) => RawValue::Text(s),
            _ => RawValue::Missing,
        }
    }
}

fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed.eq_ignore_ascii_case("na") {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

/// One observation of one provider series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub period: String,
    pub country_label: String,
    pub value: RawValue,
}

/// Unemployment and inflation for one period of one country (inner join).
#[derive(Debug, Clone, PartialEq)]
pub struct MergedObservation {
    pub period: String,
    pub unemployment_rate: RawValue,
    pub inflation_rate: RawValue,
}

impl MergedObservation {
    pub fn new(period: impl Into<String>, unemployment_rate: impl Into<RawValue>, inflation_rate: impl Into<RawValue>) -> Self {
        Self {
            period: period.into(),
            unemployment_rate: unemployment_rate.into(),
            inflation_rate: inflation_rate.into(),
        }
    }
}

/// A merged row whose rates both coerced to finite numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub period: String,
    pub unemployment_rate: f64,
    pub inflation_rate: f64,
}

impl From<Observation> for MergedObservation {
    fn from(obs: Observation) -> Self {
        MergedObservation {
            period: obs.period,
            unemployment_rate: RawValue::Number(obs.unemployment_rate),
            inflation_rate: RawValue::Number(obs.inflation_rate),
        }
    }
}

/// Coefficients of `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    /// Coefficients highest power first, as `polyfit` returns them.
    pub fn coeffs(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn eval(&self, x: f64) -> f64 {
        polyval(&self.coeffs(), x)
    }
}

/// An observed (unemployment, inflation) pair annotated with its period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub x: f64,
    pub y: f64,
}

/// Everything a renderer needs to draw one Phillips curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend entry for the trend line.
    pub trend_name: String,
    pub scatter: Vec<ScatterPoint>,
    pub trend: Vec<TrendPoint>,
    pub coefficients: Quadratic,
}

impl ChartSpec {
    /// Min/max of the scatter x values.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        min_max(self.scatter.iter().map(|p| p.x))
    }

    /// Min/max over scatter and trend y values.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        min_max(self.scatter.iter().map(|p| p.y).chain(self.trend.iter().map(|p| p.y)))
    }

    pub fn scatter_xy(&self) -> Vec<(f64, f64)> {
        self.scatter.iter().map(|p| (p.x, p.y)).collect()
    }

    pub fn trend_xy(&self) -> Vec<(f64, f64)> {
        self.trend.iter().map(|p| (p.x, p.y)).collect()
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

/// A saved chart file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartFile {
    pub tool: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub chart: ChartSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_table_covers_every_country() {
        for country in Country::ALL {
            let rows: Vec<_> = SERIES_TABLE.iter().filter(|r| r.country == country).collect();
            assert_eq!(rows.len(), 1, "{country} should have exactly one row");
            assert_eq!(country.series().country, country);
            assert!(rows[0].unemployment.contains(&format!("/{}.", country.iso3())));
            assert!(rows[0].inflation.contains(&format!("/{}.", country.iso3())));
        }
    }

    #[test]
    fn country_parses_names_and_codes() {
        assert_eq!("France".parse::<Country>().unwrap(), Country::France);
        assert_eq!("united-states".parse::<Country>().unwrap(), Country::UnitedStates);
        assert_eq!("United States".parse::<Country>().unwrap(), Country::UnitedStates);
        assert_eq!("jpn".parse::<Country>().unwrap(), Country::Japan);
        assert!(matches!(
            "Germany".parse::<Country>(),
            Err(LoadError::UnknownCountry(name)) if name == "Germany"
        ));
    }

    #[test]
    fn raw_value_coercion() {
        assert_eq!(RawValue::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(RawValue::from(" 3.25 ").as_f64(), Some(3.25));
        assert_eq!(RawValue::from("NA").as_f64(), None);
        assert_eq!(RawValue::from(".").as_f64(), None);
        assert_eq!(RawValue::from("abc").as_f64(), None);
        assert_eq!(RawValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(RawValue::Missing.as_f64(), None);
        assert_eq!(RawValue::from(serde_json::json!(1.5)), RawValue::Number(1.5));
        assert_eq!(RawValue::from(serde_json::Value::Null), RawValue::Missing);
    }

    #[test]
    fn quadratic_eval() {
        let q = Quadratic { a: 2.0, b: -3.0, c: 1.0 };
        assert_eq!(q.eval(0.0), 1.0);
        assert_eq!(q.eval(2.0), 3.0);
        assert_eq!(q.eval(-1.5), polyval(&q.coeffs(), -1.5));
    }
}
