//! Static text shown by the dashboard.

use crate::domain::Indicator;

pub const WINDOW_TITLE: &str = "Phillips curve dashboard with DBnomics data";
pub const PAGE_TITLE: &str = "Phillips Curve";

/// Default header banner; `--logo` replaces it.
pub const DEFAULT_LOGO: &str = include_str!("../../assets/logo.txt");

pub const EXPLANATIONS: &[&str] = &[
    "The Phillips curve highlights an inverse relationship between the unemployment rate and inflation. \
     This relationship was demonstrated by the New Zealand economist Alban William Phillips in 1958 in \
     \"The relation between unemployment and the rate of change of money wage rates in the United Kingdom, 1861-1957\". \
     Originally, it was not inflation that William Phillips chose, but the year-over-year increase in wages. \
     He based his analysis on the observation of changes in nominal wages in Great Britain from 1861 to 1957. \
     William Phillips argued that economic growth leads to inflation, which in turn leads to a decrease in the unemployment rate.",
    "During periods of economic growth, with a low unemployment rate, the balance of power is in favor of employees. \
     Competition between companies pushes them to increase wages, which in turn raises the prices of their products. \
     Conversely, in periods of high unemployment, the balance of power is in the hands of businesses, which can lower wages. \
     Employees must forgo wage increases, leading to disinflation.",
    "This curve, by representing this negative relationship, becomes one of the most important in macroeconomic analysis. \
     It plays a considerable role in the choices of economic policies: states can make a trade-off between inflation and unemployment.",
    "However, since the 1970s, the phenomenon of stagflation (stagnation of economic activity, high unemployment, and rising inflation) \
     has challenged the Phillips curve. High inflation and economic crisis have coexisted. \
     The relationship between inflation and unemployment has become positive. \
     This is reflected in a flattening of the Phillips curves.",
];

/// `(label, url)` for each data source.
pub fn sources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Unemployment rate", Indicator::Unemployment.source_url()),
        ("Inflation rate", Indicator::Inflation.source_url()),
    ]
}
