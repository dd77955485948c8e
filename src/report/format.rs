//! Terminal summaries for `phillips show`.

use crate::domain::{ChartSpec, SERIES_TABLE};

/// Title, ranges, fitted coefficients and the per-period table.
pub fn format_chart_summary(chart: &ChartSpec) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", chart.title));

    let q = chart.coefficients;
    out.push_str(&format!(
        "Points: n={} | trend samples={}\n",
        chart.scatter.len(),
        chart.trend.len()
    ));
    if let Some((x0, x1)) = chart.x_range() {
        out.push_str(&format!("{}: [{x0:.2}, {x1:.2}]\n", chart.x_label));
    }
    if let Some((y0, y1)) = chart.y_range() {
        out.push_str(&format!("{}: [{y0:.2}, {y1:.2}]\n", chart.y_label));
    }
    out.push_str(&format!(
        "{}: y = {:.6}·x² {} {:.6}·x {} {:.6}\n",
        chart.trend_name,
        q.a,
        sign(q.b),
        q.b.abs(),
        sign(q.c),
        q.c.abs()
    ));
    out.push('\n');

    out.push_str(&format_table(chart));
    out
}

fn format_table(chart: &ChartSpec) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<10} {:>12} {:>12} {:>12} {:>12}\n",
            "period", "unemp", "infl", "trend", "residual"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<10} {:-<12} {:-<12} {:-<12} {:-<12}\n", "", "", "", "", "").trim_end());
    out.push('\n');

    for p in &chart.scatter {
        let fitted = chart.coefficients.eval(p.x);
        out.push_str(
            format!(
                "{:<10} {:>12.2} {:>12.2} {:>12.2} {:>12.2}\n",
                truncate(&p.label, 10),
                p.x,
                p.y,
                fitted,
                p.y - fitted
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// The country → series code table, one block per country.
pub fn format_series_table() -> String {
    let mut out = String::new();
    for row in SERIES_TABLE {
        out.push_str(&format!("{} ({})\n", row.country.display_name(), row.country.iso3()));
        out.push_str(&format!("  unemployment: {}\n", row.unemployment));
        out.push_str(&format!("  inflation   : {}\n", row.inflation));
    }
    out
}

fn sign(v: f64) -> char {
    if v < 0.0 { '-' } else { '+' }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MergedObservation;
    use crate::fit::build;

    #[test]
    fn summary_lists_every_period() {
        let rows = vec![
            MergedObservation::new("2018", 5.0, 3.0),
            MergedObservation::new("2019", 6.0, 2.5),
            MergedObservation::new("2020", 7.0, 2.0),
            MergedObservation::new("2021", 8.0, 1.8),
        ];
        let chart = build(&rows, "France").unwrap();
        let txt = format_chart_summary(&chart);

        assert!(txt.starts_with("=== Phillips Curve for France ===\n"));
        assert!(txt.contains("Points: n=4 | trend samples=100"));
        assert!(txt.contains("Unemployment Rate (%): [5.00, 8.00]"));
        for period in ["2018", "2019", "2020", "2021"] {
            assert!(txt.lines().any(|l| l.starts_with(period)), "missing {period}");
        }
        assert!(txt.lines().all(|l| l == l.trim_end()));
    }

    #[test]
    fn series_table_mentions_every_country() {
        let txt = format_series_table();
        assert!(txt.contains("France (FRA)"));
        assert!(txt.contains("United States (USA)"));
        assert!(txt.contains("IMF/WEO:2024-04/JPN.PCPIPCH.pcent_change"));
    }

    #[test]
    fn truncate_marks_cut_labels() {
        assert_eq!(truncate("2020", 10), "2020");
        assert_eq!(truncate("2020-Q1-revised", 8), "2020-Q1.");
    }
}
