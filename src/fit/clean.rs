//! Numeric coercion of merged rows.

use crate::domain::{MergedObservation, Observation};

/// Keep rows whose unemployment and inflation rates both coerce to finite
/// numbers. Input order is preserved; anything unparseable is dropped.
pub fn clean(rows: &[MergedObservation]) -> Vec<Observation> {
    rows.iter()
        .filter_map(|row| {
            Some(Observation {
                period: row.period.clone(),
                unemployment_rate: row.unemployment_rate.as_f64()?,
                inflation_rate: row.inflation_rate.as_f64()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawValue;

    #[test]
    fn drops_rows_with_any_unparseable_rate() {
        let rows = vec![
            MergedObservation::new("2018", 5.0, 3.0),
            MergedObservation::new("2019", "NA", 2.5),
            MergedObservation::new("2020", "7.0", "2.0"),
            MergedObservation::new("2021", 8.0, RawValue::Missing),
            MergedObservation::new("2022", f64::INFINITY, 1.0),
        ];

        let cleaned = clean(&rows);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].period, "2018");
        assert_eq!(cleaned[1].period, "2020");
        assert_eq!(cleaned[1].unemployment_rate, 7.0);
        assert_eq!(cleaned[1].inflation_rate, 2.0);
    }

    #[test]
    fn cleaning_twice_changes_nothing() {
        let rows = vec![
            MergedObservation::new("2018", 5.0, "x"),
            MergedObservation::new("2019", 6.0, 2.5),
        ];
        let once = clean(&rows);
        let again: Vec<MergedObservation> = once.iter().cloned().map(Into::into).collect();
        assert_eq!(clean(&again), once);
    }
}
