use super::error::StatsError;
use super::model::AirportRecord;

/// Arithmetic mean elevation of a selection.
///
/// Undefined for zero rows, which is reported as [`StatsError::EmptyInput`]
/// rather than `NaN`.
pub fn mean_elevation(records: &[&AirportRecord]) -> Result<f64, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let sum: f64 = records.iter().map(|r| r.elevation).sum();
    Ok(sum / records.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter;
    use crate::data::model::FilterCriteria;
    use crate::data::test_support::{rows, scenario_table};

    #[test]
    fn mean_of_filtered_rows() {
        let table = scenario_table();
        let rows = filter(&table, &FilterCriteria::new("US-ME", 0.0, 1000.0).unwrap());
        assert_eq!(mean_elevation(&rows), Ok(60.0));
    }

    #[test]
    fn mean_of_nothing_is_an_error() {
        let table = scenario_table();
        let rows = filter(&table, &FilterCriteria::new("US-RI", 0.0, 1000.0).unwrap());
        assert!(rows.is_empty());
        assert_eq!(mean_elevation(&rows), Err(StatsError::EmptyInput));
    }

    #[test]
    fn mean_of_whole_table() {
        let table = scenario_table();
        let mean = mean_elevation(&rows(&table)).unwrap();
        assert!((mean - 620.0 / 3.0).abs() < 1e-9);
    }
}
