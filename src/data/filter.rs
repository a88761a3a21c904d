use std::collections::BTreeSet;

use super::error::StatsError;
use super::model::{AirportRecord, AirportTable, FilterCriteria};

// ---------------------------------------------------------------------------
// Selection-control inputs
// ---------------------------------------------------------------------------

/// Every region present in the table, each once, sorted.
pub fn distinct_regions(table: &AirportTable) -> BTreeSet<&str> {
    table.records().iter().map(|r| r.region.as_str()).collect()
}

/// `(min, max)` elevation over the whole table, for the range sliders.
pub fn elevation_bounds(table: &AirportTable) -> Result<(f64, f64), StatsError> {
    if table.is_empty() {
        return Err(StatsError::EmptyTable);
    }
    Ok(table.records().iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), r| (lo.min(r.elevation), hi.max(r.elevation)),
    ))
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Rows matching `criteria`, in table order.  An empty result is not an error.
pub fn filter<'a>(table: &'a AirportTable, criteria: &FilterCriteria) -> Vec<&'a AirportRecord> {
    table
        .records()
        .iter()
        .filter(|r| criteria.matches(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{elevations, mixed_table, refilter, scenario_table};

    #[test]
    fn distinct_regions_lists_each_region_once() {
        let table = scenario_table();
        let regions: Vec<&str> = distinct_regions(&table).into_iter().collect();
        assert_eq!(regions, vec!["US-ME", "US-NH"]);
    }

    #[test]
    fn bounds_cover_the_whole_table() {
        assert_eq!(elevation_bounds(&scenario_table()), Ok((20.0, 500.0)));
    }

    #[test]
    fn bounds_on_empty_table_fail() {
        let empty = AirportTable::default();
        assert_eq!(elevation_bounds(&empty), Err(StatsError::EmptyTable));
    }

    #[test]
    fn filter_keeps_matching_region_in_order() {
        let table = scenario_table();
        let criteria = FilterCriteria::new("US-ME", 0.0, 1000.0).unwrap();
        let rows = filter(&table, &criteria);
        assert_eq!(elevations(&rows), vec![20.0, 100.0]);
    }

    #[test]
    fn filter_respects_elevation_range() {
        let table = scenario_table();
        let criteria = FilterCriteria::new("US-ME", 50.0, 100.0).unwrap();
        assert_eq!(elevations(&filter(&table, &criteria)), vec![100.0]);
    }

    #[test]
    fn unknown_region_gives_empty_result() {
        let table = scenario_table();
        let criteria = FilterCriteria::new("US-VT", 0.0, 1000.0).unwrap();
        assert!(filter(&table, &criteria).is_empty());
    }

    #[test]
    fn zero_width_range_keeps_exact_matches_only() {
        let table = mixed_table();
        let criteria = FilterCriteria::new("US-ME", 0.0, 0.0).unwrap();
        let rows = filter(&table, &criteria);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.region == "US-ME" && r.elevation == 0.0));
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let table = mixed_table();
        for region in distinct_regions(&table) {
            let criteria = FilterCriteria::new(region, 20.0, 500.0).unwrap();
            let once = filter(&table, &criteria);
            let twice = refilter(&once, &criteria);
            assert_eq!(once, twice);
        }
    }
}
