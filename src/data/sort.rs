use std::cmp::Ordering;

use super::model::{AirportRecord, SortKey};

/// Copy of `records` ordered by `key`, largest first.
///
/// The sort is stable, so rows with equal values keep their input order.
/// `0.0` and `-0.0` compare equal; the loader never lets NaN through.
pub fn sort_records<'a>(records: &[&'a AirportRecord], key: SortKey) -> Vec<&'a AirportRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.sort_value(key)
            .partial_cmp(&a.sort_value(key))
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;
    use crate::data::test_support::{elevations, mixed_table, record, rows};

    fn at(elevation: f64, latitude: f64) -> AirportRecord {
        record("US-ME", latitude, -70.0, elevation)
    }

    fn latitudes(records: &[&AirportRecord]) -> Vec<f64> {
        records.iter().map(|r| r.latitude).collect()
    }

    #[test]
    fn sorts_by_elevation_descending() {
        let rows = [at(100.0, 0.0), at(500.0, 0.0), at(20.0, 0.0)];
        let refs: Vec<&AirportRecord> = rows.iter().collect();
        let sorted = sort_records(&refs, SortKey::Elevation);
        assert_eq!(elevations(&sorted), vec![500.0, 100.0, 20.0]);
        // input untouched
        assert_eq!(elevations(&refs), vec![100.0, 500.0, 20.0]);
    }

    #[test]
    fn sorts_by_latitude_descending() {
        let rows = [at(1.0, 41.7), at(2.0, 44.5), at(3.0, 42.9)];
        let refs: Vec<&AirportRecord> = rows.iter().collect();
        let sorted = sort_records(&refs, SortKey::Latitude);
        assert_eq!(elevations(&sorted), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let table = mixed_table();
        let rows = rows(&table);
        let sorted = sort_records(&rows, SortKey::Elevation);
        let zeros: Vec<&str> = sorted
            .iter()
            .filter(|r| r.elevation == 0.0)
            .map(|r| r.ident.as_str())
            .collect();
        assert_eq!(zeros, vec!["X09", "X12"]);

        let by_lat = sort_records(&rows, SortKey::Latitude);
        let same_lat: Vec<&str> = by_lat
            .iter()
            .filter(|r| r.latitude == 43.65)
            .map(|r| r.ident.as_str())
            .collect();
        assert_eq!(same_lat, vec!["X01", "X09"]);
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let rows = [at(-0.0, 1.0), at(0.0, 2.0)];
        let refs: Vec<&AirportRecord> = rows.iter().collect();
        assert_eq!(latitudes(&sort_records(&refs, SortKey::Elevation)), vec![1.0, 2.0]);

        let rows = [at(5.0, 0.0), at(7.0, -0.0)];
        let refs: Vec<&AirportRecord> = rows.iter().collect();
        assert_eq!(elevations(&sort_records(&refs, SortKey::Latitude)), vec![5.0, 7.0]);
    }

    #[test]
    fn negative_zero_read_from_csv_keeps_file_order() {
        let csv = "iso_region,latitude_deg,longitude_deg,elevation_ft\n\
                   US-ME,1,1,-0\n\
                   US-ME,2,2,0\n";
        let table = read_csv(csv.as_bytes()).unwrap();
        let sorted = sort_records(&rows(&table), SortKey::Elevation);
        assert_eq!(latitudes(&sorted), vec![1.0, 2.0]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let table = mixed_table();
        let rows = rows(&table);
        for key in SortKey::ALL {
            let once = sort_records(&rows, key);
            assert_eq!(sort_records(&once, key), once);
        }
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(sort_records(&[], SortKey::Latitude).is_empty());
    }
}
