use super::model::{AirportRecord, AirportTable, FilterCriteria};

/// Record with only the fields the engines look at; identifiers left blank.
pub fn record(region: &str, latitude: f64, longitude: f64, elevation: f64) -> AirportRecord {
    AirportRecord {
        ident: String::new(),
        name: String::new(),
        kind: String::new(),
        municipality: String::new(),
        region: region.to_string(),
        latitude,
        longitude,
        elevation,
    }
}

/// Borrowed view of every row, in table order.
pub fn rows(table: &AirportTable) -> Vec<&AirportRecord> {
    table.records().iter().collect()
}

/// Matches every elevation in `region`.
pub fn any_elevation(region: &str) -> FilterCriteria {
    FilterCriteria::new(region, f64::NEG_INFINITY, f64::INFINITY)
        .expect("infinite bounds are ordered")
}

/// Apply `criteria` to an existing selection, keeping its order.
pub fn refilter<'a>(
    records: &[&'a AirportRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a AirportRecord> {
    records
        .iter()
        .copied()
        .filter(|r| criteria.matches(r))
        .collect()
}

pub fn elevations(records: &[&AirportRecord]) -> Vec<f64> {
    records.iter().map(|r| r.elevation).collect()
}

/// Two Maine airports and one in New Hampshire.
pub fn scenario_table() -> AirportTable {
    AirportTable::new(
        vec![
            record("US-ME", 43.6, -70.3, 20.0),
            record("US-ME", 44.8, -68.8, 100.0),
            record("US-NH", 42.9, -71.4, 500.0),
        ],
        0,
    )
}

/// A larger table with repeated elevations and latitudes across all six states.
pub fn mixed_table() -> AirportTable {
    let rows = [
        ("US-VT", 44.47, 335.0),
        ("US-ME", 43.65, 76.0),
        ("US-MA", 42.36, 20.0),
        ("US-ME", 46.68, 534.0),
        ("US-NH", 42.93, 266.0),
        ("US-CT", 41.94, 173.0),
        ("US-RI", 41.72, 55.0),
        ("US-MA", 42.47, 133.0),
        ("US-VT", 43.53, 20.0),
        ("US-ME", 43.65, 0.0),
        ("US-NH", 44.58, 1074.0),
        ("US-MA", 41.25, 47.0),
        ("US-ME", 44.81, 0.0),
        ("US-CT", 41.16, 9.0),
    ];
    AirportTable::new(
        rows.iter()
            .enumerate()
            .map(|(i, &(region, lat, elev))| {
                let mut r = record(region, lat, -71.0 + i as f64 * 0.1, elev);
                r.ident = format!("X{i:02}");
                r
            })
            .collect(),
        0,
    )
}
