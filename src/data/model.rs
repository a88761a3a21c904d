use std::fmt;

use super::error::CriteriaError;

// ---------------------------------------------------------------------------
// AirportRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single airport (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    pub ident: String,
    pub name: String,
    /// Airport category (`small_airport`, `heliport`, ...).
    pub kind: String,
    pub municipality: String,
    /// State / province code, e.g. `US-ME`.
    pub region: String,
    /// Decimal degrees.
    pub latitude: f64,
    /// Decimal degrees.
    pub longitude: f64,
    /// Feet above sea level.
    pub elevation: f64,
}

impl AirportRecord {
    pub fn sort_value(&self, key: SortKey) -> f64 {
        match key {
            SortKey::Elevation => self.elevation,
            SortKey::Latitude => self.latitude,
        }
    }
}

// ---------------------------------------------------------------------------
// AirportTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Built once by the loader and never mutated.
#[derive(Debug, Clone, Default)]
pub struct AirportTable {
    records: Vec<AirportRecord>,
    /// Source rows dropped because a required value was blank or non-numeric.
    skipped_rows: usize,
}

impl AirportTable {
    pub fn new(records: Vec<AirportRecord>, skipped_rows: usize) -> Self {
        Self {
            records,
            skipped_rows,
        }
    }

    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// User selections
// ---------------------------------------------------------------------------

/// Region match plus an inclusive elevation range.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    region: String,
    elevation_min: f64,
    elevation_max: f64,
}

impl FilterCriteria {
    pub fn new(
        region: impl Into<String>,
        elevation_min: f64,
        elevation_max: f64,
    ) -> Result<Self, CriteriaError> {
        if elevation_min.is_nan() || elevation_max.is_nan() {
            return Err(CriteriaError::NotANumber);
        }
        if elevation_min > elevation_max {
            return Err(CriteriaError::InvertedRange {
                min: elevation_min,
                max: elevation_max,
            });
        }
        Ok(Self {
            region: region.into(),
            elevation_min,
            elevation_max,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn elevation_min(&self) -> f64 {
        self.elevation_min
    }

    pub fn elevation_max(&self) -> f64 {
        self.elevation_max
    }

    pub fn matches(&self, record: &AirportRecord) -> bool {
        record.region == self.region
            && self.elevation_min <= record.elevation
            && record.elevation <= self.elevation_max
    }
}

/// Field to order a selection by. Always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Elevation,
    Latitude,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Elevation, SortKey::Latitude];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Elevation => "Elevation",
            SortKey::Latitude => "Latitude",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sidebar pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Map,
    BarChart,
    LineChart,
    PieChart,
    FilterData,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Map,
        Page::BarChart,
        Page::LineChart,
        Page::PieChart,
        Page::FilterData,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Map => "Map",
            Page::BarChart => "Bar Chart",
            Page::LineChart => "Line Chart",
            Page::PieChart => "Pie Chart",
            Page::FilterData => "Filter Data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{any_elevation, record};

    #[test]
    fn criteria_rejects_inverted_range() {
        let err = FilterCriteria::new("US-ME", 100.0, 20.0).unwrap_err();
        assert_eq!(
            err,
            CriteriaError::InvertedRange {
                min: 100.0,
                max: 20.0
            }
        );
    }

    #[test]
    fn criteria_rejects_nan() {
        assert_eq!(
            FilterCriteria::new("US-ME", f64::NAN, 20.0).unwrap_err(),
            CriteriaError::NotANumber
        );
    }

    #[test]
    fn criteria_bounds_are_inclusive() {
        let c = FilterCriteria::new("US-ME", 20.0, 100.0).unwrap();
        assert!(c.matches(&record("US-ME", 0.0, 0.0, 20.0)));
        assert!(c.matches(&record("US-ME", 0.0, 0.0, 100.0)));
        assert!(!c.matches(&record("US-ME", 0.0, 0.0, 100.5)));
        assert!(!c.matches(&record("US-NH", 0.0, 0.0, 50.0)));
    }

    #[test]
    fn any_elevation_matches_extremes() {
        let c = any_elevation("US-VT");
        assert!(c.matches(&record("US-VT", 0.0, 0.0, -200.0)));
        assert!(c.matches(&record("US-VT", 0.0, 0.0, 12_000.0)));
    }
}
