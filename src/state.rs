use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::color::RegionColors;
use crate::data::aggregate::{count_by_region, mean_elevation_by_region};
use crate::data::error::StatsError;
use crate::data::filter::{distinct_regions, elevation_bounds, filter};
use crate::data::model::{AirportRecord, AirportTable, FilterCriteria, Page, SortKey};
use crate::data::sort::sort_records;
use crate::data::summary::mean_elevation;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Only the widget selections live here.  Everything shown on a page is
/// recomputed from `table` and the current selections on each frame.
pub struct AppState {
    /// Loaded dataset.  Replaced wholesale by File → Open, never edited.
    pub table: AirportTable,

    /// Where `table` came from.
    pub source: PathBuf,

    /// Colour per region for the bar and pie charts.
    pub region_colors: RegionColors,

    /// Page chosen in the sidebar.
    pub page: Page,

    /// Region chosen on the Filter Data page.
    pub region: Option<String>,

    /// Inclusive elevation range chosen with the sliders.
    pub elevation_min: f64,
    pub elevation_max: f64,

    pub sort_key: SortKey,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

/// Elevation bounds widened to whole feet, so the 1 ft slider steps can reach
/// both ends and the full range still includes every airport.
pub fn slider_bounds(table: &AirportTable) -> Result<(f64, f64), StatsError> {
    let (lo, hi) = elevation_bounds(table)?;
    Ok((lo.floor(), hi.ceil()))
}

/// What the Filter Data page shows for the current selections.
pub struct FilterView<'a> {
    pub criteria: FilterCriteria,
    pub filtered: Vec<&'a AirportRecord>,
    pub mean_elevation: Result<f64, StatsError>,
    pub sorted: Vec<&'a AirportRecord>,
}

impl AppState {
    pub fn new(table: AirportTable, source: PathBuf) -> Self {
        let mut state = Self {
            table: AirportTable::default(),
            source: PathBuf::new(),
            region_colors: RegionColors::default(),
            page: Page::default(),
            region: None,
            elevation_min: 0.0,
            elevation_max: 0.0,
            sort_key: SortKey::default(),
            status_message: None,
        };
        state.set_table(table, source);
        state
    }

    /// Ingest a newly loaded table and reset the filter selections to span it.
    pub fn set_table(&mut self, table: AirportTable, source: PathBuf) {
        self.region = distinct_regions(&table).first().map(|r| r.to_string());
        let (lo, hi) = slider_bounds(&table).unwrap_or((0.0, 0.0));
        self.elevation_min = lo;
        self.elevation_max = hi;
        self.region_colors = RegionColors::new(&table);
        self.table = table;
        self.source = source;
        self.status_message = None;
    }

    /// Move the lower slider; drags the upper one along if they would cross.
    pub fn set_elevation_min(&mut self, value: f64) {
        self.elevation_min = value;
        if self.elevation_max < value {
            self.elevation_max = value;
        }
    }

    /// Move the upper slider; drags the lower one along if they would cross.
    pub fn set_elevation_max(&mut self, value: f64) {
        self.elevation_max = value;
        if self.elevation_min > value {
            self.elevation_min = value;
        }
    }

    /// Current selections as an explicit criteria value.
    pub fn criteria(&self) -> Option<FilterCriteria> {
        let region = self.region.as_ref()?;
        FilterCriteria::new(region.clone(), self.elevation_min, self.elevation_max).ok()
    }

    pub fn filter_view(&self) -> Option<FilterView<'_>> {
        let criteria = self.criteria()?;
        let filtered = filter(&self.table, &criteria);
        let mean_elevation = mean_elevation(&filtered);
        let sorted = sort_records(&filtered, self.sort_key);
        Some(FilterView {
            criteria,
            filtered,
            mean_elevation,
            sorted,
        })
    }

    pub fn region_counts(&self) -> BTreeMap<&str, usize> {
        count_by_region(&self.table)
    }

    pub fn region_mean_elevations(&self) -> BTreeMap<&str, f64> {
        mean_elevation_by_region(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{elevations, record, scenario_table};

    fn state() -> AppState {
        AppState::new(scenario_table(), PathBuf::from("airports.csv"))
    }

    #[test]
    fn new_state_spans_the_whole_table() {
        let s = state();
        assert_eq!(s.region.as_deref(), Some("US-ME"));
        assert_eq!((s.elevation_min, s.elevation_max), (20.0, 500.0));
        assert_eq!(s.page, Page::Home);
    }

    #[test]
    fn sliders_never_cross() {
        let mut s = state();
        s.set_elevation_min(600.0);
        assert_eq!((s.elevation_min, s.elevation_max), (600.0, 600.0));
        s.set_elevation_max(10.0);
        assert_eq!((s.elevation_min, s.elevation_max), (10.0, 10.0));
        assert!(s.criteria().is_some());
    }

    #[test]
    fn filter_view_follows_selections() {
        let mut s = state();
        s.sort_key = SortKey::Elevation;
        let view = s.filter_view().unwrap();
        assert_eq!(elevations(&view.filtered), vec![20.0, 100.0]);
        assert_eq!(elevations(&view.sorted), vec![100.0, 20.0]);
        assert_eq!(view.mean_elevation, Ok(60.0));

        s.set_elevation_max(50.0);
        let view = s.filter_view().unwrap();
        assert_eq!(elevations(&view.filtered), vec![20.0]);
    }

    #[test]
    fn empty_selection_reports_no_mean() {
        let mut s = state();
        s.region = Some("US-NH".to_string());
        s.set_elevation_max(100.0);
        let view = s.filter_view().unwrap();
        assert!(view.filtered.is_empty());
        assert_eq!(view.mean_elevation, Err(StatsError::EmptyInput));
    }

    #[test]
    fn fractional_bounds_widen_to_whole_feet() {
        let table = AirportTable::new(
            vec![
                record("US-RI", 41.7, -71.4, 12.6),
                record("US-RI", 41.2, -71.6, 108.3),
            ],
            0,
        );
        assert_eq!(slider_bounds(&table), Ok((12.0, 109.0)));

        let s = AppState::new(table, PathBuf::new());
        assert_eq!((s.elevation_min, s.elevation_max), (12.0, 109.0));
        let view = s.filter_view().unwrap();
        assert_eq!(elevations(&view.filtered), vec![12.6, 108.3]);
    }

    #[test]
    fn whole_foot_bounds_are_unchanged() {
        assert_eq!(slider_bounds(&scenario_table()), Ok((20.0, 500.0)));
        assert_eq!(
            slider_bounds(&AirportTable::default()),
            Err(StatsError::EmptyTable)
        );
    }

    #[test]
    fn empty_table_has_no_region_to_filter() {
        let s = AppState::new(AirportTable::default(), PathBuf::new());
        assert!(s.region.is_none());
        assert!(s.filter_view().is_none());
    }
}
