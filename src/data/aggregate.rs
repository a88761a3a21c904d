use std::collections::BTreeMap;

use super::model::AirportTable;

// ---------------------------------------------------------------------------
// Per-region aggregates
// ---------------------------------------------------------------------------
//
// Keys iterate in lexicographic region order; that order is the x axis of
// the line chart.

/// Number of airports per region.  Counts sum to `table.len()`.
pub fn count_by_region(table: &AirportTable) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for r in table.records() {
        *counts.entry(r.region.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Mean elevation per region.  Only regions with at least one row appear.
pub fn mean_elevation_by_region(table: &AirportTable) -> BTreeMap<&str, f64> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in table.records() {
        let (sum, n) = sums.entry(r.region.as_str()).or_insert((0.0, 0));
        *sum += r.elevation;
        *n += 1;
    }
    sums.into_iter()
        .map(|(region, (sum, n))| (region, sum / n as f64))
        .collect()
}

/// Regions ordered by count, largest first; equal counts stay lexicographic.
///
/// Bar and pie charts use this order.
pub fn rank_by_count<'a>(counts: &BTreeMap<&'a str, usize>) -> Vec<(&'a str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(&k, &v)| (k, v)).collect();
    // stable: BTreeMap order survives among ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Percentage of all airports per region, in [`rank_by_count`] order.
pub fn region_shares<'a>(counts: &BTreeMap<&'a str, usize>) -> Vec<(&'a str, f64)> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }
    rank_by_count(counts)
        .into_iter()
        .map(|(region, n)| (region, n as f64 * 100.0 / total as f64))
        .collect()
}
