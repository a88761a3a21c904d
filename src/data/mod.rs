/// Data layer: core types, loading, and the pure query engines.
///
/// Architecture:
/// ```text
///  .csv / .parquet / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → AirportTable (rows with blanks dropped)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ AirportTable  │  Vec<AirportRecord>, immutable
///   └──────────────┘
///        │
///        ├──► filter     region + elevation range → Vec<&AirportRecord>
///        ├──► aggregate  per-region counts / mean elevation
///        ├──► sort       descending by elevation or latitude
///        └──► summary    mean elevation of a selection
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
pub mod summary;

#[cfg(test)]
pub mod test_support;
