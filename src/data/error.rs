use thiserror::Error;

/// Failure to turn an input file into an [`AirportTable`](super::model::AirportTable).
///
/// Fatal at startup; when a file is opened interactively the message is shown
/// in the top bar and the current table stays loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON: {0}")]
    InvalidJson(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("column '{column}' has type {found}, expected {expected}")]
    ColumnType {
        column: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

/// Statistics that are undefined for zero rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("elevation bounds requested on an empty table")]
    EmptyTable,

    #[error("mean elevation requested on an empty selection")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CriteriaError {
    #[error("elevation range is inverted: {min} > {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("elevation bound is not a number")]
    NotANumber,
}
