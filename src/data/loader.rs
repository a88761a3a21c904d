use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::LoadError;
use super::model::{AirportRecord, AirportTable};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const REGION_COLUMN: &str = "iso_region";
pub const LATITUDE_COLUMN: &str = "latitude_deg";
pub const LONGITUDE_COLUMN: &str = "longitude_deg";
pub const ELEVATION_COLUMN: &str = "elevation_ft";

const REQUIRED_COLUMNS: [&str; 4] = [
    REGION_COLUMN,
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    ELEVATION_COLUMN,
];

/// Identifier columns, read when present.
const IDENT_COLUMNS: [&str; 4] = ["ident", "name", "type", "municipality"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an airport table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – OurAirports layout, header row required (the normal input)
/// * `.parquet` – same column names, numeric or string columns
/// * `.json`    – `[{ "iso_region": "US-ME", "elevation_ft": 20, ... }, ...]`
///
/// Rows with a blank region or a blank / non-numeric latitude, longitude or
/// elevation are dropped and counted in [`AirportTable::skipped_rows`].
pub fn load_file(path: &Path) -> Result<AirportTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }?;

    if table.skipped_rows() > 0 {
        log::warn!(
            "{}: skipped {} rows with missing region, coordinates or elevation",
            path.display(),
            table.skipped_rows()
        );
    }
    Ok(table)
}

/// Values pulled out of one source row before validation.
#[derive(Default)]
struct RawRow {
    ident: String,
    name: String,
    kind: String,
    municipality: String,
    region: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
}

impl RawRow {
    fn into_record(self) -> Option<AirportRecord> {
        let region = self.region.filter(|r| !r.is_empty())?;
        let latitude = self.latitude.filter(|v| v.is_finite())?;
        let longitude = self.longitude.filter(|v| v.is_finite())?;
        let elevation = self.elevation.filter(|v| v.is_finite())?;
        Some(AirportRecord {
            ident: self.ident,
            name: self.name,
            kind: self.kind,
            municipality: self.municipality,
            region,
            latitude,
            longitude,
            elevation,
        })
    }

    fn set_ident(&mut self, column: &str, value: String) {
        match column {
            "ident" => self.ident = value,
            "name" => self.name = value,
            "type" => self.kind = value,
            "municipality" => self.municipality = value,
            _ => {}
        }
    }
}

/// Collects validated rows and counts the rejected ones.
#[derive(Default)]
struct TableBuilder {
    records: Vec<AirportRecord>,
    skipped: usize,
}

impl TableBuilder {
    fn push(&mut self, row: RawRow) {
        match row.into_record() {
            Some(record) => self.records.push(record),
            None => self.skipped += 1,
        }
    }

    fn finish(self) -> AirportTable {
        AirportTable::new(self.records, self.skipped)
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<AirportTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_csv(file)
}

/// Parse CSV text from any reader.  The first row is the header.
pub fn read_csv<R: std::io::Read>(input: R) -> Result<AirportTable, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    let position = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let region_idx = position(REGION_COLUMN)?;
    let lat_idx = position(LATITUDE_COLUMN)?;
    let lon_idx = position(LONGITUDE_COLUMN)?;
    let elev_idx = position(ELEVATION_COLUMN)?;

    let ident_cols: Vec<(usize, &str)> = IDENT_COLUMNS
        .iter()
        .filter_map(|&name| headers.iter().position(|h| h == name).map(|i| (i, name)))
        .collect();

    let mut builder = TableBuilder::default();
    for result in reader.records() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let mut row = RawRow {
            region: Some(cell(region_idx).trim().to_string()),
            latitude: parse_number(cell(lat_idx)),
            longitude: parse_number(cell(lon_idx)),
            elevation: parse_number(cell(elev_idx)),
            ..RawRow::default()
        };
        for &(idx, name) in &ident_cols {
            row.set_ident(name, cell(idx).to_string());
        }
        builder.push(row);
    }

    Ok(builder.finish())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the same column names as the CSV layout.
///
/// Numeric columns may be stored as any integer / float type or as strings;
/// everything is cast to `Float64`, and values that fail the cast count as
/// missing.
fn load_parquet(path: &Path) -> Result<AirportTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    // a file with zero row groups yields no batches, so check the schema up front
    if let Some(&missing) = REQUIRED_COLUMNS
        .iter()
        .find(|c| builder.schema().index_of(c).is_err())
    {
        return Err(LoadError::MissingColumn(missing));
    }
    let reader = builder.build()?;

    let mut builder = TableBuilder::default();
    for batch in reader {
        read_batch(&batch?, &mut builder)?;
    }
    Ok(builder.finish())
}

fn read_batch(batch: &RecordBatch, builder: &mut TableBuilder) -> Result<(), LoadError> {
    let schema = batch.schema();
    let column = |name: &'static str| {
        schema
            .index_of(name)
            .map(|i| batch.column(i))
            .map_err(|_| LoadError::MissingColumn(name))
    };

    let region = cast(column(REGION_COLUMN)?, &DataType::Utf8)?;
    let region = region.as_string_opt::<i32>().ok_or(LoadError::ColumnType {
        column: REGION_COLUMN,
        expected: "Utf8",
        found: format!("{:?}", region.data_type()),
    })?;

    let lat = cast(column(LATITUDE_COLUMN)?, &DataType::Float64)?;
    let lon = cast(column(LONGITUDE_COLUMN)?, &DataType::Float64)?;
    let elev = cast(column(ELEVATION_COLUMN)?, &DataType::Float64)?;
    let lat = lat.as_primitive::<Float64Type>();
    let lon = lon.as_primitive::<Float64Type>();
    let elev = elev.as_primitive::<Float64Type>();

    let mut ident_cols: Vec<(&str, ArrayRef)> = Vec::new();
    for name in IDENT_COLUMNS {
        if let Ok(idx) = schema.index_of(name) {
            ident_cols.push((name, cast(batch.column(idx), &DataType::Utf8)?));
        }
    }

    let float_at = |arr: &arrow::array::Float64Array, row: usize| {
        (!arr.is_null(row)).then(|| arr.value(row))
    };

    for row in 0..batch.num_rows() {
        let mut raw = RawRow {
            region: (!region.is_null(row)).then(|| region.value(row).trim().to_string()),
            latitude: float_at(lat, row),
            longitude: float_at(lon, row),
            elevation: float_at(elev, row),
            ..RawRow::default()
        };
        for (name, arr) in &ident_cols {
            if let Some(strings) = arr.as_string_opt::<i32>() {
                if !strings.is_null(row) {
                    raw.set_ident(name, strings.value(row).to_string());
                }
            }
        }
        builder.push(raw);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
///
/// A required key missing from the first record is a [`LoadError::MissingColumn`];
/// later records missing it are skipped like blank CSV cells.
fn load_json(path: &Path) -> Result<AirportTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_json(&text)
}

pub fn read_json(text: &str) -> Result<AirportTable, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::InvalidJson("expected top-level array".into()))?;

    if let Some(first) = rows.first() {
        let obj = first
            .as_object()
            .ok_or_else(|| LoadError::InvalidJson("row 0 is not an object".into()))?;
        if let Some(&missing) = REQUIRED_COLUMNS.iter().find(|c| !obj.contains_key(**c)) {
            return Err(LoadError::MissingColumn(missing));
        }
    }

    let mut builder = TableBuilder::default();
    for (i, value) in rows.iter().enumerate() {
        let obj = value
            .as_object()
            .ok_or_else(|| LoadError::InvalidJson(format!("row {i} is not an object")))?;

        let mut raw = RawRow {
            region: obj
                .get(REGION_COLUMN)
                .and_then(JsonValue::as_str)
                .map(|s| s.trim().to_string()),
            latitude: obj.get(LATITUDE_COLUMN).and_then(json_number),
            longitude: obj.get(LONGITUDE_COLUMN).and_then(json_number),
            elevation: obj.get(ELEVATION_COLUMN).and_then(json_number),
            ..RawRow::default()
        };
        for name in IDENT_COLUMNS {
            if let Some(s) = obj.get(name).and_then(JsonValue::as_str) {
                raw.set_ident(name, s.to_string());
            }
        }
        builder.push(raw);
    }
    Ok(builder.finish())
}

fn json_number(val: &JsonValue) -> Option<f64> {
    match val {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => parse_number(s),
        _ => None,
    }
}
