use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// One output row, in the OurAirports column layout the dashboard reads.
#[derive(Serialize)]
struct Row {
    ident: String,
    #[serde(rename = "type")]
    kind: &'static str,
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_ft: i64,
    iso_region: &'static str,
    municipality: &'static str,
}

/// Rough bounding box, typical elevation and airport count per state.
struct State {
    region: &'static str,
    lat: (f64, f64),
    lon: (f64, f64),
    mean_elevation: f64,
    elevation_spread: f64,
    airports: usize,
    towns: &'static [&'static str],
}

const STATES: [State; 6] = [
    State {
        region: "US-ME",
        lat: (43.1, 47.3),
        lon: (-70.9, -67.1),
        mean_elevation: 350.0,
        elevation_spread: 300.0,
        airports: 80,
        towns: &["Portland", "Bangor", "Augusta", "Presque Isle", "Rockland"],
    },
    State {
        region: "US-NH",
        lat: (42.7, 45.2),
        lon: (-72.5, -70.8),
        mean_elevation: 700.0,
        elevation_spread: 450.0,
        airports: 45,
        towns: &["Manchester", "Concord", "Lebanon", "Keene", "Berlin"],
    },
    State {
        region: "US-VT",
        lat: (42.8, 45.0),
        lon: (-73.4, -71.5),
        mean_elevation: 800.0,
        elevation_spread: 400.0,
        airports: 35,
        towns: &["Burlington", "Rutland", "Montpelier", "Morrisville"],
    },
    State {
        region: "US-MA",
        lat: (41.3, 42.8),
        lon: (-73.4, -70.0),
        mean_elevation: 250.0,
        elevation_spread: 250.0,
        airports: 70,
        towns: &["Boston", "Worcester", "Hyannis", "Pittsfield", "Nantucket"],
    },
    State {
        region: "US-CT",
        lat: (41.0, 42.0),
        lon: (-73.7, -71.8),
        mean_elevation: 300.0,
        elevation_spread: 250.0,
        airports: 40,
        towns: &["Hartford", "New Haven", "Groton", "Danbury"],
    },
    State {
        region: "US-RI",
        lat: (41.2, 42.0),
        lon: (-71.8, -71.1),
        mean_elevation: 80.0,
        elevation_spread: 60.0,
        airports: 12,
        towns: &["Providence", "Westerly", "Newport", "Block Island"],
    },
];

const KINDS: [&str; 4] = ["small_airport", "heliport", "seaplane_base", "medium_airport"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, (lo, hi): (f64, f64)) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate(rng: &mut SimpleRng) -> Vec<Row> {
    let mut rows = Vec::new();
    for state in &STATES {
        let code = &state.region[3..];
        for i in 0..state.airports {
            let town = *rng.pick(state.towns);
            let kind = *rng.pick(&KINDS);
            // seaplane bases sit on the water
            let elevation = if kind == "seaplane_base" {
                rng.uniform((0.0, 40.0))
            } else {
                rng.gauss(state.mean_elevation, state.elevation_spread).max(0.0)
            };
            rows.push(Row {
                ident: format!("{code}{i:02}"),
                kind,
                name: format!("{town} {}", kind.replace('_', " ")),
                latitude_deg: rng.uniform(state.lat),
                longitude_deg: rng.uniform(state.lon),
                elevation_ft: elevation.round() as i64,
                iso_region: state.region,
                municipality: town,
            });
        }
    }
    rows
}

fn write_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(rows: &[Row], path: &str) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("ident", DataType::Utf8, false),
        Field::new("type", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("latitude_deg", DataType::Float64, false),
        Field::new("longitude_deg", DataType::Float64, false),
        Field::new("elevation_ft", DataType::Int64, false),
        Field::new("iso_region", DataType::Utf8, false),
        Field::new("municipality", DataType::Utf8, false),
    ]));

    let strings = |f: fn(&Row) -> &str| StringArray::from(rows.iter().map(f).collect::<Vec<_>>());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(strings(|r| r.ident.as_str())),
            Arc::new(strings(|r| r.kind)),
            Arc::new(strings(|r| r.name.as_str())),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.latitude_deg))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.longitude_deg))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.elevation_ft))),
            Arc::new(strings(|r| r.iso_region)),
            Arc::new(strings(|r| r.municipality)),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng);

    let csv_path = "new_england_airports.csv";
    let parquet_path = "new_england_airports.parquet";
    write_csv(&rows, csv_path)?;
    write_parquet(&rows, parquet_path)?;

    println!(
        "Wrote {} airports across {} states to {csv_path} and {parquet_path}",
        rows.len(),
        STATES.len()
    );
    Ok(())
}
