use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::filter::distinct_regions;
use crate::data::model::AirportTable;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Region → Color32
// ---------------------------------------------------------------------------

/// One colour per region, assigned in lexicographic region order so a state
/// keeps its colour across charts.
#[derive(Debug, Clone, Default)]
pub struct RegionColors {
    mapping: BTreeMap<String, Color32>,
}

impl RegionColors {
    pub fn new(table: &AirportTable) -> Self {
        let regions = distinct_regions(table);
        let palette = generate_palette(regions.len());
        let mapping = regions
            .into_iter()
            .zip(palette)
            .map(|(r, c)| (r.to_string(), c))
            .collect();
        Self { mapping }
    }

    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping.get(region).copied().unwrap_or(Color32::GRAY)
    }
}
