use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points,
    Polygon, Text,
};

use crate::color::RegionColors;
use crate::data::aggregate::{rank_by_count, region_shares};
use crate::data::model::AirportTable;

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Mercator y coordinate, in degree-equivalent units, for a latitude.
pub fn mercator_y(latitude: f64) -> f64 {
    (FRAC_PI_4 + latitude.to_radians() / 2.0).tan().ln().to_degrees()
}

/// Inverse of [`mercator_y`].
pub fn mercator_latitude(y: f64) -> f64 {
    (2.0 * y.to_radians().exp().atan() - FRAC_PI_2).to_degrees()
}

/// Axis formatter that labels ticks at integer positions with `labels[i]`.
fn category_formatter(labels: Vec<String>) -> impl Fn(GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

/// Every airport as a red marker; longitude on x, Mercator latitude on y.
pub fn airport_map(ui: &mut Ui, table: &AirportTable) {
    let points: PlotPoints = table
        .records()
        .iter()
        .map(|r| [r.longitude, mercator_y(r.latitude)])
        .collect();

    let markers = Points::new(points)
        .name("Airports")
        .shape(MarkerShape::Circle)
        .radius(2.5)
        .color(Color32::from_rgba_unmultiplied(220, 30, 30, 204));

    Plot::new("airport_map")
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .y_axis_formatter(|mark, _range| format!("{:.1}°", mercator_latitude(mark.value)))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(markers);
        });
}

// ---------------------------------------------------------------------------
// Bar chart – airports per state
// ---------------------------------------------------------------------------

pub fn airports_by_state_bar_chart(
    ui: &mut Ui,
    counts: &BTreeMap<&str, usize>,
    colors: &RegionColors,
) {
    let ranked = rank_by_count(counts);
    let labels: Vec<String> = ranked.iter().map(|(r, _)| r.to_string()).collect();

    let bars: Vec<Bar> = ranked
        .iter()
        .enumerate()
        .map(|(i, &(region, n))| {
            Bar::new(i as f64, n as f64)
                .name(region)
                .fill(colors.color_for(region))
                .stroke(Stroke::new(1.0, Color32::BLACK))
                .width(0.7)
        })
        .collect();

    Plot::new("airports_by_state")
        .x_axis_label("State")
        .y_axis_label("Number of Airports")
        .x_axis_formatter(category_formatter(labels))
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Number of Airports by State"));
        });
}

// ---------------------------------------------------------------------------
// Line chart – mean elevation per state
// ---------------------------------------------------------------------------

pub fn elevation_trend_line_chart(ui: &mut Ui, means: &BTreeMap<&str, f64>) {
    let labels: Vec<String> = means.keys().map(|r| r.to_string()).collect();
    let coords: Vec<[f64; 2]> = means
        .values()
        .enumerate()
        .map(|(i, &mean)| [i as f64, mean])
        .collect();

    let green = Color32::from_rgb(0, 128, 0);
    let line = Line::new(PlotPoints::from(coords.clone()))
        .name("Average Elevation (ft)")
        .color(green)
        .width(2.0);
    let markers = Points::new(PlotPoints::from(coords))
        .shape(MarkerShape::Circle)
        .radius(4.0)
        .color(green);

    Plot::new("elevation_trend")
        .legend(Legend::default())
        .x_axis_label("State")
        .y_axis_label("Average Elevation (ft)")
        .x_axis_formatter(category_formatter(labels))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(markers);
        });
}

// ---------------------------------------------------------------------------
// Pie chart – share of airports per state
// ---------------------------------------------------------------------------

/// Wedge outline from `start` to `end` (radians, counter-clockwise) on the unit circle.
fn wedge(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) / TAU) * 128.0).ceil().max(2.0) as usize;
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = start + (end - start) * i as f64 / steps as f64;
        pts.push([a.cos(), a.sin()]);
    }
    pts
}

pub fn airports_by_state_pie_chart(
    ui: &mut Ui,
    counts: &BTreeMap<&str, usize>,
    colors: &RegionColors,
) {
    let shares = region_shares(counts);

    Plot::new("airports_by_state_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            // clockwise from twelve o'clock
            let mut angle = FRAC_PI_2;
            for (region, pct) in shares {
                let sweep = pct / 100.0 * TAU;
                let (start, end) = (angle - sweep, angle);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge(start, end)))
                        .name(region)
                        .fill_color(colors.color_for(region))
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = (start + end) / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    format!("{pct:.1}%"),
                ));
                angle = start;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mercator_round_trips_new_england_latitudes() {
        for lat in [41.0, 42.5, 44.0, 47.4] {
            assert!((mercator_latitude(mercator_y(lat)) - lat).abs() < 1e-9);
        }
        assert!(mercator_y(0.0).abs() < 1e-12);
        assert!(mercator_y(45.0) > 45.0);
    }

    #[test]
    fn wedge_starts_at_centre_and_stays_on_unit_circle() {
        let pts = wedge(0.0, FRAC_PI_2);
        assert_eq!(pts[0], [0.0, 0.0]);
        for p in &pts[1..] {
            assert!(((p[0] * p[0] + p[1] * p[1]) - 1.0).abs() < 1e-9);
        }
        let last = pts[pts.len() - 1];
        assert!(last[0].abs() < 1e-9 && (last[1] - 1.0).abs() < 1e-9);
    }
}
