use eframe::egui::{self, RichText, Ui};

use crate::data::filter::distinct_regions;
use crate::data::model::{Page, SortKey};
use crate::state::{slider_bounds, AppState};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Central panel – one view per sidebar page
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &mut AppState, heading: &str) {
    ui.heading(heading);
    ui.add_space(4.0);

    match state.page {
        Page::Home => home(ui, state),
        Page::Map => {
            ui.label("Displaying a 2D map of New England Airports");
            plot::airport_map(ui, &state.table);
        }
        Page::BarChart => {
            ui.strong("Number of Airports by State");
            plot::airports_by_state_bar_chart(ui, &state.region_counts(), &state.region_colors);
        }
        Page::LineChart => {
            ui.strong("Average Elevation of Airports by State");
            plot::elevation_trend_line_chart(ui, &state.region_mean_elevations());
        }
        Page::PieChart => {
            ui.strong("Distribution of Airports by State");
            plot::airports_by_state_pie_chart(ui, &state.region_counts(), &state.region_colors);
        }
        Page::FilterData => filter_data(ui, state),
    }
}

fn home(ui: &mut Ui, state: &AppState) {
    ui.label("Select a page from the sidebar to explore the data.");
    ui.add_space(8.0);
    ui.label(format!(
        "{} airports across {} states.",
        state.table.len(),
        distinct_regions(&state.table).len()
    ));
}

// ---------------------------------------------------------------------------
// Filter Data page
// ---------------------------------------------------------------------------

fn filter_data(ui: &mut Ui, state: &mut AppState) {
    let regions: Vec<String> = distinct_regions(&state.table)
        .into_iter()
        .map(str::to_string)
        .collect();
    let Ok((lo, hi)) = slider_bounds(&state.table) else {
        ui.label("The loaded table has no airports.");
        return;
    };

    // ---- Controls ----
    let current = state.region.clone().unwrap_or_default();
    egui::ComboBox::from_label("Select a State:")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for region in &regions {
                if ui.selectable_label(current == *region, region).clicked() {
                    state.region = Some(region.clone());
                }
            }
        });

    ui.label("Select Elevation Range:");
    let mut min = state.elevation_min;
    if ui
        .add(egui::Slider::new(&mut min, lo..=hi).step_by(1.0).text("min (ft)"))
        .changed()
    {
        state.set_elevation_min(min);
    }
    let mut max = state.elevation_max;
    if ui
        .add(egui::Slider::new(&mut max, lo..=hi).step_by(1.0).text("max (ft)"))
        .changed()
    {
        state.set_elevation_max(max);
    }

    let mut sort_key = state.sort_key;
    egui::ComboBox::from_label("Sort by:")
        .selected_text(sort_key.label())
        .show_ui(ui, |ui: &mut Ui| {
            for key in SortKey::ALL {
                ui.selectable_value(&mut sort_key, key, key.label());
            }
        });
    state.sort_key = sort_key;

    ui.separator();

    // ---- Results ----
    let Some(view) = state.filter_view() else {
        return;
    };
    let half = (ui.available_height() / 2.0 - 60.0).max(120.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong(format!(
                "Airports in {} with elevation between {:.0} and {:.0} ft:",
                view.criteria.region(),
                view.criteria.elevation_min(),
                view.criteria.elevation_max()
            ));
            table::airport_table(ui, "filtered_airports", &view.filtered, half);

            ui.add_space(8.0);
            match view.mean_elevation {
                Ok(mean) => ui.label(format!(
                    "Average elevation of the filtered airports: {mean:.2} ft"
                )),
                Err(_) => ui.label(RichText::new("No airports match the selected filters.").italics()),
            };

            ui.add_space(8.0);
            ui.strong(format!("Sorted Airports by {}:", state.sort_key));
            table::airport_table(ui, "sorted_airports", &view.sorted, half);
        });
}
