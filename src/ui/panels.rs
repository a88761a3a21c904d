use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::Page;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – page selector
// ---------------------------------------------------------------------------

/// Render the sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Select a Page");
    ui.separator();

    for page in Page::ALL {
        ui.selectable_value(&mut state.page, page, page.title());
    }

    ui.separator();
    ui.small(format!("Source: {}", state.source.display()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} airports loaded", state.table.len()));
        if state.table.skipped_rows() > 0 {
            ui.label(format!("({} incomplete rows skipped)", state.table.skipped_rows()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open airport data")
        .add_filter("Supported files", &["csv", "parquet", "pq", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} airports from {} ({} rows skipped)",
                    table.len(),
                    path.display(),
                    table.skipped_rows()
                );
                state.set_table(table, path);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
