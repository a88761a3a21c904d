use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::AirportRecord;

const HEADERS: [&str; 7] = [
    "Ident",
    "Name",
    "Type",
    "Municipality",
    "State",
    "Latitude",
    "Elevation (ft)",
];

/// Scrollable, striped table of airports.  `id` must be unique on the page.
pub fn airport_table(ui: &mut Ui, id: &str, rows: &[&AirportRecord], max_height: f32) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(max_height)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(60.0))
            .column(Column::initial(220.0).clip(true))
            .columns(Column::auto(), HEADERS.len() - 2)
            .header(20.0, |mut header| {
                for title in HEADERS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let r = rows[row.index()];
                    let cells = [
                        r.ident.clone(),
                        r.name.clone(),
                        r.kind.clone(),
                        r.municipality.clone(),
                        r.region.clone(),
                        format!("{:.4}", r.latitude),
                        format!("{:.0}", r.elevation),
                    ];
                    for text in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(text);
                        });
                    }
                });
            });
    });
}
