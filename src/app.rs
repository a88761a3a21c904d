use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{pages, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AirportDashApp {
    pub state: AppState,
    pub config: DashboardConfig,
}

impl AirportDashApp {
    pub fn new(state: AppState, config: DashboardConfig) -> Self {
        Self { state, config }
    }
}

impl eframe::App for AirportDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: page selector ----
        egui::SidePanel::left("page_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            pages::central_panel(ui, &mut self.state, &self.config.page_heading);
        });
    }
}
