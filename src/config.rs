use std::path::PathBuf;

/// Dataset read at startup.  Resolved relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "new_england_airports.csv";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed, build-time settings.  There are no command-line flags or
/// environment overrides; another file can still be opened from the menu.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Heading shown above every page.
    pub page_heading: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window_title: "Airport Dash – New England Airports".to_string(),
            inner_size: [1200.0, 800.0],
            min_inner_size: [600.0, 400.0],
            page_heading: "Learn more about New England airports!".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_title(&self.window_title)
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size),
            ..Default::default()
        }
    }
}
