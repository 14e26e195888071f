use eframe::egui;

use crate::data::views::build_views;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AirfareDashApp {
    pub state: AppState,
}

impl AirfareDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for AirfareDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Full recompute from the immutable table and the current selector
        // values; there is no cached view state to invalidate.
        let views = build_views(&self.state.table, &self.state.params);

        // ---- Central panel: the four linked views ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    ui.heading("Dataset Viewer");
                    table::fare_table(ui, &views.table.rows);
                    ui.separator();

                    ui.heading("Passenger Volume by City-Pair");
                    plot::histogram(ui, &views.histogram);
                    ui.separator();

                    ui.heading("Miles vs. Fares");
                    plot::scatter(ui, &views.scatter, &self.state.carrier_colors);
                    ui.separator();

                    ui.heading("Top Revenue-Generating Routes");
                    plot::geo_map(ui, &views.geo);
                    table::summary_table(ui, &views.geo.summaries);
                });
        });
    }
}
