use eframe::egui::{self, Slider, Ui};

use crate::data::views::TOP_ROUTE_LIMIT;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label("USDoT Domestic Airline Consumer Airfare Report");
        ui.separator();
        ui.label(format!(
            "{} fare records, {}–{}",
            state.table.len(),
            state.table.year_min,
            state.table.year_max
        ));
        ui.separator();
        ui.label(format!("source: {}", state.source));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – the selectors driving the pipeline
// ---------------------------------------------------------------------------

/// Render the control panel. Widgets mutate `state.params` directly; the
/// central panel rebuilds every view from those params each frame, so no
/// explicit "changed" plumbing is needed.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let (year_min, year_max) = (state.table.year_min, state.table.year_max);

    ui.strong("Dataset viewer");
    let years = state.table.years.clone();
    egui::ComboBox::from_id_salt("table_year")
        .selected_text(state.params.table_year.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for year in years {
                ui.selectable_value(&mut state.params.table_year, year, year.to_string());
            }
        });
    ui.separator();

    ui.strong("Passenger volume");
    ui.checkbox(
        &mut state.params.top_routes_only,
        format!("Limit to top {TOP_ROUTE_LIMIT} routes"),
    );
    ui.separator();

    ui.strong("Miles vs. fares");
    ui.add(Slider::new(&mut state.params.range.0, year_min..=year_max).text("From"));
    ui.add(Slider::new(&mut state.params.range.1, year_min..=year_max).text("To"));
    if state.params.range.0 > state.params.range.1 {
        ui.small("Range is crossed: the scatter plot will be empty.");
    }
    ui.separator();

    ui.strong("Top revenue routes");
    ui.add(Slider::new(&mut state.params.revenue_year, year_min..=year_max).text("Year"));
    ui.add(Slider::new(&mut state.params.revenue_count, 1..=TOP_ROUTE_LIMIT).text("Routes"));
}
