use crate::color::CarrierColors;
use crate::data::model::FareTable;
use crate::data::views::ViewParams;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the dashboard holds between frames: the immutable normalized
/// table, the current selector values, and the per-session carrier palette.
/// View outputs are *not* stored here — they are rebuilt from scratch each
/// frame by `data::views::build_views`, the full-recompute reactive model.
pub struct AppState {
    /// Loaded once at startup, read-only for the session.
    pub table: FareTable,

    /// Current selector/slider values, mutated by the control panel.
    pub params: ViewParams,

    /// Carrier → colour mapping for the scatter view.
    pub carrier_colors: CarrierColors,

    /// Where the table was loaded from, shown in the top bar.
    pub source: String,
}

impl AppState {
    pub fn new(table: FareTable, source: String) -> Self {
        let params = ViewParams::for_table(&table);
        let carrier_colors = CarrierColors::for_table(&table);
        AppState {
            table,
            params,
            carrier_colors,
            source,
        }
    }
}
