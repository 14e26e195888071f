use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CityPairSummary, FareRow};

// ---------------------------------------------------------------------------
// Raw fare table (Dataset Viewer)
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 18.0;

/// Render the exact-year-filtered rows as a virtualized table.
pub fn fare_table(ui: &mut Ui, rows: &[FareRow]) {
    if rows.is_empty() {
        ui.label("No rows for the selected year.");
        return;
    }

    ui.push_id("fare_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(320.0)
            .columns(Column::auto(), 10)
            .header(ROW_HEIGHT, |mut header| {
                for title in [
                    "Year", "Qtr", "Origin", "Destination", "Miles", "Fare", "$ / mile",
                    "Passengers", "Revenue", "Carrier",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let r = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(r.record.year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(r.record.quarter.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&r.record.origin);
                    });
                    row.col(|ui| {
                        ui.label(&r.record.dest);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", r.record.nonstop_miles));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", r.record.fare));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.3}", r.fare_per_mile));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", r.record.passengers));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", r.revenue));
                    });
                    row.col(|ui| {
                        ui.label(&r.record.carrier);
                    });
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Revenue summary table (under the geo map)
// ---------------------------------------------------------------------------

pub fn summary_table(ui: &mut Ui, summaries: &[CityPairSummary]) {
    if summaries.is_empty() {
        ui.label("No routes for the selected year.");
        return;
    }

    ui.push_id("summary_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(280.0)
            .columns(Column::auto(), 4)
            .header(ROW_HEIGHT, |mut header| {
                for title in ["City-pair", "Passengers", "Revenue", "Carrier"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, summaries.len(), |mut row| {
                    let s = &summaries[row.index()];
                    row.col(|ui| {
                        ui.label(&s.city_pair);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", s.passengers));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", s.revenue));
                    });
                    row.col(|ui| {
                        ui.label(&s.carrier);
                    });
                });
            });
    });
}
