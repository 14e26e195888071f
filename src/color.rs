use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::FareTable;

// ---------------------------------------------------------------------------
// Carrier colour assignment
// ---------------------------------------------------------------------------

/// `n` visually distinct colours from evenly spaced hues.
fn spaced_hues(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.7, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Stable carrier → colour mapping for the scatter view, built once per
/// session from the table's distinct carriers (sorted, so the assignment
/// does not depend on row order).
#[derive(Debug, Clone, Default)]
pub struct CarrierColors {
    mapping: BTreeMap<String, Color32>,
}

impl CarrierColors {
    pub fn for_table(table: &FareTable) -> Self {
        let carriers: BTreeSet<&str> = table
            .rows
            .iter()
            .map(|r| r.record.carrier.as_str())
            .collect();
        let palette = spaced_hues(carriers.len());
        CarrierColors {
            mapping: carriers
                .into_iter()
                .map(str::to_string)
                .zip(palette)
                .collect(),
        }
    }

    pub fn color_for(&self, carrier: &str) -> Color32 {
        self.mapping
            .get(carrier)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}
