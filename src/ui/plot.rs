use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::color::CarrierColors;
use crate::data::views::{GeoRouteView, HistogramView, ScatterView};

const PLOT_HEIGHT: f32 = 340.0;
const HISTOGRAM_BINS: usize = 50;
const ROUTE_COLOR: Color32 = Color32::from_rgb(220, 50, 47);

// ---------------------------------------------------------------------------
// Passenger-volume histogram
// ---------------------------------------------------------------------------

/// Distribution of mean quarterly passengers per route. The view hands over
/// one value per city-pair; binning happens here, at the charting edge.
pub fn histogram(ui: &mut Ui, view: &HistogramView) {
    let Some((width, counts)) = bin_counts(&view.mean_passengers, HISTOGRAM_BINS) else {
        ui.label("No routes to plot.");
        return;
    };

    let bars: Vec<Bar> = counts
        .into_iter()
        .map(|(center, count)| Bar::new(center, count as f64).width(width * 0.95))
        .collect();

    Plot::new("pax_histogram")
        .height(PLOT_HEIGHT)
        .x_axis_label("Mean quarterly passengers")
        .y_axis_label("Routes")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE));
        });
}

/// Equal-width bins over the finite values; `None` when nothing is finite.
/// A degenerate min == max input collapses into a single unit-width bin.
fn bin_counts(values: &[f64], bins: usize) -> Option<(f64, Vec<(f64, usize)>)> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return None;
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Some((1.0, vec![(min, finite.len())]));
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in &finite {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let centers = counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| (min + (i as f64 + 0.5) * width, c))
        .collect();
    Some((width, centers))
}

// ---------------------------------------------------------------------------
// Miles vs. fares scatter with OLS trend line
// ---------------------------------------------------------------------------

pub fn scatter(ui: &mut Ui, view: &ScatterView, colors: &CarrierColors) {
    if view.points.is_empty() {
        ui.label("No fares in the selected year range.");
        return;
    }

    // One Points element per carrier so the legend and colours line up.
    let mut by_carrier: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &view.points {
        by_carrier
            .entry(p.carrier.as_str())
            .or_default()
            .push([p.miles, p.fare]);
    }

    let fit = ols_fit(
        view.points
            .iter()
            .map(|p| (p.miles, p.fare))
            .collect::<Vec<_>>()
            .as_slice(),
    );

    Plot::new("miles_vs_fares")
        .height(PLOT_HEIGHT)
        .legend(egui_plot::Legend::default())
        .x_axis_label("Nonstop miles")
        .y_axis_label("Average fare")
        .show(ui, |plot_ui| {
            for (carrier, pts) in by_carrier {
                plot_ui.points(
                    Points::new(PlotPoints::from(pts))
                        .name(carrier)
                        .color(colors.color_for(carrier))
                        .radius(1.8),
                );
            }
            if let Some((slope, intercept)) = fit {
                let xs = view.points.iter().map(|p| p.miles);
                let x0 = xs.clone().fold(f64::INFINITY, f64::min);
                let x1 = xs.fold(f64::NEG_INFINITY, f64::max);
                let trend = vec![[x0, slope * x0 + intercept], [x1, slope * x1 + intercept]];
                plot_ui.line(
                    Line::new(PlotPoints::from(trend))
                        .name("OLS trend")
                        .color(Color32::WHITE)
                        .width(2.0),
                );
            }
        });
}

/// Ordinary-least-squares fit over (x, y) pairs: `Some((slope, intercept))`,
/// or `None` with fewer than two finite points or zero x-variance.
fn ols_fit(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let finite: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if finite.len() < 2 {
        return None;
    }

    let n = finite.len() as f64;
    let mean_x = finite.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = finite.iter().map(|(_, y)| y).sum::<f64>() / n;
    let ss_xx: f64 = finite.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    if ss_xx == 0.0 {
        return None;
    }
    let ss_xy: f64 = finite
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    let slope = ss_xy / ss_xx;
    Some((slope, mean_y - slope * mean_x))
}

// ---------------------------------------------------------------------------
// Top-revenue route map
// ---------------------------------------------------------------------------

/// Straight-line route geometry on a lon/lat plane. Opacity comes from the
/// view (rank-ramped), markers carry the city name as the hover label.
pub fn geo_map(ui: &mut Ui, view: &GeoRouteView) {
    if view.routes.is_empty() {
        ui.label("No routes for the selected year.");
        return;
    }

    Plot::new("revenue_routes")
        .height(PLOT_HEIGHT)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .show(ui, |plot_ui| {
            for route in &view.routes {
                let alpha = (route.opacity * 255.0) as u8;
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![route.from, route.to]))
                        .color(Color32::from_rgba_unmultiplied(
                            ROUTE_COLOR.r(),
                            ROUTE_COLOR.g(),
                            ROUTE_COLOR.b(),
                            alpha,
                        ))
                        .width(1.0),
                );
            }
            for marker in &view.markers {
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[marker.lon, marker.lat]]))
                        .name(&marker.name)
                        .color(ROUTE_COLOR)
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
