use super::aggregate::{passenger_volume, revenue_by_pair};
use super::filter::{filter_year, filter_year_range, top_n};
use super::model::{CityPairSummary, FareRow, FareTable};

/// Route-count cap shared by the histogram toggle and the map slider.
pub const TOP_ROUTE_LIMIT: usize = 500;

// ---------------------------------------------------------------------------
// ViewParams – current selector values
// ---------------------------------------------------------------------------

/// The full user-input state the pipeline depends on. The UI mutates this
/// struct and re-runs [`build_views`]; the pipeline itself never touches
/// widget state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewParams {
    /// Exact year shown in the raw-table view.
    pub table_year: i32,
    /// Histogram: keep only the top [`TOP_ROUTE_LIMIT`] routes by volume.
    pub top_routes_only: bool,
    /// Inclusive (min, max) year range for the scatter view.
    pub range: (i32, i32),
    /// Year the revenue map aggregates over.
    pub revenue_year: i32,
    /// Number of routes on the map, 1..=[`TOP_ROUTE_LIMIT`].
    pub revenue_count: usize,
}

impl ViewParams {
    /// Dashboard defaults, clamped into the table's observed year bounds.
    pub fn for_table(table: &FareTable) -> Self {
        let clamp = |y: i32| y.clamp(table.year_min, table.year_max);
        ViewParams {
            table_year: table.years.first().copied().unwrap_or(0),
            top_routes_only: true,
            range: (clamp(1999), clamp(2013)),
            revenue_year: clamp(2017),
            revenue_count: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// View shapes: the charting-layer contract
// ---------------------------------------------------------------------------

/// Raw-table view: pass-through of the exact-year-filtered rows.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub rows: Vec<FareRow>,
}

/// Histogram view: one mean-passengers value per city-pair, descending.
#[derive(Debug, Clone, Default)]
pub struct HistogramView {
    pub mean_passengers: Vec<f64>,
}

/// One scatter point; the carrier tag drives the color role.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub miles: f64,
    pub fare: f64,
    pub carrier: String,
}

/// Scatter view: (distance, fare) points colored by carrier. The OLS trend
/// line is fitted by the charting layer over these same points.
#[derive(Debug, Clone, Default)]
pub struct ScatterView {
    pub points: Vec<ScatterPoint>,
}

/// One great-circle-free straight route line, endpoints as (lon, lat).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLine {
    pub from: [f64; 2],
    pub to: [f64; 2],
    /// Ramps linearly with rank: (rank + 1) / plotted_len, so the last
    /// plotted route is fully opaque and the first is nearly transparent.
    pub opacity: f32,
}

/// An endpoint marker with its hover label. Both ends of every route are
/// pooled into one marker set; duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointMarker {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

/// Geo-route view: top-revenue route lines, endpoint markers, and the
/// underlying summaries for the companion table.
#[derive(Debug, Clone, Default)]
pub struct GeoRouteView {
    pub routes: Vec<RouteLine>,
    pub markers: Vec<EndpointMarker>,
    pub summaries: Vec<CityPairSummary>,
}

/// Everything one frame of the dashboard renders.
#[derive(Debug, Clone, Default)]
pub struct DashboardViews {
    pub table: TableView,
    pub histogram: HistogramView,
    pub scatter: ScatterView,
    pub geo: GeoRouteView,
}

// ---------------------------------------------------------------------------
// The pipeline entry-point
// ---------------------------------------------------------------------------

/// Recompute all four views from scratch. Called on every input change; the
/// table is read-only and every output is freshly allocated, so there is no
/// cache to invalidate.
pub fn build_views(table: &FareTable, params: &ViewParams) -> DashboardViews {
    DashboardViews {
        table: table_view(table, params),
        histogram: histogram_view(table, params),
        scatter: scatter_view(table, params),
        geo: geo_route_view(table, params),
    }
}

fn table_view(table: &FareTable, params: &ViewParams) -> TableView {
    TableView {
        rows: filter_year(&table.rows, params.table_year),
    }
}

fn histogram_view(table: &FareTable, params: &ViewParams) -> HistogramView {
    let volumes = passenger_volume(&table.rows);
    let limit = params.top_routes_only.then_some(TOP_ROUTE_LIMIT);
    HistogramView {
        mean_passengers: top_n(&volumes, limit)
            .into_iter()
            .map(|v| v.mean_passengers)
            .collect(),
    }
}

fn scatter_view(table: &FareTable, params: &ViewParams) -> ScatterView {
    let (min, max) = params.range;
    ScatterView {
        points: filter_year_range(&table.rows, min, max)
            .into_iter()
            .map(|row| ScatterPoint {
                miles: row.record.nonstop_miles,
                fare: row.record.fare,
                carrier: row.record.carrier,
            })
            .collect(),
    }
}

fn geo_route_view(table: &FareTable, params: &ViewParams) -> GeoRouteView {
    let year_rows = filter_year(&table.rows, params.revenue_year);
    let summaries = top_n(&revenue_by_pair(&year_rows), Some(params.revenue_count));

    let plotted = summaries.len();
    let routes = summaries
        .iter()
        .enumerate()
        .map(|(rank, s)| RouteLine {
            from: [s.origin_lon, s.origin_lat],
            to: [s.dest_lon, s.dest_lat],
            opacity: (rank + 1) as f32 / plotted as f32,
        })
        .collect();

    let markers = summaries
        .iter()
        .map(|s| EndpointMarker {
            name: s.origin.clone(),
            lon: s.origin_lon,
            lat: s.origin_lat,
        })
        .chain(summaries.iter().map(|s| EndpointMarker {
            name: s.dest.clone(),
            lon: s.dest_lon,
            lat: s.dest_lat,
        }))
        .collect();

    GeoRouteView {
        routes,
        markers,
        summaries,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::table;

    fn params(table: &FareTable) -> ViewParams {
        ViewParams::for_table(table)
    }

    #[test]
    fn table_view_passes_through_selected_year() {
        let t = table(&[
            (2000, "A", "B", 100.0, 200.0, 10.0),
            (2001, "C", "D", 100.0, 200.0, 10.0),
        ]);
        let mut p = params(&t);
        p.table_year = 2001;
        let views = build_views(&t, &p);
        assert_eq!(views.table.rows.len(), 1);
        assert_eq!(views.table.rows[0].city_pair, "C - D");
    }

    #[test]
    fn histogram_column_is_descending_means() {
        let t = table(&[
            (2000, "A", "B", 100.0, 200.0, 5.0),
            (2000, "C", "D", 100.0, 200.0, 50.0),
        ]);
        let views = build_views(&t, &params(&t));
        assert_eq!(views.histogram.mean_passengers, vec![50.0, 5.0]);
    }

    #[test]
    fn scatter_respects_range_and_carries_carrier() {
        let t = table(&[
            (1998, "A", "B", 120.0, 210.0, 10.0),
            (2005, "C", "D", 300.0, 400.0, 10.0),
        ]);
        let mut p = params(&t);
        p.range = (2000, 2010);
        let views = build_views(&t, &p);
        assert_eq!(views.scatter.points.len(), 1);
        assert_eq!(views.scatter.points[0].miles, 300.0);
        assert_eq!(views.scatter.points[0].carrier, "WN");
    }

    #[test]
    fn geo_view_truncates_to_requested_count() {
        let t = table(&[
            (2017, "A", "B", 100.0, 100.0, 10.0),
            (2017, "C", "D", 100.0, 100.0, 90.0),
            (2017, "E", "F", 100.0, 100.0, 40.0),
        ]);
        let mut p = params(&t);
        p.revenue_year = 2017;
        p.revenue_count = 2;
        let views = build_views(&t, &p);
        assert_eq!(views.geo.routes.len(), 2);
        // Highest revenue first.
        assert_eq!(views.geo.summaries[0].city_pair, "C - D");
    }

    #[test]
    fn geo_opacity_ramps_to_fully_opaque() {
        let t = table(&[
            (2017, "A", "B", 100.0, 100.0, 10.0),
            (2017, "C", "D", 100.0, 100.0, 90.0),
            (2017, "E", "F", 100.0, 100.0, 40.0),
            (2017, "G", "H", 100.0, 100.0, 70.0),
        ]);
        let mut p = params(&t);
        p.revenue_year = 2017;
        p.revenue_count = 4;
        let views = build_views(&t, &p);
        let opacities: Vec<f32> = views.geo.routes.iter().map(|r| r.opacity).collect();
        assert_eq!(opacities, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn geo_markers_pool_both_endpoints_with_duplicates() {
        let t = table(&[
            (2017, "A", "B", 100.0, 100.0, 10.0),
            (2017, "A", "C", 100.0, 100.0, 20.0),
        ]);
        let mut p = params(&t);
        p.revenue_year = 2017;
        p.revenue_count = 10;
        let views = build_views(&t, &p);
        let names: Vec<&str> = views.geo.markers.iter().map(|m| m.name.as_str()).collect();
        // Two origins (A twice) then two destinations.
        assert_eq!(names, vec!["A", "A", "C", "B"]);
    }

    #[test]
    fn empty_year_renders_empty_views_without_error() {
        let t = table(&[(2000, "A", "B", 100.0, 200.0, 10.0)]);
        let mut p = params(&t);
        p.table_year = 1980;
        p.revenue_year = 1980;
        p.range = (1981, 1982);
        let views = build_views(&t, &p);
        assert!(views.table.rows.is_empty());
        assert!(views.scatter.points.is_empty());
        assert!(views.geo.routes.is_empty());
        assert!(views.geo.markers.is_empty());
    }

    #[test]
    fn defaults_clamp_into_observed_bounds() {
        let t = table(&[
            (2001, "A", "B", 100.0, 200.0, 10.0),
            (2004, "A", "B", 100.0, 200.0, 10.0),
        ]);
        let p = ViewParams::for_table(&t);
        assert_eq!(p.table_year, 2001);
        assert_eq!(p.range, (2001, 2004));
        assert_eq!(p.revenue_year, 2004);
        assert_eq!(p.revenue_count, 100);
    }
}
