/// Data layer: the full fare pipeline, UI-free and testable on its own.
///
/// Architecture:
/// ```text
///  us_airfares_processed.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<FareRecord>, LoadError is fatal
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  derive city-pair / fare-per-mile / revenue,
///   └───────────┘  sort by (year, quarter) → immutable FareTable
///        │
///        ▼
///   ┌──────────┐   ┌───────────┐
///   │  filter   │ → │ aggregate  │  pure, freshly allocated per run
///   └──────────┘   └───────────┘
///        │               │
///        ▼               ▼
///   ┌──────────────────────────┐
///   │ views::build_views        │  shape table / histogram /
///   └──────────────────────────┘  scatter / geo-route outputs
/// ```
pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod views;
