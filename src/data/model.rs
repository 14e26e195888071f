use serde::Deserialize;

// ---------------------------------------------------------------------------
// FareRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation from the DoT airfare report: one (year, quarter,
/// origin, destination) route sample. Serde renames map the Rust field names
/// onto the CSV headers of the processed export.
///
/// Duplicate observations are not rejected; downstream aggregation simply
/// sums/averages them together.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FareRecord {
    pub year: i32,
    pub quarter: u8,
    #[serde(rename = "city1")]
    pub origin: String,
    #[serde(rename = "city2")]
    pub dest: String,
    #[serde(rename = "city1_lon")]
    pub origin_lon: f64,
    #[serde(rename = "city1_lat")]
    pub origin_lat: f64,
    #[serde(rename = "city2_lon")]
    pub dest_lon: f64,
    #[serde(rename = "city2_lat")]
    pub dest_lat: f64,
    pub nonstop_miles: f64,
    pub fare: f64,
    pub passengers: f64,
    #[serde(rename = "airline_largest")]
    pub carrier: String,
}

impl FareRecord {
    /// Order-sensitive route key: `"{origin} - {dest}"`. A→B and B→A are
    /// distinct city-pairs, matching the report's directional routes.
    pub fn city_pair(&self) -> String {
        format!("{} - {}", self.origin, self.dest)
    }
}

// ---------------------------------------------------------------------------
// FareRow – a record plus its derived columns
// ---------------------------------------------------------------------------

/// A normalized row: the source record with the three derived columns the
/// views share. Built once per load by [`crate::data::normalize::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct FareRow {
    pub record: FareRecord,
    /// Grouping key for both aggregations, see [`FareRecord::city_pair`].
    pub city_pair: String,
    /// `fare / nonstop_miles`. A zero-distance row yields the IEEE result
    /// (infinity, or NaN for a zero fare); sorting uses `total_cmp` so the
    /// ordering stays total and non-finite ratios land after all finite ones.
    pub fare_per_mile: f64,
    /// `passengers * fare`.
    pub revenue: f64,
}

// ---------------------------------------------------------------------------
// FareTable – the normalized session table
// ---------------------------------------------------------------------------

/// The full normalized dataset held for the session. Rows are sorted
/// ascending by (year, quarter) and never mutated after construction; every
/// filter and aggregation allocates a fresh result instead.
#[derive(Debug, Clone, Default)]
pub struct FareTable {
    pub rows: Vec<FareRow>,
    /// Sorted distinct years, for the exact-year selector.
    pub years: Vec<i32>,
    /// Slider bounds; both 0 when the table is empty.
    pub year_min: i32,
    pub year_max: i32,
}

impl FareTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Aggregation outputs
// ---------------------------------------------------------------------------

/// Passenger-volume aggregation result: mean passengers for one city-pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairVolume {
    pub city_pair: String,
    pub mean_passengers: f64,
}

/// Revenue aggregation result for one city-pair within a selected year.
///
/// `passengers` and `revenue` are sums over the group; `carrier` is the
/// group's most frequent carrier; the endpoint names and coordinates are
/// first-wins picks in the table's (year, quarter) sort order.
#[derive(Debug, Clone, PartialEq)]
pub struct CityPairSummary {
    pub city_pair: String,
    pub passengers: f64,
    pub revenue: f64,
    pub carrier: String,
    pub origin: String,
    pub dest: String,
    pub origin_lon: f64,
    pub origin_lat: f64,
    pub dest_lon: f64,
    pub dest_lat: f64,
}
