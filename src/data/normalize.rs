use super::model::{FareRecord, FareRow, FareTable};

// ---------------------------------------------------------------------------
// Normalizer: loaded records → session table
// ---------------------------------------------------------------------------

/// Build the normalized session table from the loaded records.
///
/// Rows are stable-sorted ascending by (year, quarter) — the raw-table view
/// and every first-wins reduction downstream rely on this deterministic
/// order. The three derived columns (city-pair key, fare-per-mile, revenue)
/// are computed once here; no later stage recomputes them.
///
/// Years stay numeric (`i32`) throughout. They are only formatted at the
/// display edge, so range filters never compare formatted strings.
pub fn normalize(mut records: Vec<FareRecord>) -> FareTable {
    records.sort_by(|a, b| (a.year, a.quarter).cmp(&(b.year, b.quarter)));

    let rows: Vec<FareRow> = records
        .into_iter()
        .map(|record| {
            let city_pair = record.city_pair();
            // Zero-distance rows propagate the IEEE quotient (inf or NaN);
            // sorts over this column use total_cmp, which keeps them last.
            let fare_per_mile = record.fare / record.nonstop_miles;
            let revenue = record.passengers * record.fare;
            FareRow {
                record,
                city_pair,
                fare_per_mile,
                revenue,
            }
        })
        .collect();

    let mut years: Vec<i32> = rows.iter().map(|r| r.record.year).collect();
    years.sort_unstable();
    years.dedup();

    let year_min = years.first().copied().unwrap_or(0);
    let year_max = years.last().copied().unwrap_or(0);

    FareTable {
        rows,
        years,
        year_min,
        year_max,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
