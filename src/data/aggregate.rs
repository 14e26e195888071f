use std::collections::HashMap;

use super::model::{CityPairSummary, FareRow, PairVolume};

// ---------------------------------------------------------------------------
// Group-by reductions over the city-pair key
// ---------------------------------------------------------------------------
//
// Both aggregations visit rows in slice order (the normalizer's (year,
// quarter) order for unfiltered input), so "first-wins" picks and the
// carrier-mode tie-break are deterministic: groups are formed in
// first-encounter order and ties go to the value seen earliest in the group.

/// Mean passengers per city-pair, sorted descending by the mean.
///
/// The sort uses `total_cmp`, so a non-finite mean (impossible for real
/// data, but nothing upstream forbids it) still yields a total order.
pub fn passenger_volume(rows: &[FareRow]) -> Vec<PairVolume> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    // (city_pair, passenger sum, row count) in first-encounter order.
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for row in rows {
        match index.get(row.city_pair.as_str()) {
            Some(&i) => {
                groups[i].1 += row.record.passengers;
                groups[i].2 += 1;
            }
            None => {
                index.insert(row.city_pair.as_str(), groups.len());
                groups.push((row.city_pair.clone(), row.record.passengers, 1));
            }
        }
    }

    let mut volumes: Vec<PairVolume> = groups
        .into_iter()
        .map(|(city_pair, sum, count)| PairVolume {
            city_pair,
            mean_passengers: sum / count as f64,
        })
        .collect();
    volumes.sort_by(|a, b| b.mean_passengers.total_cmp(&a.mean_passengers));
    volumes
}

/// Per-group accumulator for the revenue reduction.
struct RevenueGroup {
    summary: CityPairSummary,
    /// Carrier counts in first-seen order, for the mode pick.
    carriers: Vec<(String, usize)>,
}

/// Revenue summary per city-pair, sorted descending by summed revenue.
///
/// Passengers and revenue are summed; endpoint names and coordinates are
/// first-wins in row order; the carrier is the group mode, ties broken in
/// favour of the carrier seen earliest in the group. Callers filter to a
/// single year first; this function itself aggregates whatever it is given.
pub fn revenue_by_pair(rows: &[FareRow]) -> Vec<CityPairSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<RevenueGroup> = Vec::new();

    for row in rows {
        match index.get(row.city_pair.as_str()) {
            Some(&i) => {
                let group = &mut groups[i];
                group.summary.passengers += row.record.passengers;
                group.summary.revenue += row.revenue;
                tally_carrier(&mut group.carriers, &row.record.carrier);
            }
            None => {
                index.insert(row.city_pair.as_str(), groups.len());
                groups.push(RevenueGroup {
                    summary: CityPairSummary {
                        city_pair: row.city_pair.clone(),
                        passengers: row.record.passengers,
                        revenue: row.revenue,
                        carrier: String::new(),
                        origin: row.record.origin.clone(),
                        dest: row.record.dest.clone(),
                        origin_lon: row.record.origin_lon,
                        origin_lat: row.record.origin_lat,
                        dest_lon: row.record.dest_lon,
                        dest_lat: row.record.dest_lat,
                    },
                    carriers: vec![(row.record.carrier.clone(), 1)],
                });
            }
        }
    }

    let mut summaries: Vec<CityPairSummary> = groups
        .into_iter()
        .map(|mut group| {
            group.summary.carrier = modal_carrier(&group.carriers);
            group.summary
        })
        .collect();
    summaries.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    summaries
}

fn tally_carrier(carriers: &mut Vec<(String, usize)>, carrier: &str) {
    match carriers.iter_mut().find(|(c, _)| c == carrier) {
        Some((_, count)) => *count += 1,
        None => carriers.push((carrier.to_string(), 1)),
    }
}

/// Most frequent carrier; on a tie the earliest first-seen entry wins
/// because only a strictly greater count replaces the current pick.
fn modal_carrier(carriers: &[(String, usize)]) -> String {
    let mut best: Option<(&str, usize)> = None;
    for (carrier, count) in carriers {
        match best {
            Some((_, best_count)) if *count <= best_count => {}
            _ => best = Some((carrier.as_str(), *count)),
        }
    }
    best.map(|(c, _)| c.to_string()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{record, record_with_carrier, table, table_from_records};
    use crate::data::filter::filter_year;

    #[test]
    fn mean_passengers_for_two_row_pair() {
        let t = table(&[
            (2000, "A", "B", 100.0, 200.0, 10.0),
            (2000, "A", "B", 100.0, 400.0, 30.0),
        ]);
        let volumes = passenger_volume(&t.rows);
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].city_pair, "A - B");
        assert_eq!(volumes[0].mean_passengers, 20.0);
    }

    #[test]
    fn mean_lies_within_group_min_max() {
        let t = table(&[
            (2000, "A", "B", 100.0, 200.0, 7.0),
            (2001, "A", "B", 100.0, 200.0, 19.0),
            (2002, "A", "B", 100.0, 200.0, 11.0),
        ]);
        let volumes = passenger_volume(&t.rows);
        let mean = volumes[0].mean_passengers;
        assert!((7.0..=19.0).contains(&mean));
    }

    #[test]
    fn volumes_sorted_descending() {
        let t = table(&[
            (2000, "A", "B", 100.0, 200.0, 5.0),
            (2000, "C", "D", 100.0, 200.0, 50.0),
            (2000, "E", "F", 100.0, 200.0, 20.0),
        ]);
        let means: Vec<f64> = passenger_volume(&t.rows)
            .iter()
            .map(|v| v.mean_passengers)
            .collect();
        assert_eq!(means, vec![50.0, 20.0, 5.0]);
    }

    #[test]
    fn directional_pairs_stay_distinct() {
        let t = table(&[
            (2000, "A", "B", 100.0, 200.0, 10.0),
            (2000, "B", "A", 100.0, 200.0, 30.0),
        ]);
        let volumes = passenger_volume(&t.rows);
        assert_eq!(volumes.len(), 2);
    }

    #[test]
    fn revenue_sums_after_year_filter() {
        let t = table(&[
            (2000, "A", "B", 100.0, 200.0, 10.0),
            (2000, "A", "B", 100.0, 400.0, 30.0),
            (2001, "A", "B", 100.0, 999.0, 99.0),
        ]);
        let year_rows = filter_year(&t.rows, 2000);
        let summaries = revenue_by_pair(&year_rows);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].revenue, 14000.0);
        assert_eq!(summaries[0].passengers, 40.0);
    }

    #[test]
    fn single_row_group_reduces_to_itself() {
        let t = table(&[(2000, "A", "B", 100.0, 200.0, 10.0)]);
        let summaries = revenue_by_pair(&t.rows);
        assert_eq!(summaries[0].passengers, 10.0);
        assert_eq!(summaries[0].revenue, 2000.0);
        let volumes = passenger_volume(&t.rows);
        assert_eq!(volumes[0].mean_passengers, 10.0);
    }

    #[test]
    fn empty_input_aggregates_to_empty() {
        assert!(passenger_volume(&[]).is_empty());
        assert!(revenue_by_pair(&[]).is_empty());
    }

    #[test]
    fn carrier_mode_prefers_majority() {
        let t = table_from_records(vec![
            record_with_carrier(2000, "A", "B", "UA"),
            record_with_carrier(2000, "A", "B", "AA"),
            record_with_carrier(2000, "A", "B", "AA"),
        ]);
        let summaries = revenue_by_pair(&t.rows);
        assert_eq!(summaries[0].carrier, "AA");
    }

    #[test]
    fn carrier_mode_tie_goes_to_first_seen() {
        let t = table_from_records(vec![
            record_with_carrier(2000, "A", "B", "UA"),
            record_with_carrier(2000, "A", "B", "AA"),
        ]);
        let summaries = revenue_by_pair(&t.rows);
        assert_eq!(summaries[0].carrier, "UA");
    }

    #[test]
    fn endpoint_fields_are_first_wins() {
        let mut first = record(2000, 1, "A", "B", 100.0, 200.0, 10.0);
        first.origin_lon = -71.0;
        first.origin_lat = 42.0;
        let mut second = record(2001, 1, "A", "B", 100.0, 200.0, 10.0);
        second.origin_lon = -99.0;
        second.origin_lat = 10.0;
        let t = table_from_records(vec![second, first]);
        // Normalizer sorts 2000 before 2001, so the 2000 coordinates win.
        let summaries = revenue_by_pair(&t.rows);
        assert_eq!(summaries[0].origin_lon, -71.0);
        assert_eq!(summaries[0].origin_lat, 42.0);
    }

    #[test]
    fn summaries_sorted_descending_by_revenue() {
        let t = table(&[
            (2000, "A", "B", 100.0, 100.0, 10.0),
            (2000, "C", "D", 100.0, 100.0, 90.0),
            (2000, "E", "F", 100.0, 100.0, 40.0),
        ]);
        let revenues: Vec<f64> = revenue_by_pair(&t.rows).iter().map(|s| s.revenue).collect();
        assert_eq!(revenues, vec![9000.0, 4000.0, 1000.0]);
    }
}
