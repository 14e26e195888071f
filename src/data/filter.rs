use super::model::FareRow;

// ---------------------------------------------------------------------------
// Filter stage: pure subsets of the normalized rows
// ---------------------------------------------------------------------------
//
// Every filter is total: degenerate parameters (absent year, crossed range
// bounds) return an empty result, never an error, and the input slice is
// never mutated.

/// Rows whose year equals `year` exactly. Feeds the raw-table view and the
/// revenue aggregation.
pub fn filter_year(rows: &[FareRow], year: i32) -> Vec<FareRow> {
    rows.iter()
        .filter(|r| r.record.year == year)
        .cloned()
        .collect()
}

/// Rows whose year lies in the inclusive range `[min, max]`. A crossed range
/// (`min > max`) matches nothing. Feeds the scatter view.
pub fn filter_year_range(rows: &[FareRow], min: i32, max: i32) -> Vec<FareRow> {
    rows.iter()
        .filter(|r| min <= r.record.year && r.record.year <= max)
        .cloned()
        .collect()
}

/// Truncate an already-sorted slice to its first `n` entries. `None` means
/// no limit; `n` past the end returns the full input unchanged in order.
pub fn top_n<T: Clone>(rows: &[T], limit: Option<usize>) -> Vec<T> {
    match limit {
        Some(n) => rows.iter().take(n).cloned().collect(),
        None => rows.to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::table;

    #[test]
    fn exact_year_matches_only_that_year() {
        let t = table(&[(2000, "A", "B", 100.0, 200.0, 10.0), (2001, "A", "B", 100.0, 220.0, 12.0)]);
        let rows = filter_year(&t.rows, 2001);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.fare, 220.0);
    }

    #[test]
    fn absent_year_yields_empty_not_error() {
        let t = table(&[(2000, "A", "B", 100.0, 200.0, 10.0)]);
        assert!(filter_year(&t.rows, 1980).is_empty());
    }

    #[test]
    fn range_is_inclusive_both_ends() {
        let t = table(&[
            (1999, "A", "B", 100.0, 200.0, 10.0),
            (2000, "A", "B", 100.0, 200.0, 10.0),
            (2001, "A", "B", 100.0, 200.0, 10.0),
            (2002, "A", "B", 100.0, 200.0, 10.0),
        ]);
        let rows = filter_year_range(&t.rows, 2000, 2001);
        let years: Vec<i32> = rows.iter().map(|r| r.record.year).collect();
        assert_eq!(years, vec![2000, 2001]);
    }

    #[test]
    fn crossed_range_yields_empty() {
        let t = table(&[(2004, "A", "B", 100.0, 200.0, 10.0)]);
        assert!(filter_year_range(&t.rows, 2005, 2003).is_empty());
    }

    #[test]
    fn range_filter_is_idempotent() {
        let t = table(&[
            (1998, "A", "B", 100.0, 200.0, 10.0),
            (2000, "A", "B", 100.0, 200.0, 10.0),
            (2003, "C", "D", 100.0, 200.0, 10.0),
        ]);
        let once = filter_year_range(&t.rows, 1999, 2002);
        let twice = filter_year_range(&once, 1999, 2002);
        assert_eq!(once, twice);
    }

    #[test]
    fn top_n_past_len_is_identity() {
        let t = table(&[(2000, "A", "B", 100.0, 200.0, 10.0), (2001, "C", "D", 100.0, 200.0, 10.0)]);
        assert_eq!(top_n(&t.rows, Some(10)), t.rows);
        assert_eq!(top_n(&t.rows, None), t.rows);
    }

    #[test]
    fn top_one_keeps_the_head_row() {
        let t = table(&[(2000, "A", "B", 100.0, 400.0, 30.0), (2000, "C", "D", 100.0, 200.0, 10.0)]);
        let mut by_revenue = t.rows.clone();
        by_revenue.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
        let top = top_n(&by_revenue, Some(1));
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].revenue, 12000.0);
    }
}
