use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::FareRecord;

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Fatal load failures. Anything past the loader is a total function, so this
/// is the only error type the pipeline can produce.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("reading header row: {0}")]
    Header(csv::Error),
    #[error("record {index}: {source}")]
    Record { index: usize, source: csv::Error },
}

/// Columns the processed export must carry. The pandas-style leading index
/// column (empty header) and any extras are ignored by name-based deserialize.
const REQUIRED_COLUMNS: [&str; 12] = [
    "year",
    "quarter",
    "city1",
    "city2",
    "city1_lon",
    "city1_lat",
    "city2_lon",
    "city2_lat",
    "nonstop_miles",
    "fare",
    "passengers",
    "airline_largest",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the airfare table from a delimited-text file with a header row.
///
/// The schema is checked before any row is parsed; a missing column fails
/// fast with [`LoadError::MissingColumn`] rather than erroring per record.
pub fn load_csv(path: &Path) -> Result<Vec<FareRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

/// Parse fare records from any reader. Split out from [`load_csv`] so tests
/// can feed in-memory CSV text.
fn read_records<R: Read>(rdr: R) -> Result<Vec<FareRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(rdr);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<FareRecord>().enumerate() {
        let record = result.map_err(|source| LoadError::Record { index, source })?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = ",year,quarter,city1,city2,city1_lon,city1_lat,city2_lon,city2_lat,nonstop_miles,fare,passengers,airline_largest";

    #[test]
    fn parses_rows_and_ignores_index_column() {
        let csv_text = format!(
            "{HEADER}\n\
             0,2017,1,Boston MA,Chicago IL,-71.06,42.36,-87.63,41.88,867.0,210.5,340.0,UA\n\
             1,2017,2,Boston MA,Chicago IL,-71.06,42.36,-87.63,41.88,867.0,195.0,410.0,AA\n"
        );
        let records = read_records(csv_text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2017);
        assert_eq!(records[0].origin, "Boston MA");
        assert_eq!(records[1].carrier, "AA");
        assert_eq!(records[1].passengers, 410.0);
    }

    #[test]
    fn missing_column_fails_fast() {
        let csv_text = ",year,quarter,city1,city2\n0,2017,1,A,B\n";
        let err = read_records(csv_text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(_)));
    }

    #[test]
    fn bad_cell_reports_record_index() {
        let csv_text = format!(
            "{HEADER}\n\
             0,2017,1,A,B,0.0,0.0,0.0,0.0,100.0,200.0,10.0,UA\n\
             1,not-a-year,1,A,B,0.0,0.0,0.0,0.0,100.0,200.0,10.0,UA\n"
        );
        let err = read_records(csv_text.as_bytes()).unwrap_err();
        match err {
            LoadError::Record { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_csv(Path::new("/nonexistent/fares.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
