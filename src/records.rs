// 📂 Salary Records - data source
// One row per (team, season, player salary); loaded once, never mutated.

use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Record - one salary observation
///
/// Only the three columns the report needs are mapped; any other columns
/// in the source table (league, player id, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "teamID")]
    pub team_id: String,

    #[serde(rename = "yearID")]
    pub year_id: i32,

    #[serde(rename = "salary")]
    pub salary: f64,
}

impl Record {
    pub fn new(team_id: &str, year_id: i32, salary: f64) -> Self {
        Record {
            team_id: team_id.to_string(),
            year_id,
            salary,
        }
    }
}

/// Load every record from a CSV file with a header row
pub fn load_csv(csv_path: &Path) -> Result<Vec<Record>> {
    let rdr = csv::Reader::from_path(csv_path)?;
    let records = collect_records(rdr)?;
    info!(path = %csv_path.display(), count = records.len(), "loaded salary records");
    Ok(records)
}

/// Load records from any reader (used for in-memory tables)
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    collect_records(csv::Reader::from_reader(reader))
}

fn collect_records<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for result in rdr.deserialize() {
        let record: Record = result?;

        // NaN and infinities would poison every mean they touch
        if !record.salary.is_finite() || record.salary < 0.0 {
            return Err(ReportError::InvalidAmount {
                code: record.team_id,
                period: record.year_id,
                amount: record.salary,
            });
        }

        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_required_columns_and_ignores_the_rest() {
        let table = "yearID,teamID,lgID,playerID,salary\n\
                     1985,ATL,NL,barkele01,870000\n\
                     1985,ATL,NL,bedrost01,550000\n\
                     2015,WAS,NL,zimmery01,14000000\n";

        let records = from_reader(table.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Record::new("ATL", 1985, 870000.0));
        assert_eq!(records[2].team_id, "WAS");
        assert_eq!(records[2].year_id, 2015);
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let table = "yearID,teamID,salary\n1990,BOS,-5\n";

        match from_reader(table.as_bytes()) {
            Err(ReportError::InvalidAmount { code, period, .. }) => {
                assert_eq!(code, "BOS");
                assert_eq!(period, 1990);
            }
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_salary_is_rejected() {
        for (row, expected) in [("1990,BOS,NaN", "BOS"), ("1991,ATL,inf", "ATL"), ("1992,SEA,-inf", "SEA")] {
            let table = format!("yearID,teamID,salary\n{}\n", row);

            match from_reader(table.as_bytes()) {
                Err(ReportError::InvalidAmount { code, .. }) => assert_eq!(code, expected),
                other => panic!("expected rejection for {}, got {:?}", row, other),
            }
        }
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let table = "yearID,teamID,salary\nnineteen,BOS,100\n";
        assert!(matches!(from_reader(table.as_bytes()), Err(ReportError::Csv(_))));
    }

    #[test]
    fn test_missing_file_fails() {
        let result = load_csv(Path::new("/nonexistent/Salaries.csv"));
        assert!(result.is_err());
    }
}
