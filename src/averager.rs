// 📊 Period Averager
// Mean of per-season means: every season weighs the same no matter how
// many players were paid in it.

use crate::error::{ReportError, Result};
use crate::records::Record;
use crate::resolver::GroupRecords;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Mean salary of each season in `periods`
///
/// `code` only labels errors. A season with no records is an input error.
pub fn period_means(
    code: &str,
    records: &[Record],
    periods: &BTreeSet<i32>,
) -> Result<BTreeMap<i32, f64>> {
    let mut sums: BTreeMap<i32, (f64, usize)> = periods.iter().map(|&p| (p, (0.0, 0))).collect();

    for record in records {
        if let Some((sum, count)) = sums.get_mut(&record.year_id) {
            *sum += record.salary;
            *count += 1;
        }
    }

    sums.into_iter()
        .map(|(period, (sum, count))| {
            if count == 0 {
                return Err(ReportError::EmptyPeriod {
                    code: code.to_string(),
                    period,
                });
            }
            Ok((period, sum / count as f64))
        })
        .collect()
}

/// Unweighted average of the season means of one team
pub fn average(code: &str, records: &[Record], periods: &BTreeSet<i32>) -> Result<f64> {
    if periods.is_empty() {
        return Err(ReportError::EmptyPeriodSet {
            code: code.to_string(),
        });
    }

    let means = period_means(code, records, periods)?;
    let total: f64 = means.values().sum();

    Ok(total / means.len() as f64)
}

/// Average every resolved team, keyed by canonical code
pub fn average_groups(groups: &BTreeMap<String, GroupRecords>) -> Result<BTreeMap<String, f64>> {
    let mut result = BTreeMap::new();

    for (code, group) in groups {
        let value = average(code, &group.records, &group.periods)?;
        debug!(team = %code, seasons = group.periods.len(), average = value, "averaged team");
        result.insert(code.clone(), value);
    }

    Ok(result)
}
