// ❗ Report Errors
// Every failure is fatal for the run: the tables are curated offline,
// so a miss here means the data and the tables disagree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A code reached the display step without a catalog entry
    #[error("team code '{code}' has no display name in the catalog")]
    UnknownCode { code: String },

    /// A canonical team resolved to zero seasons
    #[error("team '{code}' has no seasons to average over")]
    EmptyPeriodSet { code: String },

    /// A season was listed for a team but none of its records fall in it
    #[error("team '{code}' has no records for season {period}")]
    EmptyPeriod { code: String, period: i32 },

    /// An alias in the alias map never shows up in the data
    #[error("alias '{alias}' of team '{canonical}' does not appear in the data")]
    AliasNotInData { canonical: String, alias: String },

    /// Amounts must be finite and non-negative
    #[error("invalid amount {amount} for team '{code}' in season {period}")]
    InvalidAmount { code: String, period: i32, amount: f64 },

    #[error("failed to read records: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to render chart: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
