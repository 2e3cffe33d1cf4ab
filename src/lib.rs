// Salary By Team - Core Library
// Exposes the report pipeline for the CLI, the display server, and tests

pub mod error;
pub mod config;
pub mod logging;
pub mod records;   // Data source: Salaries.csv
pub mod catalog;   // Catalog, alias map, color rule
pub mod resolver;  // Historical codes → current franchise
pub mod averager;  // Mean of season means
pub mod ranking;   // Sort + label + color
pub mod render;    // PNG bar chart
pub mod page;      // HTML display page
pub mod pipeline;

// Re-export commonly used types
pub use error::{ReportError, Result};
pub use config::ReportConfig;
pub use records::{Record, load_csv};
pub use catalog::{AliasMap, Catalog, ColorRule, Rgb, ValidityWindow};
pub use resolver::{GroupRecords, resolve};
pub use averager::{average, average_groups, period_means};
pub use ranking::{RankedBar, rank};
pub use render::{format_currency_tick, render_chart};
pub use page::DisplayPage;
pub use pipeline::{ReferenceTables, Report, compute, run};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
