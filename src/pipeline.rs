// 🔄 Report Pipeline
// load → resolve → average → rank → render → page, strictly in that order.

use crate::averager::average_groups;
use crate::catalog::{AliasMap, Catalog, ColorRule};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::page::DisplayPage;
use crate::ranking::{rank, RankedBar};
use crate::records::{load_csv, Record};
use crate::render::render_chart;
use crate::resolver::{resolve, GroupRecords};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

/// The three curated tables the pipeline runs against
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub catalog: Catalog,
    pub alias_map: AliasMap,
    pub color_rule: ColorRule,
}

impl ReferenceTables {
    pub fn mlb() -> Self {
        ReferenceTables {
            catalog: Catalog::mlb(),
            alias_map: AliasMap::mlb(),
            color_rule: ColorRule::mlb(),
        }
    }
}

/// What a full run produced
#[derive(Debug, Clone)]
pub struct Report {
    pub bars: Vec<RankedBar>,
    pub image_path: PathBuf,
    pub page_path: PathBuf,
}

/// Pure part of the run: resolved, averaged and ranked bars
pub fn compute(records: &[Record], tables: &ReferenceTables) -> Result<Vec<RankedBar>> {
    let groups = resolve(records, &tables.alias_map)?;
    check_windows(&groups, &tables.color_rule);

    let averages = average_groups(&groups)?;
    rank(&averages, &tables.catalog, &tables.color_rule)
}

/// Full run: read the data file, write the chart and the display page
pub fn run(config: &ReportConfig, tables: &ReferenceTables) -> Result<Report> {
    let records = load_csv(&config.data_path)?;
    let bars = compute(&records, tables)?;

    render_chart(&bars, &tables.color_rule, config)?;
    DisplayPage::from_config(config).write(&config.page_path)?;

    Ok(Report {
        bars,
        image_path: config.image_path.clone(),
        page_path: config.page_path.clone(),
    })
}

/// Documented windows are expectations only; a mismatch is logged, never enforced
fn check_windows(groups: &BTreeMap<String, GroupRecords>, color_rule: &ColorRule) {
    for (code, group) in groups {
        let documented = color_rule.window_for(code);
        if let Some((first, last)) = group.window() {
            if (first, last) != (documented.first, documented.last) {
                warn!(
                    team = %code,
                    observed = %format!("{}-{}", first, last),
                    documented = %documented.label(),
                    "season window differs from legend"
                );
            }
        }
    }
}
