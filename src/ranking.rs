// 🏆 Ranking - sort, label and color the averaged teams
// Lowest average first, so it is drawn nearest the origin.

use crate::catalog::{Catalog, ColorRule, ValidityWindow};
use crate::error::Result;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One bar of the chart, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBar {
    pub code: String,
    pub label: String,
    pub value: f64,
    pub window: ValidityWindow,
}

/// Sort ascending by value; equal values fall back to code order
pub fn rank(
    scalar_by_code: &BTreeMap<String, f64>,
    catalog: &Catalog,
    color_rule: &ColorRule,
) -> Result<Vec<RankedBar>> {
    let mut entries: Vec<(&String, f64)> = scalar_by_code.iter().map(|(c, v)| (c, *v)).collect();
    entries.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    entries
        .into_iter()
        .map(|(code, value)| {
            Ok(RankedBar {
                code: code.clone(),
                label: catalog.display_name(code)?.to_string(),
                value,
                window: color_rule.window_for(code).clone(),
            })
        })
        .collect()
}
