// 🔗 Alias Resolver
// Folds historical team codes into their current franchise
//
// Merge is by code, never by season: "CAL" and "ANA" may cover disjoint
// seasons and both still land under "LAA".

use crate::catalog::AliasMap;
use crate::error::{ReportError, Result};
use crate::records::Record;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// GroupRecords - everything that belongs to one canonical team
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRecords {
    /// Canonical (current) code
    pub code: String,

    /// Raw codes merged into this group, canonical code included
    pub raw_codes: BTreeSet<String>,

    /// Records from every raw code
    pub records: Vec<Record>,

    /// Union of seasons across every raw code (duplicates collapse)
    pub periods: BTreeSet<i32>,
}

impl GroupRecords {
    fn new(code: &str) -> Self {
        GroupRecords {
            code: code.to_string(),
            raw_codes: BTreeSet::new(),
            records: Vec::new(),
            periods: BTreeSet::new(),
        }
    }

    /// Observed (first, last) season, None when the group has no records
    pub fn window(&self) -> Option<(i32, i32)> {
        let first = self.periods.first()?;
        let last = self.periods.last()?;
        Some((*first, *last))
    }
}

/// Resolve raw records into canonical groups keyed by canonical code
///
/// The iteration set is the raw code set minus every alias, plus the
/// canonical owners of those aliases. Every alias must appear in the data.
pub fn resolve(records: &[Record], alias_map: &AliasMap) -> Result<BTreeMap<String, GroupRecords>> {
    let raw_codes: BTreeSet<&str> = records.iter().map(|r| r.team_id.as_str()).collect();

    let mut canonical: BTreeSet<&str> = raw_codes.clone();
    for (owner, aliases) in alias_map.iter() {
        for alias in aliases {
            if !canonical.remove(alias.as_str()) {
                return Err(ReportError::AliasNotInData {
                    canonical: owner.to_string(),
                    alias: alias.clone(),
                });
            }
        }
        canonical.insert(owner);
    }

    // raw code → canonical code, built once so records are scanned once
    let mut owner_of: BTreeMap<&str, &str> = BTreeMap::new();
    for &code in &canonical {
        owner_of.insert(code, code);
        for alias in alias_map.aliases_of(code) {
            owner_of.insert(alias, code);
        }
    }

    let mut groups: BTreeMap<String, GroupRecords> = canonical
        .iter()
        .map(|&code| (code.to_string(), GroupRecords::new(code)))
        .collect();

    for record in records {
        let Some(&owner) = owner_of.get(record.team_id.as_str()) else {
            continue;
        };
        if let Some(group) = groups.get_mut(owner) {
            group.raw_codes.insert(record.team_id.clone());
            group.periods.insert(record.year_id);
            group.records.push(record.clone());
        }
    }

    for group in groups.values() {
        debug!(
            team = %group.code,
            raw_codes = ?group.raw_codes,
            seasons = group.periods.len(),
            records = group.records.len(),
            "resolved team"
        );
    }
    info!(raw = raw_codes.len(), canonical = groups.len(), "resolved team aliases");

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seasons(code: &str, years: std::ops::RangeInclusive<i32>, salary: f64) -> Vec<Record> {
        years.map(|y| Record::new(code, y, salary)).collect()
    }

    #[test]
    fn test_aliases_merge_across_disjoint_seasons() {
        let mut records = seasons("X", 1990..=1992, 100.0);
        records.extend(seasons("Y", 1993..=1995, 200.0));
        records.extend(seasons("OTHER", 1990..=1995, 999.0));

        let mut aliases = AliasMap::new();
        aliases.add_alias("Z", "X");
        aliases.add_alias("Z", "Y");

        let groups = resolve(&records, &aliases).unwrap();

        assert_eq!(groups.len(), 2);
        assert!(!groups.contains_key("X"));
        assert!(!groups.contains_key("Y"));

        let z = &groups["Z"];
        let expected: BTreeSet<i32> = (1990..=1995).collect();
        assert_eq!(z.periods, expected);
        assert_eq!(z.records.len(), 6);
        assert!(z.records.iter().all(|r| r.team_id == "X" || r.team_id == "Y"));
        assert_eq!(z.window(), Some((1990, 1995)));

        let other = &groups["OTHER"];
        assert_eq!(other.records.len(), 6);
        assert!(other.records.iter().all(|r| r.salary == 999.0));
    }

    #[test]
    fn test_overlapping_seasons_collapse() {
        let records = vec![
            Record::new("MIA", 2012, 10.0),
            Record::new("FLO", 2011, 20.0),
            Record::new("FLO", 2012, 30.0),
        ];
        let mut aliases = AliasMap::new();
        aliases.add_alias("MIA", "FLO");

        let groups = resolve(&records, &aliases).unwrap();
        let mia = &groups["MIA"];

        assert_eq!(mia.periods.len(), 2);
        assert_eq!(mia.records.len(), 3);
        assert_eq!(
            mia.raw_codes.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["FLO", "MIA"]
        );
    }

    #[test]
    fn test_canonical_without_own_records_still_resolves() {
        let records = seasons("MON", 1985..=2004, 1.0);
        let mut aliases = AliasMap::new();
        aliases.add_alias("WAS", "MON");

        let groups = resolve(&records, &aliases).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["WAS"].window(), Some((1985, 2004)));
    }

    #[test]
    fn test_unaliased_codes_pass_through() {
        let records = vec![
            Record::new("AAA", 2000, 100.0),
            Record::new("AAA", 2000, 300.0),
            Record::new("AAA", 2001, 100.0),
        ];

        let groups = resolve(&records, &AliasMap::new()).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["AAA"].periods, BTreeSet::from([2000, 2001]));
    }

    #[test]
    fn test_alias_missing_from_data_fails() {
        let records = seasons("LAA", 2005..=2006, 1.0);
        let mut aliases = AliasMap::new();
        aliases.add_alias("LAA", "CAL");

        match resolve(&records, &aliases) {
            Err(ReportError::AliasNotInData { canonical, alias }) => {
                assert_eq!(canonical, "LAA");
                assert_eq!(alias, "CAL");
            }
            other => panic!("expected AliasNotInData, got {:?}", other),
        }
    }
}
