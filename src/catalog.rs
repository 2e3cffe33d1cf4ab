// 📇 Reference Tables - Catalog, Alias Map, Color Rule
//
// Team codes are IDENTITY, team names are VALUES:
// - "CAL", "ANA" and "LAA" are the same franchise under three names
// - Codes come straight from the data; names only exist for display
//
// All three tables are built once at startup and passed by reference.

use crate::error::{ReportError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};

// ============================================================================
// CATALOG
// ============================================================================

/// Catalog - every known code (current or historical) → display name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    names: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Catalog of every MLB team code found in the Baseball Databank salaries
    pub fn mlb() -> Self {
        let mut catalog = Catalog::new();

        for (code, name) in [
            ("ANA", "Anaheim Angels"), // 1997-2004, became the Los Angeles Angels
            ("ARI", "Arizona Diamondbacks"),
            ("ATL", "Atlanta Braves"),
            ("BAL", "Baltimore Orioles"),
            ("BOS", "Boston Red Sox"),
            ("CAL", "California Angels"),
            ("CHA", "Chicago White Sox"),
            ("CHN", "Chicago Cubs"),
            ("CLE", "Cleveland Guardians"),
            ("CIN", "Cincinnati Reds"),
            ("COL", "Colorado Rockies"),
            ("DET", "Detroit Tigers"),
            ("FLO", "Florida Marlins"), // 1993-2011, renamed Miami Marlins
            ("HOU", "Houston Astros"),
            ("KCA", "Kansas City Royals"),
            ("LAA", "Los Angeles Angels"),
            ("LAN", "Los Angeles Dodgers"),
            ("ML4", "Milwaukee Brewers (AL)"), // American League until 1998
            ("MIL", "Milwaukee Brewers"),
            ("MIN", "Minnesota Twins"),
            ("MIA", "Miami Marlins"),
            ("MON", "Montreal Expos"), // moved to Washington
            ("NYA", "New York Yankees"),
            ("NYN", "New York Mets"),
            ("OAK", "Oakland Athletics"),
            ("PHI", "Philadelphia Phillies"),
            ("PIT", "Pittsburgh Pirates"),
            ("SDN", "San Diego Padres"),
            ("SEA", "Seattle Mariners"),
            ("SFN", "San Francisco Giants"),
            ("SLN", "St. Louis Cardinals"),
            ("TBA", "Tampa Bay Rays"),
            ("TEX", "Texas Rangers"),
            ("TOR", "Toronto Blue Jays"),
            ("WAS", "Washington Nationals"),
        ] {
            catalog.insert(code, name);
        }

        catalog
    }

    pub fn insert(&mut self, code: &str, name: &str) {
        self.names.insert(code.to_string(), name.to_string());
    }

    /// Display name for a code; a miss means the catalog is out of sync
    pub fn display_name(&self, code: &str) -> Result<&str> {
        self.names
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| ReportError::UnknownCode {
                code: code.to_string(),
            })
    }
}

// ============================================================================
// ALIAS MAP
// ============================================================================

/// AliasMap - canonical code → historical codes of the same franchise
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    aliases: BTreeMap<String, BTreeSet<String>>,
}

impl AliasMap {
    pub fn new() -> Self {
        AliasMap::default()
    }

    /// Relocations and renames between 1985 and 2015
    pub fn mlb() -> Self {
        let mut map = AliasMap::new();
        map.add_alias("MIL", "ML4");
        map.add_alias("WAS", "MON");
        map.add_alias("LAA", "CAL");
        map.add_alias("LAA", "ANA");
        map.add_alias("MIA", "FLO");
        map
    }

    pub fn add_alias(&mut self, canonical: &str, alias: &str) {
        self.aliases
            .entry(canonical.to_string())
            .or_default()
            .insert(alias.to_string());
    }

    /// Aliases of a canonical code (empty for codes that never changed)
    pub fn aliases_of(&self, canonical: &str) -> impl Iterator<Item = &str> {
        self.aliases
            .get(canonical)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// (canonical, aliases) pairs in canonical-code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ============================================================================
// COLOR RULE
// ============================================================================

/// 24-bit color used by the chart and the legend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const TAB_BLUE: Rgb = Rgb(31, 119, 180);
    pub const TAB_PURPLE: Rgb = Rgb(148, 103, 189);
    pub const TAB_PINK: Rgb = Rgb(227, 119, 194);
}

/// ValidityWindow - documented span of seasons a color stands for
///
/// These spans are documentation for the legend. The seasons actually
/// averaged are always derived from the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidityWindow {
    pub first: i32,
    pub last: i32,
    pub color: Rgb,
}

impl ValidityWindow {
    pub fn new(first: i32, last: i32, color: Rgb) -> Self {
        ValidityWindow { first, last, color }
    }

    /// Legend label, e.g. "1985-2015"
    pub fn label(&self) -> String {
        format!("{}-{}", self.first, self.last)
    }
}

/// ColorRule - explicit lookup table with a default window
#[derive(Debug, Clone)]
pub struct ColorRule {
    windows: Vec<ValidityWindow>,
    overrides: HashMap<String, usize>,
}

impl ColorRule {
    /// Rule whose every code falls into `default`
    pub fn new(default: ValidityWindow) -> Self {
        ColorRule {
            windows: vec![default],
            overrides: HashMap::new(),
        }
    }

    /// Expansion teams joined after salaries start in 1985
    pub fn mlb() -> Self {
        let mut rule = ColorRule::new(ValidityWindow::new(1985, 2015, Rgb::TAB_BLUE));

        let nineties = rule.add_window(ValidityWindow::new(1993, 2015, Rgb::TAB_PURPLE));
        rule.assign("MIA", nineties);
        rule.assign("COL", nineties);

        let late = rule.add_window(ValidityWindow::new(1998, 2015, Rgb::TAB_PINK));
        rule.assign("TBA", late);
        rule.assign("ARI", late);

        rule
    }

    /// Register a non-default window; returns its index for `assign`
    pub fn add_window(&mut self, window: ValidityWindow) -> usize {
        self.windows.push(window);
        self.windows.len() - 1
    }

    pub fn assign(&mut self, code: &str, window: usize) {
        self.overrides.insert(code.to_string(), window);
    }

    pub fn default_window(&self) -> &ValidityWindow {
        &self.windows[0]
    }

    /// Window for a code; codes outside the table get the default
    pub fn window_for(&self, code: &str) -> &ValidityWindow {
        self.overrides
            .get(code)
            .and_then(|&idx| self.windows.get(idx))
            .unwrap_or_else(|| self.default_window())
    }

    pub fn color_for(&self, code: &str) -> Rgb {
        self.window_for(code).color
    }

    /// All windows in legend order, default first
    pub fn windows(&self) -> &[ValidityWindow] {
        &self.windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::mlb();

        assert_eq!(catalog.display_name("NYA").unwrap(), "New York Yankees");
        assert_eq!(catalog.display_name("ML4").unwrap(), "Milwaukee Brewers (AL)");
    }

    #[test]
    fn test_catalog_miss_is_an_error() {
        let catalog = Catalog::mlb();

        match catalog.display_name("XXX") {
            Err(ReportError::UnknownCode { code }) => assert_eq!(code, "XXX"),
            other => panic!("expected UnknownCode, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_covers_every_alias() {
        let catalog = Catalog::mlb();
        let aliases = AliasMap::mlb();

        for (canonical, set) in aliases.iter() {
            assert!(catalog.display_name(canonical).is_ok(), "missing {}", canonical);
            for alias in set {
                assert!(catalog.display_name(alias).is_ok(), "missing {}", alias);
            }
        }
    }

    #[test]
    fn test_alias_map_lookups() {
        let aliases = AliasMap::mlb();

        let angels: Vec<&str> = aliases.aliases_of("LAA").collect();
        assert_eq!(angels, vec!["ANA", "CAL"]);

        assert_eq!(aliases.aliases_of("BOS").count(), 0);
        assert_eq!(aliases.aliases_of("WAS").collect::<Vec<_>>(), vec!["MON"]);
        assert_eq!(aliases.aliases_of("MIA").collect::<Vec<_>>(), vec!["FLO"]);
    }

    #[test]
    fn test_color_rule_overrides_and_default() {
        let rule = ColorRule::mlb();

        assert_eq!(rule.color_for("MIA"), Rgb::TAB_PURPLE);
        assert_eq!(rule.color_for("COL"), Rgb::TAB_PURPLE);
        assert_eq!(rule.color_for("TBA"), Rgb::TAB_PINK);
        assert_eq!(rule.color_for("ARI"), Rgb::TAB_PINK);

        for code in ["ATL", "BOS", "LAA", "WAS", "MIL", "NOPE"] {
            assert_eq!(rule.color_for(code), Rgb::TAB_BLUE, "{}", code);
        }
    }

    #[test]
    fn test_legend_order_and_labels() {
        let labels: Vec<String> = ColorRule::mlb().windows().iter().map(|w| w.label()).collect();
        assert_eq!(labels, vec!["1985-2015", "1993-2015", "1998-2015"]);
    }
}
