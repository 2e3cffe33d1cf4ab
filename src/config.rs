// ⚙️ Report Configuration
// Fixed for every run: no flags, no env vars, no config file.

use std::path::PathBuf;

/// ReportConfig - paths, figure geometry and text of the report
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Input table (Baseball Databank salaries)
    pub data_path: PathBuf,

    /// Rendered chart
    pub image_path: PathBuf,

    /// Display page wrapping the chart
    pub page_path: PathBuf,

    /// Image size in pixels (width, height)
    pub figure_size: (u32, u32),

    pub chart_title: String,
    pub x_desc: String,
    pub y_desc: String,

    /// Round-number x-axis breakpoints; the last one bounds the axis
    pub x_breakpoints: Vec<f64>,

    /// Bar thickness as a fraction of one row
    pub bar_height: f64,

    pub page_title: String,
    pub source_url: String,
    pub source_label: String,
    pub source_badge: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            data_path: PathBuf::from("Salaries.csv"),
            image_path: PathBuf::from("salaries2.png"),
            page_path: PathBuf::from("salaries.html"),
            figure_size: (1600, 1000),
            chart_title: "AVERAGE SALARY BY TEAM".to_string(),
            x_desc: "Average salary per year (date ranges vary -- see color key)".to_string(),
            y_desc: "Team name".to_string(),
            x_breakpoints: (0..=8).map(|i| i as f64 * 500_000.0).collect(),
            bar_height: 0.5,
            page_title: "Average Yearly Salary By MLB Team".to_string(),
            source_url: "https://www.kaggle.com/datasets/open-source-sports/baseball-databank/data?select=Salaries.csv"
                .to_string(),
            source_label: "Source: Baseball Databank".to_string(),
            source_badge: "Salaries.csv".to_string(),
        }
    }
}

impl ReportConfig {
    /// Upper bound of the value axis
    pub fn x_max(&self) -> f64 {
        self.x_breakpoints.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoints() {
        let config = ReportConfig::default();

        assert_eq!(config.x_breakpoints.len(), 9);
        assert_eq!(config.x_breakpoints[1], 500_000.0);
        assert_eq!(config.x_max(), 4_000_000.0);
    }
}
