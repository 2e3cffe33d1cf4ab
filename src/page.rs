// 🖼️ Display Page
// Static HTML wrapper around the chart: title, image, source credit.

use crate::config::ReportConfig;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPage {
    pub title: String,
    /// Image reference as written into the page (relative to the page)
    pub image_src: String,
    pub source_url: String,
    pub source_label: String,
    pub source_badge: String,
}

impl DisplayPage {
    pub fn from_config(config: &ReportConfig) -> Self {
        DisplayPage {
            title: config.page_title.clone(),
            image_src: image_src(&config.image_path),
            source_url: config.source_url.clone(),
            source_label: config.source_label.clone(),
            source_badge: config.source_badge.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<img src="{src}" alt="{title}">
<p><a href="{url}">{label}</a> <span class="badge">{badge}</span></p>
<h1>{title}</h1>
</body>
</html>
"#,
            title = title,
            src = escape_html(&self.image_src),
            url = escape_html(&self.source_url),
            label = escape_html(&self.source_label),
            badge = escape_html(&self.source_badge),
        )
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_html())?;
        info!(path = %path.display(), "display page written");
        Ok(())
    }
}

/// File name of the image; the page is written next to it
fn image_src(image_path: &Path) -> String {
    image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| image_path.to_string_lossy().into_owned())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contents() {
        let page = DisplayPage::from_config(&ReportConfig::default());
        let html = page.to_html();

        assert!(html.contains(r#"<img src="salaries2.png""#));
        assert!(html.contains("<h1>Average Yearly Salary By MLB Team</h1>"));
        assert!(html.contains("Source: Baseball Databank"));
        assert!(html.contains("Salaries.csv</span>"));
        assert!(html.contains("baseball-databank/data?select=Salaries.csv"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut page = DisplayPage::from_config(&ReportConfig::default());
        page.title = "Salaries <by> \"team\" & year".to_string();

        let html = page.to_html();

        assert!(html.contains("Salaries &lt;by&gt; &quot;team&quot; &amp; year"));
        assert!(!html.contains("<by>"));
    }

    #[test]
    fn test_image_src_uses_file_name() {
        assert_eq!(image_src(Path::new("out/charts/salaries2.png")), "salaries2.png");
    }

    #[test]
    fn test_write_page() {
        let path = std::env::temp_dir().join("salary_by_team_page_test.html");
        let page = DisplayPage::from_config(&ReportConfig::default());

        page.write(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(written, page.to_html());
    }
}
