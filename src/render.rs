// 🎨 Chart Rendering
// Horizontal bar chart, one bar per team, colored by validity window.
//
// Layout:
// - Row 0 (bottom) holds the lowest average
// - Guide lines sit on the configured breakpoints, ticks read "$500K"
// - Legend (middle right) maps each color to its season window

use crate::catalog::{ColorRule, Rgb};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::ranking::RankedBar;
use plotters::prelude::*;
use tracing::info;

// ============================================================================
// AXIS HELPERS
// ============================================================================

/// Currency-abbreviated tick label: 0, $500K, $1M, $1.5M, ...
///
/// A value that rounds up to 1000 of a unit is promoted to the next unit.
pub fn format_currency_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1_000_000.0 || round_cents(abs / 1_000.0) >= 1_000.0 {
        format!("${}M", compact(value / 1_000_000.0))
    } else if abs >= 1_000.0 || round_cents(abs) >= 1_000.0 {
        format!("${}K", compact(value / 1_000.0))
    } else {
        format!("${}", compact(value))
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Up to two decimals, trailing zeros dropped
fn compact(value: f64) -> String {
    let text = format!("{:.2}", round_cents(value));
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Right edge of the value axis: the last breakpoint, or a bit past the
/// longest bar when a bar would overflow it
pub fn axis_upper_bound(bars: &[RankedBar], config: &ReportConfig) -> f64 {
    let longest = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let upper = config.x_max();

    if longest > upper {
        longest * 1.05
    } else if upper > 0.0 {
        upper
    } else {
        1.0
    }
}

/// Label of the row at a y-axis key point; off-row points stay blank
fn row_label(bars: &[RankedBar], y: f64) -> String {
    if y < 0.0 || (y - y.round()).abs() > 1e-6 {
        return String::new();
    }
    bars.get(y.round() as usize)
        .map(|b| b.label.clone())
        .unwrap_or_default()
}

fn to_plot_color(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

// ============================================================================
// RENDERING
// ============================================================================

/// Draw the ranked bars to `config.image_path` as a PNG
pub fn render_chart(bars: &[RankedBar], color_rule: &ColorRule, config: &ReportConfig) -> Result<()> {
    draw(bars, color_rule, config).map_err(|e| ReportError::Render(e.to_string()))?;

    info!(
        path = %config.image_path.display(),
        bars = bars.len(),
        "chart written"
    );
    Ok(())
}

fn draw(
    bars: &[RankedBar],
    color_rule: &ColorRule,
    config: &ReportConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(&config.image_path, config.figure_size).into_drawing_area();
    root.fill(&WHITE)?;

    let rows = bars.len().max(1);
    let x_upper = axis_upper_bound(bars, config);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.chart_title, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(230)
        .build_cartesian_2d(0f64..x_upper, -0.5f64..rows as f64 - 0.5)?;

    let x_formatter = |v: &f64| format_currency_tick(*v);
    let y_formatter = |v: &f64| row_label(bars, *v);

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_labels(config.x_breakpoints.len())
        .y_labels(rows)
        .x_desc(config.x_desc.as_str())
        .y_desc(config.y_desc.as_str())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(("sans-serif", 14))
        .draw()?;

    // Guide lines sit exactly on the round-number breakpoints
    let top = rows as f64 - 0.5;
    chart.draw_series(
        config
            .x_breakpoints
            .iter()
            .filter(|&&x| x > 0.0 && x <= x_upper)
            .map(|&x| PathElement::new(vec![(x, -0.5), (x, top)], BLACK.mix(0.15))),
    )?;

    let half = config.bar_height / 2.0;

    // One series per window so each color gets a legend entry
    for window in color_rule.windows() {
        let color = to_plot_color(window.color);
        let rects: Vec<Rectangle<(f64, f64)>> = bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| bar.window == *window)
            .map(|(row, bar)| {
                let y = row as f64;
                Rectangle::new([(0.0, y - half), (bar.value, y + half)], color.filled())
            })
            .collect();

        chart
            .draw_series(rects)?
            .label(window.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 18, y + 6)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", 16))
        .draw()?;

    root.present()?;
    Ok(())
}
