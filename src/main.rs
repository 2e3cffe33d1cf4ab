use anyhow::{Context, Result};

use salary_by_team::{logging, render::format_currency_tick, run, ReferenceTables, ReportConfig};

fn main() -> Result<()> {
    logging::init_tracing();

    println!("⚾ Average Yearly Salary By MLB Team");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = ReportConfig::default();
    let tables = ReferenceTables::mlb();

    println!("\n📂 Reading {}...", config.data_path.display());
    let report = run(&config, &tables)
        .with_context(|| format!("Failed to build report from {:?}", config.data_path))?;

    println!("\n📊 {} teams, lowest to highest:", report.bars.len());
    for bar in &report.bars {
        println!(
            "   {:<26} {:>8}  ({})",
            bar.label,
            format_currency_tick(bar.value.round()),
            bar.window.label()
        );
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Chart: {}", report.image_path.display());
    println!("✓ Page:  {}", report.page_path.display());

    Ok(())
}
