// Salary By Team - Display Server
// Serves the display page and its chart; nothing else.

use anyhow::{Context, Result};
use axum::{response::Html, routing::get, Router};
use salary_by_team::{logging, run, DisplayPage, ReferenceTables, ReportConfig};
use std::sync::Arc;
use tower_http::services::ServeFile;
use tracing::info;

/// GET / - the display page
async fn serve_page(page: Arc<String>) -> Html<String> {
    Html(page.as_str().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    println!("🌐 Salary By Team - Display Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = ReportConfig::default();
    let tables = ReferenceTables::mlb();

    // Regenerate so the page never shows a stale chart
    let report = run(&config, &tables)
        .with_context(|| format!("Failed to build report from {:?}", config.data_path))?;
    println!("✓ Chart rendered: {} teams", report.bars.len());

    let page = DisplayPage::from_config(&config);
    let image_route = format!("/{}", page.image_src);
    let html = Arc::new(page.to_html());

    let app = Router::new()
        .route("/", get(move || serve_page(html.clone())))
        .route_service(&image_route, ServeFile::new(&report.image_path));

    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr, "display server listening");
    println!("\n🚀 Server running on http://localhost:3000");
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Server stopped unexpectedly")?;

    Ok(())
}
