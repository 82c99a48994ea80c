//! Spread Monitor Binary
//!
//! Loads open credit-spread positions from the trade file, fetches current
//! underlying quotes, and prints a portfolio P&L report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p spread-monitor            # text table
//! cargo run -p spread-monitor -- --json  # machine-readable report
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `FINNHUB_TOKEN`: Finnhub API token
//!
//! ## Optional
//! - `FINNHUB_BASE_URL`: Quote API base URL
//! - `HTTP_TIMEOUT_SECS`: Quote request timeout in seconds (default: 10)
//! - `TRADES_FILE`: Path to the trade file (default: trades.json)
//! - `SAFE_BUFFER_PCT`: Safe-status buffer in percent (default: 5)
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;

use spread_monitor::application::report::{build_report, render_table};
use spread_monitor::infrastructure::persistence::TradeFile;
use spread_monitor::infrastructure::price_feed::FinnhubPriceFeed;
use spread_monitor::settings::Settings;
use spread_monitor::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_ancestors();
    init_tracing();

    let json_output = std::env::args().any(|arg| arg == "--json");

    let settings = Settings::from_env().context("Failed to load settings")?;

    let store = TradeFile::new(&settings.trades_path);
    let mut positions = store
        .load()
        .with_context(|| format!("Failed to load positions from {}", store.path().display()))?;

    tracing::info!(
        count = positions.len(),
        path = %store.path().display(),
        "Loaded positions"
    );

    let price_feed = FinnhubPriceFeed::new(
        settings.finnhub.token.clone(),
        settings.finnhub.base_url.clone(),
        settings.finnhub.timeout,
    )
    .context("Failed to create price feed")?;

    let report = build_report(&mut positions, &price_feed, &settings.report).await;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(&report));
    }

    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv_from_ancestors() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
