use anyhow::{Context, Result};
use arb_board::{
    Cli, FeedSettings, HttpMarketProvider, MarketDataProvider, ui::MarketTable,
    utils::format_clock,
};
use clap::Parser;

/// Fetch one snapshot for a pair and print it as a table.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let settings = FeedSettings::from_cli(&args).context("Invalid --pair")?;

    log::info!("POST {} for {}", settings.endpoint, settings.initial_pair);

    let provider = HttpMarketProvider::new(settings.endpoint.clone(), settings.timeout_ms)
        .context("Failed to build HTTP client")?;
    let quotes = provider
        .fetch_market_data(&settings.initial_pair)
        .await
        .with_context(|| format!("Fetching market data for {}", settings.initial_pair))?;

    if quotes.is_empty() {
        log::warn!("No exchange quoted {}", settings.initial_pair);
    }

    let mut table = MarketTable::new();
    table.replace(&quotes);

    println!(
        "{} @ {}",
        settings.initial_pair,
        format_clock(&chrono::Local::now())
    );
    println!("{}", table.to_text());
    Ok(())
}
