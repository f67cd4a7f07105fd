#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types outside of crate (for the snapshot binary)
pub use app::App;
pub use data::{FetchError, HttpMarketProvider, MarketDataProvider};
pub use domain::{Quote, QuoteList, TradingPair};
pub use engine::FeedSettings;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Market data endpoint to POST to
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Pair selected at startup, e.g. BTC/USDT
    #[arg(long)]
    pub pair: Option<String>,

    /// Milliseconds between timer polls
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
