//! Configuration module for the arb board.

// Can all be private because we have a public re-export.
mod chart;
mod debug;
mod market;
mod pairs;

pub use chart::{CHART_CONFIG, ChartConfig, SeriesStyle};
pub use debug::DF;
pub use market::{MARKET, MarketConfig};
pub use pairs::EXCHANGE_PAIRS;
