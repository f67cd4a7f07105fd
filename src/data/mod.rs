mod error;
mod provider;

pub use {
    error::FetchError,
    provider::{HttpMarketProvider, MarketDataProvider, SharedProvider},
};
