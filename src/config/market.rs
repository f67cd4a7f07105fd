//! Market-data service endpoint and polling defaults.

pub struct EndpointConfig {
    /// HTTP endpoint answering `POST {"trading_pair": ..}` with a `markets` list
    pub url: &'static str,
    /// Request timeout (native only, the browser fetch API has its own)
    pub timeout_ms: u64,
}

pub struct PollConfig {
    /// Delay between timer-driven fetches
    pub interval_ms: u64,
    /// Pair selected at start-up
    pub default_pair: &'static str,
}

pub struct MarketConfig {
    pub endpoint: EndpointConfig,
    pub poll: PollConfig,
}

pub const MARKET: MarketConfig = MarketConfig {
    endpoint: EndpointConfig {
        url: "http://localhost:8080/market",
        timeout_ms: 5000,
    },
    poll: PollConfig {
        interval_ms: 1000,
        default_pair: "ADA/USDT",
    },
};
