use std::time::Duration;

use crate::{
    Cli,
    config::MARKET,
    domain::{PairError, TradingPair},
};

/// Runtime feed configuration: compiled-in defaults with CLI overrides applied.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub endpoint: String,
    pub initial_pair: TradingPair,
    pub poll_interval: Duration,
    pub timeout_ms: u64,
}

impl FeedSettings {
    pub fn from_cli(args: &Cli) -> Result<Self, PairError> {
        let defaults = Self::default();
        Ok(Self {
            endpoint: args.endpoint.clone().unwrap_or(defaults.endpoint),
            initial_pair: match &args.pair {
                Some(p) => TradingPair::new(p)?,
                None => defaults.initial_pair,
            },
            poll_interval: args
                .poll_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.poll_interval),
            timeout_ms: defaults.timeout_ms,
        })
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            endpoint: MARKET.endpoint.url.to_owned(),
            initial_pair: TradingPair::new(MARKET.poll.default_pair)
                .unwrap_or_else(|e| panic!("MARKET.poll.default_pair is invalid: {e}")),
            poll_interval: Duration::from_millis(MARKET.poll.interval_ms),
            timeout_ms: MARKET.endpoint.timeout_ms,
        }
    }
}
