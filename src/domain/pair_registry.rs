use itertools::Itertools;

use crate::{
    config::EXCHANGE_PAIRS,
    domain::{Exchange, TradingPair},
};

/// Which pairs each exchange supports.
#[derive(Debug, Clone, Default)]
pub struct PairRegistry {
    listings: Vec<(Exchange, Vec<TradingPair>)>,
}

impl PairRegistry {
    /// Registry over the compiled-in exchange catalog.
    pub fn builtin() -> Self {
        Self::from_catalog(EXCHANGE_PAIRS)
    }

    pub fn from_catalog(catalog: &[(Exchange, &[&str])]) -> Self {
        let listings = catalog
            .iter()
            .map(|(exchange, pairs)| {
                let parsed = pairs
                    .iter()
                    .filter_map(|p| match TradingPair::new(p) {
                        Ok(pair) => Some(pair),
                        Err(e) => {
                            log::warn!("Skipping catalog entry for {}: {}", exchange, e);
                            None
                        }
                    })
                    .collect();
                (*exchange, parsed)
            })
            .collect();
        Self { listings }
    }

    /// Union of every exchange's pairs, ordered by first appearance.
    pub fn unique_pairs(&self) -> Vec<TradingPair> {
        self.listings
            .iter()
            .flat_map(|(_, pairs)| pairs.iter())
            .unique()
            .cloned()
            .collect()
    }

    pub fn exchanges_listing(&self, pair: &TradingPair) -> Vec<Exchange> {
        self.listings
            .iter()
            .filter(|(_, pairs)| pairs.contains(pair))
            .map(|(exchange, _)| *exchange)
            .collect()
    }

    pub fn contains(&self, pair: &TradingPair) -> bool {
        self.listings.iter().any(|(_, pairs)| pairs.contains(pair))
    }
}
