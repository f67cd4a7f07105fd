use {
    async_trait::async_trait,
    reqwest::Client,
    serde::Serialize,
    std::sync::Arc,
};

use crate::{
    data::FetchError,
    domain::{MarketsResponse, QuoteList, TradingPair},
};

#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
use crate::config::DF;

/// Abstract interface for fetching per-exchange quotes.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MarketDataProvider {
    /// One request/response exchange for `pair`. No retries.
    async fn fetch_market_data(&self, pair: &TradingPair) -> Result<QuoteList, FetchError>;
}

// Browser futures are not Send, so neither is the provider there.
#[cfg(not(target_arch = "wasm32"))]
pub type SharedProvider = Arc<dyn MarketDataProvider + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type SharedProvider = Arc<dyn MarketDataProvider>;

#[derive(Serialize)]
struct MarketRequest<'a> {
    trading_pair: &'a str,
}

/// Talks to the market service over HTTP POST + JSON.
pub struct HttpMarketProvider {
    endpoint: String,
    client: Client,
}

impl HttpMarketProvider {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Result<Self, FetchError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_millis(timeout_ms));
        #[cfg(target_arch = "wasm32")]
        let _ = timeout_ms;

        Ok(Self {
            endpoint: endpoint.into(),
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MarketDataProvider for HttpMarketProvider {
    async fn fetch_market_data(&self, pair: &TradingPair) -> Result<QuoteList, FetchError> {
        #[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
        if DF.log_fetches {
            log::info!("POST {} for {}", self.endpoint, pair);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&MarketRequest {
                trading_pair: pair.as_str(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let decoded: MarketsResponse = serde_json::from_str(&body)?;
        Ok(decoded.into_quotes()?)
    }
}
