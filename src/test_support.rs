//! Stubs shared by unit tests.

use {
    async_trait::async_trait,
    std::{
        collections::{HashMap, VecDeque},
        sync::Mutex,
        thread,
        time::Duration,
    },
};

use crate::{
    data::{FetchError, MarketDataProvider},
    domain::{MarketsResponse, Quote, QuoteList, TradingPair},
    engine::MarketFeed,
};

pub(crate) fn pair(s: &str) -> TradingPair {
    TradingPair::new(s).unwrap()
}

/// Single quote with all three prices equal to `price`.
pub(crate) fn quote(exchange: &str, echo: Option<&str>, price: &str) -> Quote {
    let body = format!(
        r#"{{"markets":[{{"exchange":"{exchange}",{echo}"last_traded_price":"{price}","best_buy_price":"{price}","best_sell_price":"{price}","volume_24hr":"1","timestamp":{{"seconds":"1700000000"}}}}]}}"#,
        echo = echo
            .map(|p| format!(r#""trading_pair":"{p}","#))
            .unwrap_or_default()
    );
    serde_json::from_str::<MarketsResponse>(&body)
        .unwrap()
        .into_quotes()
        .unwrap()
        .remove(0)
}

/// Answers from a per-pair script and remembers what it was asked.
/// Queued calls are consumed first, in call order, whatever the pair.
/// Pairs without a script answer 404, like the market service does for unknown markets.
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    pub requests: Mutex<Vec<String>>,
    pub delays_ms: HashMap<String, u64>,
    pub answers: Mutex<HashMap<String, Result<QuoteList, String>>>,
    pub queued: Mutex<VecDeque<(u64, Result<QuoteList, String>)>>,
}

impl ScriptedProvider {
    /// Script the next call: wait `delay_ms`, then answer.
    pub fn queue(&self, delay_ms: u64, answer: Result<QuoteList, String>) {
        self.queued.lock().unwrap().push_back((delay_ms, answer));
    }

    pub fn answer(&self, pair: &str, answer: Result<QuoteList, String>) {
        self.answers.lock().unwrap().insert(pair.to_owned(), answer);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataProvider for ScriptedProvider {
    async fn fetch_market_data(&self, pair: &TradingPair) -> Result<QuoteList, FetchError> {
        let scripted = self.queued.lock().unwrap().pop_front();
        self.requests.lock().unwrap().push(pair.to_string());
        let (delay_ms, answer) = match scripted {
            Some((ms, answer)) => (Some(ms), Some(answer)),
            None => (self.delays_ms.get(pair.as_str()).copied(), None),
        };
        if let Some(ms) = delay_ms {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        let answer =
            answer.or_else(|| self.answers.lock().unwrap().get(pair.as_str()).cloned());
        match answer {
            Some(Ok(q)) => Ok(q),
            Some(Err(msg)) => Err(FetchError::Decode(msg)),
            None => Err(FetchError::Status {
                status: 404,
                body: "market not found".into(),
            }),
        }
    }
}

/// Blocks until the provider has been asked `count` times.
pub(crate) fn wait_for_requests(provider: &ScriptedProvider, count: usize) {
    for _ in 0..200 {
        if provider.requests.lock().unwrap().len() >= count {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("provider never saw {count} requests");
}

/// Polls the feed until nothing is in flight, collecting every snapshot it hands out.
pub(crate) fn wait_until_idle(feed: &mut MarketFeed) -> Vec<QuoteList> {
    let mut applied = Vec::new();
    for _ in 0..200 {
        if let Some(q) = feed.poll_results() {
            applied.push(q);
        }
        if feed.status().in_flight == 0 {
            return applied;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("fetches never completed");
}
