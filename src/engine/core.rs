use std::{
    sync::mpsc::{Receiver, Sender, channel},
    time::Duration,
};

use eframe::egui::Context;

#[cfg(not(target_arch = "wasm32"))]
use tokio::runtime::{Builder, Runtime};

use super::{
    messages::{FetchOutcome, FetchRequest, FetchTrigger},
    schedule::PollSchedule,
    settings::FeedSettings,
    state::FeedStatus,
    worker,
};

use crate::{
    data::SharedProvider,
    domain::{QuoteList, TradingPair},
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Owns the current pair selection and every fetch issued for it.
///
/// Fetches are triggered by the poll timer and by selection changes, independently.
/// Each one is tagged with a sequence number and the pair it was issued for, and
/// a result is only applied if it is for the current pair and newer than the last
/// snapshot applied. Everything else is dropped as stale.
pub struct MarketFeed {
    provider: SharedProvider,
    selection: TradingPair,
    schedule: PollSchedule,

    next_seq: u64,
    last_applied_seq: u64,

    result_tx: Sender<FetchOutcome>,
    result_rx: Receiver<FetchOutcome>,

    status: FeedStatus,
    repaint: Option<Context>,

    #[cfg(not(target_arch = "wasm32"))]
    runtime: Runtime,
}

impl MarketFeed {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(settings: &FeedSettings, provider: SharedProvider) -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("market-feed")
            .enable_all()
            .build()?;
        Ok(Self::assemble(settings, provider, runtime))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn assemble(settings: &FeedSettings, provider: SharedProvider, runtime: Runtime) -> Self {
        let (result_tx, result_rx) = channel();
        Self {
            provider,
            selection: settings.initial_pair.clone(),
            schedule: PollSchedule::new(settings.poll_interval),
            next_seq: 1,
            last_applied_seq: 0,
            result_tx,
            result_rx,
            status: FeedStatus::default(),
            repaint: None,
            runtime,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(settings: &FeedSettings, provider: SharedProvider) -> std::io::Result<Self> {
        let (result_tx, result_rx) = channel();
        Ok(Self {
            provider,
            selection: settings.initial_pair.clone(),
            schedule: PollSchedule::new(settings.poll_interval),
            next_seq: 1,
            last_applied_seq: 0,
            result_tx,
            result_rx,
            status: FeedStatus::default(),
            repaint: None,
        })
    }

    /// Completed fetches wake the UI through this context.
    pub fn set_repaint_context(&mut self, ctx: Context) {
        self.repaint = Some(ctx);
    }

    pub fn selection(&self) -> &TradingPair {
        &self.selection
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    pub fn poll_interval(&self) -> Duration {
        self.schedule.interval()
    }

    pub fn time_until_next_poll(&self, now: AppInstant) -> Duration {
        self.schedule.time_until_due(now)
    }

    /// Timer trigger. Issues a fetch (returning its sequence number) when the interval has elapsed,
    /// or straight away on the very first call.
    pub fn tick(&mut self, now: AppInstant) -> Option<u64> {
        if !self.schedule.is_due(now) {
            return None;
        }
        let trigger = if self.schedule.has_fired() {
            FetchTrigger::Timer
        } else {
            FetchTrigger::Startup
        };
        self.schedule.mark_fired(now);
        Some(self.issue(trigger))
    }

    /// User trigger. Switching to a different pair issues exactly one fetch for it; re-selecting
    /// the current pair does nothing. The poll timer is left alone.
    pub fn select_pair(&mut self, pair: TradingPair) -> Option<u64> {
        if pair == self.selection {
            return None;
        }
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Selection changed {} -> {}", self.selection, pair);
        }
        self.selection = pair;
        Some(self.issue(FetchTrigger::Selection))
    }

    fn issue(&mut self, trigger: FetchTrigger) -> u64 {
        let req = FetchRequest {
            seq: self.next_seq,
            pair: self.selection.clone(),
            trigger,
        };
        self.next_seq += 1;
        self.status.record_issue();

        #[cfg(debug_assertions)]
        if DF.log_fetches {
            log::info!("Fetch #{} for {} ({})", req.seq, req.pair, req.trigger);
        }

        let seq = req.seq;

        #[cfg(not(target_arch = "wasm32"))]
        worker::spawn_fetch(
            self.runtime.handle(),
            self.provider.clone(),
            req,
            self.result_tx.clone(),
            self.repaint.clone(),
        );

        #[cfg(target_arch = "wasm32")]
        worker::spawn_fetch(
            self.provider.clone(),
            req,
            self.result_tx.clone(),
            self.repaint.clone(),
        );

        seq
    }

    /// Drains finished fetches. Returns the newest snapshot that is still relevant, if any arrived.
    /// Failures are logged and recorded in the status only; the caller keeps showing what it has.
    pub fn poll_results(&mut self) -> Option<QuoteList> {
        let mut latest = None;

        while let Ok(outcome) = self.result_rx.try_recv() {
            self.status.record_return();

            if outcome.pair != self.selection || outcome.seq <= self.last_applied_seq {
                self.status.record_stale();
                #[cfg(debug_assertions)]
                if DF.log_stale_drops {
                    log::info!(
                        "Dropping stale fetch #{} for {} (selection {}, last applied #{})",
                        outcome.seq,
                        outcome.pair,
                        self.selection,
                        self.last_applied_seq
                    );
                }
                continue;
            }

            match outcome.result {
                Ok(quotes) => {
                    if let Some(other) = quotes
                        .iter()
                        .filter_map(|q| q.trading_pair.as_deref())
                        .find(|p| *p != outcome.pair.as_str())
                    {
                        log::warn!(
                            "Fetch #{} asked for {} but the service answered for {}",
                            outcome.seq,
                            outcome.pair,
                            other
                        );
                        self.status.record_failure(format!(
                            "service answered for {} instead of {}",
                            other, outcome.pair
                        ));
                        continue;
                    }

                    #[cfg(debug_assertions)]
                    if DF.log_fetches {
                        log::info!(
                            "Fetch #{} for {}: {} quotes in {}ms",
                            outcome.seq,
                            outcome.pair,
                            quotes.len(),
                            outcome.duration_ms
                        );
                    }
                    self.last_applied_seq = outcome.seq;
                    self.status.record_success();
                    latest = Some(quotes);
                }
                Err(e) => {
                    log::warn!(
                        "Error fetching market data for {} (fetch #{}): {}",
                        outcome.pair,
                        outcome.seq,
                        e
                    );
                    self.status.record_failure(e.to_string());
                }
            }
        }

        latest
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedProvider, pair, quote, wait_for_requests, wait_until_idle};
    use std::sync::Arc;

    fn settings(interval_ms: u64) -> FeedSettings {
        FeedSettings {
            endpoint: "stub".into(),
            initial_pair: pair("ADA/USDT"),
            poll_interval: Duration::from_millis(interval_ms),
            timeout_ms: 100,
        }
    }

    #[test]
    fn startup_fetch_then_timer() {
        let provider = Arc::new(ScriptedProvider::default());
        provider.answer("ADA/USDT", Ok(vec![quote("binance", None, "0.35")]));
        let mut feed = MarketFeed::new(&settings(1000), provider.clone()).unwrap();

        let start = AppInstant::now();
        assert_eq!(feed.tick(start), Some(1));
        assert_eq!(feed.tick(start + Duration::from_millis(500)), None);
        let applied = wait_until_idle(&mut feed);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0][0].exchange, "binance");

        assert_eq!(feed.tick(start + Duration::from_millis(1000)), Some(2));
        wait_until_idle(&mut feed);
        assert_eq!(provider.requested().len(), 2);
        assert_eq!(feed.status().snapshots_applied, 2);
    }

    #[test]
    fn selecting_a_pair_issues_exactly_one_fetch_for_it() {
        let provider = Arc::new(ScriptedProvider::default());
        provider.answer("BTC/USDT", Ok(vec![quote("kucoin", None, "42000")]));
        let mut feed = MarketFeed::new(&settings(60_000), provider.clone()).unwrap();

        assert_eq!(feed.select_pair(pair("BTC/USDT")), Some(1));
        assert_eq!(feed.select_pair(pair("BTC/USDT")), None);
        let applied = wait_until_idle(&mut feed);

        assert_eq!(provider.requested(), vec!["BTC/USDT".to_string()]);
        assert_eq!(applied.len(), 1);
        assert_eq!(feed.selection().as_str(), "BTC/USDT");
        // Timer still fires its startup fetch independently.
        assert!(feed.tick(AppInstant::now()).is_some());
    }

    #[test]
    fn slow_response_for_old_pair_is_discarded() {
        let mut provider = ScriptedProvider::default();
        provider.delays_ms.insert("ADA/USDT".into(), 150);
        provider.answer("ADA/USDT", Ok(vec![quote("binance", None, "0.35")]));
        provider.answer("ETH/USDT", Ok(vec![quote("binance", None, "2300")]));
        let mut feed = MarketFeed::new(&settings(60_000), Arc::new(provider)).unwrap();

        feed.tick(AppInstant::now());
        feed.select_pair(pair("ETH/USDT"));
        let applied = wait_until_idle(&mut feed);

        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0][0].last_traded_price.as_str(), "2300");
        assert_eq!(feed.status().stale_dropped, 1);
    }

    #[test]
    fn older_response_for_same_pair_is_discarded() {
        let provider = Arc::new(ScriptedProvider::default());
        provider.queue(200, Ok(vec![quote("binance", None, "0.35")]));
        provider.queue(0, Ok(vec![quote("binance", None, "0.36")]));
        let mut feed = MarketFeed::new(&settings(1000), provider.clone()).unwrap();

        let start = AppInstant::now();
        assert_eq!(feed.tick(start), Some(1));
        wait_for_requests(&provider, 1);
        assert_eq!(feed.tick(start + Duration::from_millis(1000)), Some(2));
        let applied = wait_until_idle(&mut feed);

        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0][0].last_traded_price.as_str(), "0.36");
        assert_eq!(feed.status().stale_dropped, 1);
        assert_eq!(feed.status().snapshots_applied, 1);
        assert_eq!(feed.selection().as_str(), "ADA/USDT");
    }

    #[test]
    fn failure_applies_nothing_and_is_reported() {
        let provider = Arc::new(ScriptedProvider::default());
        provider.answer("ADA/USDT", Err("expected value at line 1".into()));
        let mut feed = MarketFeed::new(&settings(60_000), provider).unwrap();

        feed.tick(AppInstant::now());
        let applied = wait_until_idle(&mut feed);

        assert!(applied.is_empty());
        let status = feed.status();
        assert_eq!(status.failures, 1);
        assert!(status.last_error.as_deref().unwrap().contains("expected value"));
        assert!(status.last_success.is_none());
    }

    #[test]
    fn answer_for_another_pair_is_rejected() {
        let provider = Arc::new(ScriptedProvider::default());
        provider.answer("ADA/USDT", Ok(vec![quote("binance", Some("BTC/USDT"), "42000")]));
        let mut feed = MarketFeed::new(&settings(60_000), provider).unwrap();

        feed.tick(AppInstant::now());
        assert!(wait_until_idle(&mut feed).is_empty());
        assert_eq!(feed.status().failures, 1);
    }
}
