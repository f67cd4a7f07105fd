use {
    anyhow::{Context as _, Result},
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::{mem, sync::Arc},
};

use crate::{
    Cli,
    app::{AppState, PhaseView, RunningState, WaitingState},
    data::HttpMarketProvider,
    domain::{PairRegistry, Quote, TradingPair},
    engine::{FeedSettings, MarketFeed},
    ui::{MarketTable, PriceChart, UI_CONFIG, render_waiting},
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

pub struct App {
    pub(crate) feed: Option<MarketFeed>,
    pub(crate) registry: PairRegistry,
    /// Selector entries, deduplicated across exchanges.
    pub(crate) pairs: Vec<TradingPair>,
    pub(crate) table: MarketTable,
    pub(crate) chart: PriceChart,
    /// Why the feed could not be started, shown instead of data.
    pub(crate) startup_error: Option<String>,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let settings = match FeedSettings::from_cli(&args) {
            Ok(s) => s,
            Err(e) => {
                log::error!("{}. Falling back to defaults.", e);
                FeedSettings::default()
            }
        };

        match build_feed(&settings) {
            Ok(mut feed) => {
                feed.set_repaint_context(cc.egui_ctx.clone());
                let registry = PairRegistry::builtin();
                if !registry.contains(feed.selection()) {
                    log::warn!(
                        "{} is not listed by any known exchange; the selector will not show it",
                        feed.selection()
                    );
                }
                Self::with_feed(feed, registry)
            }
            Err(e) => {
                log::error!("Market feed failed to start: {:#}", e);
                let mut app = Self::without_feed(PairRegistry::builtin());
                app.startup_error = Some(format!("{:#}", e));
                app
            }
        }
    }

    pub(crate) fn with_feed(feed: MarketFeed, registry: PairRegistry) -> Self {
        let mut app = Self::without_feed(registry);
        app.feed = Some(feed);
        app
    }

    fn without_feed(registry: PairRegistry) -> Self {
        Self {
            feed: None,
            pairs: registry.unique_pairs(),
            registry,
            table: MarketTable::new(),
            chart: PriceChart::new(),
            startup_error: None,
            state: AppState::default(),
        }
    }

    pub(crate) fn selected_pair(&self) -> Option<&TradingPair> {
        self.feed.as_ref().map(|f| f.selection())
    }

    /// Fan a fresh snapshot out to both renderers.
    pub(crate) fn apply_snapshot(&mut self, quotes: &[Quote]) {
        self.table.replace(quotes);
        self.chart.update(quotes);
    }

    pub(crate) fn handle_pair_selection(&mut self, pair: TradingPair) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Pair selector picked {}", pair);
        }
        if let Some(feed) = &mut self.feed {
            feed.select_pair(pair);
        }
    }

    /// Runs the poll timer and applies whatever came back. Returns true when a snapshot was applied.
    pub(crate) fn pump_feed(&mut self, now: AppInstant) -> bool {
        let Some(feed) = &mut self.feed else {
            return false;
        };
        feed.tick(now);
        match feed.poll_results() {
            Some(quotes) => {
                self.apply_snapshot(&quotes);
                true
            }
            None => false,
        }
    }

    fn schedule_next_frame(&self, ctx: &Context, now: AppInstant) {
        if let Some(feed) = &self.feed {
            ctx.request_repaint_after(feed.time_until_next_poll(now));
        }
    }

    pub(crate) fn tick_waiting_state(&mut self, ctx: &Context, state: &mut WaitingState) -> AppState {
        let now = AppInstant::now();
        if self.pump_feed(now) {
            ctx.request_repaint();
            return AppState::Running(RunningState);
        }

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        render_waiting(ctx, self, state);
        self.schedule_next_frame(ctx, now);
        AppState::Waiting(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let now = AppInstant::now();
        self.pump_feed(now);

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.schedule_next_frame(ctx, now);
    }
}

fn build_feed(settings: &FeedSettings) -> Result<MarketFeed> {
    let provider = HttpMarketProvider::new(settings.endpoint.clone(), settings.timeout_ms)
        .context("building HTTP client")?;
    log::info!(
        "Polling {} every {}ms, starting with {}",
        provider.endpoint(),
        settings.poll_interval.as_millis(),
        settings.initial_pair
    );
    MarketFeed::new(settings, Arc::new(provider)).context("starting fetch runtime")
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Waiting(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
