mod core;
mod messages;
mod schedule;
mod settings;
mod state;
mod worker;

pub use {
    core::MarketFeed,
    messages::{FetchOutcome, FetchRequest, FetchTrigger},
    schedule::PollSchedule,
    settings::FeedSettings,
    state::FeedStatus,
};
