use strum_macros::Display;

use crate::{
    data::FetchError,
    domain::{QuoteList, TradingPair},
};

/// What caused a fetch to be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FetchTrigger {
    Startup,
    Timer,
    Selection,
}

/// A fetch handed to the worker. `seq` increases by one per request issued.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub seq: u64,
    pub pair: TradingPair,
    pub trigger: FetchTrigger,
}

/// The worker's answer, still tagged with the request it belongs to.
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub pair: TradingPair,
    pub duration_ms: u128,
    pub result: Result<QuoteList, FetchError>,
}
