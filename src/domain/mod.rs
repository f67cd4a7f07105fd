// Domain types and value objects
mod exchange;
mod pair_registry;
mod quote;
mod trading_pair;

pub use exchange::Exchange;
pub use pair_registry::PairRegistry;
pub use quote::{MarketsResponse, Price, Quote, QuoteError, QuoteList, WireQuote};
pub use trading_pair::{PairError, TradingPair};
