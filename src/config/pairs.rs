use crate::domain::Exchange;

const MAJORS: &[&str] = &[
    "BTC/USDT", "ETH/USDT", "LTC/USDT", "XRP/USDT", "BCH/USDT", "EOS/USDT", "XLM/USDT",
    "ADA/USDT", "TRX/USDT", "BNB/USDT", "XMR/USDT", "DASH/USDT",
];

/// Pairs each exchange is known to quote. Order matters: the selector lists pairs by first appearance.
pub const EXCHANGE_PAIRS: &[(Exchange, &[&str])] =
    &[(Exchange::Binance, MAJORS), (Exchange::Kucoin, MAJORS)];
