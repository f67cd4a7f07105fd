use {
    serde::Deserialize,
    thiserror::Error,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("{exchange}: {field} '{raw}' is not a number")]
    BadPrice {
        exchange: String,
        field: &'static str,
        raw: String,
    },
    #[error("{exchange}: timestamp '{raw}' is not whole epoch seconds")]
    BadTimestamp { exchange: String, raw: String },
}

/// A decimal quantity as sent by the service: the original text for display, the parsed value for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    raw: String,
    value: f64,
}

impl Price {
    fn parse(raw: String, exchange: &str, field: &'static str) -> Result<Self, QuoteError> {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self { raw, value }),
            _ => Err(QuoteError::BadPrice {
                exchange: exchange.to_owned(),
                field,
                raw,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// One exchange's snapshot for the current pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub exchange: String,
    /// Echoed by the service when it knows it. Absent in older responses.
    pub trading_pair: Option<String>,
    pub last_traded_price: Price,
    pub best_buy_price: Price,
    pub best_sell_price: Price,
    pub volume_24hr: String,
    pub timestamp_secs: i64,
}

impl Quote {
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_secs.saturating_mul(1000)
    }
}

/// Quotes in the order the service returned them, one per responding exchange.
pub type QuoteList = Vec<Quote>;

// --- Wire format ---

#[derive(Deserialize, Debug, Default)]
pub struct MarketsResponse {
    #[serde(default)]
    pub markets: Vec<WireQuote>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WireQuote {
    pub exchange: String,
    #[serde(default)]
    pub trading_pair: Option<String>,
    pub last_traded_price: String,
    pub best_buy_price: String,
    pub best_sell_price: String,
    pub volume_24hr: String,
    pub timestamp: WireTimestamp,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WireTimestamp {
    pub seconds: WireSeconds,
}

// Protobuf JSON mapping sends int64 as a string, hand-written servers often don't.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum WireSeconds {
    Text(String),
    Number(i64),
}

impl TryFrom<WireQuote> for Quote {
    type Error = QuoteError;

    fn try_from(wire: WireQuote) -> Result<Self, Self::Error> {
        let exchange = wire.exchange;
        let timestamp_secs = match wire.timestamp.seconds {
            WireSeconds::Number(n) => n,
            WireSeconds::Text(raw) => {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| QuoteError::BadTimestamp {
                        exchange: exchange.clone(),
                        raw,
                    })?
            }
        };

        Ok(Quote {
            last_traded_price: Price::parse(wire.last_traded_price, &exchange, "last_traded_price")?,
            best_buy_price: Price::parse(wire.best_buy_price, &exchange, "best_buy_price")?,
            best_sell_price: Price::parse(wire.best_sell_price, &exchange, "best_sell_price")?,
            trading_pair: wire.trading_pair,
            volume_24hr: wire.volume_24hr,
            timestamp_secs,
            exchange,
        })
    }
}

impl MarketsResponse {
    /// Normalize every quote. One bad quote rejects the whole snapshot.
    pub fn into_quotes(self) -> Result<QuoteList, QuoteError> {
        self.markets.into_iter().map(Quote::try_from).collect()
    }
}
