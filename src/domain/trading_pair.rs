use {
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
    thiserror::Error,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("trading pair '{0}' is not in BASE/QUOTE form")]
    Malformed(String),
}

/// A market identifier such as `ADA/USDT`.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct TradingPair(String);

impl TradingPair {
    pub fn new(text: &str) -> Result<Self, PairError> {
        match text.split_once('/') {
            Some((base, quote))
                if !base.is_empty() && !quote.is_empty() && !quote.contains('/') =>
            {
                Ok(Self(text.to_owned()))
            }
            _ => Err(PairError::Malformed(text.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn base(&self) -> &str {
        self.0.split_once('/').map(|(b, _)| b).unwrap_or(&self.0)
    }

    pub fn quote(&self) -> &str {
        self.0.split_once('/').map(|(_, q)| q).unwrap_or("")
    }
}

impl FromStr for TradingPair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TradingPair {
    type Error = PairError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TradingPair> for String {
    fn from(pair: TradingPair) -> Self {
        pair.0
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_base_and_quote() {
        let pair = TradingPair::new("ADA/USDT").unwrap();
        assert_eq!(pair.base(), "ADA");
        assert_eq!(pair.quote(), "USDT");
        assert_eq!(pair.to_string(), "ADA/USDT");
    }

    #[test]
    fn rejects_malformed_pairs() {
        for bad in ["ADAUSDT", "/USDT", "ADA/", "A/B/C", ""] {
            assert_eq!(
                TradingPair::new(bad),
                Err(PairError::Malformed(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let pair: TradingPair = "BTC/USDT".parse().unwrap();
        assert_eq!(serde_json::to_string(&pair).unwrap(), "\"BTC/USDT\"");
        assert!(serde_json::from_str::<TradingPair>("\"BTCUSDT\"").is_err());
    }
}
