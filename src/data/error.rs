use thiserror::Error;

use crate::domain::QuoteError;

/// Everything that can go wrong between issuing a market request and holding a quote list.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("market service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("undecodable market response: {0}")]
    Decode(String),
}

impl From<QuoteError> for FetchError {
    fn from(e: QuoteError) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}
