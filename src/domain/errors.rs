//! Error types shared across layers.
//!
//! Only the price provider and the series loader can fail at runtime; the
//! metrics calculator and chart builders are infallible and degrade to
//! `None` fields or empty traces instead.

use thiserror::Error;

/// The market data provider could not deliver a usable price history.
///
/// Always distinct from a successful load that happens to contain no bars.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataUnavailable {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("request to the market data provider failed: {0}")]
    Transport(String),

    #[error("market data provider did not answer within {after_ms} ms")]
    Timeout { after_ms: u32 },

    #[error("market data provider responded with HTTP {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// The provider answered with an explicit error object.
    #[error("market data provider error [{code}]: {description}")]
    Provider { code: String, description: String },

    #[error("malformed market data: {0}")]
    Malformed(String),
}

/// A daily bar violated the OHLC invariants.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidBar {
    #[error("price field is not a finite number")]
    NonFinite,

    #[error("price field is negative")]
    Negative,

    #[error("low {low} / high {high} do not enclose open {open} and close {close}")]
    InconsistentRange { open: f64, high: f64, low: f64, close: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ticker symbol cannot be empty")]
pub struct InvalidSymbol;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dashboard configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<InvalidBar> for DataUnavailable {
    fn from(error: InvalidBar) -> Self {
        DataUnavailable::Malformed(error.to_string())
    }
}
