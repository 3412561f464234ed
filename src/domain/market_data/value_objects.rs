use derive_more::{Display, From, Into};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::errors::InvalidSymbol;

/// Value Object - Price in quote currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Traded share count
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Display,
    Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Volume(u64);

impl Volume {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Value Object - Ticker symbol, always upper-case and never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: &str) -> Result<Self, InvalidSymbol> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(InvalidSymbol);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = InvalidSymbol;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// The seven preset tickers offered by the dashboard
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MagnificentSeven {
    #[strum(serialize = "AAPL")]
    #[serde(rename = "AAPL")]
    Apple,
    #[strum(serialize = "MSFT")]
    #[serde(rename = "MSFT")]
    Microsoft,
    #[strum(serialize = "GOOGL")]
    #[serde(rename = "GOOGL")]
    Alphabet,
    #[strum(serialize = "AMZN")]
    #[serde(rename = "AMZN")]
    Amazon,
    #[strum(serialize = "NVDA")]
    #[serde(rename = "NVDA")]
    Nvidia,
    #[strum(serialize = "TSLA")]
    #[serde(rename = "TSLA")]
    Tesla,
    #[strum(serialize = "META")]
    #[serde(rename = "META")]
    Meta,
}

impl MagnificentSeven {
    pub fn symbol(self) -> Symbol {
        Symbol(self.as_ref().to_string())
    }

    pub fn company_name(self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Microsoft => "Microsoft",
            Self::Alphabet => "Alphabet",
            Self::Amazon => "Amazon",
            Self::Nvidia => "NVIDIA",
            Self::Tesla => "Tesla",
            Self::Meta => "Meta Platforms",
        }
    }
}

impl From<MagnificentSeven> for Symbol {
    fn from(ticker: MagnificentSeven) -> Self {
        ticker.symbol()
    }
}

/// Tickers offered in the symbol selector, in display order
pub fn default_symbols() -> Vec<Symbol> {
    MagnificentSeven::iter().map(Symbol::from).collect()
}
