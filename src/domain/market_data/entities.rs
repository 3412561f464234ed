pub use super::value_objects::{Price, Symbol, Volume};
use crate::domain::errors::InvalidBar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain entity - one trading day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    date: NaiveDate,
    open: Price,
    high: Price,
    low: Price,
    close: Price,
    volume: Volume,
}

impl PriceBar {
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, InvalidBar> {
        let prices = [open, high, low, close];
        if prices.iter().any(|p| !p.is_finite()) {
            return Err(InvalidBar::NonFinite);
        }
        if prices.iter().any(|p| *p < 0.0) {
            return Err(InvalidBar::Negative);
        }
        if low > open.min(close) || high < open.max(close) || low > high {
            return Err(InvalidBar::InconsistentRange { open, high, low, close });
        }

        Ok(Self {
            date,
            open: Price::from(open),
            high: Price::from(high),
            low: Price::from(low),
            close: Price::from(close),
            volume: Volume::from(volume),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn open(&self) -> Price {
        self.open
    }

    pub fn high(&self) -> Price {
        self.high
    }

    pub fn low(&self) -> Price {
        self.low
    }

    pub fn close(&self) -> Price {
        self.close
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }
}

/// Domain entity - daily bars of one symbol over a `[start, end)` window.
///
/// Bars are kept ascending by date with no duplicate trading days. The series
/// is immutable once built; derived data lives in separate structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: Symbol,
    start: NaiveDate,
    end: NaiveDate,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Builds a series, sorting bars by date. When a date occurs more than
    /// once the later bar wins.
    pub fn new(symbol: Symbol, start: NaiveDate, end: NaiveDate, mut bars: Vec<PriceBar>) -> Self {
        // stable sort keeps input order among equal dates
        bars.sort_by_key(|bar| bar.date);
        let mut unique: Vec<PriceBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match unique.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => unique.push(bar),
            }
        }

        Self { symbol, start, end, bars: unique }
    }

    pub fn empty(symbol: Symbol, start: NaiveDate, end: NaiveDate) -> Self {
        Self { symbol, start, end, bars: Vec::new() }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(PriceBar::date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close.value()).collect()
    }

    /// The most recent `count` bars, newest first.
    pub fn recent_bars_desc(&self, count: usize) -> Vec<&PriceBar> {
        self.bars.iter().rev().take(count).collect()
    }
}
