#![allow(dead_code)]

use chrono::NaiveDate;
use m7_dashboard::domain::errors::DataUnavailable;
use m7_dashboard::domain::market_data::{PriceBar, PriceProvider, PriceSeries, Symbol};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn symbol(ticker: &str) -> Symbol {
    Symbol::new(ticker).unwrap()
}

/// Bar with open = close, high = close + 1, low = close - 1
pub fn bar(day: NaiveDate, close: f64, volume: u64) -> PriceBar {
    PriceBar::new(day, close, close + 1.0, close - 1.0, close, volume).unwrap()
}

/// Consecutive calendar days starting 2024-01-01, one bar per close
pub fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| bar(date(2024, 1, 1) + chrono::Days::new(i as u64), *close, 1_000 + i as u64))
        .collect()
}

pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    PriceSeries::new(symbol("AAPL"), date(2024, 1, 1), date(2025, 1, 1), bars_from_closes(closes))
}

/// In-memory provider replaying scripted responses and counting calls.
/// Once the script is exhausted every call returns `Ok` with no bars.
pub struct StubProvider {
    responses: RefCell<VecDeque<Result<Vec<PriceBar>, DataUnavailable>>>,
    calls: Cell<usize>,
}

impl StubProvider {
    pub fn scripted(responses: Vec<Result<Vec<PriceBar>, DataUnavailable>>) -> Self {
        Self { responses: RefCell::new(responses.into()), calls: Cell::new(0) }
    }

    pub fn returning(bars: Vec<PriceBar>) -> Self {
        Self::scripted(vec![Ok(bars)])
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PriceProvider for StubProvider {
    async fn fetch_daily_bars(
        &self,
        _symbol: &Symbol,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DataUnavailable> {
        self.calls.set(self.calls.get() + 1);
        self.responses.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
