//! Wire format of the Yahoo Finance `v8/finance/chart` endpoint.

use crate::domain::{errors::DataUnavailable, market_data::PriceBar};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Absent when the range holds no trading days
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartMeta {
    /// Exchange offset from UTC in seconds
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartResponse {
    pub fn from_json(body: &str) -> Result<Self, DataUnavailable> {
        serde_json::from_str(body).map_err(|e| DataUnavailable::Malformed(e.to_string()))
    }

    /// Converts the payload into daily bars.
    ///
    /// Rows with any null field are skipped. An explicit provider error wins
    /// over any partial result.
    pub fn into_bars(self) -> Result<Vec<PriceBar>, DataUnavailable> {
        if let Some(error) = self.chart.error {
            return Err(DataUnavailable::Provider {
                code: error.code,
                description: error.description,
            });
        }

        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| DataUnavailable::Malformed("chart response has no result".into()))?;

        let Some(timestamps) = result.timestamp else {
            return Ok(Vec::new());
        };
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

        let n = timestamps.len();
        let columns = [quote.open.len(), quote.high.len(), quote.low.len(), quote.close.len(), quote.volume.len()];
        if columns.iter().any(|len| *len != n) {
            return Err(DataUnavailable::Malformed(format!(
                "quote columns {columns:?} do not match {n} timestamps"
            )));
        }

        let mut bars = Vec::with_capacity(n);
        for (i, ts) in timestamps.iter().enumerate() {
            let row = (quote.open[i], quote.high[i], quote.low[i], quote.close[i], quote.volume[i]);
            let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = row else {
                continue;
            };
            let date = exchange_date(*ts, result.meta.gmtoffset)?;
            bars.push(PriceBar::new(date, open, high, low, close, volume)?);
        }

        Ok(bars)
    }
}

/// Trading date of a bar in the exchange's local calendar
pub fn exchange_date(timestamp: i64, gmtoffset: i64) -> Result<NaiveDate, DataUnavailable> {
    timestamp
        .checked_add(gmtoffset)
        .and_then(|local| DateTime::from_timestamp(local, 0))
        .map(|dt| dt.date_naive())
        .ok_or_else(|| DataUnavailable::Malformed(format!("timestamp {timestamp} out of range")))
}
