use super::{timeout::race_deadline, yahoo_dto::ChartResponse};
use crate::domain::{
    errors::DataUnavailable,
    logging::LogComponent,
    market_data::{PriceBar, PriceProvider, Symbol},
};
use crate::{log_info, log_warn};
use chrono::{NaiveDate, NaiveTime};
use gloo_net::http::Request;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Daily price history from the Yahoo Finance chart API
#[derive(Debug, Clone)]
pub struct YahooFinanceClient {
    base_url: String,
    timeout_ms: u32,
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS)
    }
}

impl YahooFinanceClient {
    pub fn new(base_url: &str, timeout_ms: u32) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), timeout_ms }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// `period1`/`period2` are UTC midnights of `start` and `end`.
    pub fn chart_url(&self, symbol: &Symbol, start: NaiveDate, end: NaiveDate) -> String {
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = end.and_time(NaiveTime::MIN).and_utc().timestamp();
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&events=history",
            self.base_url,
            symbol.value(),
            period1,
            period2
        )
    }

    async fn fetch(&self, url: String) -> Result<Vec<PriceBar>, DataUnavailable> {
        log_info!(LogComponent::Infrastructure("YahooFinance"), "📈 Fetching daily bars from: {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DataUnavailable::Transport(e.to_string()))?;
        let body = response.text().await.map_err(|e| DataUnavailable::Transport(e.to_string()))?;

        let bars = interpret_response(response.status(), response.status_text(), &body)?;
        log_info!(LogComponent::Infrastructure("YahooFinance"), "✅ Received {} daily bars", bars.len());
        Ok(bars)
    }
}

/// Maps a chart endpoint reply onto bars or the matching [`DataUnavailable`].
///
/// A non-2xx reply carrying a `chart.error` object (unknown tickers answer
/// 404 this way) surfaces as [`DataUnavailable::Provider`]; any other non-2xx
/// becomes [`DataUnavailable::HttpStatus`].
pub fn interpret_response(
    status: u16,
    status_text: String,
    body: &str,
) -> Result<Vec<PriceBar>, DataUnavailable> {
    if !(200..300).contains(&status) {
        return match ChartResponse::from_json(body) {
            Ok(parsed) if parsed.chart.error.is_some() => parsed.into_bars(),
            _ => Err(DataUnavailable::HttpStatus { status, status_text }),
        };
    }
    ChartResponse::from_json(body)?.into_bars()
}

impl PriceProvider for YahooFinanceClient {
    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DataUnavailable> {
        let url = self.chart_url(symbol, start, end);
        let deadline = gloo_timers::future::sleep(Duration::from_millis(self.timeout_ms as u64));

        let result = race_deadline(self.fetch(url), deadline, self.timeout_ms).await;
        if let Err(DataUnavailable::Timeout { after_ms }) = &result {
            log_warn!(
                LogComponent::Infrastructure("YahooFinance"),
                "⏱️ {symbol} request abandoned after {after_ms} ms"
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_uses_utc_midnights() {
        let client = YahooFinanceClient::new("https://proxy.example/", 5_000);
        let url = client.chart_url(
            &Symbol::new("msft").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        assert_eq!(
            url,
            "https://proxy.example/v8/finance/chart/MSFT?period1=1704067200&period2=1704153600&interval=1d&events=history"
        );
    }
}
