use super::config::page_service;
use crate::{
    application::DashboardRequest,
    domain::{
        chart::ChartSpec,
        logging::LogComponent,
        market_data::{LatestMetrics, PriceBar, Symbol, default_symbols},
    },
    log_error,
};
use chrono::NaiveDate;
use gloo::utils::format::JsValueSerdeExt;
use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct DashboardPayload<'a> {
    symbol: &'a Symbol,
    latest: &'a LatestMetrics,
    price_chart: Option<&'a ChartSpec>,
    volume_chart: Option<&'a ChartSpec>,
    recent_bars: Vec<&'a PriceBar>,
}

/// Runs the full pipeline for one ticker and `[start, end)` given as `YYYY-MM-DD`.
///
/// Resolves to `{ symbol, latest, price_chart, volume_chart, recent_bars }`;
/// rejects with the error message when the data is unavailable.
#[wasm_bindgen(js_name = loadDashboard)]
pub async fn load_dashboard(symbol: String, start: String, end: String) -> Result<JsValue, JsValue> {
    let symbol = Symbol::new(&symbol).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let request = DashboardRequest::new(symbol, parse_date(&start)?, parse_date(&end)?);

    let snapshot = page_service().build(&request).await.map_err(|e| {
        log_error!(LogComponent::Presentation("WasmApi"), "{e}");
        JsValue::from_str(&e.to_string())
    })?;

    let payload = DashboardPayload {
        symbol: snapshot.series.symbol(),
        latest: snapshot.latest(),
        price_chart: snapshot.price_chart.as_ref(),
        volume_chart: snapshot.volume_chart.as_ref(),
        recent_bars: snapshot.recent_bars(),
    };
    JsValue::from_serde(&payload).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The seven preset tickers as strings
#[wasm_bindgen(js_name = selectableSymbols)]
pub fn selectable_symbols() -> Array {
    default_symbols().iter().map(|symbol| JsValue::from_str(symbol.value())).collect()
}

fn parse_date(value: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("invalid date '{value}': {e}")))
}
