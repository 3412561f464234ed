#![cfg(target_arch = "wasm32")]

use chrono::NaiveDate;
use m7_dashboard::application::LoadKey;
use m7_dashboard::domain::market_data::{PriceSeries, Symbol};
use m7_dashboard::presentation::config::{DashboardConfig, page_config, page_service};
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn app_and_js_api_share_one_service() {
    let first = page_service();
    let second = page_service();
    assert!(Rc::ptr_eq(&first, &second));
}

#[wasm_bindgen_test]
fn page_without_config_element_uses_defaults() {
    assert_eq!(page_config(), DashboardConfig::default());
}

#[wasm_bindgen_test]
fn cached_series_is_visible_through_every_handle() {
    let symbol = Symbol::new("NVDA").unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let key = LoadKey::new(symbol.clone(), start, end);

    page_service().loader().cache().insert(key.clone(), PriceSeries::empty(symbol, start, end));
    assert!(page_service().loader().cache().get(&key).is_some());
}
