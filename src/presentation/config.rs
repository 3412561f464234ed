use crate::{
    application::{DashboardService, PriceSeriesLoader, SeriesCache},
    domain::{
        errors::ConfigError,
        logging::LogComponent,
    },
    infrastructure::{
        http::{
            YahooFinanceClient,
            yahoo_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS},
        },
        services::BrowserTimeProvider,
    },
    log_info, log_warn,
};
use chrono::{Days, NaiveDate};
use serde::Deserialize;
use std::rc::Rc;
use std::sync::Arc;

/// Id of the optional `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

thread_local! {
    static PAGE_CONFIG: DashboardConfig = DashboardConfig::from_document();
    static PAGE_SERVICE: Rc<DashboardService<YahooFinanceClient>> =
        Rc::new(page_config().dashboard_service());
}

/// The host page's configuration, read from the document once.
pub fn page_config() -> DashboardConfig {
    PAGE_CONFIG.with(DashboardConfig::clone)
}

/// The page-wide dashboard service.
///
/// The Leptos app and the JS API both go through it, so they share one
/// loader and one series cache.
pub fn page_service() -> Rc<DashboardService<YahooFinanceClient>> {
    PAGE_SERVICE.with(Rc::clone)
}

/// Runtime settings; every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Yahoo Finance origin, or a CORS proxy in front of it
    pub provider_base_url: String,
    pub request_timeout_ms: u32,
    pub default_lookback_days: u32,
    pub chart_width: u32,
    pub chart_height: u32,
    pub cache_ttl_secs: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            provider_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_lookback_days: 90,
            chart_width: 800,
            chart_height: 400,
            cache_ttl_secs: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the host page's config element, falling back to defaults.
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        let Some(text) = text else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log_info!(LogComponent::Presentation("Config"), "Loaded configuration from #{CONFIG_ELEMENT_ID}");
                config
            }
            Err(error) => {
                log_warn!(LogComponent::Presentation("Config"), "⚠️ Ignoring #{CONFIG_ELEMENT_ID}: {error}");
                Self::default()
            }
        }
    }

    /// `(today - lookback, today)`
    pub fn default_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = today
            .checked_sub_days(Days::new(self.default_lookback_days as u64))
            .unwrap_or(NaiveDate::MIN);
        (start, today)
    }

    pub fn price_provider(&self) -> YahooFinanceClient {
        YahooFinanceClient::new(&self.provider_base_url, self.request_timeout_ms)
    }

    pub fn series_cache(&self) -> SeriesCache {
        match self.cache_ttl_secs {
            Some(secs) => SeriesCache::with_ttl(
                secs.saturating_mul(1_000),
                Arc::new(BrowserTimeProvider::new()),
            ),
            None => SeriesCache::new(),
        }
    }

    pub fn dashboard_service(&self) -> DashboardService<YahooFinanceClient> {
        let loader = PriceSeriesLoader::with_cache(self.price_provider(), self.series_cache());
        DashboardService::new(loader).with_chart_size(self.chart_width, self.chart_height)
    }
}
