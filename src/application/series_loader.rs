use crate::domain::{
    errors::DataUnavailable,
    logging::{LogComponent, TimeProvider},
    market_data::{PriceProvider, PriceSeries, Symbol},
};
use crate::{log_debug, log_info, log_warn};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Exact identity of a load request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadKey {
    pub symbol: Symbol,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LoadKey {
    pub fn new(symbol: Symbol, start: NaiveDate, end: NaiveDate) -> Self {
        Self { symbol, start, end }
    }
}

struct CachedSeries {
    series: PriceSeries,
    stored_at: u64,
}

struct Expiry {
    ttl_ms: u64,
    clock: Arc<dyn TimeProvider>,
}

/// Memo of successful loads, keyed by [`LoadKey`].
///
/// Entries live for the cache's lifetime unless a TTL is configured.
pub struct SeriesCache {
    entries: Mutex<HashMap<LoadKey, CachedSeries>>,
    expiry: Option<Expiry>,
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesCache {
    pub fn new() -> Self {
        Self { entries: Mutex::new(HashMap::new()), expiry: None }
    }

    /// Entries older than `ttl_ms` according to `clock` are treated as absent.
    pub fn with_ttl(ttl_ms: u64, clock: Arc<dyn TimeProvider>) -> Self {
        Self { entries: Mutex::new(HashMap::new()), expiry: Some(Expiry { ttl_ms, clock }) }
    }

    pub fn get(&self, key: &LoadKey) -> Option<PriceSeries> {
        let mut entries = self.entries();
        let cached = entries.get(key)?;
        if self.is_expired(cached) {
            entries.remove(key);
            return None;
        }
        Some(cached.series.clone())
    }

    pub fn insert(&self, key: LoadKey, series: PriceSeries) {
        let stored_at = self.now();
        self.entries().insert(key, CachedSeries { series, stored_at });
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<LoadKey, CachedSeries>> {
        // the map holds no cross-entry invariant, so a poisoned lock is still usable
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn now(&self) -> u64 {
        self.expiry.as_ref().map_or(0, |expiry| expiry.clock.current_timestamp())
    }

    fn is_expired(&self, cached: &CachedSeries) -> bool {
        match &self.expiry {
            Some(expiry) => {
                expiry.clock.current_timestamp().saturating_sub(cached.stored_at) >= expiry.ttl_ms
            }
            None => false,
        }
    }
}

/// Loads daily price series from a [`PriceProvider`] through a [`SeriesCache`].
pub struct PriceSeriesLoader<P: PriceProvider> {
    provider: P,
    cache: SeriesCache,
}

impl<P: PriceProvider> PriceSeriesLoader<P> {
    pub fn new(provider: P) -> Self {
        Self::with_cache(provider, SeriesCache::new())
    }

    pub fn with_cache(provider: P, cache: SeriesCache) -> Self {
        Self { provider, cache }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &SeriesCache {
        &self.cache
    }

    /// Daily bars of `symbol` for the half-open range `[start, end)`.
    ///
    /// An inverted or empty range yields an empty series without touching the
    /// provider. Provider failures are returned as-is and never cached.
    pub async fn load(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataUnavailable> {
        if start >= end {
            log_debug!(
                LogComponent::Application("SeriesLoader"),
                "Empty range {start}..{end} for {symbol}, skipping fetch"
            );
            return Ok(PriceSeries::empty(symbol.clone(), start, end));
        }

        let key = LoadKey::new(symbol.clone(), start, end);
        if let Some(series) = self.cache.get(&key) {
            log_debug!(
                LogComponent::Application("SeriesLoader"),
                "Cache hit for {symbol} {start}..{end} ({} bars)",
                series.len()
            );
            return Ok(series);
        }

        let bars = match self.provider.fetch_daily_bars(symbol, start, end).await {
            Ok(bars) => bars,
            Err(error) => {
                log_warn!(
                    LogComponent::Application("SeriesLoader"),
                    "❌ Failed to load {symbol} {start}..{end}: {error}"
                );
                return Err(error);
            }
        };

        let in_range = bars.into_iter().filter(|bar| bar.date() >= start && bar.date() < end).collect();
        let series = PriceSeries::new(symbol.clone(), start, end, in_range);

        log_info!(
            LogComponent::Application("SeriesLoader"),
            "✅ Loaded {} bars for {symbol} {start}..{end}",
            series.len()
        );

        self.cache.insert(key, series.clone());
        Ok(series)
    }
}
