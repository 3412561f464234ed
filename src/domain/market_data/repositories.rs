use crate::domain::errors::DataUnavailable;
use crate::domain::market_data::{PriceBar, Symbol};
use chrono::NaiveDate;

/// Source of daily price history.
///
/// Implementations return the bars the upstream has for `[start, end)`, in
/// any order; normalization into a [`PriceSeries`](super::PriceSeries) is the
/// loader's job. Gaps in upstream data are simply absent bars.
#[allow(async_fn_in_trait)]
pub trait PriceProvider {
    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DataUnavailable>;
}
