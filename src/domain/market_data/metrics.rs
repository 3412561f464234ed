//! Descriptive statistics derived from a [`PriceSeries`].
//!
//! Everything here is a pure function of the series: no I/O, no hidden
//! state, and the input is only ever borrowed. Fields that need more history
//! than the series holds are reported as `None` rather than failing the whole
//! computation.

use super::{PriceBar, PriceSeries};
use chrono::NaiveDate;
use serde::Serialize;

pub const SHORT_MA_WINDOW: usize = 10;
pub const LONG_MA_WINDOW: usize = 20;

/// Per-bar derived columns, index-aligned with the source series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub moving_average_10: Vec<Option<f64>>,
    pub moving_average_20: Vec<Option<f64>>,
    pub daily_volatility_pct: Vec<Option<f64>>,
    latest: LatestMetrics,
}

impl DerivedMetrics {
    /// Values at the final bar; all unavailable for an empty series.
    pub fn latest(&self) -> &LatestMetrics {
        &self.latest
    }

    pub fn len(&self) -> usize {
        self.daily_volatility_pct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.daily_volatility_pct.is_empty()
    }
}

/// Snapshot of the last bar. `None` means "unavailable".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatestMetrics {
    pub date: Option<NaiveDate>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
    pub daily_volatility_pct: Option<f64>,
    pub moving_average_10: Option<f64>,
    pub moving_average_20: Option<f64>,
}

impl LatestMetrics {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_available(&self) -> bool {
        self.date.is_some()
    }
}

/// Computes both moving averages and the daily volatility for every bar.
pub fn compute_metrics(series: &PriceSeries) -> DerivedMetrics {
    let closes = series.closes();
    let moving_average_10 = moving_average(&closes, SHORT_MA_WINDOW);
    let moving_average_20 = moving_average(&closes, LONG_MA_WINDOW);
    let daily_volatility_pct: Vec<Option<f64>> =
        series.bars().iter().map(daily_volatility_pct).collect();

    let latest = match series.last() {
        Some(bar) => LatestMetrics {
            date: Some(bar.date()),
            close: Some(bar.close().value()),
            volume: Some(bar.volume().value()),
            daily_volatility_pct: daily_volatility_pct.last().copied().flatten(),
            moving_average_10: moving_average_10.last().copied().flatten(),
            moving_average_20: moving_average_20.last().copied().flatten(),
        },
        None => LatestMetrics::unavailable(),
    };

    DerivedMetrics { moving_average_10, moving_average_20, daily_volatility_pct, latest }
}

/// Trailing arithmetic mean over `window` values.
///
/// The output has one entry per input value; entry `i` is `None` until
/// `i + 1 >= window`. A zero window yields all `None`.
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut averages = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return averages;
    }

    for (offset, slice) in values.windows(window).enumerate() {
        let sum: f64 = slice.iter().sum();
        averages[offset + window - 1] = Some(sum / window as f64);
    }

    averages
}

/// Intraday high-low spread as a percentage of the close.
///
/// `None` when the close is not positive.
pub fn daily_volatility_pct(bar: &PriceBar) -> Option<f64> {
    let close = bar.close().value();
    if close <= 0.0 {
        return None;
    }
    Some((bar.high().value() - bar.low().value()) / close * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_window_is_never_defined() {
        assert_eq!(moving_average(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn window_equal_to_length_defines_only_last() {
        assert_eq!(moving_average(&[1.0, 2.0, 3.0], 3), vec![None, None, Some(2.0)]);
    }
}
