//! Pure builders turning a price series into chart specifications.

use super::value_objects::{ChartKind, ChartSpec, Color, Layout, Trace};
use crate::domain::market_data::{DerivedMetrics, PriceSeries};

pub const PRICE_CHART_TITLE: &str = "Candlestick Chart with Moving Averages";
pub const VOLUME_CHART_TITLE: &str = "Daily Trading Volume";

/// Candlestick trace with the 10- and 20-day moving averages overlaid.
///
/// Moving-average points missing from `metrics` are emitted as gaps, so a
/// short or mismatched metrics set never fails the build.
pub fn build_price_chart(series: &PriceSeries, metrics: &DerivedMetrics) -> ChartSpec {
    let dates = series.dates();
    let bars = series.bars();

    let candlestick = Trace::Candlestick {
        name: "Candlestick".to_string(),
        x: dates.clone(),
        open: bars.iter().map(|bar| bar.open().value()).collect(),
        high: bars.iter().map(|bar| bar.high().value()).collect(),
        low: bars.iter().map(|bar| bar.low().value()).collect(),
        close: bars.iter().map(|bar| bar.close().value()).collect(),
    };
    let ma_10 = Trace::Line {
        name: "10-Day MA".to_string(),
        x: dates.clone(),
        y: aligned(&metrics.moving_average_10, dates.len()),
        color: Color::ORANGE,
    };
    let ma_20 = Trace::Line {
        name: "20-Day MA".to_string(),
        y: aligned(&metrics.moving_average_20, dates.len()),
        x: dates,
        color: Color::RED,
    };

    ChartSpec {
        title: PRICE_CHART_TITLE.to_string(),
        kind: ChartKind::Price,
        layout: Layout::new("Date", "Price"),
        traces: vec![candlestick, ma_10, ma_20],
    }
}

/// Bar trace of daily traded volume.
pub fn build_volume_chart(series: &PriceSeries) -> ChartSpec {
    let volume = Trace::Bar {
        name: "Volume".to_string(),
        x: series.dates(),
        y: series.bars().iter().map(|bar| bar.volume().value()).collect(),
    };

    ChartSpec {
        title: VOLUME_CHART_TITLE.to_string(),
        kind: ChartKind::Volume,
        layout: Layout::new("Date", "Volume"),
        traces: vec![volume],
    }
}

fn aligned(values: &[Option<f64>], len: usize) -> Vec<Option<f64>> {
    (0..len).map(|i| values.get(i).copied().flatten()).collect()
}
