use super::series_loader::PriceSeriesLoader;
use crate::domain::{
    chart::{ChartSpec, build_price_chart, build_volume_chart},
    errors::DataUnavailable,
    logging::LogComponent,
    market_data::{
        DerivedMetrics, LatestMetrics, PriceBar, PriceProvider, PriceSeries, Symbol,
        compute_metrics,
    },
};
use crate::log_debug;
use chrono::NaiveDate;
use serde::Serialize;

/// Rows shown in the recent history table
pub const HISTORY_TABLE_ROWS: usize = 3;

/// Inputs of one dashboard interaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DashboardRequest {
    pub symbol: Symbol,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub show_price_chart: bool,
    pub show_volume_chart: bool,
}

impl DashboardRequest {
    /// Both charts enabled
    pub fn new(symbol: Symbol, start: NaiveDate, end: NaiveDate) -> Self {
        Self { symbol, start, end, show_price_chart: true, show_volume_chart: true }
    }

    pub fn with_price_chart(mut self, show: bool) -> Self {
        self.show_price_chart = show;
        self
    }

    pub fn with_volume_chart(mut self, show: bool) -> Self {
        self.show_volume_chart = show;
        self
    }
}

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub series: PriceSeries,
    pub metrics: DerivedMetrics,
    pub price_chart: Option<ChartSpec>,
    pub volume_chart: Option<ChartSpec>,
}

impl DashboardSnapshot {
    pub fn latest(&self) -> &LatestMetrics {
        self.metrics.latest()
    }

    /// Newest bars first, at most [`HISTORY_TABLE_ROWS`]
    pub fn recent_bars(&self) -> Vec<&PriceBar> {
        self.series.recent_bars_desc(HISTORY_TABLE_ROWS)
    }
}

/// Use case: load, compute and chart one symbol
pub struct DashboardService<P: PriceProvider> {
    loader: PriceSeriesLoader<P>,
    chart_size: (u32, u32),
}

impl<P: PriceProvider> DashboardService<P> {
    pub fn new(loader: PriceSeriesLoader<P>) -> Self {
        use crate::domain::chart::Layout;
        Self { loader, chart_size: (Layout::DEFAULT_WIDTH, Layout::DEFAULT_HEIGHT) }
    }

    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_size = (width, height);
        self
    }

    pub fn loader(&self) -> &PriceSeriesLoader<P> {
        &self.loader
    }

    pub async fn build(
        &self,
        request: &DashboardRequest,
    ) -> Result<DashboardSnapshot, DataUnavailable> {
        let series = self.loader.load(&request.symbol, request.start, request.end).await?;
        let metrics = compute_metrics(&series);
        let (width, height) = self.chart_size;

        let price_chart = request.show_price_chart.then(|| {
            let mut spec = build_price_chart(&series, &metrics);
            spec.layout = spec.layout.with_size(width, height);
            spec
        });
        let volume_chart = request.show_volume_chart.then(|| {
            let mut spec = build_volume_chart(&series);
            spec.layout = spec.layout.with_size(width, height);
            spec
        });

        log_debug!(
            LogComponent::Application("Dashboard"),
            "Built dashboard for {}: {} bars, price chart {}, volume chart {}",
            request.symbol,
            series.len(),
            price_chart.is_some(),
            volume_chart.is_some()
        );

        Ok(DashboardSnapshot { series, metrics, price_chart, volume_chart })
    }
}
