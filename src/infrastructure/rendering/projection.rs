use crate::domain::chart::{ChartKind, ChartSpec};

pub const PADDING: f64 = 50.0;
pub const TEXT_SPACE: f64 = 80.0;

/// Maps trace indices and values onto canvas pixels.
///
/// Points are centred in equal-width slots along x; y grows downwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProjection {
    pub chart_width: f64,
    pub chart_height: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub slot_width: f64,
}

impl ChartProjection {
    pub fn new(width: u32, height: u32, point_count: usize, min_value: f64, max_value: f64) -> Self {
        let chart_width = (width as f64 - PADDING * 2.0 - TEXT_SPACE).max(1.0);
        let chart_height = (height as f64 - PADDING * 2.0).max(1.0);
        Self {
            chart_width,
            chart_height,
            min_value,
            max_value,
            slot_width: chart_width / point_count.max(1) as f64,
        }
    }

    /// `None` when the chart has nothing to plot. Volume charts always
    /// include the zero baseline.
    pub fn for_spec(spec: &ChartSpec) -> Option<Self> {
        let point_count = spec.traces.iter().map(|trace| trace.len()).max().unwrap_or(0);
        if point_count == 0 {
            return None;
        }
        let (mut min, max) = spec.value_range()?;
        if spec.kind == ChartKind::Volume {
            min = min.min(0.0);
        }
        Some(Self::new(spec.layout.width, spec.layout.height, point_count, min, max))
    }

    pub fn x(&self, index: usize) -> f64 {
        PADDING + index as f64 * self.slot_width + self.slot_width / 2.0
    }

    pub fn y(&self, value: f64) -> f64 {
        let range = self.max_value - self.min_value;
        if range <= f64::EPSILON {
            // flat series sits mid-height
            return PADDING + self.chart_height / 2.0;
        }
        PADDING + (self.max_value - value) / range * self.chart_height
    }

    pub fn right_edge(&self) -> f64 {
        PADDING + self.chart_width
    }

    pub fn bottom_edge(&self) -> f64 {
        PADDING + self.chart_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_to_plot_edges() {
        let projection = ChartProjection::new(800, 400, 10, 100.0, 200.0);
        assert_eq!(projection.y(200.0), PADDING);
        assert_eq!(projection.y(100.0), projection.bottom_edge());
        assert_eq!(projection.slot_width, (800.0 - 100.0 - 80.0) / 10.0);
        assert_eq!(projection.x(0), PADDING + projection.slot_width / 2.0);
    }

    #[test]
    fn flat_range_is_centred() {
        let projection = ChartProjection::new(800, 400, 3, 5.0, 5.0);
        assert_eq!(projection.y(5.0), PADDING + 150.0);
    }
}
