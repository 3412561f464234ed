use super::projection::{ChartProjection, PADDING};
use crate::domain::{
    chart::{ChartKind, ChartSpec, Color, Trace},
    logging::LogComponent,
};
use crate::{log_trace, log_warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#111111";
const GRID: &str = "#333333";
const TEXT: &str = "#cccccc";
const TITLE: &str = "#ffffff";
const BULLISH: &str = "#00cc96";
const BEARISH: &str = "#ef553b";

/// Canvas 2D renderer for [`ChartSpec`]s
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))?;
        Ok(Self { canvas, context })
    }

    /// Looks up a `<canvas>` in the current document
    pub fn from_element_id(canvas_id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("Document not available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("Canvas '{canvas_id}' not found")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Element is not a canvas"))?;
        Self::new(canvas)
    }

    pub fn render(&self, spec: &ChartSpec) -> Result<(), JsValue> {
        let (width, height) = (spec.layout.width, spec.layout.height);
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

        self.render_title(spec)?;

        let Some(projection) = ChartProjection::for_spec(spec) else {
            self.render_no_data_message(spec)?;
            return Ok(());
        };

        self.render_axes(spec, &projection)?;
        for trace in &spec.traces {
            match trace {
                Trace::Candlestick { open, high, low, close, .. } => {
                    self.render_candles(&projection, open, high, low, close)
                }
                Trace::Line { y, color, .. } => self.render_line(&projection, y, *color),
                Trace::Bar { y, .. } => self.render_bars(&projection, y),
            }
        }
        self.render_legend(spec)?;

        log_trace!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "Rendered '{}' with {} traces",
            spec.title,
            spec.traces.len()
        );
        Ok(())
    }

    fn render_candles(
        &self,
        projection: &ChartProjection,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) {
        let ctx = &self.context;
        let body_width = (projection.slot_width * 0.6).max(1.0);

        for (i, (((&o, &h), &l), &c)) in open.iter().zip(high).zip(low).zip(close).enumerate() {
            let x = projection.x(i);
            let color = if c >= o { BULLISH } else { BEARISH };

            ctx.set_stroke_style_str(color);
            ctx.set_line_width(1.0);
            ctx.begin_path();
            ctx.move_to(x, projection.y(h));
            ctx.line_to(x, projection.y(l));
            ctx.stroke();

            let (open_y, close_y) = (projection.y(o), projection.y(c));
            let body_top = open_y.min(close_y);
            let body_height = (open_y - close_y).abs();
            if body_height < 1.0 {
                // doji
                ctx.begin_path();
                ctx.move_to(x - body_width / 2.0, open_y);
                ctx.line_to(x + body_width / 2.0, open_y);
                ctx.stroke();
            } else {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(x - body_width / 2.0, body_top, body_width, body_height);
            }
        }
    }

    /// Missing points break the line.
    fn render_line(&self, projection: &ChartProjection, values: &[Option<f64>], color: Color) {
        let ctx = &self.context;
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(1.5);
        ctx.begin_path();

        let mut pen_down = false;
        for (i, value) in values.iter().enumerate() {
            match value {
                Some(v) if pen_down => ctx.line_to(projection.x(i), projection.y(*v)),
                Some(v) => {
                    ctx.move_to(projection.x(i), projection.y(*v));
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        ctx.stroke();
    }

    fn render_bars(&self, projection: &ChartProjection, values: &[u64]) {
        let ctx = &self.context;
        let bar_width = (projection.slot_width * 0.8).max(1.0);
        let baseline = projection.y(0.0);
        ctx.set_fill_style_str(&Color::BLUE.to_css());

        for (i, &value) in values.iter().enumerate() {
            let top = projection.y(value as f64);
            ctx.fill_rect(projection.x(i) - bar_width / 2.0, top, bar_width, baseline - top);
        }
    }

    fn render_axes(&self, spec: &ChartSpec, projection: &ChartProjection) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_stroke_style_str(GRID);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(PADDING, PADDING);
        ctx.line_to(PADDING, projection.bottom_edge());
        ctx.line_to(projection.right_edge(), projection.bottom_edge());
        ctx.stroke();

        ctx.set_fill_style_str(TEXT);
        ctx.set_font("12px Arial");
        let label = |value: f64| match spec.kind {
            ChartKind::Price => format!("${value:.2}"),
            ChartKind::Volume => format!("{value:.0}"),
        };
        let text_x = projection.right_edge() + 10.0;
        ctx.fill_text(&label(projection.max_value), text_x, PADDING + 4.0)?;
        ctx.fill_text(&label(projection.min_value), text_x, projection.bottom_edge())?;

        if let Some(dates) = spec.traces.first().map(Trace::dates) {
            let date_y = projection.bottom_edge() + 18.0;
            if let Some(first) = dates.first() {
                ctx.fill_text(&first.to_string(), PADDING, date_y)?;
            }
            if let Some(last) = dates.last().filter(|_| dates.len() > 1) {
                ctx.fill_text(&last.to_string(), projection.right_edge() - 70.0, date_y)?;
            }
        }

        ctx.fill_text(
            &spec.layout.x_axis_title,
            PADDING + projection.chart_width / 2.0,
            projection.bottom_edge() + 36.0,
        )?;
        ctx.fill_text(&spec.layout.y_axis_title, 8.0, PADDING - 8.0)?;
        Ok(())
    }

    fn render_legend(&self, spec: &ChartSpec) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_font("12px Arial");
        let mut x = PADDING + 10.0;
        for trace in &spec.traces {
            let swatch = match trace {
                Trace::Candlestick { .. } => BULLISH.to_string(),
                Trace::Line { color, .. } => color.to_css(),
                Trace::Bar { .. } => Color::BLUE.to_css(),
            };
            ctx.set_fill_style_str(&swatch);
            ctx.fill_rect(x, PADDING + 6.0, 10.0, 10.0);
            ctx.set_fill_style_str(TEXT);
            ctx.fill_text(trace.name(), x + 14.0, PADDING + 15.0)?;
            x += 14.0 + trace.name().len() as f64 * 7.0 + 16.0;
        }
        Ok(())
    }

    fn render_title(&self, spec: &ChartSpec) -> Result<(), JsValue> {
        self.context.set_fill_style_str(TITLE);
        self.context.set_font("16px Arial");
        self.context.fill_text(&spec.title, PADDING, 30.0)
    }

    fn render_no_data_message(&self, spec: &ChartSpec) -> Result<(), JsValue> {
        self.context.set_fill_style_str(TEXT);
        self.context.set_font("14px Arial");
        self.context.fill_text(
            "No data for the selected range",
            PADDING,
            spec.layout.height as f64 / 2.0,
        )?;

        log_warn!(LogComponent::Infrastructure("CanvasRenderer"), "'{}' has no data to render", spec.title);
        Ok(())
    }
}
