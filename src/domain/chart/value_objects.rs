use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Value Object - Chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Price,
    Volume,
}

/// Value Object - RGB color, serialized as a CSS hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8)
    }

    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    pub const ORANGE: Color = Color::from_hex(0xFFA500);
    pub const RED: Color = Color::from_hex(0xFF0000);
    pub const BLUE: Color = Color::from_hex(0x636EFA);
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Value Object - Axis titles, theme and canvas size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub template: String,
    pub range_slider_visible: bool,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    pub const DEFAULT_WIDTH: u32 = 800;
    pub const DEFAULT_HEIGHT: u32 = 400;

    pub fn new(x_axis_title: &str, y_axis_title: &str) -> Self {
        Self {
            x_axis_title: x_axis_title.to_string(),
            y_axis_title: y_axis_title.to_string(),
            template: "plotly_dark".to_string(),
            range_slider_visible: false,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Value Object - One data series bound to the shared date axis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Candlestick {
        name: String,
        x: Vec<NaiveDate>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    },
    /// `None` points are gaps in the line.
    Line {
        name: String,
        x: Vec<NaiveDate>,
        y: Vec<Option<f64>>,
        color: Color,
    },
    Bar {
        name: String,
        x: Vec<NaiveDate>,
        y: Vec<u64>,
    },
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Candlestick { name, .. } | Trace::Line { name, .. } | Trace::Bar { name, .. } => {
                name
            }
        }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        match self {
            Trace::Candlestick { x, .. } | Trace::Line { x, .. } | Trace::Bar { x, .. } => x,
        }
    }

    pub fn len(&self) -> usize {
        self.dates().len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates().is_empty()
    }

    /// Smallest and largest value the trace would plot
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let values: Box<dyn Iterator<Item = f64> + '_> = match self {
            Trace::Candlestick { high, low, .. } => Box::new(high.iter().chain(low.iter()).copied()),
            Trace::Line { y, .. } => Box::new(y.iter().flatten().copied()),
            Trace::Bar { y, .. } => Box::new(y.iter().map(|v| *v as f64)),
        };
        values.fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
    }
}

/// Renderer-agnostic chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub layout: Layout,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    pub fn has_data(&self) -> bool {
        self.traces.iter().any(|trace| !trace.is_empty())
    }

    /// Combined value range of every trace
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.traces.iter().filter_map(Trace::value_range).fold(None, |acc, (lo, hi)| match acc {
            None => Some((lo, hi)),
            Some((min, max)) => Some((min.min(lo), max.max(hi))),
        })
    }
}
