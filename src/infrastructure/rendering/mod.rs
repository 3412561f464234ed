pub mod canvas_renderer;
pub mod projection;

pub use canvas_renderer::CanvasRenderer;
pub use projection::ChartProjection;
