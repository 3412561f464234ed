pub mod dashboard;
pub mod series_loader;

pub use dashboard::*;
pub use series_loader::*;
