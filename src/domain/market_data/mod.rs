//! Market data aggregate containing entities, metrics and value objects.

pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use metrics::{DerivedMetrics, LatestMetrics, compute_metrics};
pub use repositories::PriceProvider;
pub use value_objects::*;
