//! Chart aggregate: declarative specs and the builders that produce them.

pub mod builders;
pub mod value_objects;

pub use builders::{build_price_chart, build_volume_chart};
pub use value_objects::*;
