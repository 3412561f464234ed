pub mod config;
pub mod format;
pub mod wasm_api;

pub use config::DashboardConfig;
