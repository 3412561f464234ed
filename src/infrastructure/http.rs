//! Outbound HTTP: the Yahoo Finance price provider.

pub mod timeout;
pub mod yahoo_client;
pub mod yahoo_dto;

pub use timeout::race_deadline;
pub use yahoo_client::YahooFinanceClient;
