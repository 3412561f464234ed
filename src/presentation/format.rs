//! Display formatting for metric cards and the history table.

use chrono::NaiveDate;

pub const NOT_AVAILABLE: &str = "N/A";

/// `$123.45`
pub fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| NOT_AVAILABLE.to_string(), |p| format!("${p:.2}"))
}

/// `12,345,678`
pub fn format_volume(volume: Option<u64>) -> String {
    volume.map_or_else(|| NOT_AVAILABLE.to_string(), group_thousands)
}

/// `1.23%`
pub fn format_percent(percent: Option<f64>) -> String {
    percent.map_or_else(|| NOT_AVAILABLE.to_string(), |p| format!("{p:.2}%"))
}

/// `YYYY-MM-DD`
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Two decimals without a currency sign, for table cells
pub fn format_decimal(value: f64) -> String {
    format!("{value:.2}")
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
