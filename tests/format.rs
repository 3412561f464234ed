use chrono::NaiveDate;
use m7_dashboard::presentation::format::{
    NOT_AVAILABLE, format_date, format_decimal, format_percent, format_price, format_volume,
    group_thousands,
};

#[test]
fn metric_values_match_dashboard_labels() {
    assert_eq!(format_price(Some(123.456)), "$123.46");
    assert_eq!(format_volume(Some(12_345_678)), "12,345,678");
    assert_eq!(format_percent(Some(1.234)), "1.23%");
    assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 7, 5)), "2024-07-05");
    assert_eq!(format_decimal(181.9), "181.90");
}

#[test]
fn unavailable_values_read_na() {
    assert_eq!(format_price(None), NOT_AVAILABLE);
    assert_eq!(format_volume(None), "N/A");
    assert_eq!(format_percent(None), "N/A");
    assert_eq!(format_date(None), "N/A");
}

#[test]
fn thousands_grouping_edges() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(100_000), "100,000");
    assert_eq!(group_thousands(1_000_000), "1,000,000");
}
