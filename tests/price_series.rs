mod common;

use common::{bar, date, symbol};
use m7_dashboard::domain::errors::InvalidBar;
use m7_dashboard::domain::market_data::{PriceBar, PriceSeries};

#[test]
fn bars_are_sorted_and_deduplicated() {
    let bars = vec![
        bar(date(2024, 1, 3), 12.0, 300),
        bar(date(2024, 1, 1), 10.0, 100),
        bar(date(2024, 1, 2), 11.0, 200),
        bar(date(2024, 1, 1), 10.5, 150),
    ];
    let series = PriceSeries::new(symbol("MSFT"), date(2024, 1, 1), date(2024, 2, 1), bars);

    assert_eq!(series.dates(), vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
    // later duplicate wins
    assert_eq!(series.bars()[0].close().value(), 10.5);
    assert_eq!(series.bars()[0].volume().value(), 150);
}

#[test]
fn recent_bars_are_newest_first() {
    let bars = (1..=5).map(|d| bar(date(2024, 1, d), d as f64 + 10.0, d as u64)).collect();
    let series = PriceSeries::new(symbol("NVDA"), date(2024, 1, 1), date(2024, 2, 1), bars);

    let recent: Vec<_> = series.recent_bars_desc(3).iter().map(|b| b.date()).collect();
    assert_eq!(recent, vec![date(2024, 1, 5), date(2024, 1, 4), date(2024, 1, 3)]);
    assert_eq!(series.recent_bars_desc(10).len(), 5);
}

#[test]
fn empty_series_has_no_last_bar() {
    let empty = PriceSeries::empty(symbol("TSLA"), date(2024, 1, 1), date(2024, 2, 1));
    assert!(empty.is_empty());
    assert!(empty.last().is_none());
}

#[test]
fn bar_rejects_inconsistent_range() {
    let day = date(2024, 1, 1);
    assert!(matches!(
        PriceBar::new(day, 10.0, 9.0, 8.0, 9.5, 1),
        Err(InvalidBar::InconsistentRange { .. })
    ));
    assert!(matches!(
        PriceBar::new(day, 10.0, 12.0, 10.5, 11.0, 1),
        Err(InvalidBar::InconsistentRange { .. })
    ));
}

#[test]
fn bar_rejects_non_finite_and_negative_prices() {
    let day = date(2024, 1, 1);
    assert_eq!(PriceBar::new(day, f64::NAN, 1.0, 0.5, 1.0, 1), Err(InvalidBar::NonFinite));
    assert_eq!(PriceBar::new(day, 1.0, f64::INFINITY, 0.5, 1.0, 1), Err(InvalidBar::NonFinite));
    assert_eq!(PriceBar::new(day, 1.0, 2.0, -0.5, 1.0, 1), Err(InvalidBar::Negative));
}

#[test]
fn zero_priced_bar_is_representable() {
    let bar = PriceBar::new(date(2024, 1, 1), 0.0, 0.0, 0.0, 0.0, 0).unwrap();
    assert_eq!(bar.close().value(), 0.0);
}
