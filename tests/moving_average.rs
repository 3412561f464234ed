mod common;

use common::series_from_closes;
use m7_dashboard::domain::market_data::compute_metrics;
use m7_dashboard::domain::market_data::metrics::moving_average;
use quickcheck_macros::quickcheck;

#[test]
fn short_series_has_no_ten_day_average() {
    let metrics = compute_metrics(&series_from_closes(&[1.0; 9]));
    assert!(metrics.moving_average_10.iter().all(Option::is_none));
    assert!(metrics.latest().moving_average_10.is_none());
}

#[test]
fn ten_day_average_starts_at_index_nine() {
    let closes: Vec<f64> = (1..=15).map(f64::from).collect();
    let metrics = compute_metrics(&series_from_closes(&closes));

    assert!(metrics.moving_average_10[..9].iter().all(Option::is_none));
    assert_eq!(metrics.moving_average_10[9], Some(5.5));
    assert_eq!(metrics.moving_average_10[14], Some(10.5));
}

#[test]
fn twelve_rising_closes() {
    let closes: Vec<f64> = (10..=21).map(f64::from).collect();
    let metrics = compute_metrics(&series_from_closes(&closes));
    let latest = metrics.latest();

    assert_eq!(latest.moving_average_10, Some(16.5));
    assert_eq!(latest.moving_average_20, None);
    let volatility = latest.daily_volatility_pct.unwrap();
    assert!((volatility - 9.5238).abs() < 1e-3, "volatility was {volatility}");
}

#[quickcheck]
fn output_is_aligned_with_input(values: Vec<u16>, window: u8) -> bool {
    let values: Vec<f64> = values.into_iter().map(f64::from).collect();
    moving_average(&values, window as usize).len() == values.len()
}

#[quickcheck]
fn defined_exactly_from_window_minus_one(values: Vec<u16>, window: u8) -> bool {
    let window = window as usize % 30 + 1;
    let values: Vec<f64> = values.into_iter().map(f64::from).collect();
    let averages = moving_average(&values, window);

    averages.iter().enumerate().all(|(i, avg)| match avg {
        None => i + 1 < window,
        Some(avg) => {
            let trailing = &values[i + 1 - window..=i];
            let expected = trailing.iter().sum::<f64>() / window as f64;
            i + 1 >= window && (avg - expected).abs() <= 1e-9 * expected.abs().max(1.0)
        }
    })
}
