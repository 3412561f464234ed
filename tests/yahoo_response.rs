mod common;

use common::date;
use m7_dashboard::domain::errors::DataUnavailable;
use m7_dashboard::infrastructure::http::yahoo_client::interpret_response;
use m7_dashboard::infrastructure::http::yahoo_dto::ChartResponse;

const TWO_DAYS_WITH_GAP: &str = r#"{
  "chart": {
    "result": [{
      "meta": { "symbol": "AAPL", "gmtoffset": -18000 },
      "timestamp": [1704205800, 1704292200, 1704378600],
      "indicators": {
        "quote": [{
          "open":   [187.15, null, 182.15],
          "high":   [188.44, 185.88, 183.09],
          "low":    [183.89, 183.43, 180.88],
          "close":  [185.64, 184.25, 181.91],
          "volume": [82488700, 58414500, 71983600]
        }],
        "adjclose": [{ "adjclose": [185.4, 184.0, 181.7] }]
      }
    }],
    "error": null
  }
}"#;

#[test]
fn rows_with_nulls_are_gaps() {
    let bars = ChartResponse::from_json(TWO_DAYS_WITH_GAP).unwrap().into_bars().unwrap();

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].date(), date(2024, 1, 2));
    assert_eq!(bars[0].close().value(), 185.64);
    assert_eq!(bars[0].volume().value(), 82_488_700);
    assert_eq!(bars[1].date(), date(2024, 1, 4));
}

#[test]
fn provider_error_object_is_surfaced() {
    let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
    let error = ChartResponse::from_json(body).unwrap().into_bars().unwrap_err();

    assert_eq!(
        error,
        DataUnavailable::Provider {
            code: "Not Found".into(),
            description: "No data found, symbol may be delisted".into(),
        }
    );
}

#[test]
fn missing_timestamps_mean_no_trading_days() {
    let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":-18000},"indicators":{"quote":[{}]}}],"error":null}}"#;
    let bars = ChartResponse::from_json(body).unwrap().into_bars().unwrap();
    assert!(bars.is_empty());
}

#[test]
fn mismatched_columns_are_malformed() {
    let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":0},"timestamp":[1704205800,1704292200],
        "indicators":{"quote":[{"open":[1.0],"high":[1.0],"low":[1.0],"close":[1.0],"volume":[1]}]}}]}}"#;
    let error = ChartResponse::from_json(body).unwrap().into_bars().unwrap_err();
    assert!(matches!(error, DataUnavailable::Malformed(_)));
}

#[test]
fn inconsistent_bar_is_malformed() {
    let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":0},"timestamp":[1704205800],
        "indicators":{"quote":[{"open":[10.0],"high":[9.0],"low":[8.0],"close":[9.5],"volume":[1]}]}}]}}"#;
    let error = ChartResponse::from_json(body).unwrap().into_bars().unwrap_err();
    assert!(matches!(error, DataUnavailable::Malformed(_)));
}

#[test]
fn empty_result_list_is_malformed() {
    let error = ChartResponse::from_json(r#"{"chart":{"result":[],"error":null}}"#)
        .unwrap()
        .into_bars()
        .unwrap_err();
    assert!(matches!(error, DataUnavailable::Malformed(_)));
}

#[test]
fn invalid_json_is_malformed() {
    assert!(matches!(ChartResponse::from_json("<html>"), Err(DataUnavailable::Malformed(_))));
}

#[test]
fn overflowing_timestamp_is_malformed() {
    let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":-18000},"timestamp":[-9223372036854775800],
        "indicators":{"quote":[{"open":[1.0],"high":[1.0],"low":[1.0],"close":[1.0],"volume":[1]}]}}]}}"#;
    let error = ChartResponse::from_json(body).unwrap().into_bars().unwrap_err();
    assert!(matches!(error, DataUnavailable::Malformed(_)));

    let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":3600},"timestamp":[9223372036854775800],
        "indicators":{"quote":[{"open":[1.0],"high":[1.0],"low":[1.0],"close":[1.0],"volume":[1]}]}}]}}"#;
    let error = ChartResponse::from_json(body).unwrap().into_bars().unwrap_err();
    assert!(matches!(error, DataUnavailable::Malformed(_)));
}

const UNKNOWN_TICKER: &str = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;

#[test]
fn not_found_with_error_object_is_a_provider_error() {
    let error = interpret_response(404, "Not Found".into(), UNKNOWN_TICKER).unwrap_err();
    assert_eq!(
        error,
        DataUnavailable::Provider {
            code: "Not Found".into(),
            description: "No data found, symbol may be delisted".into(),
        }
    );
}

#[test]
fn other_non_success_status_is_http_status() {
    let error = interpret_response(503, "Service Unavailable".into(), "<html>busy</html>").unwrap_err();
    assert_eq!(
        error,
        DataUnavailable::HttpStatus { status: 503, status_text: "Service Unavailable".into() }
    );

    let error = interpret_response(404, "Not Found".into(), r#"{"chart":{"result":null,"error":null}}"#)
        .unwrap_err();
    assert_eq!(error, DataUnavailable::HttpStatus { status: 404, status_text: "Not Found".into() });
}

#[test]
fn success_status_with_error_object_is_a_provider_error() {
    let error = interpret_response(200, "OK".into(), UNKNOWN_TICKER).unwrap_err();
    assert!(matches!(error, DataUnavailable::Provider { .. }));
}

#[test]
fn success_status_yields_bars() {
    let bars = interpret_response(200, "OK".into(), TWO_DAYS_WITH_GAP).unwrap();
    assert_eq!(bars.len(), 2);
}
