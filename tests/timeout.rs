use futures::executor::block_on;
use futures::future::{pending, ready};
use m7_dashboard::domain::errors::DataUnavailable;
use m7_dashboard::infrastructure::http::race_deadline;

#[test]
fn work_finishing_first_wins() {
    let result = block_on(race_deadline(ready(Ok::<_, DataUnavailable>(7)), pending::<()>(), 100));
    assert_eq!(result, Ok(7));
}

#[test]
fn work_error_is_passed_through() {
    let failure = DataUnavailable::Transport("connection reset".into());
    let result = block_on(race_deadline(ready(Err::<u8, _>(failure.clone())), pending::<()>(), 100));
    assert_eq!(result, Err(failure));
}

#[test]
fn elapsed_deadline_reports_timeout() {
    let work = pending::<Result<u8, DataUnavailable>>();
    let result = block_on(race_deadline(work, ready(()), 10_000));
    assert_eq!(result, Err(DataUnavailable::Timeout { after_ms: 10_000 }));
    assert_eq!(
        result.unwrap_err().to_string(),
        "market data provider did not answer within 10000 ms"
    );
}
