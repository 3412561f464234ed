use crate::domain::errors::DataUnavailable;
use futures::future::{self, Either};
use futures::pin_mut;
use std::future::Future;

/// Resolves to `work`'s output, or to [`DataUnavailable::Timeout`] if
/// `deadline` completes first. The losing future is dropped.
pub async fn race_deadline<T, W, D>(work: W, deadline: D, timeout_ms: u32) -> Result<T, DataUnavailable>
where
    W: Future<Output = Result<T, DataUnavailable>>,
    D: Future<Output = ()>,
{
    pin_mut!(work);
    pin_mut!(deadline);

    match future::select(work, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(DataUnavailable::Timeout { after_ms: timeout_ms }),
    }
}
