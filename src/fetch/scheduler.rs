//! Bounded batch scheduler.
//!
//! Work is partitioned into consecutive chunks of at most `max_concurrency`
//! items, preserving input order. Each chunk runs concurrently and is joined
//! in full before the next chunk starts, so at most `max_concurrency` fetches
//! are ever in flight and a failing item never cancels its siblings.

use crate::fetch::Fetcher;
use crate::model::{ConfigError, FetchResult};

use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;

/// Run `task` over `items` in fixed-size concurrent batches with a full join
/// between batches. Produces exactly one output per input item.
pub async fn run_batched<T, F, Fut>(
    items: Vec<T>,
    max_concurrency: usize,
    task: F,
) -> Result<Vec<Fut::Output>, ConfigError>
where
    F: Fn(T) -> Fut,
    Fut: Future,
{
    if max_concurrency == 0 {
        return Err(ConfigError::InvalidConcurrency);
    }

    let mut out = Vec::with_capacity(items.len());
    let mut items = items.into_iter();
    loop {
        let batch: Vec<T> = items.by_ref().take(max_concurrency).collect();
        if batch.is_empty() {
            break;
        }
        out.extend(join_all(batch.into_iter().map(&task)).await);
    }
    Ok(out)
}

/// Fetch every URL with bounded concurrency. One [`FetchResult`] per input
/// URL; per-URL failures are recorded in the result, never raised.
pub async fn fetch_all(
    fetcher: Arc<dyn Fetcher>,
    urls: Vec<String>,
    max_concurrency: usize,
) -> Result<Vec<FetchResult>, ConfigError> {
    run_batched(urls, max_concurrency, |url| {
        let fetcher = Arc::clone(&fetcher);
        async move {
            let body = fetcher.fetch(&url).await;
            FetchResult { url, body }
        }
    })
    .await
}
