//! Bounded retry policy for startup provisioning.
//!
//! Both backends probe their backing resource the same way: a "missing"
//! answer short-circuits to creation, while generic failures are retried
//! on a fixed delay until the attempts run out.

use std::future::Future;
use std::time::Duration;

use itemvault_core::storage::{StoreError, StoreResult};

/// How many times an existence probe runs before startup is aborted.
pub const PROVISION_ATTEMPTS: u32 = 5;

/// Fixed delay between provisioning attempts.
pub const PROVISION_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Outcome of a single existence probe against a backing resource.
#[derive(Debug)]
pub enum Probe {
    /// The resource exists and is usable.
    Exists,
    /// The backend reported that the resource does not exist.
    Missing,
}

/// Runs `probe` until it answers, retrying transient failures.
///
/// A `Missing` answer never consumes an attempt; only generic backend
/// errors do. After the final failed attempt the error surfaces as a
/// fatal provisioning failure, which the caller propagates to abort
/// startup.
pub async fn probe_with_retry<F, Fut>(resource: &str, mut probe: F) -> StoreResult<Probe>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = StoreResult<Probe>>,
{
    let mut attempts_left = PROVISION_ATTEMPTS;
    loop {
        match probe().await {
            Ok(answer) => return Ok(answer),
            Err(err) => {
                attempts_left -= 1;
                tracing::warn!(resource, error = %err, attempts_left, "Existence probe failed");
                if attempts_left == 0 {
                    return Err(StoreError::Provisioning(format!("{resource}: {err}")));
                }
                tokio::time::sleep(PROVISION_RETRY_DELAY).await;
            }
        }
    }
}
