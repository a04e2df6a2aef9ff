use std::future::Future;

/// Run a fallible call whose outcome nobody depends on.
///
/// The result is discarded; a failure is only logged at debug level. Use this for
/// notifications that must never change the caller's own outcome.
pub async fn best_effort<T, E, F>(what: &str, fut: F)
where
    F: Future<Output = std::result::Result<T, E>>,
    E: std::fmt::Display,
{
    if let Err(e) = fut.await {
        tracing::debug!(what, error = %e, "best-effort call failed; ignoring");
    }
}
