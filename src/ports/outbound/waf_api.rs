use crate::monitoring::domain::{EventId, SecurityEvent, StatsSnapshot, Verdict};
use crate::shared::FetchResult;
use async_trait::async_trait;

/// WafApi port for the WAF backend's event store, stats aggregator and
/// rule engine
///
/// Implementations translate each call into one request against the backend
/// and never touch local state. They do not retry: retrying is the sync
/// loop's job, by calling again on its next tick.
///
/// # Async Support
/// Implementations must be `Send + Sync` so that overlapping refresh cycles
/// and operator actions can share one client.
#[async_trait]
pub trait WafApi: Send + Sync {
    /// Lists the most recent events, newest first
    ///
    /// # Arguments
    /// * `limit` - Maximum number of events the backend should return
    ///
    /// # Errors
    /// Returns a [`FetchError`](crate::shared::error::FetchError) if:
    /// - The backend cannot be reached
    /// - The backend returns a non-2xx status code
    /// - The response body cannot be decoded, or reports a backend failure
    async fn fetch_events(&self, limit: usize) -> FetchResult<Vec<SecurityEvent>>;

    /// Fetches the aggregate statistics snapshot
    async fn fetch_stats(&self) -> FetchResult<StatsSnapshot>;

    /// Asks the backend to apply an operator verdict to an event
    async fn apply_action(&self, event_id: &EventId, verdict: Verdict) -> FetchResult<()>;
}
