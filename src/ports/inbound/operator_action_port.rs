use crate::monitoring::domain::{EventId, Verdict};
use async_trait::async_trait;

/// OperatorActionPort - Inbound port for operator decisions
///
/// Dispatching never fails from the caller's point of view: the outcome
/// becomes visible through the next refresh of the event list.
#[async_trait]
pub trait OperatorActionPort: Send + Sync {
    /// Applies `verdict` to the event and resynchronizes the event list
    async fn dispatch(&self, event_id: EventId, verdict: Verdict);
}
