use crate::application::use_cases::RefreshHandle;
use crate::monitoring::domain::{EventId, Verdict};
use crate::ports::inbound::OperatorActionPort;
use crate::ports::outbound::WafApi;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// ActionDispatcher - applies operator verdicts and resynchronizes
///
/// The dispatcher never mutates client state itself. After every action,
/// successful or not, it triggers one events-only refresh so the display
/// shows the backend's authoritative disposition.
pub struct ActionDispatcher<A> {
    api: Arc<A>,
    refresher: RefreshHandle<A>,
}

impl<A> Clone for ActionDispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            refresher: self.refresher.clone(),
        }
    }
}

impl<A: WafApi + 'static> ActionDispatcher<A> {
    pub fn new(api: Arc<A>, refresher: RefreshHandle<A>) -> Self {
        Self { api, refresher }
    }

    /// Applies `verdict` to the event, then refreshes the event list.
    ///
    /// Failures are logged and swallowed; the operator retries by issuing
    /// the action again.
    pub async fn dispatch(&self, event_id: EventId, verdict: Verdict) {
        match self.api.apply_action(&event_id, verdict).await {
            Ok(()) => info!(event_id = %event_id, verdict = %verdict, "operator action applied"),
            Err(e) => warn!(
                event_id = %event_id,
                verdict = %verdict,
                kind = %e.kind(),
                error = %e,
                "failed to apply operator action"
            ),
        }

        self.refresher.refresh_events().await;
    }

    /// Fire-and-forget variant of [`dispatch`](Self::dispatch)
    pub fn spawn_dispatch(&self, event_id: EventId, verdict: Verdict) -> JoinHandle<()> {
        let dispatcher = self.clone();
        tokio::spawn(async move { dispatcher.dispatch(event_id, verdict).await })
    }
}

#[async_trait]
impl<A: WafApi + 'static> OperatorActionPort for ActionDispatcher<A> {
    async fn dispatch(&self, event_id: EventId, verdict: Verdict) {
        ActionDispatcher::dispatch(self, event_id, verdict).await;
    }
}
