use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use wafguard_monitor::prelude::*;

/// Mock WafApi for testing
///
/// Holds an in-memory event log. Applied actions update the stored event's
/// disposition the way the real backend does.
pub struct MockWafApi {
    events: Mutex<Vec<SecurityEvent>>,
    stats: Mutex<StatsSnapshot>,
    events_error: Mutex<Option<FetchError>>,
    stats_error: Mutex<Option<FetchError>>,
    action_error: Mutex<Option<FetchError>>,
    actions: Mutex<Vec<(EventId, Verdict)>>,
    events_calls: AtomicUsize,
    stats_calls: AtomicUsize,
}

impl MockWafApi {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            stats: Mutex::new(StatsSnapshot::default()),
            events_error: Mutex::new(None),
            stats_error: Mutex::new(None),
            action_error: Mutex::new(None),
            actions: Mutex::new(Vec::new()),
            events_calls: AtomicUsize::new(0),
            stats_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_events(self, events: Vec<SecurityEvent>) -> Self {
        *self.events.lock().unwrap() = events;
        self
    }

    pub fn with_stats(self, stats: StatsSnapshot) -> Self {
        *self.stats.lock().unwrap() = stats;
        self
    }

    pub fn fail_events(&self, error: Option<FetchError>) {
        *self.events_error.lock().unwrap() = error;
    }

    pub fn fail_stats(&self, error: Option<FetchError>) {
        *self.stats_error.lock().unwrap() = error;
    }

    pub fn fail_actions(&self, error: Option<FetchError>) {
        *self.action_error.lock().unwrap() = error;
    }

    pub fn actions(&self) -> Vec<(EventId, Verdict)> {
        self.actions.lock().unwrap().clone()
    }

    pub fn events_calls(&self) -> usize {
        self.events_calls.load(Ordering::SeqCst)
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockWafApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WafApi for MockWafApi {
    async fn fetch_events(&self, limit: usize) -> FetchResult<Vec<SecurityEvent>> {
        self.events_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.events_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.events.lock().unwrap().iter().take(limit).cloned().collect())
    }

    async fn fetch_stats(&self) -> FetchResult<StatsSnapshot> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.stats_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.stats.lock().unwrap().clone())
    }

    async fn apply_action(&self, event_id: &EventId, verdict: Verdict) -> FetchResult<()> {
        self.actions
            .lock()
            .unwrap()
            .push((event_id.clone(), verdict));
        if let Some(error) = self.action_error.lock().unwrap().clone() {
            return Err(error);
        }

        let mut events = self.events.lock().unwrap();
        if let Some(event) = events.iter_mut().find(|e| e.id() == event_id) {
            *event = event
                .clone()
                .with_disposition(Disposition::from(verdict))
                .with_operator_action(Some(verdict));
        }
        Ok(())
    }
}
