use crate::monitoring::domain::{SecurityEvent, StatsSnapshot};

/// Local mirror of the backend's event feed and statistics
///
/// Invariants:
/// - `loading` is true only until the first event fetch completes,
///   successfully or not.
/// - `last_error` holds the cause of the most recent failed event fetch and
///   is cleared by the next successful one. Stats failures never touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    events: Vec<SecurityEvent>,
    stats: Option<StatsSnapshot>,
    loading: bool,
    last_error: Option<String>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            stats: None,
            loading: true,
            last_error: None,
        }
    }
}

impl ClientState {
    /// Events, most recent first
    pub fn events(&self) -> &[SecurityEvent] {
        &self.events
    }

    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the event list wholesale, truncated to `max_events`
    pub(crate) fn apply_events(&mut self, mut events: Vec<SecurityEvent>, max_events: usize) {
        events.truncate(max_events);
        self.events = events;
        self.last_error = None;
        self.loading = false;
    }

    /// Records a failed event fetch, keeping the previous (stale) list
    pub(crate) fn record_events_failure(&mut self, message: &str) {
        self.last_error = Some(message.to_string());
        self.loading = false;
    }

    pub(crate) fn apply_stats(&mut self, stats: StatsSnapshot) {
        self.stats = Some(stats);
    }

    /// Clears the error banner. Returns whether anything changed.
    pub(crate) fn dismiss_error(&mut self) -> bool {
        self.last_error.take().is_some()
    }
}
