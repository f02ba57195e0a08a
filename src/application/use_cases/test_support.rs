//! Scripted WafApi used by the use case unit tests

use crate::monitoring::domain::{EventId, SecurityEvent, StatsSnapshot, Verdict};
use crate::ports::outbound::WafApi;
use crate::shared::error::FetchError;
use crate::shared::FetchResult;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

struct Scripted<T> {
    delay: Duration,
    result: FetchResult<T>,
}

/// Replays queued responses in call order; an empty queue answers with an
/// empty success.
pub(crate) struct ScriptedWafApi {
    events: Mutex<VecDeque<Scripted<Vec<SecurityEvent>>>>,
    stats: Mutex<VecDeque<Scripted<StatsSnapshot>>>,
    action_error: Mutex<Option<FetchError>>,
    events_calls: AtomicUsize,
    stats_calls: AtomicUsize,
    actions: Mutex<Vec<(EventId, Verdict)>>,
}

impl ScriptedWafApi {
    pub(crate) fn new() -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
            stats: Mutex::new(VecDeque::new()),
            action_error: Mutex::new(None),
            events_calls: AtomicUsize::new(0),
            stats_calls: AtomicUsize::new(0),
            actions: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn push_events(&self, result: FetchResult<Vec<SecurityEvent>>) {
        self.push_events_after(Duration::ZERO, result);
    }

    pub(crate) fn push_events_after(
        &self,
        delay: Duration,
        result: FetchResult<Vec<SecurityEvent>>,
    ) {
        self.events
            .lock()
            .unwrap()
            .push_back(Scripted { delay, result });
    }

    pub(crate) fn push_stats(&self, result: FetchResult<StatsSnapshot>) {
        self.push_stats_after(Duration::ZERO, result);
    }

    pub(crate) fn push_stats_after(&self, delay: Duration, result: FetchResult<StatsSnapshot>) {
        self.stats
            .lock()
            .unwrap()
            .push_back(Scripted { delay, result });
    }

    pub(crate) fn fail_actions(&self, error: FetchError) {
        *self.action_error.lock().unwrap() = Some(error);
    }

    pub(crate) fn events_calls(&self) -> usize {
        self.events_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn actions(&self) -> Vec<(EventId, Verdict)> {
        self.actions.lock().unwrap().clone()
    }
}

#[async_trait]
impl WafApi for ScriptedWafApi {
    async fn fetch_events(&self, _limit: usize) -> FetchResult<Vec<SecurityEvent>> {
        self.events_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.events.lock().unwrap().pop_front();
        match next {
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.result
            }
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_stats(&self) -> FetchResult<StatsSnapshot> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.stats.lock().unwrap().pop_front();
        match next {
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.result
            }
            None => Ok(StatsSnapshot::default()),
        }
    }

    async fn apply_action(&self, event_id: &EventId, verdict: Verdict) -> FetchResult<()> {
        self.actions
            .lock()
            .unwrap()
            .push((event_id.clone(), verdict));
        match self.action_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub(crate) fn event(id: &str) -> SecurityEvent {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    SecurityEvent::new(
        EventId::new(id.to_string()).unwrap(),
        ts,
        "172.18.0.1",
        "942100",
    )
}

/// Lets spawned tasks on the current-thread test runtime run to completion
pub(crate) async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
