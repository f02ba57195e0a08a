use crate::application::state::{ClientState, StateStore};
use crate::monitoring::domain::{SecurityEvent, StatsSnapshot};
use crate::ports::outbound::WafApi;
use crate::shared::FetchResult;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Polling interval of the reference dashboard
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Longest accepted polling interval, in seconds (one day)
pub const MAX_POLL_INTERVAL_SECS: u64 = 86_400;

/// Number of events requested per refresh
pub const DEFAULT_EVENT_LIMIT: usize = 50;

/// Tuning for the sync loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Time between two timer-driven refresh cycles
    pub poll_interval: Duration,
    /// Requested (and retained) number of events
    pub event_limit: usize,
    /// Drop responses that complete after a response of a newer cycle.
    /// When false, the last response to arrive wins.
    pub discard_stale_responses: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            event_limit: DEFAULT_EVENT_LIMIT,
            discard_stale_responses: false,
        }
    }
}

/// State shared between the loop owner, the timer task, spawned cycles and
/// refresh handles
struct SyncCore<A> {
    api: Arc<A>,
    store: Arc<StateStore>,
    options: SyncOptions,
    /// Last sequence number handed out; cycles are numbered from 1
    cycle_seq: AtomicU64,
    applied_events_seq: AtomicU64,
    applied_stats_seq: AtomicU64,
    detached: AtomicBool,
}

impl<A: WafApi + 'static> SyncCore<A> {
    fn next_cycle(&self) -> u64 {
        self.cycle_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn refresh(&self) {
        let cycle = self.next_cycle();
        debug!(cycle, "refresh cycle started");

        // The two halves apply independently: a hung stats request never
        // holds back the event list.
        futures::join!(self.refresh_events_in(cycle), self.refresh_stats_in(cycle));
    }

    async fn refresh_events(&self) {
        let cycle = self.next_cycle();
        debug!(cycle, "events-only refresh started");
        self.refresh_events_in(cycle).await;
    }

    async fn refresh_events_in(&self, cycle: u64) {
        let result = self.api.fetch_events(self.options.event_limit).await;
        self.apply_events(cycle, result);
    }

    async fn refresh_stats_in(&self, cycle: u64) {
        let result = self.api.fetch_stats().await;
        self.apply_stats(cycle, result);
    }

    fn apply_events(&self, cycle: u64, result: FetchResult<Vec<SecurityEvent>>) {
        if !self.accepts(cycle, &self.applied_events_seq, "events") {
            return;
        }

        match result {
            Ok(events) => {
                debug!(cycle, count = events.len(), "events refreshed");
                let limit = self.options.event_limit;
                self.store.update(|state| state.apply_events(events, limit));
            }
            Err(e) => {
                warn!(cycle, kind = %e.kind(), error = %e, "failed to fetch events");
                self.store
                    .update(|state| state.record_events_failure(e.message()));
            }
        }
    }

    fn apply_stats(&self, cycle: u64, result: FetchResult<StatsSnapshot>) {
        if !self.accepts(cycle, &self.applied_stats_seq, "stats") {
            return;
        }

        match result {
            Ok(stats) => {
                debug!(cycle, total = stats.total_events(), "stats refreshed");
                self.store.update(|state| state.apply_stats(stats));
            }
            // Stats are decorative: keep the previous snapshot and stay quiet
            // towards the operator.
            Err(e) => warn!(cycle, kind = %e.kind(), error = %e, "failed to fetch stats"),
        }
    }

    /// Decides whether a completion of `cycle` may still touch the state
    fn accepts(&self, cycle: u64, applied: &AtomicU64, what: &str) -> bool {
        if self.detached.load(Ordering::SeqCst) {
            warn!(cycle, what, "sync loop detached, discarding response");
            return false;
        }

        if self.options.discard_stale_responses {
            let newest = applied.fetch_max(cycle, Ordering::SeqCst);
            if newest > cycle {
                warn!(cycle, newest, what, "discarding stale response");
                return false;
            }
        }

        true
    }
}

/// Cloneable handle for triggering out-of-cycle refreshes
pub struct RefreshHandle<A> {
    core: Arc<SyncCore<A>>,
}

impl<A> Clone for RefreshHandle<A> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
        }
    }
}

impl<A: WafApi + 'static> RefreshHandle<A> {
    /// Runs one full cycle (events and stats)
    pub async fn refresh(&self) {
        self.core.refresh().await;
    }

    /// Runs an events-only cycle
    pub async fn refresh_events(&self) {
        self.core.refresh_events().await;
    }
}

struct TimerHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// SyncLoop - keeps [`ClientState`] an eventually-consistent mirror of the
/// backend
///
/// The loop owns the only writable copy of the client state. `start` runs one
/// cycle immediately and then one per `poll_interval`; each cycle fetches
/// events and stats concurrently and replaces them wholesale.
///
/// # Failure handling
/// - Event fetch failure: the previous list stays, the error is recorded.
/// - Stats fetch failure: the previous snapshot stays, the error is only logged.
///
/// # Cancellation
/// `stop` disarms the timer; cycles already in flight still complete and
/// apply. `shutdown` additionally detaches the loop, after which late
/// completions are discarded.
pub struct SyncLoop<A: WafApi + 'static> {
    core: Arc<SyncCore<A>>,
    timer: Option<TimerHandle>,
}

impl<A: WafApi + 'static> SyncLoop<A> {
    pub fn new(api: Arc<A>, options: SyncOptions) -> Self {
        Self::with_store(api, Arc::new(StateStore::new()), options)
    }

    /// Creates a loop writing into an existing store
    pub fn with_store(api: Arc<A>, store: Arc<StateStore>, options: SyncOptions) -> Self {
        Self {
            core: Arc::new(SyncCore {
                api,
                store,
                options,
                cycle_seq: AtomicU64::new(0),
                applied_events_seq: AtomicU64::new(0),
                applied_stats_seq: AtomicU64::new(0),
                detached: AtomicBool::new(false),
            }),
            timer: None,
        }
    }

    pub fn options(&self) -> &SyncOptions {
        &self.core.options
    }

    pub fn store(&self) -> Arc<StateStore> {
        Arc::clone(&self.core.store)
    }

    /// Returns a copy of the current client state
    pub fn state(&self) -> ClientState {
        self.core.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.core.store.subscribe()
    }

    pub fn refresh_handle(&self) -> RefreshHandle<A> {
        RefreshHandle {
            core: Arc::clone(&self.core),
        }
    }

    /// Runs one full refresh cycle and waits for it to be applied
    pub async fn refresh(&self) {
        self.core.refresh().await;
    }

    /// Runs one events-only refresh cycle and waits for it to be applied
    pub async fn refresh_events(&self) {
        self.core.refresh_events().await;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_detached(&self) -> bool {
        self.core.detached.load(Ordering::SeqCst)
    }

    /// Starts polling: one immediate cycle, then one per interval.
    ///
    /// Must be called from within a tokio runtime. Calling `start` on a
    /// running or detached loop does nothing.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            debug!("sync loop already running");
            return;
        }
        if self.is_detached() {
            warn!("sync loop was shut down and cannot be restarted");
            return;
        }

        let core = Arc::clone(&self.core);
        tokio::spawn(async move { core.refresh().await });

        let (cancel_tx, cancel_rx) = watch::channel(false);
        let task = tokio::spawn(run_timer(Arc::clone(&self.core), cancel_rx));

        info!(
            interval = ?self.core.options.poll_interval,
            limit = self.core.options.event_limit,
            strict_ordering = self.core.options.discard_stale_responses,
            "sync loop started"
        );

        self.timer = Some(TimerHandle {
            cancel: cancel_tx,
            task,
        });
    }

    /// Disarms the timer. Idempotent; safe to call before `start`.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            let _ = timer.cancel.send(true);
            timer.task.abort();
            info!("sync loop stopped");
        }
    }

    /// Stops the timer and discards every response still in flight
    pub fn shutdown(&mut self) {
        self.stop();
        if !self.core.detached.swap(true, Ordering::SeqCst) {
            info!("sync loop detached");
        }
    }
}

impl<A: WafApi + 'static> Drop for SyncLoop<A> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer task: spawns one cycle per tick until cancelled.
///
/// Cycles are spawned rather than awaited so that a request that never
/// returns cannot delay later ticks.
async fn run_timer<A: WafApi + 'static>(
    core: Arc<SyncCore<A>>,
    mut cancel: watch::Receiver<bool>,
) {
    // Out-of-range periods would overflow the deadline or panic the interval
    let period = core
        .options
        .poll_interval
        .clamp(Duration::from_millis(1), Duration::from_secs(MAX_POLL_INTERVAL_SECS));
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.changed() => {
                debug!("sync timer disarmed");
                return;
            }
            _ = ticker.tick() => {
                if *cancel.borrow() {
                    return;
                }
                let core = Arc::clone(&core);
                tokio::spawn(async move { core.refresh().await });
            }
        }
    }
}
