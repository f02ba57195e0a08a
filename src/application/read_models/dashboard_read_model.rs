//! Dashboard read model
//!
//! Display-ready values for one rendered frame of the dashboard.

use crate::monitoring::policies::SeverityClass;

/// Placeholder shown when a ranking has no entries
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown instead of the event table when no events are known
pub const EMPTY_STATE_HINT: &str = "No security events detected yet.";

/// Main read model for one dashboard frame
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReadModel {
    /// True until the first event fetch has completed
    pub loading: bool,
    /// Cause of the last failed event fetch, if not yet cleared or dismissed
    pub error_banner: Option<String>,
    /// Present once a stats snapshot has been received
    pub stat_cards: Option<StatCardsView>,
    /// Event rows, most recent first
    pub events: Vec<EventRowView>,
}

impl DashboardReadModel {
    /// Heading of the event table, e.g. "Security Events (12)"
    pub fn events_heading(&self) -> String {
        format!("Security Events ({})", self.events.len())
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Aggregate counters shown above the event table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCardsView {
    pub total_events: u64,
    /// Events in the last hour
    pub recent_events: u64,
    /// Most frequent source address, or [`NOT_AVAILABLE`]
    pub top_attacker: String,
    /// "Rule <id>" for the most frequent rule, or [`NOT_AVAILABLE`]
    pub most_triggered_rule: String,
}

/// View representation of one security event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRowView {
    pub id: String,
    /// Locale-formatted detection time
    pub time: String,
    pub source_ip: String,
    pub rule_id: String,
    pub severity: SeverityClass,
    pub payload: String,
    pub target_uri: String,
    /// Upper-cased disposition, e.g. "BLOCK"
    pub status: String,
    pub operator_action: Option<String>,
}
