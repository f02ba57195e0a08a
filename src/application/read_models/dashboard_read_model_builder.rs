//! Builder for constructing DashboardReadModel from client state
//!
//! All functions here are pure projections of [`ClientState`].

use super::dashboard_read_model::{
    DashboardReadModel, EventRowView, StatCardsView, NOT_AVAILABLE,
};
use crate::application::state::ClientState;
use crate::monitoring::domain::{Disposition, SecurityEvent, StatsSnapshot};
use crate::monitoring::policies::SeverityPolicy;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Display format of event timestamps, e.g. "5/1/2024, 2:03:09 PM"
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Builder for constructing DashboardReadModel from client state
pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    /// Builds the read model with timestamps in the local timezone
    pub fn build(state: &ClientState) -> DashboardReadModel {
        Self::build_in(state, &Local)
    }

    /// Builds the read model with timestamps rendered in `tz`
    pub fn build_in<Tz>(state: &ClientState, tz: &Tz) -> DashboardReadModel
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        DashboardReadModel {
            loading: state.is_loading(),
            error_banner: state.last_error().map(str::to_string),
            stat_cards: state.stats().map(Self::build_stat_cards),
            events: state
                .events()
                .iter()
                .map(|event| Self::build_event_row(event, tz))
                .collect(),
        }
    }

    pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
        Self::format_timestamp_in(timestamp, &Local)
    }

    pub fn format_timestamp_in<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        timestamp
            .with_timezone(tz)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    /// First entry of the source ranking, or the placeholder
    pub fn top_attacker(stats: &StatsSnapshot) -> String {
        stats
            .top_source()
            .map(|source| source.src_ip.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// First entry of the rule ranking as "Rule <id>", or the placeholder
    pub fn most_triggered_rule(stats: &StatsSnapshot) -> String {
        stats
            .top_rule()
            .map(|rule| format!("Rule {}", rule.rule_id))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn status_label(disposition: Disposition) -> String {
        disposition.as_str().to_uppercase()
    }

    fn build_stat_cards(stats: &StatsSnapshot) -> StatCardsView {
        StatCardsView {
            total_events: stats.total_events(),
            recent_events: stats.recent_events(),
            top_attacker: Self::top_attacker(stats),
            most_triggered_rule: Self::most_triggered_rule(stats),
        }
    }

    fn build_event_row<Tz>(event: &SecurityEvent, tz: &Tz) -> EventRowView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        EventRowView {
            id: event.id().to_string(),
            time: Self::format_timestamp_in(event.timestamp(), tz),
            source_ip: event.source_ip().to_string(),
            rule_id: event.rule_id().to_string(),
            severity: SeverityPolicy::classify(event.rule_id()),
            payload: event.payload().to_string(),
            target_uri: event.target_uri().to_string(),
            status: Self::status_label(event.disposition()),
            operator_action: event.operator_action().map(|v| v.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::domain::{
        EventId, RuleFrequency, SourceFrequency, Verdict,
    };
    use crate::monitoring::policies::SeverityClass;
    use chrono::FixedOffset;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 14, 3, 9).unwrap()
    }

    fn stats(sources: &[&str], rules: &[&str]) -> StatsSnapshot {
        StatsSnapshot::new(
            10,
            3,
            sources
                .iter()
                .map(|ip| SourceFrequency {
                    src_ip: ip.to_string(),
                    count: 5,
                })
                .collect(),
            rules
                .iter()
                .map(|id| RuleFrequency {
                    rule_id: id.to_string(),
                    sample_payload: None,
                    count: 5,
                })
                .collect(),
        )
    }

    #[test]
    fn test_format_timestamp_in_utc() {
        assert_eq!(
            DashboardReadModelBuilder::format_timestamp_in(ts(), &Utc),
            "5/1/2024, 2:03:09 PM"
        );
    }

    #[test]
    fn test_format_timestamp_in_offset() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            DashboardReadModelBuilder::format_timestamp_in(ts(), &tz),
            "5/1/2024, 11:03:09 PM"
        );
    }

    #[test]
    fn test_top_attacker_placeholder_when_empty() {
        let snapshot = stats(&[], &["942100"]);
        assert_eq!(
            DashboardReadModelBuilder::top_attacker(&snapshot),
            NOT_AVAILABLE
        );
    }

    #[test]
    fn test_top_attacker_is_first_entry() {
        let snapshot = stats(&["172.18.0.1", "10.0.0.2"], &[]);
        assert_eq!(
            DashboardReadModelBuilder::top_attacker(&snapshot),
            "172.18.0.1"
        );
    }

    #[test]
    fn test_most_triggered_rule() {
        let snapshot = stats(&[], &["942100", "941100"]);
        assert_eq!(
            DashboardReadModelBuilder::most_triggered_rule(&snapshot),
            "Rule 942100"
        );
        assert_eq!(
            DashboardReadModelBuilder::most_triggered_rule(&stats(&[], &[])),
            NOT_AVAILABLE
        );
    }

    #[test]
    fn test_status_label() {
        assert_eq!(
            DashboardReadModelBuilder::status_label(Disposition::Blocked),
            "BLOCK"
        );
        assert_eq!(
            DashboardReadModelBuilder::status_label(Disposition::Pending),
            "PENDING"
        );
    }

    #[test]
    fn test_build_initial_state() {
        let model = DashboardReadModelBuilder::build_in(&ClientState::default(), &Utc);
        assert!(model.loading);
        assert!(model.error_banner.is_none());
        assert!(model.stat_cards.is_none());
        assert!(!model.has_events());
        assert_eq!(model.events_heading(), "Security Events (0)");
    }

    #[test]
    fn test_build_rows_and_cards() {
        let mut state = ClientState::default();
        let event = SecurityEvent::new(EventId::from(5), ts(), "172.18.0.1", "941100")
            .with_payload("XSS Attack Detected via libinjection")
            .with_target_uri("/?q=<script>")
            .with_disposition(Disposition::Blocked)
            .with_operator_action(Some(Verdict::Block));
        state.apply_events(vec![event], 50);
        state.apply_stats(stats(&["172.18.0.1"], &["941100"]));

        let model = DashboardReadModelBuilder::build_in(&state, &Utc);

        assert!(!model.loading);
        assert_eq!(model.events_heading(), "Security Events (1)");
        let row = &model.events[0];
        assert_eq!(row.id, "5");
        assert_eq!(row.time, "5/1/2024, 2:03:09 PM");
        assert_eq!(row.severity, SeverityClass::CrossSiteScripting);
        assert_eq!(row.status, "BLOCK");
        assert_eq!(row.operator_action.as_deref(), Some("block"));

        let cards = model.stat_cards.unwrap();
        assert_eq!(cards.total_events, 10);
        assert_eq!(cards.recent_events, 3);
        assert_eq!(cards.top_attacker, "172.18.0.1");
        assert_eq!(cards.most_triggered_rule, "Rule 941100");
    }

    #[test]
    fn test_build_carries_error_banner() {
        let mut state = ClientState::default();
        state.record_events_failure("HTTP error! status: 500");

        let model = DashboardReadModelBuilder::build_in(&state, &Utc);
        assert_eq!(
            model.error_banner.as_deref(),
            Some("HTTP error! status: 500")
        );
        assert!(!model.loading);
    }
}
