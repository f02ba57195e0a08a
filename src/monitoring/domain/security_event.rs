use super::verdict::{Disposition, Verdict};
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// Maximum length for event identifiers (security limit)
const MAX_EVENT_ID_LENGTH: usize = 128;

/// NewType wrapper for a backend event identifier.
///
/// The reference backend uses integer keys, but identifiers are carried as
/// text so that any backend key scheme round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: String) -> Result<Self> {
        let id = id.trim().to_string();
        if id.is_empty() {
            anyhow::bail!("Event id cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if id.len() > MAX_EVENT_ID_LENGTH {
            anyhow::bail!(
                "Event id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_EVENT_ID_LENGTH
            );
        }

        if id.chars().any(|c| c.is_control() || c.is_whitespace()) {
            anyhow::bail!("Event id contains whitespace or control characters");
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of one firewall detection as reported by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityEvent {
    id: EventId,
    timestamp: DateTime<Utc>,
    source_ip: String,
    rule_id: String,
    payload: String,
    target_uri: String,
    disposition: Disposition,
    operator_action: Option<Verdict>,
}

impl SecurityEvent {
    /// Creates an event with an empty payload and target, pending disposition
    /// and no operator action. Use the `with_*` methods to fill in the rest.
    pub fn new(
        id: EventId,
        timestamp: DateTime<Utc>,
        source_ip: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            source_ip: source_ip.into(),
            rule_id: rule_id.into(),
            payload: String::new(),
            target_uri: String::new(),
            disposition: Disposition::Pending,
            operator_action: None,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_target_uri(mut self, target_uri: impl Into<String>) -> Self {
        self.target_uri = target_uri.into();
        self
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    pub fn with_operator_action(mut self, verdict: Option<Verdict>) -> Self {
        self.operator_action = verdict;
        self
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn source_ip(&self) -> &str {
        &self.source_ip
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn target_uri(&self) -> &str {
        &self.target_uri
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    pub fn operator_action(&self) -> Option<Verdict> {
        self.operator_action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_id_new_valid() {
        let id = EventId::new("ev-1".to_string()).unwrap();
        assert_eq!(id.as_str(), "ev-1");
    }

    #[test]
    fn test_event_id_trims_surrounding_whitespace() {
        let id = EventId::new("  42 ".to_string()).unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_event_id_empty() {
        let result = EventId::new("   ".to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_event_id_too_long() {
        let result = EventId::new("x".repeat(MAX_EVENT_ID_LENGTH + 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_event_id_inner_whitespace_rejected() {
        assert!(EventId::new("ev 1".to_string()).is_err());
    }

    #[test]
    fn test_event_id_from_integer() {
        assert_eq!(EventId::from(17).to_string(), "17");
    }

    #[test]
    fn test_security_event_builder() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let event = SecurityEvent::new(EventId::from(7), ts, "10.0.0.5", "942100")
            .with_payload("SQL Injection Attack Detected via libinjection")
            .with_target_uri("/?id=1' OR 1=1--")
            .with_disposition(Disposition::Blocked);

        assert_eq!(event.id().as_str(), "7");
        assert_eq!(event.timestamp(), ts);
        assert_eq!(event.source_ip(), "10.0.0.5");
        assert_eq!(event.rule_id(), "942100");
        assert_eq!(event.target_uri(), "/?id=1' OR 1=1--");
        assert_eq!(event.disposition(), Disposition::Blocked);
        assert!(event.operator_action().is_none());
    }
}
