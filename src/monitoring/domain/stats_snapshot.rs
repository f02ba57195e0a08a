/// One entry of the "top attackers" ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFrequency {
    pub src_ip: String,
    pub count: u64,
}

/// One entry of the "most triggered rules" ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFrequency {
    pub rule_id: String,
    /// Representative payload the backend grouped this rule by, if any
    pub sample_payload: Option<String>,
    pub count: u64,
}

/// Aggregate counters reported by the backend.
///
/// A snapshot is replaced wholesale on every poll; rankings are kept in the
/// order the backend sent them (most frequent first).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    total_events: u64,
    recent_events: u64,
    top_sources: Vec<SourceFrequency>,
    top_rules: Vec<RuleFrequency>,
}

impl StatsSnapshot {
    pub fn new(
        total_events: u64,
        recent_events: u64,
        top_sources: Vec<SourceFrequency>,
        top_rules: Vec<RuleFrequency>,
    ) -> Self {
        Self {
            total_events,
            recent_events,
            top_sources,
            top_rules,
        }
    }

    pub fn total_events(&self) -> u64 {
        self.total_events
    }

    /// Events inside the backend's recent window (the last hour)
    pub fn recent_events(&self) -> u64 {
        self.recent_events
    }

    pub fn top_sources(&self) -> &[SourceFrequency] {
        &self.top_sources
    }

    pub fn top_rules(&self) -> &[RuleFrequency] {
        &self.top_rules
    }

    pub fn top_source(&self) -> Option<&SourceFrequency> {
        self.top_sources.first()
    }

    pub fn top_rule(&self) -> Option<&RuleFrequency> {
        self.top_rules.first()
    }
}
