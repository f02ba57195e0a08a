/// Severity class of a firewall rule, derived from its rule family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityClass {
    CrossSiteScripting,
    Injection,
    PathTraversal,
    Unclassified,
}

impl SeverityClass {
    /// Short badge label
    pub fn label(&self) -> &'static str {
        match self {
            SeverityClass::CrossSiteScripting => "XSS",
            SeverityClass::Injection => "SQLi",
            SeverityClass::PathTraversal => "LFI",
            SeverityClass::Unclassified => "OTHER",
        }
    }
}

/// Ordered rule-family table: (rule id prefix, class).
///
/// Prefixes follow the OWASP Core Rule Set numbering
/// (941xxx XSS, 942xxx SQLi, 930xxx LFI). Earlier entries win.
pub const SEVERITY_RULES: &[(&str, SeverityClass)] = &[
    ("941", SeverityClass::CrossSiteScripting),
    ("942", SeverityClass::Injection),
    ("930", SeverityClass::PathTraversal),
];

/// SeverityPolicy maps rule identifiers onto severity classes
///
/// Classification walks [`SEVERITY_RULES`] in order and returns the class of
/// the first prefix that matches. Rule ids matching no prefix are
/// [`SeverityClass::Unclassified`].
pub struct SeverityPolicy;

impl SeverityPolicy {
    pub fn classify(rule_id: &str) -> SeverityClass {
        Self::classify_with(SEVERITY_RULES, rule_id)
    }

    /// Classifies against a caller-supplied table
    pub fn classify_with(rules: &[(&str, SeverityClass)], rule_id: &str) -> SeverityClass {
        rules
            .iter()
            .find(|(prefix, _)| rule_id.starts_with(*prefix))
            .map(|(_, class)| *class)
            .unwrap_or(SeverityClass::Unclassified)
    }
}
