use std::fmt;
use std::str::FromStr;

/// Operator decision applied to a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Allow,
    Block,
}

impl Verdict {
    /// Value sent as the `action` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allow => "allow",
            Verdict::Block => "block",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" | "allowed" => Ok(Verdict::Allow),
            "block" | "blocked" => Ok(Verdict::Block),
            _ => Err(format!(
                "Invalid verdict: {}. Please specify 'allow' or 'block'",
                s
            )),
        }
    }
}

/// Current decision state of an event on the backend.
///
/// This is a tri-state rather than a boolean: the backend may hold an event
/// that nobody has decided on yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    Allowed,
    Blocked,
    Pending,
}

impl Disposition {
    /// Maps the backend's `action` column onto a disposition.
    ///
    /// The backend stores verbs (`block`, `allow`). Anything it may add later,
    /// such as `challenge`, is treated as undecided.
    pub fn from_wire(action: &str) -> Self {
        match action.trim().to_lowercase().as_str() {
            "allow" | "allowed" => Disposition::Allowed,
            "block" | "blocked" => Disposition::Blocked,
            _ => Disposition::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Allowed => "allow",
            Disposition::Blocked => "block",
            Disposition::Pending => "pending",
        }
    }
}

impl From<Verdict> for Disposition {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Allow => Disposition::Allowed,
            Verdict::Block => Disposition::Blocked,
        }
    }
}
