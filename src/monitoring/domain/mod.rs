pub mod security_event;
pub mod stats_snapshot;
pub mod verdict;

pub use security_event::{EventId, SecurityEvent};
pub use stats_snapshot::{RuleFrequency, SourceFrequency, StatsSnapshot};
pub use verdict::{Disposition, Verdict};
