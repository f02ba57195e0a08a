pub mod severity_policy;

pub use severity_policy::{SeverityClass, SeverityPolicy, SEVERITY_RULES};
