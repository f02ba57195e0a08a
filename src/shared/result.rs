use crate::shared::error::FetchError;

/// Type alias for Result with anyhow::Error as the error type.
/// This provides a consistent error handling pattern across the codebase.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a single call against the WAF backend.
///
/// Remote calls never use `anyhow`: every failure is normalized into a
/// [`FetchError`] so the sync loop can decide whether to surface or log it.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
