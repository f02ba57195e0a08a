use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts wrapping `--once` to distinguish between a
/// backend that could not be reached and a misconfigured client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the dashboard ran (or refreshed once) without an event-fetch error
    Success = 0,
    /// The event feed could not be refreshed (only reported in `--once` mode)
    RefreshFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration error, terminal I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RefreshFailed => write!(f, "Refresh Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Coarse classification of a failed backend call.
///
/// The operator only ever sees the message; the kind is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Network unreachable, DNS failure, connection reset, timeout
    Transport,
    /// Non-2xx HTTP response
    HttpStatus,
    /// Malformed body, or a body in which the backend reports its own failure
    Decode,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::Transport => write!(f, "transport"),
            FetchErrorKind::HttpStatus => write!(f, "http-status"),
            FetchErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// A failed call against the WAF backend.
///
/// Transport, HTTP status and decode failures all collapse into this one
/// reportable type. `Display` yields the human-readable cause shown in the
/// error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    kind: FetchErrorKind,
    status: Option<u16>,
    message: String,
}

impl FetchError {
    pub fn transport(cause: impl fmt::Display) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            status: None,
            message: format!("Network error: {}", cause),
        }
    }

    pub fn http_status(status: u16) -> Self {
        Self {
            kind: FetchErrorKind::HttpStatus,
            status: Some(status),
            message: format!("HTTP error! status: {}", status),
        }
    }

    pub fn decode(cause: impl fmt::Display) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            status: None,
            message: format!("Invalid response from backend: {}", cause),
        }
    }

    /// The backend answered 2xx but reported a failure in the body.
    pub fn backend(reported: impl fmt::Display) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            status: None,
            message: format!("Backend error: {}", reported),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    /// HTTP status code, present only for [`FetchErrorKind::HttpStatus`]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Application-specific errors outside the sync core.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable.")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax.")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Invalid config: {field} {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        field: String,
        reason: String,
        hint: String,
    },

    #[error("Invalid API base URL: {url}\nReason: {reason}\n\n💡 Hint: Use an http(s) URL such as http://localhost:3001/api")]
    InvalidApiBase { url: String, reason: String },

    #[error("Failed to build HTTP client\nDetails: {details}")]
    HttpClientError { details: String },

    #[error("Terminal I/O failed\nDetails: {details}")]
    TerminalError { details: String },
}
