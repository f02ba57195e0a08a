use crate::application::use_cases::MAX_POLL_INTERVAL_SECS;
use clap::Parser;
use std::path::PathBuf;

/// Real-time monitoring client for the WAFGuard web application firewall
#[derive(Parser, Debug)]
#[command(name = "wafguard-monitor")]
#[command(version)]
#[command(
    about = "Real-time monitoring client for the WAFGuard web application firewall",
    long_about = None
)]
pub struct Args {
    /// Base URL of the WAFGuard API [default: http://localhost:3001/api]
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Seconds between two refresh cycles, at most one day [default: 3]
    #[arg(
        short,
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..=MAX_POLL_INTERVAL_SECS)
    )]
    pub interval: Option<u64>,

    /// Number of most recent events to show [default: 50]
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Per-request timeout in seconds (no timeout unless set)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Discard responses that arrive after a response of a newer cycle
    #[arg(long)]
    pub strict_ordering: bool,

    /// Path to a config file (defaults to ./wafguard-monitor.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Refresh once, print the dashboard and exit
    #[arg(long)]
    pub once: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
