//! wafguard-monitor - real-time monitoring client for the WAFGuard firewall
//!
//! This library keeps a local view of a WAFGuard backend's security event log
//! in sync by polling, and lets an operator allow or block individual events.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`monitoring`): Security events, stats and severity policy
//! - **Application Layer** (`application`): Sync loop, action dispatch, client state and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use wafguard_monitor::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let api = Arc::new(HttpWafApi::new("http://localhost:3001/api", None)?);
//! let presenter = TerminalPresenter::new();
//!
//! // Create use cases
//! let mut sync = SyncLoop::new(Arc::clone(&api), SyncOptions::default());
//! let dispatcher = ActionDispatcher::new(Arc::clone(&api), sync.refresh_handle());
//!
//! // Refresh, act, render
//! sync.refresh().await;
//! dispatcher.dispatch(EventId::from(17), Verdict::Block).await;
//! presenter.present(&DashboardReadModelBuilder::build(&sync.state()))?;
//!
//! // Or keep polling in the background
//! sync.start();
//! # sync.shutdown();
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod monitoring;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::OperatorCommand;
    pub use crate::adapters::outbound::console::TerminalPresenter;
    pub use crate::adapters::outbound::network::HttpWafApi;
    pub use crate::application::read_models::{
        DashboardReadModel, DashboardReadModelBuilder, EventRowView, StatCardsView,
    };
    pub use crate::application::state::{ClientState, StateStore};
    pub use crate::application::use_cases::{
        ActionDispatcher, RefreshHandle, SyncLoop, SyncOptions,
    };
    pub use crate::monitoring::domain::{
        Disposition, EventId, RuleFrequency, SecurityEvent, SourceFrequency, StatsSnapshot,
        Verdict,
    };
    pub use crate::monitoring::policies::{SeverityClass, SeverityPolicy};
    pub use crate::ports::inbound::OperatorActionPort;
    pub use crate::ports::outbound::{DashboardPresenter, WafApi};
    pub use crate::shared::error::{FetchError, FetchErrorKind, MonitorError};
    pub use crate::shared::{FetchResult, Result};
}
