//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs projected from the client
//! state. Projection is pure: it owns no state and performs no I/O.

pub mod dashboard_read_model;
pub mod dashboard_read_model_builder;

pub use dashboard_read_model::{
    DashboardReadModel, EventRowView, StatCardsView, EMPTY_STATE_HINT, NOT_AVAILABLE,
};
pub use dashboard_read_model_builder::DashboardReadModelBuilder;
