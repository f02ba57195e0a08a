//! Client state owned by the sync loop
//!
//! Exactly one [`StateStore`] exists per running session. The sync loop is
//! its only writer; read models and presenters take snapshots.

pub mod client_state;
pub mod state_store;

pub use client_state::ClientState;
pub use state_store::StateStore;
