/// Use cases module containing application business logic orchestration
mod action_dispatcher;
mod sync_loop;

#[cfg(test)]
pub(crate) mod test_support;

pub use action_dispatcher::ActionDispatcher;
pub use sync_loop::{
    RefreshHandle, SyncLoop, SyncOptions, DEFAULT_EVENT_LIMIT, DEFAULT_POLL_INTERVAL,
    MAX_POLL_INTERVAL_SECS,
};
