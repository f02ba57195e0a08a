use super::client_state::ClientState;
use tokio::sync::watch;

/// Single-writer container for [`ClientState`]
///
/// Every mutation is one `send_modify` call, so readers never observe a
/// half-applied update and no lock is held across an await point.
/// Subscribers are woken after each mutation.
pub struct StateStore {
    tx: watch::Sender<ClientState>,
}

impl StateStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ClientState::default());
        Self { tx }
    }

    /// Returns a copy of the current state
    pub fn snapshot(&self) -> ClientState {
        self.tx.borrow().clone()
    }

    /// Returns a receiver that is notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.tx.subscribe()
    }

    /// Clears the error banner without fetching anything
    pub fn dismiss_error(&self) {
        self.tx.send_if_modified(|state| state.dismiss_error());
    }

    pub(crate) fn update(&self, mutate: impl FnOnce(&mut ClientState)) {
        self.tx.send_modify(mutate);
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
