use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};

use super::Queue;

/// The persistable contents of the store: every queue by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub queues: HashMap<String, Queue>,
}

/// Authoritative in-memory registry of queues and jobs.
///
/// A single exclusive lock guards the whole map. Callers must not try to
/// lock again while holding the guard.
#[derive(Debug, Default)]
pub struct Store {
    state: Mutex<StoreState>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().await
    }

    /// Copy of the current state, taken under the lock.
    pub async fn snapshot(&self) -> StoreState {
        self.state.lock().await.clone()
    }

    /// Swap in a freshly loaded state. Queue sizes are recomputed from the
    /// jobs rather than trusted from the snapshot.
    pub(crate) async fn replace(&self, mut state: StoreState) {
        for queue in state.queues.values_mut() {
            queue.size = queue.jobs.len();
        }
        *self.state.lock().await = state;
    }
}
