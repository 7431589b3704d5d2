use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Short-lived async locks keyed by string, serializing provisioning per
/// `(provider, external_id)`.
///
/// Two concurrent first-time logins for the same external identity must not
/// both observe "no mapping found" and both create an account; holding the
/// identity's lock across check-and-create closes that race. Entries whose
/// lock is no longer held by anyone are swept on the next acquire.
pub(crate) struct KeyedLock {
    cells: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyedLock {
    pub(crate) fn new() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let cell = {
            let mut cells = self.cells.lock().await;
            cells.retain(|_, cell| Arc::strong_count(cell) > 1);
            cells
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        cell.lock_owned().await
    }
}
