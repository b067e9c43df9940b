use crate::domain::client::ClientId;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-client lock registry.
///
/// A balance update is a read-modify-write against the client store; two
/// concurrent payments for the same client must not both pass the balance
/// check against the same stale balance. Holding the client's lock across
/// the whole sequence makes it a critical section. Payments for different
/// clients take different locks and proceed in parallel.
#[derive(Default)]
pub struct ClientLocks {
    locks: DashMap<ClientId, Arc<Mutex<()>>>,
}

impl ClientLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, id: ClientId) -> OwnedMutexGuard<()> {
        let lock = self.locks.entry(id).or_default().clone();
        lock.lock_owned().await
    }
}
