use super::locks::ClientLocks;
use crate::domain::client::{Client, ClientCategory, ClientId};
use crate::domain::money::{Amount, Balance};
use crate::domain::ports::{ClientStore, ClientStoreRef};
use crate::error::{PaymentError, Result};
use std::sync::Arc;

/// Client onboarding and balance top-ups.
///
/// Shares the lock registry with the payment service so a top-up and a
/// payment for the same client never interleave their read-modify-write.
pub struct ClientService {
    clients: ClientStoreRef,
    locks: Arc<ClientLocks>,
}

impl ClientService {
    pub fn new(clients: ClientStoreRef, locks: Arc<ClientLocks>) -> Self {
        Self { clients, locks }
    }

    pub async fn create(
        &self,
        name: impl Into<String>,
        category: ClientCategory,
        balance: Balance,
    ) -> Result<Client> {
        let client = Client::new(name, category, balance);
        self.clients.save(client.clone()).await?;
        tracing::debug!(client = %client.name, id = %client.id, "client created");
        Ok(client)
    }

    /// Credits the client's balance and returns the new balance.
    pub async fn credit(&self, id: ClientId, amount: Amount) -> Result<Balance> {
        let _guard = self.locks.acquire(id).await;

        let mut client = self
            .clients
            .get(id)
            .await?
            .ok_or(PaymentError::ClientNotFound(id))?;
        client.balance += amount.into();
        let balance = client.balance;
        self.clients.save(client).await?;
        Ok(balance)
    }

    pub async fn get(&self, id: ClientId) -> Result<Option<Client>> {
        self.clients.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Client>> {
        self.clients.get_all().await
    }
}
