use crate::domain::client::{Client, ClientId};
use crate::domain::ports::{ClientStore, ProductCatalog};
use crate::domain::product::Product;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for client accounts.
///
/// Uses `Arc<RwLock<HashMap<ClientId, Client>>>` to allow shared concurrent
/// access. Ideal for testing or small deployments where persistence is not
/// required.
#[derive(Default, Clone)]
pub struct InMemoryClientStore {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn save(&self, client: Client) -> Result<()> {
        let mut clients = self.clients.write().await;
        clients.insert(client.id, client);
        Ok(())
    }

    async fn get(&self, id: ClientId) -> Result<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.values().cloned().collect())
    }
}

/// A thread-safe in-memory product catalog, keyed by lowercased product name
/// so lookups are case-insensitive.
#[derive(Default, Clone)]
pub struct InMemoryProductCatalog {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn save(&self, product: Product) -> Result<()> {
        let mut products = self.products.write().await;
        products.insert(product.name.to_lowercase(), product);
        Ok(())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&name.to_lowercase()).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn remove(&self, name: &str) -> Result<bool> {
        let mut products = self.products.write().await;
        Ok(products.remove(&name.to_lowercase()).is_some())
    }
}
