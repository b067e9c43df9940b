use super::client::{Client, ClientId};
use super::product::Product;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage port for client accounts.
///
/// The store is the sole owner of client records. `save` is an atomic full
/// replace of the record and serves as the commit point for a debit or
/// credit; callers are expected to hold the per-client lock across the
/// read-modify-save sequence (see [`crate::application::locks`]).
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn save(&self, client: Client) -> Result<()>;
    async fn get(&self, id: ClientId) -> Result<Option<Client>>;
    async fn get_all(&self) -> Result<Vec<Client>>;
}

/// Storage port for the product catalog. Read-only to the payment path;
/// only the catalog-management service writes through it.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn save(&self, product: Product) -> Result<()>;
    /// Case-insensitive lookup by product name.
    async fn get_by_name(&self, name: &str) -> Result<Option<Product>>;
    async fn get_all(&self) -> Result<Vec<Product>>;
    /// Removes a product by name; returns whether it existed.
    async fn remove(&self, name: &str) -> Result<bool>;
}

pub type ClientStoreRef = Arc<dyn ClientStore>;
pub type ProductCatalogRef = Arc<dyn ProductCatalog>;
