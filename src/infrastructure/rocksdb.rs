use crate::domain::client::{Client, ClientId};
use crate::domain::ports::{ClientStore, ProductCatalog};
use crate::domain::product::Product;
use crate::error::Result;
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing client accounts.
pub const CF_CLIENTS: &str = "clients";
/// Column Family for storing the product catalog.
pub const CF_PRODUCTS: &str = "products";

/// A persistent store implementation using RocksDB.
///
/// Handles storage for both `Client` and `Product` entities using separate
/// Column Families, with JSON-encoded values. Clients are keyed by their id
/// bytes; products by lowercased name, so lookups stay case-insensitive.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// that the required column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_clients = ColumnFamilyDescriptor::new(CF_CLIENTS, Options::default());
        let cf_products = ColumnFamilyDescriptor::new(CF_PRODUCTS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_clients, cf_products])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf_handle(&self, name: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            std::io::Error::other(format!("column family {name} not found")).into()
        })
    }
}

#[async_trait]
impl ClientStore for RocksDbStore {
    async fn save(&self, client: Client) -> Result<()> {
        let cf = self.cf_handle(CF_CLIENTS)?;
        let value = serde_json::to_vec(&client)?;
        self.db.put_cf(cf, client.id.as_bytes(), value)?;
        Ok(())
    }

    async fn get(&self, id: ClientId) -> Result<Option<Client>> {
        let cf = self.cf_handle(CF_CLIENTS)?;
        match self.db.get_cf(cf, id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Client>> {
        let cf = self.cf_handle(CF_CLIENTS)?;
        let mut clients = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            clients.push(serde_json::from_slice(&value)?);
        }
        Ok(clients)
    }
}

#[async_trait]
impl ProductCatalog for RocksDbStore {
    async fn save(&self, product: Product) -> Result<()> {
        let cf = self.cf_handle(CF_PRODUCTS)?;
        let key = product.name.to_lowercase();
        let value = serde_json::to_vec(&product)?;
        self.db.put_cf(cf, key.as_bytes(), value)?;
        Ok(())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>> {
        let cf = self.cf_handle(CF_PRODUCTS)?;
        match self.db.get_cf(cf, name.to_lowercase().as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        let cf = self.cf_handle(CF_PRODUCTS)?;
        let mut products = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            products.push(serde_json::from_slice(&value)?);
        }
        Ok(products)
    }

    async fn remove(&self, name: &str) -> Result<bool> {
        let cf = self.cf_handle(CF_PRODUCTS)?;
        let key = name.to_lowercase();
        let existed = self.db.get_pinned_cf(cf, key.as_bytes())?.is_some();
        if existed {
            self.db.delete_cf(cf, key.as_bytes())?;
        }
        Ok(existed)
    }
}
