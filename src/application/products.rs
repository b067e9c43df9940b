use crate::domain::money::Amount;
use crate::domain::ports::{ProductCatalog, ProductCatalogRef};
use crate::domain::product::{Product, ProductCategory};
use crate::error::Result;
use rust_decimal::Decimal;

/// Catalog management. Peripheral to the payment path, which receives trays
/// already materialized by the caller and never consults the catalog.
pub struct ProductService {
    catalog: ProductCatalogRef,
}

impl ProductService {
    pub fn new(catalog: ProductCatalogRef) -> Self {
        Self { catalog }
    }

    /// Adds a product, validating the category name and the price at the
    /// boundary. Saving an existing name replaces the previous entry.
    pub async fn add(&self, name: &str, price: Decimal, category: &str) -> Result<Product> {
        let category: ProductCategory = category.parse()?;
        let product = Product::new(name, Amount::new(price)?, category);
        self.catalog.save(product.clone()).await?;
        tracing::debug!(product = %product.name, category = %product.category, "product added");
        Ok(product)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Product>> {
        self.catalog.get_by_name(name).await
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        self.catalog.get_all().await
    }

    pub async fn remove(&self, name: &str) -> Result<bool> {
        let removed = self.catalog.remove(name).await?;
        if removed {
            tracing::debug!(product = name, "product removed");
        }
        Ok(removed)
    }
}
