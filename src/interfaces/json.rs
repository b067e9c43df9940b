//! JSON boundary shapes.
//!
//! Incoming product categories arrive as free-form strings and are validated
//! here, so an unknown category name fails at the boundary and never reaches
//! the pricing engine.

use crate::domain::client::ClientCategory;
use crate::domain::money::Amount;
use crate::domain::product::{Product, ProductCategory, Tray};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A product as submitted by a caller: category still a raw string.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

impl ProductDto {
    pub fn into_product(self) -> Result<Product> {
        let category: ProductCategory = self.category.parse()?;
        Ok(Product::new(self.name, Amount::new(self.price)?, category))
    }
}

/// A tray as submitted for payment: the caller materializes every item.
#[derive(Debug, Clone, Deserialize)]
pub struct TrayDto {
    pub items: Vec<ProductDto>,
}

impl TrayDto {
    pub fn into_tray(self) -> Result<Tray> {
        self.items
            .into_iter()
            .map(ProductDto::into_product)
            .collect::<Result<Tray>>()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewClientDto {
    pub name: String,
    pub category: ClientCategory,
    pub balance: Decimal,
}

/// One payment request in a seed file, referencing a seeded client by name.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequestDto {
    pub client: String,
    pub tray: TrayDto,
}

/// Input format for the demo binary: clients to onboard, products to put in
/// the catalog, payments to run.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub clients: Vec<NewClientDto>,
    #[serde(default)]
    pub products: Vec<ProductDto>,
    #[serde(default)]
    pub payments: Vec<PaymentRequestDto>,
}
