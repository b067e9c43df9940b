use cantine_pos::application::locks::ClientLocks;
use cantine_pos::application::payment::PaymentService;
use cantine_pos::domain::client::{Client, ClientCategory, ClientId};
use cantine_pos::domain::money::{Amount, Balance};
use cantine_pos::domain::ports::{ClientStore, ClientStoreRef};
use cantine_pos::domain::product::{Product, ProductCategory, Tray};
use cantine_pos::infrastructure::in_memory::InMemoryClientStore;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub fn product(name: &str, price: Decimal, category: ProductCategory) -> Product {
    Product::new(name, Amount::new(price).unwrap(), category)
}

/// Starter 2.00 + MainCourse 5.00 + Dessert 2.00 + Bread 1.00.
pub fn bundle_tray() -> Tray {
    Tray::new(vec![
        product(
            "Salade verte",
            Decimal::new(200, 2),
            ProductCategory::Starter,
        ),
        product(
            "Poulet roti",
            Decimal::new(500, 2),
            ProductCategory::MainCourse,
        ),
        product("Tarte", Decimal::new(200, 2), ProductCategory::Dessert),
        product("Baguette", Decimal::new(100, 2), ProductCategory::Bread),
    ])
}

/// Builds a payment service over a fresh in-memory store seeded with one
/// client, returning the pieces a scenario needs.
pub async fn payment_fixture(
    category: ClientCategory,
    balance: Decimal,
) -> (Arc<PaymentService>, ClientStoreRef, ClientId) {
    let store: ClientStoreRef = Arc::new(InMemoryClientStore::new());
    let client = Client::new("Ada", category, Balance::new(balance));
    let id = client.id;
    store.save(client).await.unwrap();
    let service = Arc::new(PaymentService::new(
        store.clone(),
        Arc::new(ClientLocks::new()),
    ));
    (service, store, id)
}

/// Writes a seed file for the CLI binary.
pub fn write_seed(path: &Path, json: &str) {
    let mut file = File::create(path).unwrap();
    file.write_all(json.as_bytes()).unwrap();
}
