use cantine_pos::application::clients::ClientService;
use cantine_pos::application::locks::ClientLocks;
use cantine_pos::application::payment::PaymentService;
use cantine_pos::application::products::ProductService;
use cantine_pos::domain::client::ClientId;
use cantine_pos::domain::money::Balance;
use cantine_pos::domain::ports::{ClientStoreRef, ProductCatalogRef};
use cantine_pos::infrastructure::in_memory::{InMemoryClientStore, InMemoryProductCatalog};
#[cfg(feature = "storage-rocksdb")]
use cantine_pos::infrastructure::rocksdb::RocksDbStore;
use cantine_pos::interfaces::json::SeedFile;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed file with clients, products and payment requests (JSON)
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn in_memory_stores() -> (ClientStoreRef, ProductCatalogRef) {
    (
        Arc::new(InMemoryClientStore::new()),
        Arc::new(InMemoryProductCatalog::new()),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    #[cfg(feature = "storage-rocksdb")]
    let (client_store, product_catalog) = match &cli.db_path {
        Some(path) => {
            let store = RocksDbStore::open(path).into_diagnostic()?;
            let clients: ClientStoreRef = Arc::new(store.clone());
            let products: ProductCatalogRef = Arc::new(store);
            (clients, products)
        }
        None => in_memory_stores(),
    };
    #[cfg(not(feature = "storage-rocksdb"))]
    let (client_store, product_catalog) = in_memory_stores();

    let locks = Arc::new(ClientLocks::new());
    let client_service = ClientService::new(client_store.clone(), locks.clone());
    let product_service = ProductService::new(product_catalog);
    let payment_service = PaymentService::new(client_store, locks);

    let raw = std::fs::read_to_string(&cli.input).into_diagnostic()?;
    let seed: SeedFile = serde_json::from_str(&raw).into_diagnostic()?;

    for product in seed.products {
        product_service
            .add(&product.name, product.price, &product.category)
            .await
            .into_diagnostic()?;
    }

    // Clients already in the store (durable backend) keep their records;
    // seed entries for a known name are skipped rather than duplicated.
    let mut ids_by_name: HashMap<String, ClientId> = client_service
        .list()
        .await
        .into_diagnostic()?
        .into_iter()
        .map(|c| (c.name, c.id))
        .collect();
    for dto in seed.clients {
        if ids_by_name.contains_key(&dto.name) {
            continue;
        }
        let client = client_service
            .create(dto.name, dto.category, Balance::new(dto.balance))
            .await
            .into_diagnostic()?;
        ids_by_name.insert(client.name.clone(), client.id);
    }

    for request in seed.payments {
        let Some(&id) = ids_by_name.get(&request.client) else {
            eprintln!("payment skipped: unknown client {}", request.client);
            continue;
        };
        let tray = match request.tray.into_tray() {
            Ok(tray) => tray,
            Err(e) => {
                eprintln!("payment skipped for {}: {e}", request.client);
                continue;
            }
        };
        match payment_service.pay(id, tray).await {
            Ok(ticket) => {
                println!("{}", ticket.message());
                println!("{}", serde_json::to_string(&ticket).into_diagnostic()?);
            }
            Err(e) => eprintln!("payment failed for {}: {e}", request.client),
        }
    }

    // Final account states, one CSV row per client.
    println!("name,category,balance");
    let mut clients = client_service.list().await.into_diagnostic()?;
    clients.sort_by(|a, b| a.name.cmp(&b.name));
    for client in clients {
        println!("{},{},{}", client.name, client.category, client.balance);
    }

    Ok(())
}
