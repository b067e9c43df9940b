use super::client::{Client, ClientCategory};
use super::pricing::Quote;
use super::product::{Product, Tray};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the tray total was computed, for receipt display only. Both variants
/// are equally successful payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBasis {
    BundleFixedPrice,
    Itemized,
}

/// The immutable receipt issued for a successful payment.
///
/// Snapshots the client's name and category and the tray contents at the time
/// of payment. Ownership passes to the caller; the payment service keeps no
/// reference to an issued ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub client_name: String,
    pub client_category: ClientCategory,
    pub items: Vec<Product>,
    pub total: Decimal,
    pub discount: Decimal,
    pub final_amount: Decimal,
    pub basis: PriceBasis,
}

impl Ticket {
    pub fn issue(client: &Client, tray: Tray, quote: &Quote) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            client_name: client.name.clone(),
            client_category: client.category,
            items: tray.items,
            total: quote.total,
            discount: quote.discount,
            final_amount: quote.final_amount,
            basis: if quote.is_bundle {
                PriceBasis::BundleFixedPrice
            } else {
                PriceBasis::Itemized
            },
        }
    }

    /// Human-readable outcome line for caller display.
    pub fn message(&self) -> String {
        match self.basis {
            PriceBasis::BundleFixedPrice => format!(
                "Payment accepted: complete bundle at the fixed price, {} charged",
                self.final_amount
            ),
            PriceBasis::Itemized => format!(
                "Payment accepted: incomplete tray priced per item, {} charged",
                self.final_amount
            ),
        }
    }
}
