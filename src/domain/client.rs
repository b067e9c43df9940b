use super::money::Balance;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a client account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The category a client belongs to.
///
/// The category determines the discount applied to a tray and whether the
/// client may pay on overdraft. It is fixed for the duration of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientCategory {
    Internal,
    Contractor,
    #[serde(rename = "VIP")]
    Vip,
    Intern,
    Visitor,
}

impl ClientCategory {
    /// The discount subtracted from a tray total, per the fixed tariff table.
    ///
    /// VIP clients are fully discounted: their discount always equals the
    /// total, whatever it is.
    pub fn discount(&self, total: Decimal) -> Decimal {
        match self {
            Self::Internal => dec!(7.50),
            Self::Contractor => dec!(6.00),
            Self::Vip => total,
            Self::Intern => dec!(10.00),
            Self::Visitor => Decimal::ZERO,
        }
    }

    /// Whether this category may pay beyond its current balance.
    pub fn allows_overdraft(&self) -> bool {
        matches!(self, Self::Internal | Self::Vip)
    }
}

impl fmt::Display for ClientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Internal => "Internal",
            Self::Contractor => "Contractor",
            Self::Vip => "VIP",
            Self::Intern => "Intern",
            Self::Visitor => "Visitor",
        };
        f.write_str(name)
    }
}

/// A client account holding a prepaid balance.
///
/// Owned by the [`ClientStore`](super::ports::ClientStore); the services
/// operate on value snapshots and write back through the store's atomic
/// `save`, so no mutable client state is ever aliased across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub balance: Balance,
    pub category: ClientCategory,
}

impl Client {
    pub fn new(name: impl Into<String>, category: ClientCategory, balance: Balance) -> Self {
        Self {
            id: ClientId::new(),
            name: name.into(),
            balance,
            category,
        }
    }
}
