//! The pricing engine: a pure function of client category and tray contents.

use super::client::ClientCategory;
use super::product::{ProductCategory, Tray};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixed price billed for a complete bundle, before extras and discount.
pub const BUNDLE_PRICE: Decimal = dec!(10.00);

/// The outcome of pricing a tray for a given client category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Pre-discount price of the tray.
    pub total: Decimal,
    /// Amount subtracted per the category tariff table.
    pub discount: Decimal,
    /// Amount actually charged; never negative.
    pub final_amount: Decimal,
    /// Whether the tray qualified for the fixed bundle price.
    pub is_bundle: bool,
}

/// Prices a tray for a client category.
///
/// A tray is a complete bundle iff it holds at least one product of each of
/// the four mandatory categories; extra items never disqualify it. A complete
/// bundle is billed at [`BUNDLE_PRICE`] with every extra summed on top at unit
/// price; an incomplete tray is billed item by item. The category discount is
/// then applied, flooring at a zero charge: a discount larger than the total
/// forfeits the excess rather than crediting the client.
pub fn quote(category: ClientCategory, tray: &Tray) -> Quote {
    let is_bundle = is_complete_bundle(tray);

    let total = if is_bundle {
        let extras: Decimal = tray
            .items
            .iter()
            .filter(|p| p.category.is_extra())
            .map(|p| p.price.value())
            .sum();
        BUNDLE_PRICE + extras
    } else {
        tray.items.iter().map(|p| p.price.value()).sum()
    };

    let discount = category.discount(total);
    let final_amount = (total - discount).max(Decimal::ZERO);

    Quote {
        total,
        discount,
        final_amount,
        is_bundle,
    }
}

fn is_complete_bundle(tray: &Tray) -> bool {
    let has = |category: ProductCategory| tray.items.iter().any(|p| p.category == category);
    has(ProductCategory::Starter)
        && has(ProductCategory::MainCourse)
        && has(ProductCategory::Dessert)
        && has(ProductCategory::Bread)
}
