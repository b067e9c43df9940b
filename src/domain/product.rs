use super::money::Amount;
use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a catalog product.
///
/// Only `Starter`, `MainCourse`, `Dessert` and `Bread` count towards bundle
/// completeness; every other category is an extra, priced per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Starter,
    MainCourse,
    Dessert,
    Bread,
    Drink,
    Cheese,
    SmallSaladBar,
    LargeSaladBar,
    Fruit,
    StarterSupplement,
    MainCourseSupplement,
    DessertSupplement,
}

impl ProductCategory {
    /// Whether this category is one of the four required for a complete bundle.
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            Self::Starter | Self::MainCourse | Self::Dessert | Self::Bread
        )
    }

    pub fn is_extra(&self) -> bool {
        !self.is_mandatory()
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Starter => "Starter",
            Self::MainCourse => "MainCourse",
            Self::Dessert => "Dessert",
            Self::Bread => "Bread",
            Self::Drink => "Drink",
            Self::Cheese => "Cheese",
            Self::SmallSaladBar => "SmallSaladBar",
            Self::LargeSaladBar => "LargeSaladBar",
            Self::Fruit => "Fruit",
            Self::StarterSupplement => "StarterSupplement",
            Self::MainCourseSupplement => "MainCourseSupplement",
            Self::DessertSupplement => "DessertSupplement",
        };
        f.write_str(name)
    }
}

impl FromStr for ProductCategory {
    type Err = PaymentError;

    /// Case-insensitive parse of a category name, for validating input at the
    /// boundary. Unknown names fail with [`PaymentError::InvalidCategory`]
    /// before they can reach the pricing engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.to_ascii_lowercase().as_str() {
            "starter" => Self::Starter,
            "maincourse" => Self::MainCourse,
            "dessert" => Self::Dessert,
            "bread" => Self::Bread,
            "drink" => Self::Drink,
            "cheese" => Self::Cheese,
            "smallsaladbar" => Self::SmallSaladBar,
            "largesaladbar" => Self::LargeSaladBar,
            "fruit" => Self::Fruit,
            "startersupplement" => Self::StarterSupplement,
            "maincoursesupplement" => Self::MainCourseSupplement,
            "dessertsupplement" => Self::DessertSupplement,
            _ => return Err(PaymentError::InvalidCategory(s.to_string())),
        };
        Ok(category)
    }
}

/// A catalog product. Names are unique case-insensitively within the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Amount,
    pub category: ProductCategory,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Amount, category: ProductCategory) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }
}

/// The products a client presents for one payment attempt.
///
/// Duplicates are allowed and order is irrelevant to pricing. A tray is
/// ephemeral: it exists only for the duration of a single payment call and is
/// never persisted on its own (the issued ticket snapshots its contents).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tray {
    pub items: Vec<Product>,
}

impl Tray {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Product> for Tray {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
