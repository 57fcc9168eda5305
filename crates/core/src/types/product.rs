//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A catalog product.
///
/// The catalog is seeded at startup and read-only thereafter; there are no
/// create, update, or delete endpoints for products.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in the store currency. Serialized as a JSON number to match
    /// the wire format the dependent test suites expect.
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Case-insensitive substring match on the category name.
    #[must_use]
    pub fn category_matches(&self, filter: &str) -> bool {
        self.category
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }

    /// Case-insensitive substring match on the product name.
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
