//! Cart records.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A single cart line.
///
/// `product_id` is not required to reference an existing catalog product,
/// and a cart may hold multiple lines for the same product: adds append,
/// they never merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A cart: an ordered list of items, created lazily on first write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart, as reported for sessions that never wrote one.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_wire_format() {
        let item = CartItem {
            product_id: ProductId::new(2),
            quantity: 3,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"productId":2,"quantity":3}"#);
    }

    #[test]
    fn test_empty_cart_serializes_with_items_key() {
        let json = serde_json::to_string(&Cart::empty()).unwrap();
        assert_eq!(json, r#"{"items":[]}"#);
    }
}
