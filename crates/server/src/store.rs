//! In-memory resource store backing the fixture API.
//!
//! The store owns every entity for the lifetime of the process: seeded
//! users and a read-only product catalog, plus carts created lazily per
//! session key. Nothing is persisted; a restart resets all state.

use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;

use storefront_fixture_core::{Cart, CartItem, Product, ProductId, User, UserId};

/// Cart operation failures.
///
/// The Display strings are the exact wire messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No cart has been created for the session yet.
    #[error("Cart not found")]
    CartNotFound,
    /// The cart exists but holds no line for the requested product.
    #[error("Item not found")]
    ItemNotFound,
}

/// The process-wide in-memory store.
///
/// Constructed once at startup and owned by the application state; handlers
/// reach it through a single coarse lock, so no method here needs interior
/// synchronization.
#[derive(Debug)]
pub struct FixtureStore {
    users: Vec<User>,
    products: Vec<Product>,
    carts: HashMap<String, Cart>,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureStore {
    /// Create a store with the seeded users and catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: seed_users(),
            products: seed_products(),
            carts: HashMap::new(),
        }
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Register a new user and return the created record.
    ///
    /// IDs are assigned as current user count + 1. Users are never removed,
    /// so the sequence never collides. Email uniqueness is not enforced;
    /// lookups take the first match.
    pub fn register_user(
        &mut self,
        email: String,
        first_name: String,
        last_name: String,
        password: String,
    ) -> User {
        let id = i32::try_from(self.users.len() + 1).unwrap_or(i32::MAX);
        let user = User {
            id: UserId::new(id),
            email,
            first_name,
            last_name,
            password: Some(password),
        };
        self.users.push(user.clone());
        user
    }

    /// Look up a user by exact email match.
    #[must_use]
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Number of registered users (seeded included).
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// List products, optionally narrowed by category and then by name.
    ///
    /// Both filters are case-insensitive substring matches and compose with
    /// AND. Unmatched filters yield an empty list, never an error.
    #[must_use]
    pub fn list_products(&self, category: Option<&str>, query: Option<&str>) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category_matches(c)))
            .filter(|p| query.is_none_or(|q| p.name_matches(q)))
            .cloned()
            .collect()
    }

    /// Look up a product by exact ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // =========================================================================
    // Carts
    // =========================================================================

    /// The cart for a session, or an empty cart if none was created yet.
    #[must_use]
    pub fn cart(&self, session: &str) -> Cart {
        self.carts.get(session).cloned().unwrap_or_else(Cart::empty)
    }

    /// Append an item to the session's cart, creating the cart lazily.
    ///
    /// Always appends: an existing line for the same product is not merged.
    /// The product is not checked against the catalog and the quantity is
    /// not checked for positivity.
    pub fn add_item(&mut self, session: &str, item: CartItem) -> CartItem {
        let cart = self.carts.entry(session.to_string()).or_default();
        cart.items.push(item.clone());
        item
    }

    /// Overwrite the quantity of the first line matching `product_id`.
    ///
    /// # Errors
    ///
    /// `CartNotFound` if the session has no cart, `ItemNotFound` if no line
    /// matches.
    pub fn update_item(
        &mut self,
        session: &str,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartItem, CartError> {
        let cart = self.carts.get_mut(session).ok_or(CartError::CartNotFound)?;
        let item = cart
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or(CartError::ItemNotFound)?;
        item.quantity = quantity;
        Ok(item.clone())
    }

    /// Remove every line matching `product_id` from the session's cart.
    ///
    /// Removing a product with no matching lines still succeeds; only a
    /// missing cart is an error.
    ///
    /// # Errors
    ///
    /// `CartNotFound` if the session has no cart.
    pub fn remove_item(&mut self, session: &str, product_id: ProductId) -> Result<(), CartError> {
        let cart = self.carts.get_mut(session).ok_or(CartError::CartNotFound)?;
        cart.items.retain(|i| i.product_id != product_id);
        Ok(())
    }
}

/// Users present at startup.
fn seed_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(1),
            email: "john.doe@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            password: None,
        },
        User {
            id: UserId::new(2),
            email: "jane.smith@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            password: None,
        },
    ]
}

/// The fixed catalog. Read-only for the lifetime of the service.
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Laptop".to_string(),
            price: Decimal::new(99999, 2),
            category: "Electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: ProductId::new(2),
            name: "Coffee Mug".to_string(),
            price: Decimal::new(1599, 2),
            category: "Home & Kitchen".to_string(),
            in_stock: true,
        },
        Product {
            id: ProductId::new(3),
            name: "Running Shoes".to_string(),
            price: Decimal::new(8999, 2),
            category: "Sports".to_string(),
            in_stock: true,
        },
    ]
}
