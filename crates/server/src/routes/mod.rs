//! HTTP route handlers for the fixture API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Auth
//! POST /api/auth/login                  - Login (fixture password, constant token)
//! POST /api/auth/register               - Register a user
//!
//! # Products (read-only catalog)
//! GET  /api/products                    - List, ?category= and ?q= filters
//! GET  /api/products/search             - Name search, ?q=
//! GET  /api/products/{id}               - Product detail
//!
//! # Cart (bearer-presence auth)
//! GET    /api/cart                      - Current cart items
//! POST   /api/cart/items                - Append an item (never merges)
//! PUT    /api/cart/items/{productId}    - Overwrite an item's quantity
//! DELETE /api/cart/items/{productId}    - Remove all lines for a product
//! ```

pub mod auth;
pub mod cart;
pub mod health;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the complete fixture route tree.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(product_routes())
        .merge(cart_routes())
        .route("/health", get(health::health))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::index))
        .route("/api/products/search", get(products::search))
        .route("/api/products/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/api/cart", get(cart::show))
        .route("/api/cart/items", post(cart::add_item))
        .route(
            "/api/cart/items/{product_id}",
            put(cart::update_item).delete(cart::remove_item),
        )
}
