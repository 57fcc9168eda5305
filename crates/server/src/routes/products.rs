//! Product catalog route handlers.
//!
//! The catalog is seeded at startup and read-only: there are no create,
//! update, or delete endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use storefront_fixture_core::{Product, ProductId};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Catalog listing filters. Both compose with AND, category first.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Name search query.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// `GET /api/products`
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    let products = state
        .store()
        .list_products(query.category.as_deref(), query.q.as_deref());
    Json(products)
}

/// `GET /api/products/search`
///
/// Same substring semantics as the `q` filter on the listing endpoint,
/// applied alone. A missing `q` matches everything.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    let products = state.store().list_products(None, query.q.as_deref());
    Json(products)
}

/// `GET /api/products/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .store()
        .product(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
}
