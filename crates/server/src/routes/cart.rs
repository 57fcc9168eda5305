//! Cart route handlers.
//!
//! Every endpoint requires bearer-presence auth (any non-empty
//! `Authorization` header). The store keys carts by an explicit session key,
//! but this HTTP layer pins every caller to one shared key: the fixture does
//! not derive a session identity from the presented credential, so all
//! authenticated callers observe the same cart. Known fixture limitation,
//! kept for compatibility with the dependent test suites.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use storefront_fixture_core::{Cart, CartItem, ProductId};

use crate::error::Result;
use crate::middleware::BearerPresence;
use crate::state::AppState;

/// The single session key shared by all callers.
const SHARED_SESSION_KEY: &str = "mock-user";

/// Add-item request body.
///
/// The product is not validated against the catalog and the quantity is not
/// required to be positive; the fixture stores what it is given.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Update-item request body.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: i64,
}

/// `GET /api/cart`
pub async fn show(State(state): State<AppState>, _auth: BearerPresence) -> Json<Cart> {
    Json(state.store().cart(SHARED_SESSION_KEY))
}

/// `POST /api/cart/items`
///
/// Appends a new line even when the cart already holds one for the same
/// product; lines are never merged.
pub async fn add_item(
    State(state): State<AppState>,
    _auth: BearerPresence,
    Json(body): Json<AddItemRequest>,
) -> (StatusCode, Json<CartItem>) {
    let item = state.store().add_item(
        SHARED_SESSION_KEY,
        CartItem {
            product_id: body.product_id,
            quantity: body.quantity,
        },
    );
    (StatusCode::CREATED, Json(item))
}

/// `PUT /api/cart/items/{productId}`
pub async fn update_item(
    State(state): State<AppState>,
    _auth: BearerPresence,
    Path(product_id): Path<ProductId>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<CartItem>> {
    let item = state
        .store()
        .update_item(SHARED_SESSION_KEY, product_id, body.quantity)?;
    Ok(Json(item))
}

/// `DELETE /api/cart/items/{productId}`
///
/// Removes every line matching the product, not merely the first.
pub async fn remove_item(
    State(state): State<AppState>,
    _auth: BearerPresence,
    Path(product_id): Path<ProductId>,
) -> Result<StatusCode> {
    state.store().remove_item(SHARED_SESSION_KEY, product_id)?;
    Ok(StatusCode::NO_CONTENT)
}
