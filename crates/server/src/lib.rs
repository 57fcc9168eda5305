//! Storefront Fixture Server library.
//!
//! This crate provides the fixture API as a library, allowing the
//! integration tests to mount the real router in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

pub use config::FixtureConfig;
pub use state::AppState;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the complete fixture application router.
///
/// CORS is permissive so browser-driven test suites can call the fixture
/// cross-origin.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
