//! Storefront Fixture API - deterministic mock storefront backend.
//!
//! This binary serves the fixture API on port 3001 by default.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - All state held in one in-memory store behind a coarse lock
//! - Seeded users and catalog; everything resets on restart
//!
//! The service exists to give end-to-end test suites a backend with fully
//! predictable behavior: fixed seed data, a single configured password
//! accepted for every account, and a constant session token.

#![cfg_attr(not(test), forbid(unsafe_code))]

use storefront_fixture_server::{AppState, FixtureConfig, app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = FixtureConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storefront_fixture_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state with a freshly seeded store
    let state = AppState::new(config.clone());
    let app = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("fixture api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
