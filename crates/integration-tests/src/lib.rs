//! Integration test harness for the storefront fixture API.
//!
//! Each [`TestContext`] boots the real service in-process on an OS-assigned
//! port and exposes a reqwest client pointed at it. Contexts are fully
//! isolated: every one gets a freshly seeded store, so tests never observe
//! each other's registrations or cart writes.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;

use storefront_fixture_server::{AppState, FixtureConfig, app};

/// A fixture server running in-process, plus a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Boot a fresh fixture service with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind; tests have no way to recover.
    pub async fn new() -> Self {
        let state = AppState::new(FixtureConfig::default());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read listener addr");

        tokio::spawn(async move {
            axum::serve(listener, app(state))
                .await
                .expect("Test server error");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
