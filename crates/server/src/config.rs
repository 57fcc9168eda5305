//! Fixture configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults are the values the dependent
//! test suites were written against.
//!
//! - `FIXTURE_HOST` - Bind address (default: 127.0.0.1)
//! - `FIXTURE_PORT` - Listen port (default: 3001)
//! - `FIXTURE_PASSWORD` - The single password login accepts for every
//!   registered email (default: `TestPassword123!`)
//! - `FIXTURE_SESSION_TOKEN` - The constant token issued by every
//!   successful login (default: `mock-jwt-token`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// The password accepted for every account.
///
/// This is a fixture simplification, not a security property: login checks
/// the supplied password against this constant, never against the password
/// the user registered with.
pub const DEFAULT_FIXTURE_PASSWORD: &str = "TestPassword123!";

/// The opaque token issued by every successful login.
///
/// Not unique per login; cart endpoints only check that *some* credential
/// is presented, so the value is never validated anywhere.
pub const DEFAULT_SESSION_TOKEN: &str = "mock-jwt-token";

const DEFAULT_PORT: u16 = 3001;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Fixture service configuration.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// The single password accepted for every registered email.
    pub fixture_password: String,
    /// The constant session token issued on login.
    pub session_token: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            fixture_password: DEFAULT_FIXTURE_PASSWORD.to_string(),
            session_token: DEFAULT_SESSION_TOKEN.to_string(),
        }
    }
}

impl FixtureConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("FIXTURE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FIXTURE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FIXTURE_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FIXTURE_PORT".to_string(), e.to_string()))?;
        let fixture_password = get_env_or_default("FIXTURE_PASSWORD", DEFAULT_FIXTURE_PASSWORD);
        let session_token = get_env_or_default("FIXTURE_SESSION_TOKEN", DEFAULT_SESSION_TOKEN);

        Ok(Self {
            host,
            port,
            fixture_password,
            session_token,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
