//! Authentication route handlers.
//!
//! Login is intentionally not a real credential check: any registered email
//! combined with the configured fixture password succeeds, regardless of
//! the password the user registered with, and every login is issued the
//! same configured token.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use storefront_fixture_core::{User, UserProfile};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Login request body. Fields are optional so presence is validated before
/// any business logic runs.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login: the constant session token plus the public profile.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (non_empty(body.email), non_empty(body.password)) else {
        return Err(ApiError::Validation(
            "Email and password required".to_string(),
        ));
    };

    let store = state.store();
    match store.find_user_by_email(&email) {
        Some(user) if password == state.config().fixture_password => {
            tracing::debug!(user_id = %user.id, "login accepted");
            Ok(Json(LoginResponse {
                token: state.config().session_token.clone(),
                user: UserProfile::from(user),
            }))
        }
        _ => Err(ApiError::Authentication("Invalid credentials".to_string())),
    }
}

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let (Some(email), Some(first_name), Some(last_name), Some(password)) = (
        non_empty(body.email),
        non_empty(body.first_name),
        non_empty(body.last_name),
        non_empty(body.password),
    ) else {
        return Err(ApiError::Validation("All fields required".to_string()));
    };

    let user = state
        .store()
        .register_user(email, first_name, last_name, password);
    tracing::debug!(user_id = %user.id, "user registered");

    // User serialization never includes the password field
    Ok((StatusCode::CREATED, Json(user)))
}

/// Treat absent and empty fields identically.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
