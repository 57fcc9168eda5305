//! User records.

use serde::{Deserialize, Serialize};

use crate::types::id::UserId;

/// A registered fixture user.
///
/// The password is write-only: it is kept on the record to satisfy the data
/// model, but it is never serialized, so no read path can echo it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Sequentially assigned user ID.
    pub id: UserId,
    /// Email address, used as the lookup key for login.
    ///
    /// Uniqueness is not enforced on write; lookups take the first match.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Registration password. Never consulted by login (the fixture accepts
    /// a single configured password for every account) and never serialized.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

/// The public view of a user, as returned by login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
