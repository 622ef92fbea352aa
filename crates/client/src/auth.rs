//! Authentication: login and current-user lookup.
//!
//! Accessors here are pure request builders; the application's session layer
//! owns persisting the returned token (and the transport owns clearing it on
//! a 401).

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Error;
use crate::fetch::Transport;

/// The authenticated operator's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Login response: the bearer token plus the user it belongs to. This
/// endpoint does not use the standard envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Accessor group for `/auth`.
pub struct AuthApi<'a> {
    pub(crate) transport: &'a Transport,
}

impl AuthApi<'_> {
    /// POST `/auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, Error> {
        self.transport
            .request(Method::POST, "/auth/login")
            .json(&json!({ "email": email, "password": password }))?
            .execute::<LoginResponse>()
            .await
    }

    /// GET `/auth/me` — validates the persisted token by resolving the profile
    pub async fn me(&self) -> Result<User, Error> {
        let envelope = self
            .transport
            .request(Method::GET, "/auth/me")
            .execute_enveloped::<User>()
            .await?;
        Ok(envelope.data)
    }
}
