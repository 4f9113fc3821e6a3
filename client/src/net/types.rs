//! Wire DTOs for the asset API login exchange and the persisted session.
//!
//! DESIGN
//! ======
//! `Session` keeps the API's field names (`_id`, `fullName`, ...) when
//! serialized, so the blob written to `localStorage` is the same record the
//! login endpoint handed back, minus the envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role. Route access is decided by membership in a role set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Attendant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Attendant => "attendant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile picture reference as stored by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionImage {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    pub url: String,
}

/// The authenticated identity and bearer token for the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub role: Role,
    /// Account enabled flag as reported by the API.
    pub state: bool,
    #[serde(default)]
    pub image: Option<SessionImage>,
    pub token: String,
}

/// Login form input. Sent once, never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Success body of `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginEnvelope {
    pub data: LoginPayload,
}

/// User record inside [`LoginEnvelope`].
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<SessionImage>,
    pub role: Role,
    pub state: bool,
    pub token: String,
}

impl From<LoginPayload> for Session {
    fn from(payload: LoginPayload) -> Self {
        Self {
            id: payload.id,
            full_name: payload.full_name,
            email: payload.email,
            role: payload.role,
            state: payload.state,
            image: payload.image,
            token: payload.token,
        }
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Collection body returned by the record endpoints (`GET /employees`, ...).
#[derive(Debug, Deserialize)]
pub struct CollectionEnvelope {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}
