//! REST helpers for the remote asset API.
//!
//! `AuthGateway` performs the credential login; the bearer helpers decorate
//! every later request that needs authorization.
//!
//! ERROR HANDLING
//! ==============
//! Login makes exactly one attempt per call. Every failure comes back as a
//! `LoginError` whose `user_message()` is safe to show on the login view;
//! nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::transport::{HttpReply, LoginTransport, TransportError};
use super::types::{Credentials, ErrorBody, LoginEnvelope, Session};
use crate::config::ApiConfig;

/// Why a login call did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("malformed login response: {0}")]
    Malformed(String),
}

impl LoginError {
    /// Text suitable for the login view's notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(err) => err.0.clone(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Malformed(detail) => detail.clone(),
        }
    }
}

fn status_failed_message(status: u16) -> String {
    format!("request failed with status code {status}")
}

/// Map a raw login reply onto a session or a displayable error.
///
/// # Errors
///
/// `Rejected` for non-2xx statuses (message taken from the `{message}` body
/// when present), `Malformed` when a 2xx body does not hold a session.
pub fn interpret_login_reply(reply: &HttpReply) -> Result<Session, LoginError> {
    if !reply.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&reply.body)
            .map(|body| body.message)
            .ok()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| status_failed_message(reply.status));
        return Err(LoginError::Rejected { status: reply.status, message });
    }
    let envelope: LoginEnvelope =
        serde_json::from_str(&reply.body).map_err(|e| LoginError::Malformed(e.to_string()))?;
    Ok(Session::from(envelope.data))
}

/// Issues credential logins against `{base}/users/login`.
pub struct AuthGateway<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: LoginTransport> AuthGateway<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange credentials for a session. The caller persists and publishes it.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] on transport failure, non-2xx status, or an
    /// unreadable success body.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, LoginError> {
        let body = serde_json::to_value(credentials).map_err(|e| LoginError::Malformed(e.to_string()))?;
        let reply = self
            .transport
            .post_json(&self.config.login_url(), &body)
            .await?;
        interpret_login_reply(&reply)
    }
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Header pair to attach to an authorized request, if a session exists.
#[must_use]
pub fn authorization_header(session: Option<&Session>) -> Option<(&'static str, String)> {
    session.map(|s| ("Authorization", bearer_value(&s.token)))
}

/// Fetch a record collection (`GET {base}/{resource}`) with the session's bearer token.
/// Returns the number of records.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or an
/// unreadable body. Always errors outside the browser.
pub async fn fetch_collection_len(config: &ApiConfig, resource: &str, session: &Session) -> Result<usize, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.resource_url(resource);
        let mut request = gloo_net::http::Request::get(&url);
        if let Some((name, value)) = authorization_header(Some(session)) {
            request = request.header(name, &value);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message(resp.status()));
        }
        let body: super::types::CollectionEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data.len())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, resource, session);
        Err("not available on server".to_owned())
    }
}
