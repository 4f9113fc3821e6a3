//! HTTP transport seam for the login exchange.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR) and native tests: the browser transport refuses every
//! call, so anything that needs the network goes through a `LoginTransport`
//! the caller controls.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_fake.rs"]
pub(crate) mod fake;

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

/// Raw HTTP response: status code plus the undecoded body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network-level failure: no usable response came back.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one JSON `POST` and hands back whatever came back.
#[async_trait::async_trait(?Send)]
pub trait LoginTransport {
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, TransportError>;
}

/// Assemble a reply from its status and the outcome of reading the body.
/// An unreadable body is a transport failure whatever the status was.
pub fn reply_from_parts<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> Result<HttpReply, TransportError> {
    let body = body.map_err(|e| TransportError(format!("reading response body: {e}")))?;
    Ok(HttpReply { status, body })
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl LoginTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            reply_from_parts(resp.status(), resp.text().await)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError("not available on server".to_owned()))
        }
    }
}
