//! Remote API configuration resolved at build time.
//!
//! DESIGN
//! ======
//! The WASM bundle has no process environment, so the API base URL is baked in
//! through `option_env!` when the crate is compiled. Everything downstream takes
//! an `ApiConfig` value so tests can point it anywhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `ASSETDESK_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

/// `localStorage` key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "sessionData";

/// Location of the remote asset API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build from the `ASSETDESK_API_URL` value captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("ASSETDESK_API_URL"))
    }

    /// Build from an optional raw base URL. Blank values fall back to
    /// [`DEFAULT_API_URL`]; trailing slashes are dropped.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self { base_url: base.trim_end_matches('/').to_owned() }
    }

    /// `POST` target for credential login.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.resource_url("users/login")
    }

    /// Absolute URL for a resource path such as `"employees"` or `"/licenses"`.
    #[must_use]
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}
