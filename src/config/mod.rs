//! Configuration types for resource clients.
//!
//! # Overview
//!
//! - [`PgConfig`]: The configuration shared by every resource client
//! - [`PgConfigBuilder`]: A builder for constructing [`PgConfig`] instances
//! - [`HostUrl`]: A validated server origin
//! - [`AccessToken`]: A bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use pg_restful::{PgConfig, HostUrl};
//!
//! let config = PgConfig::builder()
//!     .host(HostUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "/api/v3");
//! assert_eq!(config.login_url(), "/login");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl};

use crate::error::ConfigError;

/// Default API prefix appended to the host.
pub const DEFAULT_BASE_URL: &str = "/api/v3";

/// Default location of the login page.
pub const DEFAULT_LOGIN_URL: &str = "/login";

/// Configuration for resource clients.
///
/// Holds the server origin, the API base URL every resource path is appended
/// to, and the login URL reported when the API answers `401`.
///
/// # Thread Safety
///
/// `PgConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PgConfig {
    host: HostUrl,
    base_url: String,
    login_url: String,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl PgConfig {
    /// Creates a new builder for constructing a `PgConfig`.
    #[must_use]
    pub fn builder() -> PgConfigBuilder {
        PgConfigBuilder::new()
    }

    /// Returns the server origin.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the API base URL (e.g., "/api/v3").
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the login URL.
    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the absolute API root: host followed by the base URL.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}{}", self.host, self.base_url)
    }
}

// Verify PgConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PgConfig>();
};

/// Builder for constructing [`PgConfig`] instances.
///
/// `host` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: `"/api/v3"`
/// - `login_url`: `"/login"`
/// - `access_token`: `None`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use pg_restful::{PgConfig, HostUrl, AccessToken};
///
/// let config = PgConfig::builder()
///     .host(HostUrl::new("https://api.example.com").unwrap())
///     .base_url("/api/v4")
///     .login_url("/auth/login")
///     .access_token(AccessToken::new("token").unwrap())
///     .user_agent_prefix("Backoffice/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_root(), "https://api.example.com/api/v4");
/// ```
#[derive(Debug, Default)]
pub struct PgConfigBuilder {
    host: Option<HostUrl>,
    base_url: Option<String>,
    login_url: Option<String>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl PgConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server origin (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API base URL.
    ///
    /// An empty string means resource paths are appended to the host directly.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the login URL.
    #[must_use]
    pub fn login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = Some(login_url.into());
        self
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PgConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set, or
    /// [`ConfigError::InvalidBaseUrl`] if the base URL is neither empty nor an
    /// absolute path.
    pub fn build(self) -> Result<PgConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        let base_url = self
            .base_url
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), |url| url.trim().to_string());
        if !base_url.is_empty() && !base_url.starts_with('/') {
            return Err(ConfigError::InvalidBaseUrl { url: base_url });
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(PgConfig {
            host,
            base_url,
            login_url: self
                .login_url
                .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string()),
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostUrl {
        HostUrl::new("https://api.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_host() {
        let result = PgConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "host" })
        ));
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = PgConfig::builder().host(host()).build().unwrap();

        assert_eq!(config.base_url(), "/api/v3");
        assert_eq!(config.login_url(), "/login");
        assert!(config.access_token().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.api_root(), "https://api.example.com/api/v3");
    }

    #[test]
    fn test_builder_rejects_relative_base_url() {
        let result = PgConfig::builder().host(host()).base_url("api/v3").build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidBaseUrl { url }) if url == "api/v3"
        ));
    }

    #[test]
    fn test_builder_trims_trailing_slash_from_base_url() {
        let config = PgConfig::builder()
            .host(host())
            .base_url("/api/v3/")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "/api/v3");
    }

    #[test]
    fn test_builder_accepts_empty_base_url() {
        let config = PgConfig::builder()
            .host(host())
            .base_url("")
            .build()
            .unwrap();

        assert_eq!(config.api_root(), "https://api.example.com");
    }

    #[test]
    fn test_config_is_clone() {
        let config = PgConfig::builder()
            .host(host())
            .login_url("/sign-in")
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.login_url(), "/sign-in");
        assert_eq!(cloned.host(), config.host());
    }
}
