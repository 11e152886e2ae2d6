//! HTTP client for API communication.
//!
//! This module provides the [`HttpClient`] type, the only place the crate
//! talks to `reqwest`.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::PgConfig;

/// Fixed retry wait time in seconds, used when `Retry-After` is absent.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to one API root.
///
/// The client handles:
/// - URL construction from the configured host and base URL
/// - Default headers including User-Agent and the optional bearer token
/// - Opt-in retry of 429 and 500 responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use pg_restful::{PgConfig, HostUrl};
/// use pg_restful::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = PgConfig::builder()
///     .host(HostUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/users").build().unwrap();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Host followed by the base URL (e.g., `https://api.example.com/api/v3`).
    base_uri: String,
    login_url: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &PgConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}pg-restful v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = config.access_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.api_root(),
            login_url: config.login_url().to_string(),
            default_headers,
        }
    }

    /// Returns the API root every request path is appended to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the login URL reported on `401` responses.
    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Opt-in retries are exhausted (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if request.response_type == DataType::Text {
            headers.insert("Accept".to_string(), "text/plain, */*".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            tracing::debug!(method = %request.http_method, %url, attempt = tries, "sending request");

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let text = res.text().await?;

            let body = match request.response_type {
                DataType::Json if !text.is_empty() => {
                    serde_json::from_str(&text).unwrap_or(serde_json::Value::Null)
                }
                _ => serde_json::Value::Null,
            };

            let response = HttpResponse::new(code, res_headers, body, text);

            if response.is_ok() {
                return Ok(response);
            }

            if code == 401 {
                tracing::warn!(
                    %url,
                    login_url = %self.login_url,
                    "request was not authenticated; sign in at the login URL"
                );
            }

            let should_retry = code == 429 || code == 500;
            if !should_retry || request.tries == 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: response.text.clone(),
                    error_reference: response.request_id().map(String::from),
                }));
            }

            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: response.text.clone(),
                    error_reference: response.request_id().map(String::from),
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::debug!(%url, code, ?delay, "retrying request");
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// 429 honours `Retry-After`; 500 always waits the fixed delay.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        if status == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            {
                return delay;
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, HostUrl};

    fn config_builder() -> crate::config::PgConfigBuilder {
        PgConfig::builder().host(HostUrl::new("https://api.example.com").unwrap())
    }

    #[test]
    fn test_base_uri_joins_host_and_base_url() {
        let client = HttpClient::new(&config_builder().build().unwrap());

        assert_eq!(client.base_uri(), "https://api.example.com/api/v3");
        assert_eq!(
            client.url_for("/users/3"),
            "https://api.example.com/api/v3/users/3"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&config_builder().build().unwrap());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("pg-restful v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = config_builder().user_agent_prefix("Backoffice/2.1").build().unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Backoffice/2.1 | pg-restful"));
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let config = config_builder()
            .access_token(AccessToken::new("token-123").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer token-123".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let client = HttpClient::new(&config_builder().build().unwrap());
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_login_url_is_carried_from_config() {
        let config = config_builder().login_url("/sign-in").build().unwrap();
        let client = HttpClient::new(&config);
        assert_eq!(client.login_url(), "/sign-in");
    }
}
