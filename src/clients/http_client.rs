//! HTTP client for TradeGecko API communication.
//!
//! This module provides the [`HttpClient`] type, which sends authenticated
//! requests, normalizes every response into an [`HttpResponse`], records the
//! rate limit headers, and classifies the result.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, RateLimitState};
use crate::clients::outcome::{classify, Outcome};
use crate::config::{ApiToken, BaseUrl, TradeGeckoConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the TradeGecko API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`Accept`, `User-Agent`) and the bearer token
/// - Response normalization and classification
/// - Rate limit state, overwritten after every response
///
/// Redirects are not followed; a 3xx response reaches the classifier.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Concurrent requests race on the rate limit
/// state and the last response to arrive wins.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.tradegecko.com/`).
    base_url: BaseUrl,
    /// Token sent as `Authorization: Bearer <token>`.
    api_token: ApiToken,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Rate limit headers from the most recent response.
    rate_limit: RwLock<RateLimitState>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &TradeGeckoConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}TradeGecko API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            api_token: config.api_token().clone(),
            default_headers,
            rate_limit: RwLock::new(RateLimitState::default()),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    ///
    /// The `Authorization` header is added per request and is not included.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns a snapshot of the rate limit state from the most recent response.
    #[must_use]
    pub fn rate_limit(&self) -> RateLimitState {
        self.rate_limit
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sends a request and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - No HTTP response was received (`Network`)
    /// - The response classifies as an error (`Request`, `Authorization`,
    ///   `RateLimitExceeded`, `UnhandledClient`, `Server`, `Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<Outcome, HttpError> {
        let response = self.send(&request).await?;
        classify(&response)
    }

    /// Sends a request and returns the normalized response without classifying it.
    ///
    /// Any status code, including 4xx and 5xx, is returned as `Ok`. The rate
    /// limit state is recorded as soon as the response headers arrive, so it
    /// is updated even if reading the body then fails.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if validation fails and
    /// [`HttpError::Network`] if no response was received.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let path = request.path_and_query();
        let url = self.base_url.join(&path);
        tracing::debug!("{} {}", request.http_method.to_string().to_uppercase(), path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.bearer_auth(self.api_token.as_ref());
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        self.record_rate_limit(RateLimitState::from_headers(&res_headers));
        let body = res.text().await?;
        tracing::debug!("HTTP-{} from {}", code, path);

        Ok(HttpResponse::new(code, res_headers, body))
    }

    fn record_rate_limit(&self, rate_limit: RateLimitState) {
        let mut state = self
            .rate_limit
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *state = rate_limit;
    }

    /// Parses response headers into a `HashMap`.
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
}
