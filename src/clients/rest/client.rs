//! REST client implementation for the TradeGecko API.
//!
//! This module provides the [`RestClient`] type, which turns the generic
//! verbs (`list`, `get_by_id`, `create`, `update`, `remove`) into HTTP
//! requests against a resource path.

use std::fmt::Display;

use crate::clients::rest::query::{encode_query, QueryOptions};
use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, Outcome, RateLimitState};
use crate::config::{ApiToken, BaseUrl, TradeGeckoConfig};

/// REST API client for TradeGecko.
///
/// Every operation returns `Ok(Outcome)` for 2xx, 404 and other
/// non-error statuses, and `Err(RestError)` otherwise. After each response,
/// the headers `X-Rate-Limit-Limit`, `X-Rate-Limit-Remaining`,
/// `X-Rate-Limit-Reset` and `X-Request-Id` are available through
/// [`rate_limit`](Self::rate_limit).
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Each client owns its own rate limit state,
/// so clients for different tokens do not interfere.
///
/// # Example
///
/// ```rust,ignore
/// use tradegecko_api::{QueryOptions, RestClient};
///
/// let client = RestClient::from_token("my-token")?;
///
/// let products = client
///     .list("products", Some(&QueryOptions::new().limit(10)))
///     .await?;
/// println!("{:?} requests left", client.rate_limit().remaining);
///
/// let body = serde_json::json!({"company": {"name": "Acme"}});
/// let created = client.create("companies", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: &TradeGeckoConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!("TradeGecko client targeting {}", config.base_url().as_ref());
        Ok(Self { http_client })
    }

    /// Creates a new REST client for the default endpoint with the given token.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the token is empty.
    pub fn from_token(token: impl Into<String>) -> Result<Self, RestError> {
        let config = TradeGeckoConfig::builder()
            .api_token(ApiToken::new(token)?)
            .build()?;
        Self::new(&config)
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.http_client.base_url()
    }

    /// Returns the rate limit state recorded from the most recent response.
    #[must_use]
    pub fn rate_limit(&self) -> RateLimitState {
        self.http_client.rate_limit()
    }

    /// Lists resources: `GET {resource}`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty or malformed and
    /// [`RestError::Http`] for network failures and error responses.
    pub async fn list(
        &self,
        resource: &str,
        options: Option<&QueryOptions>,
    ) -> Result<Outcome, RestError> {
        let path = normalize_path(resource)?;
        tracing::debug!("Listing objects. GET {}", path);
        self.make_request(HttpMethod::Get, path, None, options).await
    }

    /// Fetches one resource: `GET {resource}/{id}`.
    ///
    /// A missing resource is `Ok(Outcome::NotFound)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] or [`RestError::InvalidId`] for bad
    /// arguments and [`RestError::Http`] for network failures and error responses.
    pub async fn get_by_id(
        &self,
        resource: &str,
        id: impl Display,
        options: Option<&QueryOptions>,
    ) -> Result<Outcome, RestError> {
        let path = member_path(resource, &id)?;
        tracing::debug!("Getting object. GET {}", path);
        self.make_request(HttpMethod::Get, path, None, options).await
    }

    /// Creates a resource: `POST {resource}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty or malformed and
    /// [`RestError::Http`] for network failures and error responses.
    pub async fn create(
        &self,
        resource: &str,
        body: serde_json::Value,
        options: Option<&QueryOptions>,
    ) -> Result<Outcome, RestError> {
        let path = normalize_path(resource)?;
        tracing::debug!("Creating new object. POST {}", path);
        self.make_request(HttpMethod::Post, path, Some(body), options)
            .await
    }

    /// Updates a resource: `PUT {resource}/{id}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] or [`RestError::InvalidId`] for bad
    /// arguments and [`RestError::Http`] for network failures and error responses.
    pub async fn update(
        &self,
        resource: &str,
        id: impl Display,
        body: serde_json::Value,
        options: Option<&QueryOptions>,
    ) -> Result<Outcome, RestError> {
        let path = member_path(resource, &id)?;
        tracing::debug!("Updating object. PUT {}", path);
        self.make_request(HttpMethod::Put, path, Some(body), options)
            .await
    }

    /// Deletes a resource: `DELETE {resource}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] or [`RestError::InvalidId`] for bad
    /// arguments and [`RestError::Http`] for network failures and error responses.
    pub async fn remove(
        &self,
        resource: &str,
        id: impl Display,
        options: Option<&QueryOptions>,
    ) -> Result<Outcome, RestError> {
        let path = member_path(resource, &id)?;
        tracing::debug!("Deleting object. DELETE {}", path);
        self.make_request(HttpMethod::Delete, path, None, options)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<serde_json::Value>,
        options: Option<&QueryOptions>,
    ) -> Result<Outcome, RestError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }
        if let Some(query) = encode_query(options) {
            builder = builder.query(query);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading and trailing `/` and rejects paths that are empty or would
/// not address a single resource (`?`, `#` or whitespace anywhere).
///
/// ```rust,ignore
/// assert_eq!(normalize_path("/products/")?, "products");
/// assert_eq!(normalize_path("purchase_orders")?, "purchase_orders");
/// assert!(normalize_path("products?limit=1").is_err());
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let normalized = path.trim_matches('/');
    let malformed = normalized
        .chars()
        .any(|c| c == '?' || c == '#' || c.is_whitespace());
    if normalized.is_empty() || malformed {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(normalized.to_string())
}

/// Builds `{resource}/{id}` with the id percent-encoded as one segment.
fn member_path(resource: &str, id: &impl Display) -> Result<String, RestError> {
    let resource = normalize_path(resource)?;
    let id = id.to_string();
    let id = id.trim();
    if id.is_empty() {
        return Err(RestError::InvalidId);
    }
    Ok(format!("{resource}/{}", urlencoding::encode(id)))
}
