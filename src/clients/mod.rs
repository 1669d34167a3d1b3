//! HTTP client types for TradeGecko API communication.
//!
//! This module provides the HTTP client layer for making authenticated
//! requests to the TradeGecko API: request building, response
//! normalization, rate limit tracking and response classification.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A normalized `{status, headers, body}` response
//! - [`RateLimitState`]: Values of the rate limit headers
//! - [`Outcome`] and [`classify`]: Response classification
//! - [`HttpError`]: Typed errors for every failing status class
//! - [`rest::RestClient`]: Higher-level resource verbs
//!
//! # Example
//!
//! ```rust,ignore
//! use tradegecko_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use tradegecko_api::{ApiToken, TradeGeckoConfig};
//!
//! let config = TradeGeckoConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products")
//!     .query("limit=10")
//!     .build()
//!     .unwrap();
//!
//! let outcome = client.request(request).await?;
//! println!("{:?}", client.rate_limit());
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod outcome;
pub mod rest;

pub use errors::{
    DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError, RateLimitExceededError,
    ServerError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimitState};
pub use outcome::{classify, Outcome};

// Re-export REST client types at the clients module level
pub use rest::{QueryOptions, RestClient, RestError};
