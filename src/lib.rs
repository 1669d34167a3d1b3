//! # TradeGecko API Rust Client
//!
//! A thin async client for the TradeGecko REST API. It exposes generic
//! resource verbs, attaches bearer-token authorization, encodes query
//! options, and normalizes every response into a uniform [`Outcome`] or a
//! typed error.
//!
//! ## Overview
//!
//! - Configuration via [`TradeGeckoConfig`] and [`TradeGeckoConfigBuilder`]
//! - Validated [`ApiToken`] and [`BaseUrl`] newtypes
//! - [`RestClient`] with `list`, `get_by_id`, `create`, `update`, `remove`
//! - [`QueryOptions`] for pagination, date bounds, id lists and includes
//! - Per-client [`RateLimitState`] read from the `X-Rate-Limit-*` headers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradegecko_api::{Outcome, QueryOptions, RestClient};
//!
//! let client = RestClient::from_token("your-access-token")?;
//!
//! match client.list("products", Some(&QueryOptions::new().limit(10))).await? {
//!     Outcome::Payload(body) => println!("{body}"),
//!     Outcome::NoContent | Outcome::NotFound => {}
//! }
//!
//! let limits = client.rate_limit();
//! println!("{:?} of {:?} requests left", limits.remaining, limits.limit);
//! ```
//!
//! ## Response Classification
//!
//! | Status    | Result                                         |
//! |-----------|------------------------------------------------|
//! | 204       | `Outcome::NoContent`                           |
//! | 2xx       | `Outcome::Payload`                             |
//! | 404       | `Outcome::NotFound` (not an error)             |
//! | 400       | `HttpError::Request`                           |
//! | 401       | `HttpError::Authorization`                     |
//! | 429       | `HttpError::RateLimitExceeded`                 |
//! | other 4xx | `HttpError::UnhandledClient`                   |
//! | 5xx       | `HttpError::Server` (raw body kept)            |
//!
//! ## Design Principles
//!
//! - **No global state**: rate limit state belongs to each client instance
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **No retries**: every failure surfaces to the caller immediately

pub mod clients;
pub mod config;
pub mod error;

pub use config::{ApiToken, BaseUrl, TradeGeckoConfig, TradeGeckoConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    classify, DataType, DecodeError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, Outcome,
    RateLimitExceededError, RateLimitState, ServerError,
};

// Re-export REST client types
pub use clients::{QueryOptions, RestClient, RestError};
