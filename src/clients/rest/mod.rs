//! REST API client for TradeGecko.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that exposes the generic
//! resource verbs.
//!
//! # Overview
//!
//! - [`RestClient`]: `list()`, `get_by_id()`, `create()`, `update()`, `remove()`
//! - [`QueryOptions`]: filters and pagination encoded into the query string
//! - [`RestError`]: error type for REST operations
//!
//! # Example
//!
//! ```rust,ignore
//! use tradegecko_api::{QueryOptions, RestClient};
//!
//! let client = RestClient::from_token("my-token")?;
//!
//! let options = QueryOptions::new().limit(50).page(2).include("variants");
//! let products = client.list("products", Some(&options)).await?;
//!
//! // A missing resource is not an error.
//! let order = client.get_by_id("orders", 123, None).await?;
//! if order.is_not_found() {
//!     println!("Order 123 does not exist");
//! }
//! ```
//!
//! # Path Normalization
//!
//! Leading and trailing slashes are stripped from resource paths
//! (`/products/` -> `products`). Ids are appended as a single
//! percent-encoded segment.
//!
//! # Retry Behavior
//!
//! None. A failed call surfaces immediately; inspect
//! [`RestClient::rate_limit`] or the `reset_seconds` carried by
//! [`HttpError::RateLimitExceeded`](crate::clients::HttpError::RateLimitExceeded)
//! to decide when to try again.

mod client;
mod errors;
mod query;

pub use client::RestClient;
pub use errors::RestError;
pub use query::QueryOptions;
