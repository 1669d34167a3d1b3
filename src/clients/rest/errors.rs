//! REST-specific error types for the TradeGecko API client.
//!
//! - [`RestError::InvalidPath`]: the resource path is empty or contains `?`, `#` or whitespace
//! - [`RestError::InvalidId`]: the resource id is empty
//! - [`RestError::Config`]: the client could not be configured
//! - [`RestError::Http`]: wraps the classified HTTP error
//!
//! # Example
//!
//! ```rust,ignore
//! use tradegecko_api::clients::{HttpError, RestError};
//!
//! match client.get_by_id("orders", 42, None).await {
//!     Ok(outcome) if outcome.is_not_found() => println!("No such order"),
//!     Ok(outcome) => println!("Order: {:?}", outcome.payload()),
//!     Err(RestError::Http(HttpError::Authorization(e))) => println!("Bad token: {e}"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The resource path is invalid.
    ///
    /// Returned when the path is empty after stripping slashes, or contains
    /// `?`, `#` or whitespace.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// The resource id renders to an empty string.
    #[error("Resource id cannot be empty.")]
    InvalidId,

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code of the failed response, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } | Self::InvalidId | Self::Config(_) => None,
        }
    }
}
