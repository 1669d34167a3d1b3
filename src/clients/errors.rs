//! HTTP-specific error types for the TradeGecko API client.
//!
//! Every non-2xx response other than 404 surfaces as one of these errors.
//! A 404 is not an error: it is classified as [`Outcome::NotFound`](crate::clients::Outcome::NotFound).
//!
//! - [`HttpError::Request`]: 400, the request was malformed
//! - [`HttpError::Authorization`]: 401, the token was rejected
//! - [`HttpError::RateLimitExceeded`]: 429, carries the reset delay
//! - [`HttpError::UnhandledClient`]: any other 4xx
//! - [`HttpError::Server`]: 5xx, carries the raw response body
//!
//! # Example
//!
//! ```rust,ignore
//! use tradegecko_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(outcome) => println!("{outcome:?}"),
//!     Err(HttpError::RateLimitExceeded(e)) => {
//!         println!("Throttled, retry in {:?} seconds", e.reset_seconds);
//!     }
//!     Err(HttpError::Authorization(e)) => println!("Bad token: {}", e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Details of a 4xx response that was classified as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP-{code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The message reported by the API, or the raw body when none was found.
    pub message: String,
    /// The `X-Request-Id` header value, if present.
    pub request_id: Option<String>,
}

/// Error returned for a 429 response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Rate limit exceeded (HTTP-429): {message}")]
pub struct RateLimitExceededError {
    /// The message reported by the API.
    pub message: String,
    /// Seconds until the limit resets (from `X-Rate-Limit-Reset`).
    pub reset_seconds: Option<u64>,
    /// The `X-Request-Id` header value, if present.
    pub request_id: Option<String>,
}

/// Error returned for a 5xx response.
///
/// The body at this tier is not guaranteed to be JSON, so it is kept verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("TradeGecko Server Error (HTTP-{code}). Details: {body}")]
pub struct ServerError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw, unparsed response body.
    pub body: String,
    /// The `X-Request-Id` header value, if present.
    pub request_id: Option<String>,
}

/// Error returned when a successful response body is not valid JSON.
#[derive(Debug, Error)]
#[error("Invalid JSON in HTTP-{code} response: {source}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The underlying parse failure.
    #[source]
    pub source: serde_json::Error,
}

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP 400: the API rejected the request as malformed.
    #[error("Request error: {0}")]
    Request(HttpResponseError),

    /// HTTP 401: the access token was missing, invalid or revoked.
    #[error("Authorization error: {0}")]
    Authorization(HttpResponseError),

    /// HTTP 429: the rate limit was exceeded.
    #[error(transparent)]
    RateLimitExceeded(#[from] RateLimitExceededError),

    /// Any 4xx other than 400, 401, 404 and 429.
    #[error("Unhandled client error: {0}")]
    UnhandledClient(HttpResponseError),

    /// HTTP 5xx.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// A successful response carried a body that is not JSON.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The transport failed before an HTTP response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) | Self::Authorization(e) | Self::UnhandledClient(e) => Some(e.code),
            Self::RateLimitExceeded(_) => Some(429),
            Self::Server(e) => Some(e.code),
            Self::Decode(e) => Some(e.code),
            Self::InvalidRequest(_) => None,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Returns the `X-Request-Id` of the failed response, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Request(e) | Self::Authorization(e) | Self::UnhandledClient(e) => {
                e.request_id.as_deref()
            }
            Self::RateLimitExceeded(e) => e.request_id.as_deref(),
            Self::Server(e) => e.request_id.as_deref(),
            Self::Decode(_) | Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_error(code: u16) -> HttpResponseError {
        HttpResponseError {
            code,
            message: "Something went wrong".to_string(),
            request_id: Some("req-1".to_string()),
        }
    }

    #[test]
    fn test_http_response_error_message_includes_status() {
        let error = response_error(400);
        assert_eq!(error.to_string(), "HTTP-400: Something went wrong");
    }

    #[test]
    fn test_server_error_message_contains_raw_body() {
        let error = ServerError {
            code: 502,
            body: "<html>Bad Gateway</html>".to_string(),
            request_id: None,
        };
        let message = error.to_string();
        assert!(message.contains("HTTP-502"));
        assert!(message.contains("<html>Bad Gateway</html>"));
    }

    #[test]
    fn test_rate_limit_error_message() {
        let error = RateLimitExceededError {
            message: "Too many requests".to_string(),
            reset_seconds: Some(42),
            request_id: None,
        };
        assert!(error.to_string().contains("Rate limit exceeded"));
        assert!(error.to_string().contains("Too many requests"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_status_accessor_per_variant() {
        assert_eq!(HttpError::Request(response_error(400)).status(), Some(400));
        assert_eq!(
            HttpError::Authorization(response_error(401)).status(),
            Some(401)
        );
        assert_eq!(
            HttpError::UnhandledClient(response_error(422)).status(),
            Some(422)
        );
        assert_eq!(
            HttpError::RateLimitExceeded(RateLimitExceededError {
                message: String::new(),
                reset_seconds: None,
                request_id: None,
            })
            .status(),
            Some(429)
        );
        assert_eq!(
            HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType).status(),
            None
        );
    }

    #[test]
    fn test_request_id_accessor() {
        let error = HttpError::Authorization(response_error(401));
        assert_eq!(error.request_id(), Some("req-1"));

        let error = HttpError::Server(ServerError {
            code: 500,
            body: String::new(),
            request_id: Some("req-2".to_string()),
        });
        assert_eq!(error.request_id(), Some("req-2"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &response_error(400);
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _: &dyn std::error::Error = &HttpError::Request(response_error(400));
    }
}
