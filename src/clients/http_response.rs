//! HTTP response types for the TradeGecko API client.
//!
//! Every HTTP response, whatever its status, is normalized into an
//! [`HttpResponse`] before it is classified.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Rate limit information parsed from the `X-Rate-Limit-*` headers.
///
/// A header that is missing or unparseable yields `None` for its field.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tradegecko_api::clients::RateLimitState;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-limit".to_string(), vec!["300".to_string()]);
/// headers.insert("x-rate-limit-remaining".to_string(), vec!["299".to_string()]);
///
/// let state = RateLimitState::from_headers(&headers);
/// assert_eq!(state.limit, Some(300));
/// assert_eq!(state.remaining, Some(299));
/// assert_eq!(state.reset_seconds, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitState {
    /// Requests allowed in the current window (`X-Rate-Limit-Limit`).
    pub limit: Option<u64>,
    /// Requests left in the current window (`X-Rate-Limit-Remaining`).
    pub remaining: Option<u64>,
    /// Seconds until the window resets (`X-Rate-Limit-Reset`).
    pub reset_seconds: Option<u64>,
    /// Identifier of the last request (`X-Request-Id`).
    pub request_id: Option<String>,
}

impl RateLimitState {
    /// Extracts rate limit state from lowercase-keyed response headers.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(|value| value.trim())
        };
        let number = |name: &str| first(name).and_then(|value| value.parse::<u64>().ok());

        Self {
            limit: number("x-rate-limit-limit"),
            remaining: number("x-rate-limit-remaining"),
            reset_seconds: number("x-rate-limit-reset"),
            request_id: first("x-request-id")
                .filter(|value| !value.is_empty())
                .map(String::from),
        }
    }

    /// Returns `true` if the last response reported no requests remaining.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

/// An HTTP response from the TradeGecko API.
///
/// Holds the status code, the headers, and the raw body text. The body is
/// only decoded during classification, because 5xx bodies are not
/// guaranteed to be JSON.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Rate limit information parsed from the headers.
    pub rate_limit: RateLimitState,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    ///
    /// Header names are lowercased so lookups are case-insensitive.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::new();
        for (key, values) in headers {
            normalized
                .entry(key.to_lowercase())
                .or_default()
                .extend(values);
        }
        let rate_limit = RateLimitState::from_headers(&normalized);

        Self {
            code,
            headers: normalized,
            body: body.into(),
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.rate_limit.request_id.as_deref()
    }

    /// Returns `true` if the body is empty or whitespace.
    #[must_use]
    pub fn has_empty_body(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Extracts a human-readable error message from the body.
    ///
    /// Looks for `message`, then `error`, then `errors` in a JSON body and
    /// falls back to the raw body text.
    #[must_use]
    pub fn error_message(&self) -> String {
        let parsed = self.json().ok();
        let field = parsed.as_ref().and_then(|body| {
            ["message", "error", "errors"]
                .iter()
                .find_map(|key| body.get(*key))
        });

        match field {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => self.body.trim().to_string(),
        }
    }
}
