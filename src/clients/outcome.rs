//! Response classification.
//!
//! [`classify`] maps a normalized [`HttpResponse`] onto an [`Outcome`] or a
//! typed [`HttpError`]. It performs no I/O, so every status branch can be
//! exercised without a network.
//!
//! | Status            | Result                                        |
//! |-------------------|-----------------------------------------------|
//! | 204               | `Ok(Outcome::NoContent)`                      |
//! | other 2xx         | `Ok(Outcome::Payload(json))`                  |
//! | 404               | `Ok(Outcome::NotFound)`                       |
//! | 400               | `Err(HttpError::Request)`                     |
//! | 401               | `Err(HttpError::Authorization)`               |
//! | 429               | `Err(HttpError::RateLimitExceeded)`           |
//! | other 4xx         | `Err(HttpError::UnhandledClient)`             |
//! | 5xx               | `Err(HttpError::Server)` with the raw body    |
//! | anything else     | `Ok` with the body as-is                      |

use serde::de::DeserializeOwned;

use crate::clients::errors::{
    DecodeError, HttpError, HttpResponseError, RateLimitExceededError, ServerError,
};
use crate::clients::http_response::HttpResponse;

/// The result of a request that did not fail.
///
/// `NoContent` and `NotFound` are distinct: the first is a successful call
/// with nothing to return, the second is a missing resource.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A response body decoded as JSON.
    Payload(serde_json::Value),
    /// A successful response without a body (e.g. 204).
    NoContent,
    /// The resource does not exist (404).
    NotFound,
}

impl Outcome {
    /// Returns the payload, if there is one.
    #[must_use]
    pub const fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Payload(value) => Some(value),
            Self::NoContent | Self::NotFound => None,
        }
    }

    /// Consumes the outcome, returning the payload if there is one.
    #[must_use]
    pub fn into_payload(self) -> Option<serde_json::Value> {
        match self {
            Self::Payload(value) => Some(value),
            Self::NoContent | Self::NotFound => None,
        }
    }

    /// Returns `true` for [`Outcome::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Deserializes the payload into a caller-supplied type.
    ///
    /// Returns `Ok(None)` for `NoContent` and `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the payload does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<Option<T>, serde_json::Error> {
        self.into_payload().map(serde_json::from_value).transpose()
    }
}

/// Classifies a response by status code.
///
/// # Errors
///
/// Returns an [`HttpError`] for 4xx (except 404) and 5xx responses, and
/// [`HttpError::Decode`] when a 2xx body is not valid JSON.
pub fn classify(response: &HttpResponse) -> Result<Outcome, HttpError> {
    let code = response.code;
    match code {
        204 => Ok(Outcome::NoContent),
        200..=299 => decode_payload(response),
        404 => {
            tracing::debug!("HTTP-404, returning not found: {}", response.error_message());
            Ok(Outcome::NotFound)
        }
        400..=499 => Err(client_error(response)),
        500.. => {
            tracing::warn!("TradeGecko server error HTTP-{}", code);
            Err(HttpError::Server(ServerError {
                code,
                body: response.body.clone(),
                request_id: response.request_id().map(String::from),
            }))
        }
        _ => Ok(passthrough_payload(response)),
    }
}

fn decode_payload(response: &HttpResponse) -> Result<Outcome, HttpError> {
    if response.has_empty_body() {
        return Ok(Outcome::NoContent);
    }
    response.json().map(Outcome::Payload).map_err(|source| {
        HttpError::Decode(DecodeError {
            code: response.code,
            body: response.body.clone(),
            source,
        })
    })
}

/// Bodies of unexpected statuses are returned as JSON when possible and as a
/// JSON string otherwise.
fn passthrough_payload(response: &HttpResponse) -> Outcome {
    if response.has_empty_body() {
        return Outcome::NoContent;
    }
    let body = response
        .json()
        .unwrap_or_else(|_| serde_json::Value::String(response.body.clone()));
    Outcome::Payload(body)
}

fn client_error(response: &HttpResponse) -> HttpError {
    let code = response.code;
    let message = response.error_message();
    let request_id = response.request_id().map(String::from);
    tracing::debug!("Client error HTTP-{}: {}", code, message);

    match code {
        429 => {
            tracing::warn!(
                "TradeGecko rate limit exceeded, resets in {:?} seconds",
                response.rate_limit.reset_seconds
            );
            HttpError::RateLimitExceeded(RateLimitExceededError {
                message,
                reset_seconds: response.rate_limit.reset_seconds,
                request_id,
            })
        }
        _ => {
            let error = HttpResponseError {
                code,
                message,
                request_id,
            };
            match code {
                400 => HttpError::Request(error),
                401 => HttpError::Authorization(error),
                _ => HttpError::UnhandledClient(error),
            }
        }
    }
}
