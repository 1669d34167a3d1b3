//! Configuration types for the TradeGecko API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TradeGeckoConfig`]: The configuration record handed to the client
//! - [`TradeGeckoConfigBuilder`]: A builder for constructing [`TradeGeckoConfig`] instances
//! - [`ApiToken`]: A validated access token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use tradegecko_api::{ApiToken, TradeGeckoConfig};
//!
//! let config = TradeGeckoConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.tradegecko.com/");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl, DEFAULT_BASE_URL};

use crate::error::ConfigError;

/// Configuration for the TradeGecko API client.
///
/// Created once and never mutated. `TradeGeckoConfig` is `Clone`, `Send`,
/// and `Sync`; hold one per access token.
#[derive(Clone, Debug)]
pub struct TradeGeckoConfig {
    api_token: ApiToken,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl TradeGeckoConfig {
    /// Creates a new builder for constructing a `TradeGeckoConfig`.
    #[must_use]
    pub fn builder() -> TradeGeckoConfigBuilder {
        TradeGeckoConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify TradeGeckoConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TradeGeckoConfig>();
};

/// Builder for constructing [`TradeGeckoConfig`] instances.
///
/// `api_token` is required.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use tradegecko_api::{ApiToken, BaseUrl, TradeGeckoConfig};
///
/// let config = TradeGeckoConfig::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .base_url(BaseUrl::new("https://proxy.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct TradeGeckoConfigBuilder {
    api_token: Option<ApiToken>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl TradeGeckoConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`TradeGeckoConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not set.
    pub fn build(self) -> Result<TradeGeckoConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(TradeGeckoConfig {
            api_token,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
