//! Query option encoding for REST requests.
//!
//! All operations share one canonical encoding:
//!
//! - Recognized keys are emitted in a fixed order (`ids`, `page`, `limit`,
//!   `updated_at_min`, `updated_at_max`, `created_at_min`, `created_at_max`,
//!   `include`), followed by the extra parameters sorted by key.
//! - Keys without a value are skipped; nothing to emit means no `?` suffix.
//! - Each key appears at most once. Extra parameters named after a
//!   recognized key are dropped; use the typed setter instead.
//! - Keys and values are percent-encoded.
//! - `ids` is emitted once, its elements encoded individually and joined
//!   with a literal `,`.
//! - Timestamps are RFC 3339 UTC with second precision.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Keys owned by the typed fields of [`QueryOptions`], in emission order.
const RECOGNIZED_KEYS: [&str; 8] = [
    "ids",
    "page",
    "limit",
    "updated_at_min",
    "updated_at_max",
    "created_at_min",
    "created_at_max",
    "include",
];

/// Filters and pagination options for a single request.
///
/// # Example
///
/// ```rust
/// use tradegecko_api::QueryOptions;
///
/// let options = QueryOptions::new()
///     .ids([12, 34])
///     .limit(25)
///     .include("variants")
///     .param("status", "active");
///
/// assert_eq!(
///     options.encode(),
///     "ids=12,34&limit=25&include=variants&status=active"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Restrict results to these resource ids.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    /// Page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    /// Related resources to side-load (e.g. `variants,images`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    /// Any other parameters, passed through verbatim. Entries keyed by a
    /// recognized key (`limit`, `page`, ...) are never emitted.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl QueryOptions {
    /// Creates an empty set of options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id list.
    #[must_use]
    pub fn ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.ids = ids.into_iter().map(|id| id.to_string()).collect();
        self
    }

    /// Sets the page.
    #[must_use]
    pub fn page(mut self, page: impl ToString) -> Self {
        self.page = Some(page.to_string());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only return resources updated at or after this instant.
    #[must_use]
    pub fn updated_at_min(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at_min = Some(at);
        self
    }

    /// Only return resources updated at or before this instant.
    #[must_use]
    pub fn updated_at_max(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at_max = Some(at);
        self
    }

    /// Only return resources created at or after this instant.
    #[must_use]
    pub fn created_at_min(mut self, at: DateTime<Utc>) -> Self {
        self.created_at_min = Some(at);
        self
    }

    /// Only return resources created at or before this instant.
    #[must_use]
    pub fn created_at_max(mut self, at: DateTime<Utc>) -> Self {
        self.created_at_max = Some(at);
        self
    }

    /// Sets the include directive.
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Adds an extra parameter. A later call with the same key replaces the value.
    ///
    /// Recognized keys such as `limit` or `ids` are ignored at encoding time.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Returns `true` if encoding would produce an empty query string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Encodes the options into a query string without the leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Encoded `(key, value)` pairs in emission order.
    fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if !self.ids.is_empty() {
            let joined = self
                .ids
                .iter()
                .map(|id| encode_component(id))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("ids".to_string(), joined));
        }
        if let Some(page) = self.page.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("page".to_string(), encode_component(page)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        let bounds = [
            ("updated_at_min", self.updated_at_min),
            ("updated_at_max", self.updated_at_max),
            ("created_at_min", self.created_at_min),
            ("created_at_max", self.created_at_max),
        ];
        for (key, at) in bounds {
            if let Some(at) = at {
                pairs.push((key.to_string(), encode_component(&format_timestamp(at))));
            }
        }

        if let Some(include) = self.include.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("include".to_string(), encode_component(include)));
        }
        for (key, value) in &self.params {
            if RECOGNIZED_KEYS.contains(&key.as_str()) {
                continue;
            }
            pairs.push((encode_component(key), encode_component(value)));
        }

        pairs
    }
}

/// Encodes optional options; `None` and empty options both yield `None`.
pub(crate) fn encode_query(options: Option<&QueryOptions>) -> Option<String> {
    options.map(QueryOptions::encode).filter(|q| !q.is_empty())
}

fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
