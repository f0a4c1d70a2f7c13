//! Content-store access.
//!
//! Queries go to the store's HTTP query endpoint. The HTTP call itself sits
//! behind [`ContentTransport`] so callers pick the client and tests can swap
//! in canned responses.

mod client;
mod query;

pub use client::{ContentClient, ContentTransport};
pub use query::{
    CATEGORY_QUERY, GroqQuery, POST_QUERY, POSTS_IN_CATEGORY_QUERY, encode_component,
};

use crate::error::ConfigError;
use serde::Deserialize;

/// Coordinates of the content store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentConfig {
    /// Project identifier.
    pub project_id: String,
    /// Dataset name.
    pub dataset: String,
    /// API version date, with or without a leading `v`.
    pub api_version: String,
    /// Query the edge cache instead of the live API.
    pub use_cdn: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: false,
        }
    }
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl ContentConfig {
    /// Creates a config for `project_id`/`dataset` with default API settings.
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            ..Default::default()
        }
    }

    /// Checks that the identifiers are usable inside a URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_identifier(&self.project_id) {
            return Err(ConfigError::Invalid(format!(
                "project id '{}' must be non-empty and alphanumeric",
                self.project_id
            )));
        }
        if !is_identifier(&self.dataset) {
            return Err(ConfigError::Invalid(format!(
                "dataset '{}' must be non-empty and alphanumeric",
                self.dataset
            )));
        }
        let version = self.api_version.trim_start_matches('v');
        if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit() || c == '-') {
            return Err(ConfigError::Invalid(format!(
                "api version '{}' must be a date like 2024-01-01",
                self.api_version
            )));
        }
        Ok(())
    }

    /// Base query endpoint.
    pub fn endpoint(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id,
            host,
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }

    /// Full request URL for `query`.
    pub fn query_url(&self, query: &GroqQuery) -> String {
        format!("{}?{}", self.endpoint(), query.query_string())
    }
}
