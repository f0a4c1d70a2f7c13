use super::{ContentConfig, GroqQuery};
use crate::error::ContentError;
use folio_core::{Category, Post};
use serde_json::Value;

/// Performs an HTTP GET and returns the decoded JSON body.
///
/// Implementations map non-success statuses to [`ContentError::Status`] and
/// connection failures to [`ContentError::Transport`].
pub trait ContentTransport {
    /// Fetches `url` and parses the body as JSON.
    fn get_json(&self, url: &str) -> Result<Value, ContentError>;
}

impl<T: ContentTransport + ?Sized> ContentTransport for &T {
    fn get_json(&self, url: &str) -> Result<Value, ContentError> {
        (**self).get_json(url)
    }
}

/// Typed queries against the content store.
#[derive(Debug, Clone)]
pub struct ContentClient<T> {
    config: ContentConfig,
    transport: T,
}

impl<T: ContentTransport> ContentClient<T> {
    /// Creates a client for `config` over `transport`.
    pub fn new(config: ContentConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Store coordinates.
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Runs `query` and returns its `result` member, `Null` when absent.
    pub fn query(&self, query: &GroqQuery) -> Result<Value, ContentError> {
        let url = self.config.query_url(query);
        log::debug!("Content query: {}", url);

        let mut response = self.transport.get_json(&url)?;
        if let Some(error) = response.get("error") {
            return Err(ContentError::Api(describe_error(error)));
        }
        Ok(response
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    /// Fetches a post by slug. `Ok(None)` when no post matches.
    pub fn fetch_post(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        let result = self.query(&GroqQuery::post(slug))?;
        if result.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(result)?))
    }

    /// Fetches a category by slug. `Ok(None)` when no category matches.
    pub fn fetch_category(&self, slug: &str) -> Result<Option<Category>, ContentError> {
        let result = self.query(&GroqQuery::category(slug))?;
        if result.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(result)?))
    }

    /// Fetches the published posts in a category, newest first.
    pub fn fetch_posts_in_category(&self, slug: &str) -> Result<Vec<Post>, ContentError> {
        let result = self.query(&GroqQuery::posts_in_category(slug))?;
        if result.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(result)?)
    }
}

fn describe_error(error: &Value) -> String {
    error
        .get("description")
        .or_else(|| error.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| error.as_str().map(str::to_string))
        .unwrap_or_else(|| error.to_string())
}
