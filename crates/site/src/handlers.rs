//! Request handlers: slug in, finished response out.
//!
//! Handlers never fail. Missing slugs answer 400 with a JSON error, missing
//! documents 404 and store failures 500, the latter two as HTML error pages.

use crate::config::SiteConfig;
use crate::content::{ContentClient, ContentTransport};
use crate::error::{ConfigError, ContentError};
use folio_core::{Category, Post};
use folio_render::{RenderOptions, SiteInfo, blog_post_page, category_page, error_page};
use serde_json::json;

/// `Content-Type` of page responses.
pub const HTML: &str = "text/html";
/// `Content-Type` of error payloads.
pub const JSON: &str = "application/json";

/// An HTTP response ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header value.
    pub content_type: &'static str,
    /// Response body.
    pub body: String,
}

impl PageResponse {
    /// An HTML response.
    pub fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: HTML,
            body,
        }
    }

    /// A JSON `{"error": message}` response.
    pub fn json_error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: JSON,
            body: json!({ "error": message }).to_string(),
        }
    }
}

fn required_slug(slug: Option<&str>) -> Option<&str> {
    slug.map(str::trim).filter(|s| !s.is_empty())
}

/// The site: content client plus presentation settings.
#[derive(Debug, Clone)]
pub struct Site<T> {
    client: ContentClient<T>,
    info: SiteInfo,
    options: RenderOptions,
}

impl<T: ContentTransport> Site<T> {
    /// Builds a site from validated configuration.
    pub fn new(config: SiteConfig, transport: T) -> Result<Self, ConfigError> {
        config.validate()?;
        let options = config.render_options();
        Ok(Self {
            client: ContentClient::new(config.content, transport),
            info: config.site,
            options,
        })
    }

    /// Presentation settings.
    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    fn error(&self, status: u16, message: &str) -> PageResponse {
        PageResponse::html(status, error_page(message, &self.info))
    }

    /// Serves `/blog/<slug>`.
    pub fn blog_post(&self, slug: Option<&str>) -> PageResponse {
        let Some(slug) = required_slug(slug) else {
            return PageResponse::json_error(400, "Slug is required");
        };

        match self.client.fetch_post(slug) {
            Ok(Some(post)) => {
                PageResponse::html(200, blog_post_page(&post, &self.info, &self.options))
            }
            Ok(None) => self.error(404, "Post not found"),
            Err(err) => {
                log::error!("Error loading post '{}': {}", slug, err);
                self.error(500, "Failed to load post")
            }
        }
    }

    fn load_category(&self, slug: &str) -> Result<Option<(Category, Vec<Post>)>, ContentError> {
        let category = self.client.fetch_category(slug)?;
        let posts = self.client.fetch_posts_in_category(slug)?;
        Ok(category.map(|category| (category, posts)))
    }

    /// Serves `/category/<slug>`.
    pub fn category(&self, slug: Option<&str>) -> PageResponse {
        let Some(slug) = required_slug(slug) else {
            return PageResponse::json_error(400, "Category slug is required");
        };

        match self.load_category(slug) {
            Ok(Some((category, posts))) => {
                PageResponse::html(200, category_page(&category, &posts, &self.info))
            }
            Ok(None) => self.error(404, "Category not found"),
            Err(err) => {
                log::error!("Error loading category page '{}': {}", slug, err);
                self.error(500, "Failed to load category page")
            }
        }
    }
}
