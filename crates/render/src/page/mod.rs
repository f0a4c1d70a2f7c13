//! Full-page assembly around rendered content.
//!
//! Each page function returns a complete HTML document: head with title and
//! social-sharing metadata, site navigation, page body and footer. All text
//! taken from content documents is escaped here.

mod blog_post;
mod category;
mod error;
mod layout;
mod meta;

pub use blog_post::{blog_post_page, post_description};
pub use category::{article_count, category_page};
pub use error::error_page;

use serde::{Deserialize, Serialize};

/// Site-wide presentation settings used by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteInfo {
    /// Site / author name used in titles, the logo and `og:site_name`.
    pub name: String,
    /// Absolute origin used for canonical and `og:url` links.
    pub base_url: String,
    /// Absolute URL of the social preview image.
    pub og_image: Option<String>,
    /// Twitter handle including `@`.
    pub twitter_handle: Option<String>,
    /// Description used when a post has neither excerpt nor a usable paragraph.
    pub default_description: String,
    /// Google Analytics measurement id (`G-XXXXXXX`).
    pub analytics_id: Option<String>,
    /// Home page path.
    pub home: String,
    /// Blog index path.
    pub blog_index: String,
    /// Stylesheet path.
    pub stylesheet: String,
    /// Client script path.
    pub script: String,
    /// Navigation links.
    pub nav: Vec<NavLink>,
    /// Footer text; defaults to a copyright line with the site name.
    pub footer: Option<String>,
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible label.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl NavLink {
    /// Creates a navigation entry.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Folio".to_string(),
            base_url: "http://localhost:3000".to_string(),
            og_image: None,
            twitter_handle: None,
            default_description: "Read the latest insights on product leadership and strategy."
                .to_string(),
            analytics_id: None,
            home: "/index.html".to_string(),
            blog_index: "/blog.html".to_string(),
            stylesheet: "/styles.css".to_string(),
            script: "/script.js".to_string(),
            nav: vec![
                NavLink::new("Home", "/index.html"),
                NavLink::new("Experience", "/resume.html"),
                NavLink::new("Testimonials", "/testimonials.html"),
                NavLink::new("Blog", "/blog.html"),
                NavLink::new("Contact", "/index.html#contact"),
            ],
            footer: None,
        }
    }
}

impl SiteInfo {
    /// Path of a blog post page.
    pub fn post_path(&self, slug: &str) -> String {
        format!("/blog/{}", slug)
    }

    /// Path of a category page.
    pub fn category_path(&self, slug: &str) -> String {
        format!("/category/{}", slug)
    }

    /// Joins `path` onto the site origin.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Footer text.
    pub fn footer_text(&self) -> String {
        self.footer
            .clone()
            .unwrap_or_else(|| format!("© {}. All rights reserved.", self.name))
    }
}
