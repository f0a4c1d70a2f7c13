//! Documents returned by the content store's post and category queries.

use crate::block::Block;
use crate::de::{lenient_optional_blocks, null_as_default};
use serde::Deserialize;

/// `slug` object (`{ "current": "my-post" }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SlugRef {
    /// Current slug value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: String,
}

/// A blog post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// URL slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: SlugRef,
    /// Author-written summary.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Publication timestamp (ISO-8601).
    #[serde(default)]
    pub published_at: Option<String>,
    /// Body blocks; `None` when the query returned no body.
    #[serde(default, deserialize_with = "lenient_optional_blocks")]
    pub body: Option<Vec<Block>>,
    /// Categories the post belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<CategoryRef>,
}

impl Post {
    /// The excerpt, if present and not blank.
    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Body blocks as a slice, if any.
    pub fn body(&self) -> Option<&[Block]> {
        self.body.as_deref()
    }
}

/// Dereferenced category summary embedded in a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryRef {
    /// Category title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Category slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: SlugRef,
}

/// A post category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Category title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Category slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: SlugRef,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    /// The description, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
