//! GROQ queries and their URL encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

/// Bytes left unescaped by `encodeURIComponent`: alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a URL query component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// A single post with its body and categories.
pub const POST_QUERY: &str = r#"*[_type == "post" && slug.current == $slug][0] {
  title,
  slug,
  excerpt,
  publishedAt,
  body,
  categories[]->{title, slug}
}"#;

/// A single category.
pub const CATEGORY_QUERY: &str = r#"*[_type == "category" && slug.current == $slug][0] {
  title,
  slug,
  description
}"#;

/// Published posts referencing a category, newest first.
pub const POSTS_IN_CATEGORY_QUERY: &str = r#"*[_type == "post" && references(*[_type == "category" && slug.current == $slug]._id) && defined(publishedAt)] | order(publishedAt desc) {
  title,
  slug,
  excerpt,
  publishedAt,
  categories[]->{title, slug}
}"#;

/// A GROQ query with bound `$name` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GroqQuery {
    text: String,
    params: Vec<(String, Value)>,
}

impl GroqQuery {
    /// Creates a query without parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
        }
    }

    /// Binds `$name` to `value`. Names are given without the `$`.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// The query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bound parameters in binding order.
    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    /// `query=<text>&$name=<json>...`, every value percent-encoded.
    pub fn query_string(&self) -> String {
        let mut out = format!("query={}", encode_component(&self.text));
        for (name, value) in &self.params {
            out.push_str(&format!(
                "&${}={}",
                encode_component(name),
                encode_component(&value.to_string())
            ));
        }
        out
    }

    /// Query for one post by slug.
    pub fn post(slug: &str) -> Self {
        Self::new(POST_QUERY).param("slug", slug)
    }

    /// Query for one category by slug.
    pub fn category(slug: &str) -> Self {
        Self::new(CATEGORY_QUERY).param("slug", slug)
    }

    /// Query for the published posts of a category.
    pub fn posts_in_category(slug: &str) -> Self {
        Self::new(POSTS_IN_CATEGORY_QUERY).param("slug", slug)
    }
}
