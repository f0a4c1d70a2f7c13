//! `<meta>` tags for search engines and social previews.

use super::SiteInfo;
use folio_core::escape_html;

/// A single `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MetaTag {
    /// `<meta property="..." content="...">` (Open Graph).
    Property(&'static str, String),
    /// `<meta name="..." content="...">`.
    Name(&'static str, String),
}

impl MetaTag {
    pub(crate) fn to_html(&self) -> String {
        let (attr, key, content) = match self {
            MetaTag::Property(key, content) => ("property", key, content),
            MetaTag::Name(key, content) => ("name", key, content),
        };
        format!(
            r#"<meta {}="{}" content="{}">"#,
            attr,
            key,
            escape_html(content)
        )
    }
}

/// What a page says about itself when shared.
pub(crate) struct Social<'a> {
    /// `og:type` (`article` or `website`).
    pub kind: &'static str,
    pub url: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

/// Description, Open Graph and Twitter card tags for a page.
pub(crate) fn social_tags(site: &SiteInfo, social: &Social<'_>) -> Vec<MetaTag> {
    let mut tags = vec![
        MetaTag::Name("description", social.description.to_string()),
        MetaTag::Property("og:type", social.kind.to_string()),
        MetaTag::Property("og:site_name", site.name.clone()),
        MetaTag::Property("og:url", social.url.to_string()),
        MetaTag::Property("og:title", social.title.to_string()),
        MetaTag::Property("og:description", social.description.to_string()),
    ];
    if let Some(image) = &site.og_image {
        tags.push(MetaTag::Property("og:image", image.clone()));
    }

    let card = if site.og_image.is_some() {
        "summary_large_image"
    } else {
        "summary"
    };
    tags.push(MetaTag::Name("twitter:card", card.to_string()));
    if let Some(handle) = &site.twitter_handle {
        tags.push(MetaTag::Name("twitter:site", handle.clone()));
    }
    tags.push(MetaTag::Name("twitter:title", social.title.to_string()));
    tags.push(MetaTag::Name(
        "twitter:description",
        social.description.to_string(),
    ));
    if let Some(image) = &site.og_image {
        tags.push(MetaTag::Name("twitter:image", image.clone()));
    }
    tags
}
