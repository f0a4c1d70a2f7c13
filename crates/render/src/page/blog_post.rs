//! Single post page.

use super::SiteInfo;
use super::layout::{Chrome, Page};
use super::meta::{Social, social_tags};
use crate::renderer::{RenderOptions, render};
use folio_core::{Post, escape_html, escape_text, first_paragraph, format_date};

/// Description used for a post's meta tags.
///
/// The excerpt when present, otherwise the first substantial paragraph of the
/// body, otherwise the site's default description.
pub fn post_description(post: &Post, site: &SiteInfo) -> String {
    post.excerpt()
        .map(str::to_string)
        .or_else(|| first_paragraph(post.body()))
        .unwrap_or_else(|| site.default_description.clone())
}

/// Renders the complete HTML page for a post.
pub fn blog_post_page(post: &Post, site: &SiteInfo, options: &RenderOptions) -> String {
    let description = post_description(post, site);
    let url = site.absolute_url(&site.post_path(&post.slug.current));
    let meta = social_tags(
        site,
        &Social {
            kind: "article",
            url: &url,
            title: &post.title,
            description: &description,
        },
    );

    let mut body = String::new();
    body.push_str(r#"<main class="blog-main"><div class="blog-container">"#);
    body.push_str(&format!(
        r#"<div class="back-nav"><a href="{}" class="back-link">← Back to Blog</a></div>"#,
        escape_html(&site.blog_index)
    ));
    body.push_str(r#"<article class="article-content"><div class="article-body">"#);
    body.push_str(&format!("<h1>{}</h1>", escape_text(&post.title)));

    if let Some(published) = post.published_at.as_deref().filter(|d| !d.is_empty()) {
        body.push_str(&format!(
            r#"<div class="article-meta"><time datetime="{}">{}</time></div>"#,
            escape_html(published),
            escape_text(&format_date(published))
        ));
    }

    let categories: Vec<_> = post
        .categories
        .iter()
        .filter(|c| !c.slug.current.is_empty())
        .collect();
    if !categories.is_empty() {
        body.push_str(r#"<div class="post-categories-header">"#);
        for category in categories {
            body.push_str(&format!(
                r#"<a href="{}" class="post-category-tag">{}</a>"#,
                escape_html(&site.category_path(&category.slug.current)),
                escape_text(&category.title)
            ));
        }
        body.push_str("</div>");
    }

    if let Some(excerpt) = post.excerpt() {
        body.push_str(&format!(
            r#"<div class="article-excerpt">{}</div>"#,
            escape_text(excerpt)
        ));
    }

    body.push_str(&render(post.body(), options));
    body.push_str("</div></article></div></main>");

    Page {
        title: format!("{} - {}", post.title, site.name),
        meta,
        body,
        chrome: Chrome::Full,
    }
    .render(site)
}
