//! Category listing page.

use super::SiteInfo;
use super::layout::{Chrome, Page};
use super::meta::{Social, social_tags};
use folio_core::{Category, Post, escape_html, escape_text, format_date};

/// "1 article" / "N articles".
pub fn article_count(count: usize) -> String {
    if count == 1 {
        "1 article".to_string()
    } else {
        format!("{} articles", count)
    }
}

fn post_card(post: &Post, site: &SiteInfo) -> String {
    let href = escape_html(&site.post_path(&post.slug.current));
    let label = match post.categories.first() {
        Some(category) if !category.slug.current.is_empty() => format!(
            r#"<a href="{}" class="category-link">{}</a>"#,
            escape_html(&site.category_path(&category.slug.current)),
            escape_text(&category.title.to_uppercase())
        ),
        _ => "ARTICLE".to_string(),
    };

    let mut card = String::from(r#"<article class="content-card">"#);
    card.push_str(&format!(r#"<div class="content-type">{}</div>"#, label));
    card.push_str(r#"<div class="content-body">"#);
    card.push_str(&format!(
        r#"<h3><a href="{}">{}</a></h3>"#,
        href,
        escape_text(&post.title)
    ));
    if let Some(published) = post.published_at.as_deref().filter(|d| !d.is_empty()) {
        card.push_str(&format!(
            r#"<p class="muted">{}</p>"#,
            escape_text(&format_date(published))
        ));
    }
    card.push_str(&format!(
        "<p>{}</p>",
        escape_text(post.excerpt().unwrap_or("No excerpt available."))
    ));
    card.push_str(&format!(
        r#"<p class="read-more"><a href="{}">Read the full article</a></p>"#,
        href
    ));
    card.push_str("</div></article>");
    card
}

/// Renders the listing page for a category and its posts, newest first as
/// given.
pub fn category_page(category: &Category, posts: &[Post], site: &SiteInfo) -> String {
    let count = article_count(posts.len());
    let description = category
        .description()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} about {}", count, category.title.to_lowercase()));
    let url = site.absolute_url(&site.category_path(&category.slug.current));
    let title = format!("{} - {}", category.title, site.name);
    let meta = social_tags(
        site,
        &Social {
            kind: "website",
            url: &url,
            title: &title,
            description: &description,
        },
    );

    let mut body = String::new();
    body.push_str(r#"<section class="category-hero"><div class="container">"#);
    body.push_str(&format!(
        r#"<h1 class="category-title">{}</h1>"#,
        escape_text(&category.title)
    ));
    if let Some(text) = category.description() {
        body.push_str(&format!(
            r#"<p class="category-description">{}</p>"#,
            escape_text(text)
        ));
    }
    body.push_str(&format!(r#"<p class="posts-count">{}</p>"#, count));
    body.push_str("</div></section>");

    body.push_str(r#"<main class="main-content"><section class="section"><div class="container">"#);
    body.push_str(&format!(
        r#"<div class="back-nav"><a href="{}" class="back-link">← Back to All Articles</a></div>"#,
        escape_html(&site.blog_index)
    ));
    body.push_str(r#"<div class="thought-leadership-grid">"#);
    if posts.is_empty() {
        body.push_str(r#"<p class="empty-state">No articles found in this category yet.</p>"#);
    } else {
        for post in posts {
            body.push_str(&post_card(post, site));
        }
    }
    body.push_str("</div></div></section></main>");

    Page {
        title,
        meta,
        body,
        chrome: Chrome::Full,
    }
    .render(site)
}
