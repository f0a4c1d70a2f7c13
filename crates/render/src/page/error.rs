use super::SiteInfo;
use super::layout::{Chrome, Page};
use super::meta::MetaTag;
use folio_core::{escape_html, escape_text};

/// Renders a minimal error page showing `message` with a link back to the
/// blog index.
pub fn error_page(message: &str, site: &SiteInfo) -> String {
    let body = format!(
        r#"<main class="error-main"><div class="container"><h1>{}</h1><p><a href="{}" class="back-link">Return to Blog</a></p></div></main>"#,
        escape_text(message),
        escape_html(&site.blog_index)
    );
    Page {
        title: format!("Error - {}", site.name),
        meta: vec![MetaTag::Name("robots", "noindex".to_string())],
        body,
        chrome: Chrome::Minimal,
    }
    .render(site)
}
