//! Document shell shared by all pages.

use super::SiteInfo;
use super::meta::MetaTag;
use folio_core::{escape_html, escape_text};

/// Which parts of the site chrome a page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Chrome {
    /// Navigation with mobile toggle, footer and client script.
    Full,
    /// Navigation only.
    Minimal,
}

/// An assembled page before it is written out.
pub(crate) struct Page {
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub body: String,
    pub chrome: Chrome,
}

impl Page {
    pub(crate) fn render(&self, site: &SiteInfo) -> String {
        let mut html = String::with_capacity(self.body.len() + 2048);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("<title>{}</title>\n", escape_text(&self.title)));
        for tag in &self.meta {
            html.push_str(&tag.to_html());
            html.push('\n');
        }
        html.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_html(&site.stylesheet)
        ));
        if let Some(snippet) = analytics_snippet(site) {
            html.push_str(&snippet);
        }
        html.push_str("</head>\n<body>\n");

        html.push_str(&navigation(site, self.chrome));
        html.push_str(&self.body);
        html.push('\n');

        if self.chrome == Chrome::Full {
            html.push_str(&format!(
                "<footer class=\"footer\"><div class=\"container\"><p>{}</p></div></footer>\n",
                escape_text(&site.footer_text())
            ));
            html.push_str(&format!(
                "<script src=\"{}\"></script>\n",
                escape_html(&site.script)
            ));
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

fn navigation(site: &SiteInfo, chrome: Chrome) -> String {
    let mut nav = String::from("<header class=\"header\"><nav class=\"nav\">");
    nav.push_str(&format!(
        "<a href=\"{}\" class=\"logo\">{}</a>",
        escape_html(&site.home),
        escape_text(&site.name)
    ));
    if chrome == Chrome::Full {
        nav.push_str("<div class=\"nav-toggle\"><span></span><span></span><span></span></div>");
    }
    nav.push_str("<ul class=\"nav-links\">");
    for link in &site.nav {
        nav.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&link.href),
            escape_text(&link.label)
        ));
    }
    nav.push_str("</ul></nav></header>\n");
    nav
}

/// Google Analytics loader, when a well-formed measurement id is configured.
fn analytics_snippet(site: &SiteInfo) -> Option<String> {
    let id = site.analytics_id.as_deref()?.trim();
    if id.is_empty() {
        return None;
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        log::warn!("Ignoring malformed analytics id: {}", id);
        return None;
    }
    Some(format!(
        "<script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\n\
         <script>window.dataLayer = window.dataLayer || [];\
         function gtag(){{dataLayer.push(arguments);}}\
         gtag('js', new Date());gtag('config', '{id}');</script>\n"
    ))
}
