//! Structured-content block to HTML renderer.
//!
//! Converts an ordered sequence of content blocks (paragraphs, headings,
//! list items, images, code, tables, embeds, callouts, dividers) into a
//! single well-formed HTML fragment. Rendering is a pure function of the
//! blocks and the [`RenderOptions`].
//!
//! # Module Structure
//!
//! - `context` - Output buffer and open-list state
//! - `render` - Per-kind block rendering functions
//! - `spans` - Inline span and mark rendering

mod context;
pub mod render;
mod spans;

pub use context::Context;
pub use spans::{render_span, render_spans};

use crate::registry::CalloutRegistry;
use folio_core::{Block, ImageAsset, parse_blocks};
use render::render_blocks;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Output for a missing, empty or entirely skipped block sequence.
pub const FALLBACK_HTML: &str = "<p>No content available.</p>";

/// Image CDN coordinates used to turn asset references into URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCdn {
    /// Content project identifier.
    pub project_id: String,
    /// Dataset name.
    pub dataset: String,
    /// CDN host name.
    #[serde(default = "default_cdn_host")]
    pub host: String,
}

fn default_cdn_host() -> String {
    "cdn.sanity.io".to_string()
}

impl ImageCdn {
    /// Creates CDN coordinates on the default host.
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            host: default_cdn_host(),
        }
    }

    /// Public URL of an image asset.
    pub fn url_for(&self, asset: &ImageAsset) -> String {
        format!(
            "https://{}/images/{}/{}/{}",
            self.host,
            self.project_id,
            self.dataset,
            asset.file_name()
        )
    }
}

/// Rendering options for the block renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Where image assets are served from. Without it images get an empty `src`.
    pub image_cdn: Option<ImageCdn>,
    /// Whether to add `loading="lazy"` to images and embeds.
    pub enable_lazy_images: bool,
    /// Callouts nested this deep or deeper are skipped.
    pub max_callout_depth: usize,
    /// Callout sub-kind presentation.
    pub callouts: CalloutRegistry,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_cdn: None,
            enable_lazy_images: false,
            max_callout_depth: 8,
            callouts: CalloutRegistry::default(),
        }
    }
}

/// Renders a block sequence to an HTML fragment (entry point).
///
/// `None` or an empty sequence yields [`FALLBACK_HTML`], as does a sequence
/// in which every block was skipped. Never fails: unknown or malformed
/// blocks are logged and omitted.
///
/// # Examples
///
/// ```
/// use folio_core::parse_blocks;
/// use folio_render::renderer::portable::{render, RenderOptions};
///
/// let blocks = parse_blocks(&serde_json::json!([
///     {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "Hello"}]}
/// ]))
/// .unwrap();
/// assert_eq!(render(Some(blocks.as_slice()), &RenderOptions::default()), "<h2>Hello</h2>");
/// ```
pub fn render(blocks: Option<&[Block]>, options: &RenderOptions) -> String {
    let Some(blocks) = blocks.filter(|blocks| !blocks.is_empty()) else {
        return FALLBACK_HTML.to_string();
    };

    let mut ctx = Context::new(options);
    render_blocks(blocks, &mut ctx);
    let html = ctx.finish();

    if html.is_empty() {
        FALLBACK_HTML.to_string()
    } else {
        html
    }
}

/// Renders raw content-store JSON. Anything but an array yields
/// [`FALLBACK_HTML`].
pub fn render_value(value: &JsonValue, options: &RenderOptions) -> String {
    let blocks = parse_blocks(value);
    render(blocks.as_deref(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(style: &str, body: &str) -> JsonValue {
        json!({
            "_type": "block",
            "style": style,
            "children": [{"_type": "span", "text": body, "marks": []}],
            "markDefs": []
        })
    }

    fn item(marker: &str, body: &str) -> JsonValue {
        json!({
            "_type": "block",
            "style": "normal",
            "listItem": marker,
            "level": 1,
            "children": [{"_type": "span", "text": body}]
        })
    }

    fn render_json(value: JsonValue) -> String {
        render_value(&value, &RenderOptions::default())
    }

    #[test]
    fn test_empty_and_null_fall_back() {
        assert_eq!(render(None, &RenderOptions::default()), FALLBACK_HTML);
        assert_eq!(render(Some(&[][..]), &RenderOptions::default()), FALLBACK_HTML);
        assert_eq!(render_json(JsonValue::Null), FALLBACK_HTML);
        assert_eq!(render_json(json!([])), FALLBACK_HTML);
        assert_eq!(render_json(json!({"_type": "block"})), FALLBACK_HTML);
    }

    #[test]
    fn test_all_skipped_falls_back() {
        let html = render_json(json!([{"_type": "poll"}, text("normal", "   ")]));
        assert_eq!(html, FALLBACK_HTML);
    }

    #[test]
    fn test_styles() {
        let html = render_json(json!([
            text("h1", "One"),
            text("h6", "Six"),
            text("blockquote", "Quote"),
            text("normal", "Para"),
            text("lead", "Custom")
        ]));
        assert_eq!(
            html,
            "<h1>One</h1><h6>Six</h6><blockquote>Quote</blockquote><p>Para</p><p>Custom</p>"
        );
    }

    #[test]
    fn test_inline_text_is_trimmed() {
        assert_eq!(render_json(json!([text("normal", "  padded  ")])), "<p>padded</p>");
    }

    #[test]
    fn test_consecutive_bullets_share_one_list() {
        let html = render_json(json!([
            item("bullet", "a"),
            item("bullet", "b"),
            item("bullet", "c")
        ]));
        assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
    }

    #[test]
    fn test_switching_list_kind_opens_second_list() {
        let html = render_json(json!([
            item("bullet", "a"),
            item("number", "1"),
            item("number", "2"),
            item("bullet", "b")
        ]));
        assert_eq!(
            html,
            "<ul><li>a</li></ul><ol><li>1</li><li>2</li></ol><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_non_list_block_closes_list() {
        let html = render_json(json!([
            item("bullet", "a"),
            text("normal", "between"),
            item("bullet", "b"),
            {"_type": "divider"},
            item("number", "1")
        ]));
        assert_eq!(
            html,
            "<ul><li>a</li></ul><p>between</p><ul><li>b</li></ul><hr class=\"divider\" /><ol><li>1</li></ol>"
        );
    }

    #[test]
    fn test_list_open_at_end_is_closed_once() {
        let html = render_json(json!([text("normal", "intro"), item("number", "last")]));
        assert_eq!(html, "<p>intro</p><ol><li>last</li></ol>");
        assert_eq!(html.matches("</ol>").count(), 1);
    }

    #[test]
    fn test_skipped_blocks_do_not_split_lists() {
        let html = render_json(json!([
            item("bullet", "a"),
            {"_type": "mystery"},
            item("bullet", " "),
            item("bullet", "b")
        ]));
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_empty_embed_still_closes_list() {
        let html = render_json(json!([
            item("bullet", "a"),
            {"_type": "youtube"},
            item("bullet", "b")
        ]));
        assert_eq!(html, "<ul><li>a</li></ul><ul><li>b</li></ul>");
    }

    #[test]
    fn test_strong_em_nesting_order() {
        let html = render_json(json!([{
            "_type": "block",
            "children": [{"_type": "span", "marks": ["strong", "em"], "text": "X"}]
        }]));
        assert_eq!(html, "<p><strong><em>X</em></strong></p>");
    }

    #[test]
    fn test_link_mark_precedence() {
        let html = render_json(json!([{
            "_type": "block",
            "children": [{"_type": "span", "marks": ["strong"], "text": "X"}],
            "markDefs": [{"_key": "strong", "_type": "link", "href": "https://example.com"}]
        }]));
        assert_eq!(
            html,
            r#"<p><a href="https://example.com" target="_blank" rel="noopener noreferrer">X</a></p>"#
        );
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_code_is_escaped_once() {
        let html = render_json(json!([{
            "_type": "code",
            "language": "html",
            "code": "<script>alert('x' && \"y\")</script>"
        }]));
        assert_eq!(
            html,
            "<pre class=\"code-block\"><code class=\"language-html\">&lt;script&gt;alert(&#39;x&#39; &amp;&amp; &quot;y&quot;)&lt;/script&gt;</code></pre>"
        );
        assert!(!html.contains("&amp;amp;"));
        assert!(!html.contains("&amp;lt;"));
    }

    #[test]
    fn test_code_defaults_language() {
        let html = render_json(json!([{"_type": "code"}]));
        assert_eq!(
            html,
            "<pre class=\"code-block\"><code class=\"language-text\"></code></pre>"
        );
    }

    #[test]
    fn test_image_with_cdn() {
        let options = RenderOptions {
            image_cdn: Some(ImageCdn::new("abc123", "production")),
            enable_lazy_images: true,
            ..Default::default()
        };
        let html = render_value(
            &json!([{
                "_type": "image",
                "asset": {"_ref": "image-Tb9Ew8-1200x800-png", "_type": "reference"},
                "alt": "A \"quoted\" diagram",
                "caption": "Figure 1"
            }]),
            &options,
        );
        assert_eq!(
            html,
            "<figure class=\"blog-image\"><img src=\"https://cdn.sanity.io/images/abc123/production/Tb9Ew8-1200x800.png\" alt=\"A &quot;quoted&quot; diagram\" loading=\"lazy\" /><figcaption>Figure 1</figcaption></figure>"
        );
    }

    #[test]
    fn test_image_without_asset_has_empty_src() {
        let html = render_json(json!([{"_type": "image"}]));
        assert_eq!(html, "<figure class=\"blog-image\"><img src=\"\" alt=\"\" /></figure>");
    }

    #[test]
    fn test_image_prefers_expanded_url() {
        let html = render_json(json!([{
            "_type": "image",
            "asset": {"_ref": "image-a-1x1-png", "url": "https://img.example/a.png"}
        }]));
        assert!(html.contains("src=\"https://img.example/a.png\""));
    }

    #[test]
    fn test_table() {
        let html = render_json(json!([{
            "_type": "table",
            "rows": [{"cells": ["Name", "Role"]}, {"cells": ["Ada", "R&D"]}]
        }]));
        assert_eq!(
            html,
            "<div class=\"table-wrapper\"><table><thead><tr><th>Name</th><th>Role</th></tr></thead><tbody><tr><td>Ada</td><td>R&amp;D</td></tr></tbody></table></div>"
        );
    }

    #[test]
    fn test_table_without_rows_emits_nothing() {
        let html = render_json(json!([{"_type": "table", "rows": []}, text("normal", "after")]));
        assert_eq!(html, "<p>after</p>");
        let html = render_json(json!([{"_type": "table"}, text("normal", "after")]));
        assert_eq!(html, "<p>after</p>");
    }

    #[test]
    fn test_header_only_table_has_no_body() {
        let html = render_json(json!([{"_type": "table", "rows": [["Only"]]}]));
        assert!(html.contains("<thead><tr><th>Only</th></tr></thead></table>"));
        assert!(!html.contains("<tbody>"));
    }

    #[test]
    fn test_embed() {
        let html = render_json(json!([{"_type": "youtube", "url": "https://youtu.be/dQw4w9WgXcQ"}]));
        assert!(html.starts_with("<div class=\"video-embed\"><iframe src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\""));
        assert!(html.ends_with("></iframe></div>"));
    }

    #[test]
    fn test_callout_renders_nested_content() {
        let html = render_json(json!([{
            "_type": "callout",
            "kind": "tip",
            "content": [item("bullet", "one"), item("bullet", "two")]
        }]));
        insta::assert_snapshot!(html, @r#"<aside class="callout callout-tip"><div class="callout-header"><span class="callout-icon" aria-hidden="true">💡</span><span class="callout-title">Tip</span></div><div class="callout-body"><ul><li>one</li><li>two</li></ul></div></aside>"#);
    }

    #[test]
    fn test_callout_title_override_and_kebab_class() {
        let html = render_json(json!([{
            "_type": "callout",
            "kind": "keyTakeaway",
            "title": "Remember <this>",
            "content": [text("normal", "Ship small.")]
        }]));
        assert!(html.starts_with(r#"<aside class="callout callout-key-takeaway">"#));
        assert!(html.contains(r#"<span class="callout-title">Remember &lt;this&gt;</span>"#));
        assert!(html.contains("<p>Ship small.</p>"));
    }

    #[test]
    fn test_empty_callout_has_empty_body() {
        let html = render_json(json!([{"_type": "prompt"}]));
        assert!(html.contains(r#"<span class="callout-title">Prompt</span>"#));
        assert!(html.ends_with(r#"<div class="callout-body"></div></aside>"#));
    }

    #[test]
    fn test_callout_depth_limit() {
        let options = RenderOptions {
            max_callout_depth: 1,
            ..Default::default()
        };
        let html = render_value(
            &json!([{
                "_type": "callout",
                "kind": "note",
                "content": [
                    text("normal", "outer"),
                    {"_type": "callout", "kind": "tip", "content": [text("normal", "inner")]}
                ]
            }]),
            &options,
        );
        assert!(html.contains("<p>outer</p>"));
        assert!(!html.contains("inner"));
        assert_eq!(html.matches("<aside").count(), 1);
    }

    #[test]
    fn test_every_kind_with_empty_fields() {
        let html = render_json(json!([
            {"_type": "block", "children": [{"_type": "span", "text": "p"}]},
            {"_type": "image"},
            {"_type": "code"},
            {"_type": "table", "rows": [[]]},
            {"_type": "youtube", "url": "https://youtu.be/abc"},
            {"_type": "callout"},
            {"_type": "divider"}
        ]));
        for wrapper in [
            "<p>",
            "<figure class=\"blog-image\">",
            "<pre class=\"code-block\">",
            "<table>",
            "<div class=\"video-embed\">",
            "<aside class=\"callout callout-note\">",
            "<hr class=\"divider\" />",
        ] {
            assert!(html.contains(wrapper), "missing {} in {}", wrapper, html);
        }
    }

    #[test]
    fn test_malformed_block_is_skipped() {
        let html = render_json(json!([
            text("normal", "before"),
            {"_type": "block", "children": "not-a-list"},
            text("normal", "after")
        ]));
        assert_eq!(html, "<p>before</p><p>after</p>");
    }

    #[test]
    fn test_wrongly_typed_code_language_defaults() {
        let html = render_json(json!([{"_type": "code", "code": "let x = 1;", "language": 5}]));
        assert_eq!(
            html,
            "<pre class=\"code-block\"><code class=\"language-text\">let x = 1;</code></pre>"
        );
    }

    #[test]
    fn test_wrongly_typed_image_alt_keeps_caption() {
        let html = render_json(json!([{"_type": "image", "alt": 7, "caption": "Cap"}]));
        assert_eq!(
            html,
            "<figure class=\"blog-image\"><img src=\"\" alt=\"\" /><figcaption>Cap</figcaption></figure>"
        );
    }

    #[test]
    fn test_wrongly_typed_level_keeps_list_item() {
        let html = render_json(json!([{
            "_type": "block",
            "level": "1",
            "listItem": "bullet",
            "children": [{"_type": "span", "text": "item"}]
        }]));
        assert_eq!(html, "<ul><li>item</li></ul>");
    }

    #[test]
    fn test_wrongly_typed_style_renders_paragraph() {
        let html = render_json(json!([{
            "_type": "block",
            "style": 2,
            "children": [{"_type": "span", "text": "para"}]
        }]));
        assert_eq!(html, "<p>para</p>");
    }

    #[test]
    fn test_wrongly_typed_href_drops_only_the_link() {
        let html = render_json(json!([{
            "_type": "block",
            "style": "normal",
            "children": [{"_type": "span", "text": "para", "marks": ["k1"]}],
            "markDefs": [{"_key": "k1", "_type": "link", "href": 5}]
        }]));
        assert_eq!(html, "<p>para</p>");
    }

    #[test]
    fn test_marked_empty_spans_count_as_blank() {
        let html = render_json(json!([
            item("bullet", "a"),
            {
                "_type": "block",
                "style": "normal",
                "children": [{"_type": "span", "text": "", "marks": ["strong"]}]
            },
            item("bullet", "b")
        ]));
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = json!([item("bullet", "a"), text("h2", "Title"), {"_type": "divider"}]);
        assert_eq!(render_json(doc.clone()), render_json(doc));
    }
}
