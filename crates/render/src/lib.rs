#![deny(missing_docs)]
//! folio rendering engine: content blocks to HTML, callout registry, and
//! full-page assembly with social-sharing metadata.

/// Page templates (blog post, category, error).
pub mod page;
/// Callout registry for callout sub-kind presentation.
pub mod registry;
/// Rendering layer (structured-content block renderer).
pub mod renderer;

pub use page::{
    NavLink, SiteInfo, article_count, blog_post_page, category_page, error_page, post_description,
};
pub use registry::{CalloutRegistry, CalloutStyle, default_callout_registry};
pub use renderer::{FALLBACK_HTML, ImageCdn, RenderOptions, render, render_value};
