#![deny(missing_docs)]
//! folio core: the structured-content model, lenient JSON decoding, escaping
//! and plain-text helpers shared by the renderer and the site handlers.

/// Image asset reference parsing.
pub mod asset;
/// Content blocks, spans and mark definitions.
pub mod block;
/// Human-readable date formatting.
pub mod date;
/// Post and category documents.
pub mod document;
/// Video embed identifier extraction.
pub mod embed;
/// HTML escaping helpers.
pub mod escape;
/// Plain-text extraction and excerpts.
pub mod excerpt;

mod de;

pub use asset::ImageAsset;
pub use block::{
    AssetRef, Block, BlockStyle, CalloutBlock, CodeBlock, EmbedBlock, ImageBlock, ListKind,
    MarkDef, Span, TableBlock, TableRow, TextBlock, parse_blocks,
};
pub use date::format_date;
pub use document::{Category, CategoryRef, Post, SlugRef};
pub use embed::youtube_id;
pub use escape::{escape_html, escape_text};
pub use excerpt::{first_paragraph, plain_text};
