//! Rendering functions for each block kind.

use super::RenderOptions;
use super::context::Context;
use super::spans::render_spans;
use folio_core::{
    Block, BlockStyle, CalloutBlock, CodeBlock, EmbedBlock, ImageAsset, ImageBlock, TableBlock,
    TableRow, TextBlock, escape_html,
};

/// Renders a block sequence in order into `ctx`.
pub fn render_blocks(blocks: &[Block], ctx: &mut Context) {
    for block in blocks {
        render_block(block, ctx);
    }
}

/// Renders one block, updating the open-list state.
///
/// Text blocks manage list containers themselves. Every other recognized
/// kind closes an open list before emitting its markup, even when the block
/// ends up producing nothing. Unknown and malformed blocks are logged and
/// leave the list state untouched.
pub fn render_block(block: &Block, ctx: &mut Context) {
    match block {
        Block::Text(text) => render_text(text, ctx),
        Block::Image(image) => {
            ctx.close_list();
            render_image(image, ctx);
        }
        Block::Code(code) => {
            ctx.close_list();
            render_code(code, ctx);
        }
        Block::Table(table) => {
            ctx.close_list();
            render_table(table, ctx);
        }
        Block::Embed(embed) => {
            ctx.close_list();
            render_embed(embed, ctx);
        }
        Block::Callout(callout) => {
            ctx.close_list();
            render_callout(callout, ctx);
        }
        Block::Divider => {
            ctx.close_list();
            ctx.push_raw(r#"<hr class="divider" />"#);
        }
        Block::Unknown { kind } => {
            log::warn!("Unhandled block type: {}", kind);
        }
        Block::Malformed { kind, reason } => {
            log::warn!("Skipping malformed '{}' block: {}", kind, reason);
        }
    }
}

/// Renders a paragraph, heading, blockquote or list item.
///
/// Blocks without visible text are skipped entirely and do not affect the
/// open list. Visibility is judged on the span text, so a span with empty
/// text counts as blank even when it carries marks that would render as
/// empty wrapper elements.
fn render_text(block: &TextBlock, ctx: &mut Context) {
    if block.plain_text().trim().is_empty() {
        return;
    }
    let inline = render_spans(block);
    let inline = inline.trim();

    if let Some(kind) = block.list_item {
        ctx.ensure_list(kind);
        ctx.push_raw("<li>");
        ctx.push_raw(inline);
        ctx.push_raw("</li>");
        return;
    }

    ctx.close_list();
    let tag = match block.style {
        BlockStyle::Heading(level) => format!("h{}", level),
        BlockStyle::Blockquote => "blockquote".to_string(),
        BlockStyle::Normal | BlockStyle::Other => "p".to_string(),
    };
    ctx.push_raw(&format!("<{tag}>{inline}</{tag}>"));
}

/// Resolves an image block's `src`; empty when the asset cannot be resolved.
fn image_src(image: &ImageBlock, options: &RenderOptions) -> String {
    if let Some(url) = image.asset_url().filter(|url| !url.is_empty()) {
        return url.to_string();
    }
    let Some(reference) = image.asset_ref() else {
        log::debug!("Image block without an asset reference");
        return String::new();
    };
    let Some(asset) = ImageAsset::parse(reference) else {
        log::debug!("Unrecognized image asset reference: {}", reference);
        return String::new();
    };
    match &options.image_cdn {
        Some(cdn) => cdn.url_for(&asset),
        None => {
            log::debug!("No image CDN configured for asset {}", reference);
            String::new()
        }
    }
}

/// Renders an image as `<figure>` with an optional caption.
fn render_image(image: &ImageBlock, ctx: &mut Context) {
    let src = image_src(image, ctx.options());

    ctx.push_raw(r#"<figure class="blog-image"><img src=""#);
    ctx.push_attr_value(&src);
    ctx.push_raw(r#"" alt=""#);
    ctx.push_attr_value(image.alt.as_deref().unwrap_or_default());
    ctx.push_raw(r#"""#);
    if ctx.options().enable_lazy_images {
        ctx.push_raw(r#" loading="lazy""#);
    }
    ctx.push_raw(" />");

    if let Some(caption) = image.caption.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        ctx.push_raw("<figcaption>");
        ctx.push_text(caption);
        ctx.push_raw("</figcaption>");
    }
    ctx.push_raw("</figure>");
}

/// Renders a code listing with a `language-*` class for highlighters.
fn render_code(code: &CodeBlock, ctx: &mut Context) {
    let language = code
        .language
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or("text");

    ctx.push_raw(r#"<pre class="code-block"><code class="language-"#);
    ctx.push_attr_value(language);
    ctx.push_raw(r#"">"#);
    ctx.push_raw(&escape_html(&code.code));
    ctx.push_raw("</code></pre>");
}

fn render_table_row(row: &TableRow, cell_tag: &str, ctx: &mut Context) {
    ctx.push_raw("<tr>");
    for cell in &row.cells {
        ctx.push_raw(&format!("<{}>", cell_tag));
        ctx.push_text(cell);
        ctx.push_raw(&format!("</{}>", cell_tag));
    }
    ctx.push_raw("</tr>");
}

/// Renders a table; the first row becomes the header. No rows, no table.
fn render_table(table: &TableBlock, ctx: &mut Context) {
    let Some((header, body)) = table.rows.split_first() else {
        return;
    };

    ctx.push_raw(r#"<div class="table-wrapper"><table>"#);
    ctx.push_raw("<thead>");
    render_table_row(header, "th", ctx);
    ctx.push_raw("</thead>");

    if !body.is_empty() {
        ctx.push_raw("<tbody>");
        for row in body {
            render_table_row(row, "td", ctx);
        }
        ctx.push_raw("</tbody>");
    }

    ctx.push_raw("</table></div>");
}

/// Renders a responsive video iframe. Nothing is emitted without a video id.
fn render_embed(embed: &EmbedBlock, ctx: &mut Context) {
    let Some(video_id) = embed.resolve_video_id() else {
        log::debug!("Video embed without a usable video id");
        return;
    };

    ctx.push_raw(r#"<div class="video-embed"><iframe src="https://www.youtube.com/embed/"#);
    ctx.push_attr_value(&video_id);
    ctx.push_raw(r#"" title="YouTube video player" allow="accelerometer; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen"#);
    if ctx.options().enable_lazy_images {
        ctx.push_raw(r#" loading="lazy""#);
    }
    ctx.push_raw("></iframe></div>");
}

/// Renders a callout box, rendering its content recursively.
fn render_callout(callout: &CalloutBlock, ctx: &mut Context) {
    let options = ctx.options();
    if ctx.depth() >= options.max_callout_depth {
        log::warn!(
            "Skipping callout nested deeper than {} levels",
            options.max_callout_depth
        );
        return;
    }

    let kind = callout
        .kind
        .as_deref()
        .unwrap_or(options.callouts.fallback.as_str());
    let style = options.callouts.resolve(kind);
    let title = callout
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(&style.title);

    let mut nested = ctx.nested();
    render_blocks(&callout.content, &mut nested);
    let body = nested.finish();

    ctx.push_raw(r#"<aside class="callout callout-"#);
    ctx.push_attr_value(&style.class_suffix());
    ctx.push_raw(r#""><div class="callout-header">"#);
    if !style.icon.is_empty() {
        ctx.push_raw(r#"<span class="callout-icon" aria-hidden="true">"#);
        ctx.push_text(&style.icon);
        ctx.push_raw("</span>");
    }
    ctx.push_raw(r#"<span class="callout-title">"#);
    ctx.push_text(title);
    ctx.push_raw(r#"</span></div><div class="callout-body">"#);
    ctx.push_raw(&body);
    ctx.push_raw("</div></aside>");
}
