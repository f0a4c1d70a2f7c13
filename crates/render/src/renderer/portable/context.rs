//! Rendering context for the block renderer.

use super::RenderOptions;
use folio_core::{ListKind, escape_html, escape_text};

/// Tracks output and list state during one left-to-right pass over a block
/// sequence.
///
/// The only state carried between blocks is the kind of the list container
/// currently open, if any. Every open container is closed by
/// [`Context::finish`], so the produced fragment never has dangling tags.
pub struct Context<'a> {
    html: String,
    open_list: Option<ListKind>,
    depth: usize,
    options: &'a RenderOptions,
}

impl<'a> Context<'a> {
    /// Creates a top-level context.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            html: String::with_capacity(4096),
            open_list: None,
            depth: 0,
            options,
        }
    }

    /// Creates a context for nested content (callout bodies), one level deeper.
    pub fn nested(&self) -> Context<'a> {
        Context {
            html: String::new(),
            open_list: None,
            depth: self.depth + 1,
            options: self.options,
        }
    }

    /// Rendering options.
    pub fn options(&self) -> &'a RenderOptions {
        self.options
    }

    /// Nesting depth; 0 at the document root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Kind of the currently open list container.
    pub fn open_list(&self) -> Option<ListKind> {
        self.open_list
    }

    /// Writes markup without escaping.
    pub fn push_raw(&mut self, s: &str) {
        self.html.push_str(s);
    }

    /// Writes text-node content, escaping `& < >`.
    pub fn push_text(&mut self, s: &str) {
        self.html.push_str(&escape_text(s));
    }

    /// Writes an attribute value, escaping all five reserved characters.
    pub fn push_attr_value(&mut self, s: &str) {
        self.html.push_str(&escape_html(s));
    }

    /// Makes sure a list container of `kind` is open, closing a list of the
    /// other kind first.
    pub fn ensure_list(&mut self, kind: ListKind) {
        if self.open_list == Some(kind) {
            return;
        }
        self.close_list();
        self.html.push_str(list_tag(kind).0);
        self.open_list = Some(kind);
    }

    /// Closes the open list container, if any.
    pub fn close_list(&mut self) {
        if let Some(kind) = self.open_list.take() {
            self.html.push_str(list_tag(kind).1);
        }
    }

    /// Closes any open list and returns the rendered fragment.
    pub fn finish(mut self) -> String {
        self.close_list();
        self.html
    }
}

fn list_tag(kind: ListKind) -> (&'static str, &'static str) {
    match kind {
        ListKind::Bullet => ("<ul>", "</ul>"),
        ListKind::Number => ("<ol>", "</ol>"),
    }
}
