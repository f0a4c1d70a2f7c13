//! Inline span rendering.

use folio_core::{Span, TextBlock, escape_html, escape_text};

/// Decorator marks and their wrapping element.
fn decorator_tag(mark: &str) -> Option<&'static str> {
    match mark {
        "strong" => Some("strong"),
        "em" => Some("em"),
        "underline" => Some("u"),
        "strike-through" => Some("s"),
        "code" => Some("code"),
        _ => None,
    }
}

/// Renders the inline HTML of a text block's span children.
///
/// Non-span children contribute nothing. The result is not trimmed.
pub fn render_spans(block: &TextBlock) -> String {
    let mut html = String::new();
    for span in block.children.iter().filter(|child| child.is_span()) {
        html.push_str(&render_span(span, block));
    }
    html
}

/// Renders one span: escaped text wrapped by each of its marks.
///
/// Marks wrap in declaration order, so the first declared mark is the
/// outermost element. A mark that resolves to a link definition becomes an
/// anchor opening in a new tab; that check runs before decorator lookup, so a
/// link definition keyed `strong` produces an anchor and no `<strong>`.
/// Unknown marks leave the text unwrapped.
pub fn render_span(span: &Span, block: &TextBlock) -> String {
    let mut content = escape_text(&span.text).into_owned();
    for mark in span.marks.iter().rev() {
        content = wrap_mark(mark, block, content);
    }
    content
}

fn wrap_mark(mark: &str, block: &TextBlock, content: String) -> String {
    if let Some(href) = block.link_href(mark) {
        return format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(href),
            content
        );
    }
    match decorator_tag(mark) {
        Some(tag) => format!("<{tag}>{content}</{tag}>"),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::MarkDef;

    fn span(text: &str, marks: &[&str]) -> Span {
        Span {
            kind: "span".to_string(),
            text: text.to_string(),
            marks: marks.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn block(children: Vec<Span>, mark_defs: Vec<MarkDef>) -> TextBlock {
        TextBlock {
            children,
            mark_defs,
            ..Default::default()
        }
    }

    fn link(key: &str, href: &str) -> MarkDef {
        MarkDef {
            key: key.to_string(),
            kind: "link".to_string(),
            href: Some(href.to_string()),
        }
    }

    #[test]
    fn first_declared_mark_is_outermost() {
        let b = block(vec![span("X", &["strong", "em"])], Vec::new());
        assert_eq!(render_spans(&b), "<strong><em>X</em></strong>");

        let b = block(vec![span("X", &["em", "strong"])], Vec::new());
        assert_eq!(render_spans(&b), "<em><strong>X</strong></em>");
    }

    #[test]
    fn all_decorators() {
        let b = block(
            vec![
                span("u", &["underline"]),
                span("s", &["strike-through"]),
                span("c", &["code"]),
            ],
            Vec::new(),
        );
        assert_eq!(render_spans(&b), "<u>u</u><s>s</s><code>c</code>");
    }

    #[test]
    fn link_definition_wins_over_decorator_name() {
        let b = block(
            vec![span("X", &["strong"])],
            vec![link("strong", "https://example.com/?a=1&b=2")],
        );
        assert_eq!(
            render_spans(&b),
            r#"<a href="https://example.com/?a=1&amp;b=2" target="_blank" rel="noopener noreferrer">X</a>"#
        );
    }

    #[test]
    fn link_nested_inside_decorators() {
        let b = block(
            vec![span("docs", &["em", "k1"])],
            vec![link("k1", "https://docs.rs")],
        );
        assert_eq!(
            render_spans(&b),
            r#"<em><a href="https://docs.rs" target="_blank" rel="noopener noreferrer">docs</a></em>"#
        );
    }

    #[test]
    fn unknown_marks_and_non_link_defs_pass_through() {
        let b = block(
            vec![span("X", &["sparkle", "ref1"])],
            vec![MarkDef {
                key: "ref1".to_string(),
                kind: "internalLink".to_string(),
                href: None,
            }],
        );
        assert_eq!(render_spans(&b), "X");
    }

    #[test]
    fn text_is_escaped_and_non_spans_skipped() {
        let mut children = vec![span("1 < 2 & 3", &[])];
        children.push(Span {
            kind: "inlineImage".to_string(),
            text: "ignored".to_string(),
            marks: Vec::new(),
        });
        let b = block(children, Vec::new());
        assert_eq!(render_spans(&b), "1 &lt; 2 &amp; 3");
    }
}
