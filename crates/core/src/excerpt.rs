use crate::block::{Block, BlockStyle};

/// Plain text of a paragraph must be longer than this to serve as a summary.
const MIN_SUMMARY_CHARS: usize = 50;
/// Summaries are cut to this many characters before the ellipsis.
const MAX_SUMMARY_CHARS: usize = 160;

/// Builds a short summary from the first substantial `normal` paragraph.
///
/// Only blocks explicitly styled `normal` qualify; unstyled and custom-styled
/// blocks are passed over.
///
/// Returns `None` when no paragraph has more than 50 characters of text.
pub fn first_paragraph(blocks: Option<&[Block]>) -> Option<String> {
    blocks?.iter().find_map(|block| {
        let Block::Text(text) = block else {
            return None;
        };
        if text.style != BlockStyle::Normal {
            return None;
        }
        let plain = text.plain_text();
        let plain = plain.trim();
        if plain.chars().count() <= MIN_SUMMARY_CHARS {
            return None;
        }
        let cut: String = plain.chars().take(MAX_SUMMARY_CHARS).collect();
        Some(format!("{}...", cut))
    })
}

/// Plain text of every text block, joined with single spaces. Nested
/// callout content is included.
pub fn plain_text(blocks: &[Block]) -> String {
    let mut parts = Vec::new();
    collect_text(blocks, &mut parts);
    parts.join(" ")
}

fn collect_text(blocks: &[Block], parts: &mut Vec<String>) {
    for block in blocks {
        match block {
            Block::Text(text) => {
                let plain = text.plain_text();
                let plain = plain.trim();
                if !plain.is_empty() {
                    parts.push(plain.to_string());
                }
            }
            Block::Callout(callout) => collect_text(&callout.content, parts),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::parse_blocks;
    use serde_json::json;

    fn blocks(value: serde_json::Value) -> Vec<Block> {
        parse_blocks(&value).unwrap()
    }

    fn paragraph(style: &str, text: &str) -> serde_json::Value {
        json!({"_type": "block", "style": style, "children": [{"_type": "span", "text": text}]})
    }

    #[test]
    fn skips_short_and_non_normal_paragraphs() {
        let long = "This paragraph is comfortably longer than fifty characters in total.";
        let doc = blocks(json!([
            paragraph("h1", long),
            paragraph("normal", "Too short."),
            paragraph("normal", long)
        ]));
        assert_eq!(first_paragraph(Some(doc.as_slice())), Some(format!("{}...", long)));
    }

    #[test]
    fn requires_explicit_normal_style() {
        let long = "This paragraph is comfortably longer than fifty characters in total.";
        let doc = blocks(json!([
            {"_type": "block", "children": [{"_type": "span", "text": long}]},
            paragraph("lead", long)
        ]));
        assert_eq!(first_paragraph(Some(doc.as_slice())), None);
    }

    #[test]
    fn truncates_on_char_boundaries() {
        let long = "é".repeat(200);
        let doc = blocks(json!([paragraph("normal", &long)]));
        let summary = first_paragraph(Some(doc.as_slice())).unwrap();
        assert_eq!(summary.chars().count(), 163);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn no_summary_without_blocks() {
        assert_eq!(first_paragraph(None), None);
        assert_eq!(first_paragraph(Some(&[][..])), None);
    }

    #[test]
    fn plain_text_walks_callouts() {
        let doc = blocks(json!([
            paragraph("normal", " One "),
            {"_type": "code", "code": "skipped"},
            {"_type": "callout", "kind": "tip", "content": [paragraph("normal", "Two")]}
        ]));
        assert_eq!(plain_text(&doc), "One Two");
    }
}
