//! Structured-content blocks as delivered by the content store.
//!
//! The store returns documents as JSON arrays of tagged nodes (`_type`).
//! Decoding here is lenient on purpose: a block never fails the whole
//! document. Scalar fields that are missing, `null` or of the wrong JSON type
//! fall back to defaults. Unknown tags become [`Block::Unknown`], and blocks
//! whose structure does not match their tag (for example `children` that is
//! not an array) become [`Block::Malformed`]; the renderer logs and skips both.

use crate::de::{lenient, lenient_blocks, null_as_default};
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// `_type` tags that decode directly into a callout of that kind.
const CALLOUT_TYPES: &[&str] = &["tip", "warning", "note", "keyTakeaway", "highlight", "prompt"];

/// A single content node in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Paragraph, heading, blockquote or list item (`_type: "block"`).
    Text(TextBlock),
    /// Image referencing a hosted asset.
    Image(ImageBlock),
    /// Source code listing.
    Code(CodeBlock),
    /// Table whose first row is the header.
    Table(TableBlock),
    /// Embedded video (`youtube`, `video` or `embed`).
    Embed(EmbedBlock),
    /// Callout box wrapping nested blocks.
    Callout(CalloutBlock),
    /// Horizontal rule.
    Divider,
    /// A block whose `_type` is not recognized.
    Unknown {
        /// The unrecognized tag.
        kind: String,
    },
    /// A recognized block whose fields could not be decoded.
    Malformed {
        /// The block's tag.
        kind: String,
        /// Decoder error message.
        reason: String,
    },
}

impl Block {
    /// Decodes one block from raw content-store JSON. Never fails.
    pub fn from_value(value: &JsonValue) -> Self {
        let Some(kind) = value.get("_type").and_then(JsonValue::as_str) else {
            return Block::Unknown {
                kind: "<untyped>".to_string(),
            };
        };

        let decoded = match kind {
            "block" => TextBlock::deserialize(value).map(Block::Text),
            "image" => ImageBlock::deserialize(value).map(Block::Image),
            "code" => CodeBlock::deserialize(value).map(Block::Code),
            "table" => TableBlock::deserialize(value).map(Block::Table),
            "youtube" | "video" | "embed" => EmbedBlock::deserialize(value).map(Block::Embed),
            "callout" => CalloutBlock::deserialize(value).map(Block::Callout),
            "divider" | "break" => Ok(Block::Divider),
            other if CALLOUT_TYPES.contains(&other) => {
                CalloutBlock::deserialize(value).map(|mut callout| {
                    callout.kind.get_or_insert_with(|| other.to_string());
                    Block::Callout(callout)
                })
            }
            other => {
                return Block::Unknown {
                    kind: other.to_string(),
                };
            }
        };

        decoded.unwrap_or_else(|err| Block::Malformed {
            kind: kind.to_string(),
            reason: err.to_string(),
        })
    }

    /// Short name of the block kind, for diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Block::Text(_) => "block",
            Block::Image(_) => "image",
            Block::Code(_) => "code",
            Block::Table(_) => "table",
            Block::Embed(_) => "embed",
            Block::Callout(_) => "callout",
            Block::Divider => "divider",
            Block::Unknown { kind } | Block::Malformed { kind, .. } => kind,
        }
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(Block::from_value(&value))
    }
}

/// Decodes a block array. Returns `None` when `value` is not an array
/// (including `null`).
pub fn parse_blocks(value: &JsonValue) -> Option<Vec<Block>> {
    value
        .as_array()
        .map(|items| items.iter().map(Block::from_value).collect())
}

/// Text block style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum BlockStyle {
    /// Plain paragraph (`normal`).
    Normal,
    /// Heading level 1 through 6.
    Heading(u8),
    /// Block quotation.
    Blockquote,
    /// Missing or unrecognized style; rendered as a paragraph.
    #[default]
    Other,
}

impl From<Option<String>> for BlockStyle {
    fn from(style: Option<String>) -> Self {
        match style.as_deref() {
            Some("normal") => BlockStyle::Normal,
            Some("blockquote") => BlockStyle::Blockquote,
            Some(s) => match s.strip_prefix('h').and_then(|n| n.parse::<u8>().ok()) {
                Some(level @ 1..=6) => BlockStyle::Heading(level),
                _ => BlockStyle::Other,
            },
            None => BlockStyle::Other,
        }
    }
}

/// List marker kind of a list-item text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Unordered list (`<ul>`).
    Bullet,
    /// Ordered list (`<ol>`).
    Number,
}

fn list_kind<'de, D>(deserializer: D) -> Result<Option<ListKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let marker: Option<String> = lenient(deserializer)?;
    Ok(match marker.as_deref() {
        None | Some("") => None,
        Some("number") | Some("numbered") => Some(ListKind::Number),
        // Custom list styles render as bullets.
        Some(_) => Some(ListKind::Bullet),
    })
}

/// A paragraph-like block made of inline spans.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// Block style (`normal`, `h1`..`h6`, `blockquote`).
    #[serde(default, deserialize_with = "lenient")]
    pub style: BlockStyle,
    /// List marker, if this block is a list item.
    #[serde(default, deserialize_with = "list_kind")]
    pub list_item: Option<ListKind>,
    /// List nesting level (1-based).
    #[serde(default, deserialize_with = "lenient")]
    pub level: Option<u32>,
    /// Inline children.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Span>,
    /// Mark definitions referenced by the children's marks.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mark_defs: Vec<MarkDef>,
}

impl TextBlock {
    /// Resolves a mark identifier to a link target through `markDefs`.
    pub fn link_href(&self, mark: &str) -> Option<&str> {
        self.mark_defs
            .iter()
            .find(|def| def.key == mark && def.kind == "link")
            .and_then(|def| def.href.as_deref())
            .filter(|href| !href.is_empty())
    }

    /// Concatenated text of all span children.
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .filter(|child| child.is_span())
            .map(|span| span.text.as_str())
            .collect()
    }
}

/// Inline text fragment with applied marks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Span {
    /// Child tag; only `span` children carry text.
    #[serde(rename = "_type", default, deserialize_with = "lenient")]
    pub kind: String,
    /// Raw text.
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,
    /// Decorator names or mark-definition keys, in declaration order.
    #[serde(default, deserialize_with = "lenient")]
    pub marks: Vec<String>,
}

impl Span {
    /// Returns true for `_type: "span"` children.
    pub fn is_span(&self) -> bool {
        self.kind == "span"
    }
}

/// Annotation referenced from a span mark by key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarkDef {
    /// Key used in span `marks`.
    #[serde(rename = "_key", default, deserialize_with = "lenient")]
    pub key: String,
    /// Annotation type; `link` is the only one rendered.
    #[serde(rename = "_type", default, deserialize_with = "lenient")]
    pub kind: String,
    /// Link target.
    #[serde(default, deserialize_with = "lenient")]
    pub href: Option<String>,
}

/// Image block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageBlock {
    /// Asset reference.
    #[serde(default, deserialize_with = "lenient")]
    pub asset: Option<AssetRef>,
    /// Alternative text.
    #[serde(default, deserialize_with = "lenient")]
    pub alt: Option<String>,
    /// Caption shown under the image.
    #[serde(default, deserialize_with = "lenient")]
    pub caption: Option<String>,
}

impl ImageBlock {
    /// The asset identifier (`image-<id>-<WxH>-<fmt>`), if present.
    pub fn asset_ref(&self) -> Option<&str> {
        self.asset.as_ref()?.reference.as_deref()
    }

    /// A fully resolved asset URL, when the query expanded one.
    pub fn asset_url(&self) -> Option<&str> {
        self.asset.as_ref()?.url.as_deref()
    }
}

/// Reference to a hosted asset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssetRef {
    /// Asset identifier.
    #[serde(rename = "_ref", default, deserialize_with = "lenient")]
    pub reference: Option<String>,
    /// Resolved URL (present when the query dereferences the asset).
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// Source code block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeBlock {
    /// Language tag used as a highlighting class.
    #[serde(default, deserialize_with = "lenient")]
    pub language: Option<String>,
    /// Raw source text.
    #[serde(default, deserialize_with = "lenient")]
    pub code: String,
}

/// Table block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableBlock {
    /// Rows in order; the first is the header.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<TableRow>,
}

/// One table row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawRow")]
pub struct TableRow {
    /// Cell text in column order.
    pub cells: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRow {
    Bare(Vec<JsonValue>),
    Keyed {
        #[serde(default, deserialize_with = "null_as_default")]
        cells: Vec<JsonValue>,
    },
}

impl From<RawRow> for TableRow {
    fn from(row: RawRow) -> Self {
        let (RawRow::Bare(cells) | RawRow::Keyed { cells }) = row;
        TableRow {
            cells: cells.into_iter().map(cell_text).collect(),
        }
    }
}

fn cell_text(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

/// Video embed block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedBlock {
    /// Video page or embed URL.
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    /// Bare video identifier.
    #[serde(default, alias = "id", deserialize_with = "lenient")]
    pub video_id: Option<String>,
}

impl EmbedBlock {
    /// Resolves the video identifier from `videoId` or `url`.
    pub fn resolve_video_id(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .and_then(crate::embed::youtube_id)
            .or_else(|| self.url.as_deref().and_then(crate::embed::youtube_id))
    }
}

/// Callout box.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutBlock {
    /// Sub-kind (`tip`, `warning`, `note`, `keyTakeaway`, `highlight`, `prompt`).
    #[serde(
        default,
        alias = "calloutType",
        alias = "tone",
        deserialize_with = "lenient"
    )]
    pub kind: Option<String>,
    /// Title overriding the kind's default label.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Nested blocks.
    #[serde(default, alias = "body", deserialize_with = "lenient_blocks")]
    pub content: Vec<Block>,
}
