//! Callout registry type definitions.

use serde::{Deserialize, Serialize};

/// Presentation of one callout sub-kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutStyle {
    /// Sub-kind name as authored (e.g. "tip", "keyTakeaway").
    pub kind: String,
    /// Icon glyph shown in the header.
    pub icon: String,
    /// Default title label.
    pub title: String,
}

impl CalloutStyle {
    /// Creates a style entry.
    pub fn new(kind: impl Into<String>, icon: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            icon: icon.into(),
            title: title.into(),
        }
    }

    /// CSS class suffix: the kind in kebab-case (`keyTakeaway` → `key-takeaway`).
    pub fn class_suffix(&self) -> String {
        let mut suffix = String::with_capacity(self.kind.len() + 2);
        for c in self.kind.chars() {
            if c.is_ascii_uppercase() {
                if !suffix.is_empty() {
                    suffix.push('-');
                }
                suffix.push(c.to_ascii_lowercase());
            } else if c == '_' || c == ' ' {
                suffix.push('-');
            } else if c.is_ascii_alphanumeric() || c == '-' {
                suffix.push(c);
            }
        }
        suffix
    }
}

/// Callout sub-kinds known to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutRegistry {
    /// Registered styles.
    pub styles: Vec<CalloutStyle>,
    /// Kind used when a callout names an unregistered kind.
    #[serde(default = "default_fallback_kind")]
    pub fallback: String,
}

pub(crate) fn default_fallback_kind() -> String {
    "note".to_string()
}

/// Normalizes a kind for lookup: case, `-` and `_` are ignored.
fn normalize_kind(kind: &str) -> String {
    kind.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl CalloutRegistry {
    /// Check if a callout kind is registered.
    pub fn is_supported(&self, kind: &str) -> bool {
        self.get(kind).is_some()
    }

    /// Get the style for a callout kind.
    pub fn get(&self, kind: &str) -> Option<&CalloutStyle> {
        let wanted = normalize_kind(kind);
        self.styles
            .iter()
            .find(|style| normalize_kind(&style.kind) == wanted)
    }

    /// Get the style for a kind, falling back to the registry's fallback kind.
    ///
    /// When neither is registered, a bare style carrying the requested kind
    /// as its title is returned.
    pub fn resolve(&self, kind: &str) -> CalloutStyle {
        self.get(kind)
            .or_else(|| {
                log::debug!("Unregistered callout kind '{}', using '{}'", kind, self.fallback);
                self.get(&self.fallback)
            })
            .cloned()
            .unwrap_or_else(|| CalloutStyle::new(kind, "", kind))
    }

    /// Adds or replaces the style for its kind.
    pub fn register(&mut self, style: CalloutStyle) {
        let wanted = normalize_kind(&style.kind);
        match self
            .styles
            .iter_mut()
            .find(|existing| normalize_kind(&existing.kind) == wanted)
        {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }
}

impl Default for CalloutRegistry {
    fn default() -> Self {
        super::defaults::default_callout_registry()
    }
}
