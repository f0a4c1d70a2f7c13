//! Default callout registry.

use super::types::{CalloutRegistry, CalloutStyle, default_fallback_kind};

/// Creates the default callout registry.
///
/// # Example
///
/// ```
/// use folio_render::registry::defaults::default_callout_registry;
///
/// let registry = default_callout_registry();
/// assert!(registry.is_supported("tip"));
/// assert!(registry.is_supported("key-takeaway"));
/// assert_eq!(registry.resolve("warning").title, "Warning");
/// ```
pub fn default_callout_registry() -> CalloutRegistry {
    CalloutRegistry {
        styles: vec![
            CalloutStyle::new("tip", "💡", "Tip"),
            CalloutStyle::new("warning", "⚠️", "Warning"),
            CalloutStyle::new("note", "📝", "Note"),
            CalloutStyle::new("keyTakeaway", "🔑", "Key Takeaway"),
            CalloutStyle::new("highlight", "✨", "Highlight"),
            CalloutStyle::new("prompt", "💬", "Prompt"),
        ],
        fallback: default_fallback_kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case_and_separators() {
        let registry = default_callout_registry();
        for kind in ["keyTakeaway", "key-takeaway", "key_takeaway", "KEYTAKEAWAY"] {
            assert_eq!(registry.get(kind).map(|s| s.icon.as_str()), Some("🔑"), "{}", kind);
        }
    }

    #[test]
    fn unknown_kinds_fall_back_to_note() {
        let registry = default_callout_registry();
        let style = registry.resolve("danger");
        assert_eq!(style.kind, "note");
        assert_eq!(style.title, "Note");
    }

    #[test]
    fn empty_registry_still_resolves() {
        let registry = CalloutRegistry {
            styles: Vec::new(),
            fallback: "note".to_string(),
        };
        let style = registry.resolve("custom");
        assert_eq!(style.kind, "custom");
        assert_eq!(style.icon, "");
        assert_eq!(style.title, "custom");
    }

    #[test]
    fn register_replaces_existing_kind() {
        let mut registry = default_callout_registry();
        registry.register(CalloutStyle::new("Tip", "👉", "Pro tip"));
        assert_eq!(registry.styles.len(), 6);
        assert_eq!(registry.resolve("tip").title, "Pro tip");
    }

    #[test]
    fn class_suffix_is_kebab_case() {
        assert_eq!(CalloutStyle::new("keyTakeaway", "", "").class_suffix(), "key-takeaway");
        assert_eq!(CalloutStyle::new("tip", "", "").class_suffix(), "tip");
        assert_eq!(CalloutStyle::new("side_note", "", "").class_suffix(), "side-note");
    }

    #[test]
    fn deserializes_with_default_fallback() {
        let registry: CalloutRegistry = serde_json::from_str(
            r#"{"styles": [{"kind": "info", "icon": "i", "title": "Info"}]}"#,
        )
        .unwrap();
        assert_eq!(registry.fallback, "note");
        assert!(registry.is_supported("info"));
    }
}
