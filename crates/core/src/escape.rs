use std::borrow::Cow;

/// Escapes the five HTML-reserved characters (`& < > " '`).
///
/// Used for attribute values and code listings. `'` becomes `&#39;`.
/// Escaping is not entity-aware: input that already contains `&amp;` is
/// treated as literal text and escaped again, so callers apply it exactly
/// once per value.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escapes text-node content (`& < >`).
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}
