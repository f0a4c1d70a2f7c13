/// Extracts a YouTube video id from a watch, short-link, shorts or embed URL,
/// or accepts a bare id.
///
/// Returns `None` when no id can be found or the candidate contains
/// characters outside `[A-Za-z0-9_-]`.
///
/// # Examples
///
/// ```
/// use folio_core::embed::youtube_id;
///
/// assert_eq!(youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"), Some("dQw4w9WgXcQ".to_string()));
/// assert_eq!(youtube_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
/// assert_eq!(youtube_id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
/// assert_eq!(youtube_id("https://vimeo.com/123"), None);
/// ```
pub fn youtube_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let candidate = if input.contains("://") || input.starts_with("www.") {
        from_url(input)?
    } else {
        input
    };

    let valid = !candidate.is_empty()
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    valid.then(|| candidate.to_string())
}

fn from_url(url: &str) -> Option<&str> {
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        return Some(until_delimiter(rest));
    }
    if !url.contains("youtube.com") && !url.contains("youtube-nocookie.com") {
        return None;
    }
    for marker in ["/embed/", "/shorts/", "/live/", "/v/"] {
        if let Some((_, rest)) = url.split_once(marker) {
            return Some(until_delimiter(rest));
        }
    }
    let (_, query) = url.split_once('?')?;
    query
        .split(['&', '#'])
        .find_map(|pair| pair.strip_prefix("v="))
}

fn until_delimiter(s: &str) -> &str {
    s.split(['?', '&', '#', '/']).next().unwrap_or_default()
}
