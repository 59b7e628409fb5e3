//! Plain-text helpers over HTML content.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Strip markup tags and decode the basic entities, leaving the visible
/// text. Used to size and build the analysis prompt, not for rendering.
pub fn extract_text_content(html: &str) -> String {
    decode_entities(&TAG.replace_all(html, ""))
}

/// Truncate the visible text of `html` to at most `max_len` characters,
/// appending an ellipsis when content was cut.
pub fn preview_text(html: &str, max_len: usize) -> String {
    let text = extract_text_content(html);
    if text.chars().count() <= max_len {
        return text;
    }
    let truncated: String = text.chars().take(max_len).collect();
    format!("{}...", truncated)
}

// &amp; last so that double-escaped input is not decoded twice.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
