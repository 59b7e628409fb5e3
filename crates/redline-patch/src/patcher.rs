//! In-document application and removal of highlighted edits.

use std::sync::LazyLock;

use redline_core::Suggestion;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::html::escape_html;

/// Class carried by every highlight marker; the strip and count passes key
/// on this exact string, so it must not change between apply and strip.
const HIGHLIGHT_CLASS: &str = "highlight-change";

const MARKER_PREFIX: &str = r#"<span class="highlight-change""#;

static STRIP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="highlight-change"[^>]*>([^<]*)</span>"#)
        .expect("Invalid strip regex")
});

/// A byte range of the document claimed by a replacement.
#[derive(Debug)]
struct Claim {
    start: usize,
    end: usize,
    replacement: String,
}

fn overlaps(claims: &[Claim], start: usize, end: usize) -> bool {
    claims.iter().any(|c| start < c.end && end > c.start)
}

/// The escaped suggested text wrapped in a marker that records the escaped
/// original, so the displaced text stays recoverable from the document.
fn marker(original: &str, suggested: &str) -> String {
    format!(
        r#"<span class="{}" data-original="{}">{}</span>"#,
        HIGHLIGHT_CLASS,
        escape_html(original),
        escape_html(suggested)
    )
}

/// Collect the ranges one suggestion claims in `content`, skipping any
/// candidate that intersects an existing claim.
///
/// The exact-case pass wins outright; the case-insensitive pass only runs
/// when the exact pass claimed nothing.
fn claim_matches(content: &str, needle: &str, replacement: &str, claims: &mut Vec<Claim>) {
    let exact: Vec<(usize, usize)> = content
        .match_indices(needle)
        .map(|(start, matched)| (start, start + matched.len()))
        .filter(|&(start, end)| !overlaps(claims, start, end))
        .collect();

    if !exact.is_empty() {
        for (start, end) in exact {
            claims.push(Claim {
                start,
                end,
                replacement: replacement.to_string(),
            });
        }
        return;
    }

    let Ok(insensitive) = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    else {
        return;
    };
    for m in insensitive.find_iter(content) {
        if !overlaps(claims, m.start(), m.end()) {
            claims.push(Claim {
                start: m.start(),
                end: m.end(),
                replacement: replacement.to_string(),
            });
        }
    }
}

/// Apply one accepted suggestion, wrapping every occurrence of its original
/// fragment in a highlight marker. A fragment that never occurs (exact or
/// case-insensitive) leaves the document unchanged.
pub fn apply_suggestion(content: &str, suggestion: &Suggestion) -> String {
    apply_suggestions(content, std::slice::from_ref(suggestion))
}

/// Apply a set of accepted suggestions to raw HTML content.
///
/// Longer original fragments are matched first, and every replacement
/// claims the byte range it covers; candidate matches overlapping a claimed
/// range are dropped. A fragment that is a substring of an already-applied
/// longer fragment therefore never splits the longer replacement, and
/// replacement output is never itself re-matched.
pub fn apply_suggestions(content: &str, suggestions: &[Suggestion]) -> String {
    let mut ordered: Vec<&Suggestion> = suggestions.iter().collect();
    ordered.sort_by(|a, b| b.original.len().cmp(&a.original.len()));

    let mut claims: Vec<Claim> = Vec::new();
    for suggestion in ordered {
        if suggestion.original.is_empty() || suggestion.suggested.is_empty() {
            continue;
        }

        let needle = escape_html(&suggestion.original);
        let replacement = marker(&suggestion.original, &suggestion.suggested);
        let before = claims.len();
        claim_matches(content, &needle, &replacement, &mut claims);
        if claims.len() == before {
            debug!("no occurrence of {:?} in document", suggestion.original);
        }
    }

    if claims.is_empty() {
        return content.to_string();
    }
    claims.sort_by_key(|c| c.start);

    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    for claim in &claims {
        out.push_str(&content[cursor..claim.start]);
        out.push_str(&claim.replacement);
        cursor = claim.end;
    }
    out.push_str(&content[cursor..]);
    out
}

/// Remove every highlight marker, keeping exactly its replacement text.
///
/// Identity on documents without markers; idempotent.
pub fn strip_annotations(content: &str) -> String {
    STRIP_REGEX.replace_all(content, "$1").into_owned()
}

/// Number of highlight markers still present; the workflow uses this as a
/// "has pending changes" signal.
pub fn count_annotations(content: &str) -> usize {
    content.matches(MARKER_PREFIX).count()
}
