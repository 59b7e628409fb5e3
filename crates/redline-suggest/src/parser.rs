//! Line-oriented scan over assistant response text.

use std::sync::LazyLock;

use redline_core::{Severity, Suggestion};
use regex::Regex;
use tracing::debug;

use crate::classify::{header_severity, infer_type};
use crate::matchers::match_line;

/// Lines consisting solely of enumeration characters carry no content.
static NOISE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.\-*()]+$").expect("Invalid noise-line regex"));

/// Leading enumeration markers ("1.", "-", "*", "2)") before the content.
static LEADING_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.\-*()]+\s*").expect("Invalid marker regex"));

/// Anything shorter than this after marker stripping is noise.
const MIN_LINE_LEN: usize = 5;

/// Scan state threaded through the fold: the severity established by the
/// most recent section header, plus the suggestions collected so far.
struct Scan {
    severity: Severity,
    suggestions: Vec<Suggestion>,
}

/// Extract structured suggestions from free-form correction text.
///
/// A single pass over the lines. Section headers switch the severity
/// applied to the lines after them; every other line is normalized and run
/// through the extraction patterns. Lines that match nothing are skipped.
/// An empty result is a real outcome the caller must surface to the user,
/// not an error.
pub fn parse_suggestions(raw: &str) -> Vec<Suggestion> {
    let scan = raw.lines().fold(
        Scan {
            severity: Severity::Medium,
            suggestions: Vec::new(),
        },
        |mut scan, line| {
            let line = line.trim();
            if line.is_empty() {
                return scan;
            }

            if let Some(severity) = header_severity(line) {
                scan.severity = severity;
                return scan;
            }

            if NOISE_LINE.is_match(line) {
                return scan;
            }

            let cleaned = LEADING_MARKERS.replace(line, "");
            let cleaned = cleaned.trim();
            if cleaned.chars().count() < MIN_LINE_LEN {
                return scan;
            }

            match match_line(cleaned) {
                Some(extraction)
                    if !extraction.original.is_empty() && !extraction.suggested.is_empty() =>
                {
                    scan.suggestions.push(Suggestion::new(
                        extraction.original,
                        extraction.suggested,
                        extraction.reason,
                        scan.severity,
                        infer_type(cleaned),
                    ));
                }
                Some(_) => {}
                None => debug!("no pattern matched line: {:?}", cleaned),
            }
            scan
        },
    );

    scan.suggestions
}

/// Drop degenerate suggestions: empty fragments or no-op replacements.
///
/// Pure order-preserving filter; surviving entries are untouched.
pub fn validate_suggestions(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    suggestions
        .into_iter()
        .filter(|s| !s.original.is_empty() && !s.suggested.is_empty() && s.original != s.suggested)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline_core::SuggestionType;

    #[test]
    fn test_severity_inherited_from_header() {
        let raw = "MUST FIX:\n1. Change \"foo\" to \"bar\" because baz";
        let suggestions = parse_suggestions(raw);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].original, "foo");
        assert_eq!(suggestions[0].suggested, "bar");
        assert_eq!(suggestions[0].reason, "baz");
        assert_eq!(suggestions[0].severity, Severity::High);
    }

    #[test]
    fn test_severity_switches_between_sections() {
        let raw = r#"MUST FIX (high priority):
1. Change "a" to "b" because first

CONSIDER (low priority):
1. Change "c" to "d" because second
"#;
        let suggestions = parse_suggestions(raw);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].severity, Severity::High);
        assert_eq!(suggestions[1].severity, Severity::Low);
    }

    #[test]
    fn test_severity_defaults_to_medium_without_header() {
        let suggestions = parse_suggestions(r#"Change "x" to "y" because z"#);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].severity, Severity::Medium);
    }

    #[test]
    fn test_header_lines_yield_no_suggestion() {
        let suggestions = parse_suggestions("MUST FIX:\nSHOULD FIX:\nCONSIDER:");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_pattern_three_exact_scenario() {
        let raw = r#""revenue was $5M" should be "revenue was $8M" (per Q3 report)"#;
        let suggestions = parse_suggestions(raw);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].original, "revenue was $5M");
        assert_eq!(suggestions[0].suggested, "revenue was $8M");
        assert_eq!(suggestions[0].reason, "per Q3 report");
    }

    #[test]
    fn test_enumeration_markers_are_stripped() {
        let cases = [
            "1. Change \"a\" to \"b\" because c",
            "- Change \"a\" to \"b\" because c",
            "* Change \"a\" to \"b\" because c",
            "2) Change \"a\" to \"b\" because c",
        ];
        for raw in cases {
            let suggestions = parse_suggestions(raw);
            assert_eq!(suggestions.len(), 1, "failed for {:?}", raw);
            assert_eq!(suggestions[0].original, "a");
        }
    }

    #[test]
    fn test_noise_lines_are_skipped() {
        let raw = "1.\n---\n***\nab\nChange \"a\" to \"b\" because c";
        let suggestions = parse_suggestions(raw);
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn test_unmatched_lines_are_skipped_silently() {
        let raw = "Overall the post is quite good.\nI found no issues with the numbers.";
        assert!(parse_suggestions(raw).is_empty());
    }

    #[test]
    fn test_type_inferred_per_line() {
        let raw = r#"1. Wrong price - "$29" -> "$59"
2. Change "teh" to "the" because typo
3. Change "it" to "the product" because unclear antecedent"#;
        let suggestions = parse_suggestions(raw);

        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].kind, SuggestionType::Factual);
        assert_eq!(suggestions[1].kind, SuggestionType::Grammar);
        assert_eq!(suggestions[2].kind, SuggestionType::Clarity);
    }

    #[test]
    fn test_full_response_end_to_end() {
        let raw = r#"Here are my findings:

MUST FIX (high priority):
1. Wrong revenue - "revenue was $5M" -> "revenue was $8M"

SHOULD FIX (medium priority):
1. Change "teh" to "the" because spelling

CONSIDER (low priority):
1. "very unique" should be "unique" (redundant intensifier)
"#;
        let suggestions = parse_suggestions(raw);

        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].severity, Severity::High);
        assert_eq!(suggestions[0].kind, SuggestionType::Factual);
        assert_eq!(suggestions[1].severity, Severity::Medium);
        assert_eq!(suggestions[1].kind, SuggestionType::Grammar);
        assert_eq!(suggestions[2].severity, Severity::Low);
        assert_eq!(suggestions[2].original, "very unique");
        assert_eq!(suggestions[2].reason, "redundant intensifier");
    }

    #[test]
    fn test_validate_drops_self_equal_suggestions() {
        let keep = Suggestion::new("a", "b", "", Severity::Medium, SuggestionType::Other);
        let drop = Suggestion::new("same", "same", "", Severity::Medium, SuggestionType::Other);
        let kept = validate_suggestions(vec![keep.clone(), drop]);

        assert_eq!(kept, vec![keep]);
    }

    #[test]
    fn test_validate_drops_empty_fragments() {
        let empty_original = Suggestion::new("", "b", "", Severity::Medium, SuggestionType::Other);
        let empty_suggested = Suggestion::new("a", "", "", Severity::Medium, SuggestionType::Other);
        assert!(validate_suggestions(vec![empty_original, empty_suggested]).is_empty());
    }

    #[test]
    fn test_validate_preserves_order() {
        let a = Suggestion::new("a", "b", "", Severity::High, SuggestionType::Other);
        let b = Suggestion::new("c", "d", "", Severity::Low, SuggestionType::Other);
        let c = Suggestion::new("e", "f", "", Severity::Medium, SuggestionType::Other);
        let kept = validate_suggestions(vec![a.clone(), b.clone(), c.clone()]);

        assert_eq!(kept, vec![a, b, c]);
    }

    #[test]
    fn test_empty_input_yields_no_suggestions() {
        assert!(parse_suggestions("").is_empty());
        assert!(parse_suggestions("\n\n\n").is_empty());
    }
}
