//! Severity and type classification heuristics.

use std::sync::LazyLock;

use redline_core::{Severity, SuggestionType};
use regex::Regex;

/// Section headers that scope the severity of the lines following them.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(MUST FIX|SHOULD FIX|CONSIDER|HIGH PRIORITY|MEDIUM PRIORITY|LOW PRIORITY|IMPORTANT|MINOR)",
    )
    .expect("Invalid header regex")
});

/// Returns the severity a section header establishes, or `None` when the
/// line is not a header.
pub(crate) fn header_severity(line: &str) -> Option<Severity> {
    if !HEADER_REGEX.is_match(line) {
        return None;
    }

    let upper = line.to_uppercase();
    if upper.contains("MUST FIX") || upper.contains("HIGH PRIORITY") {
        return Some(Severity::High);
    }
    if upper.contains("SHOULD FIX") || upper.contains("MEDIUM PRIORITY") || upper.contains("IMPORTANT")
    {
        return Some(Severity::Medium);
    }
    if upper.contains("CONSIDER") || upper.contains("LOW PRIORITY") || upper.contains("MINOR") {
        return Some(Severity::Low);
    }

    Some(Severity::Medium)
}

/// Infer what kind of correction a line proposes from its keywords.
pub(crate) fn infer_type(line: &str) -> SuggestionType {
    let lower = line.to_lowercase();

    if lower.contains("factual") || lower.contains("incorrect") || lower.contains("wrong") {
        return SuggestionType::Factual;
    }
    if lower.contains("grammar") || lower.contains("spelling") || lower.contains("typo") {
        return SuggestionType::Grammar;
    }
    if lower.contains("clarity") || lower.contains("confusing") || lower.contains("unclear") {
        return SuggestionType::Clarity;
    }
    if lower.contains("style") || lower.contains("tone") {
        return SuggestionType::Style;
    }

    SuggestionType::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_severity_tiers() {
        assert_eq!(header_severity("MUST FIX (high priority):"), Some(Severity::High));
        assert_eq!(header_severity("high priority issues"), Some(Severity::High));
        assert_eq!(header_severity("SHOULD FIX:"), Some(Severity::Medium));
        assert_eq!(header_severity("Important notes"), Some(Severity::Medium));
        assert_eq!(header_severity("CONSIDER (low priority):"), Some(Severity::Low));
        assert_eq!(header_severity("minor issues:"), Some(Severity::Low));
    }

    #[test]
    fn test_header_severity_is_case_insensitive() {
        assert_eq!(header_severity("must fix:"), Some(Severity::High));
        assert_eq!(header_severity("consider these"), Some(Severity::Low));
    }

    #[test]
    fn test_header_only_matches_line_start() {
        assert_eq!(header_severity("you really must fix this"), None);
        assert_eq!(header_severity("Change \"a\" to \"b\" because c"), None);
    }

    #[test]
    fn test_infer_type_keywords() {
        assert_eq!(infer_type("the price is wrong"), SuggestionType::Factual);
        assert_eq!(infer_type("Incorrect revenue figure"), SuggestionType::Factual);
        assert_eq!(infer_type("fix this typo"), SuggestionType::Grammar);
        assert_eq!(infer_type("Spelling error"), SuggestionType::Grammar);
        assert_eq!(infer_type("this sentence is confusing"), SuggestionType::Clarity);
        assert_eq!(infer_type("tone is too casual"), SuggestionType::Style);
        assert_eq!(infer_type("replace the quote"), SuggestionType::Other);
    }
}
