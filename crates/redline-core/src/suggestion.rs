use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority tier of a suggestion, derived from the section of the assistant
/// response it appeared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    #[default]
    Medium,
    Low,
}

impl Severity {
    /// Human-readable label for terminal display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High Priority",
            Severity::Medium => "Medium Priority",
            Severity::Low => "Low Priority",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(format!("Invalid severity: {}", s)),
        }
    }
}

/// Kind of correction a suggestion makes, inferred from keywords in the
/// line it was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Factual,
    Grammar,
    Clarity,
    Style,
    #[default]
    Other,
}

impl std::fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SuggestionType::Factual => "factual",
            SuggestionType::Grammar => "grammar",
            SuggestionType::Clarity => "clarity",
            SuggestionType::Style => "style",
            SuggestionType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for SuggestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "factual" => Ok(SuggestionType::Factual),
            "grammar" => Ok(SuggestionType::Grammar),
            "clarity" => Ok(SuggestionType::Clarity),
            "style" => Ok(SuggestionType::Style),
            "other" => Ok(SuggestionType::Other),
            _ => Err(format!("Invalid suggestion type: {}", s)),
        }
    }
}

/// A structured proposed text edit extracted from an assistant response.
///
/// Suggestions are built in bulk by the parser, filtered once by the
/// validation pass, and consumed read-only by the patcher. Nothing mutates
/// a suggestion after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Stable per-parse identifier, used as the selection key during review.
    pub id: String,
    /// Text fragment expected to occur in the source document.
    pub original: String,
    /// Replacement fragment; never equal to `original` after validation.
    pub suggested: String,
    /// Free-text rationale; may be empty.
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(rename = "type", default)]
    pub kind: SuggestionType,
}

impl Suggestion {
    /// Build a suggestion with a freshly generated id.
    pub fn new(
        original: impl Into<String>,
        suggested: impl Into<String>,
        reason: impl Into<String>,
        severity: Severity,
        kind: SuggestionType,
    ) -> Self {
        Self {
            id: format!("suggestion-{}", Uuid::new_v4()),
            original: original.into(),
            suggested: suggested.into(),
            reason: reason.into(),
            severity,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_defaults_to_medium() {
        assert_eq!(Severity::default(), Severity::Medium);
    }

    #[test]
    fn test_severity_display_round_trip() {
        for severity in [Severity::High, Severity::Medium, Severity::Low] {
            let parsed: Severity = severity.to_string().parse().unwrap();
            assert_eq!(parsed, severity);
        }
    }

    #[test]
    fn test_type_defaults_to_other() {
        assert_eq!(SuggestionType::default(), SuggestionType::Other);
    }

    #[test]
    fn test_suggestion_ids_are_unique() {
        let a = Suggestion::new("x", "y", "", Severity::Medium, SuggestionType::Other);
        let b = Suggestion::new("x", "y", "", Severity::Medium, SuggestionType::Other);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("suggestion-"));
    }

    #[test]
    fn test_suggestion_serializes_kind_as_type() {
        let s = Suggestion::new("a", "b", "typo", Severity::High, SuggestionType::Grammar);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "grammar");
        assert_eq!(json["severity"], "high");
    }

    #[test]
    fn test_suggestion_deserializes_with_defaults() {
        let json = r#"{"id":"suggestion-1","original":"a","suggested":"b"}"#;
        let s: Suggestion = serde_json::from_str(json).unwrap();
        assert_eq!(s.reason, "");
        assert_eq!(s.severity, Severity::Medium);
        assert_eq!(s.kind, SuggestionType::Other);
    }
}
