//! Ordered fragment-extraction patterns for correction lines.
//!
//! Five formats are recognized, tried in priority order; the first that
//! matches wins and no later pattern is consulted. Single and double quotes
//! both delimit fragments.

use std::sync::LazyLock;

use regex::Regex;

/// Fragments pulled out of a single correction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Extraction {
    pub original: String,
    pub suggested: String,
    pub reason: String,
}

// Pattern 1: Change "X" to "Y" because/- reason
static CHANGE_TO_REASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)change\s+["']([^"']+)["']\s+to\s+["']([^"']+)["']\s*(?:because|[-–—])\s*(.+)"#)
        .expect("Invalid change-to pattern")
});

// Pattern 2: "X" to "Y" - reason
static TO_DASH_REASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)["']([^"']+)["']\s+to\s+["']([^"']+)["']\s*[-–—]\s*(.+)"#)
        .expect("Invalid to-dash pattern")
});

// Pattern 3: "X" should be "Y" (reason)
static SHOULD_BE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)["']([^"']+)["']\s+should\s+be\s+["']([^"']+)["']\s*(?:\((.+)\))?"#)
        .expect("Invalid should-be pattern")
});

// Pattern 4: Description - "X" -> "Y"
static REASON_THEN_ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(.+?)\s*[-–—]\s*["']([^"']+)["']\s*(?:->|→|to)\s*["']([^"']+)["']"#)
        .expect("Invalid reason-arrow pattern")
});

// Pattern 5 (fallback): any quoted fragment
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']([^"']+)["']"#).expect("Invalid quoted pattern"));

fn change_to_reason(line: &str) -> Option<Extraction> {
    CHANGE_TO_REASON.captures(line).map(|cap| Extraction {
        original: cap[1].trim().to_string(),
        suggested: cap[2].trim().to_string(),
        reason: cap[3].trim().to_string(),
    })
}

fn to_dash_reason(line: &str) -> Option<Extraction> {
    TO_DASH_REASON.captures(line).map(|cap| Extraction {
        original: cap[1].trim().to_string(),
        suggested: cap[2].trim().to_string(),
        reason: cap[3].trim().to_string(),
    })
}

fn should_be(line: &str) -> Option<Extraction> {
    SHOULD_BE.captures(line).map(|cap| Extraction {
        original: cap[1].trim().to_string(),
        suggested: cap[2].trim().to_string(),
        reason: cap
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

fn reason_then_arrow(line: &str) -> Option<Extraction> {
    REASON_THEN_ARROW.captures(line).map(|cap| Extraction {
        reason: cap[1].trim().to_string(),
        original: cap[2].trim().to_string(),
        suggested: cap[3].trim().to_string(),
    })
}

/// Last resort: a line with two or more quoted fragments is read as
/// original/suggested, with the unquoted residue as the reason. Known
/// limitation: unrelated quoted text (a quoted proper noun next to a quoted
/// correction) misfires here.
fn quoted_pair(line: &str) -> Option<Extraction> {
    let quoted: Vec<&str> = QUOTED
        .captures_iter(line)
        .map(|cap| cap.get(1).unwrap().as_str())
        .collect();
    if quoted.len() < 2 {
        return None;
    }

    Some(Extraction {
        original: quoted[0].trim().to_string(),
        suggested: quoted[1].trim().to_string(),
        reason: QUOTED.replace_all(line, "").trim().to_string(),
    })
}

type Matcher = fn(&str) -> Option<Extraction>;

/// Priority order; earlier entries win.
const MATCHERS: [Matcher; 5] = [
    change_to_reason,
    to_dash_reason,
    should_be,
    reason_then_arrow,
    quoted_pair,
];

/// Try each extraction pattern in order; `None` means the line carries no
/// recognizable correction.
pub(crate) fn match_line(line: &str) -> Option<Extraction> {
    MATCHERS.iter().find_map(|matcher| matcher(line))
}
