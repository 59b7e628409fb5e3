//! Analysis prompt handed to the external chat assistant.

use redline_patch::extract_text_content;

/// Build the fact-check prompt for one post. The correction format
/// requested here is what the suggestion parser expects back.
pub fn build_analysis_prompt(title: &str, content: &str) -> String {
    format!(
        r#"Please fact-check the following blog post and provide corrections in this format:

MUST FIX (high priority):
1. [Description] - Change "[original text]" to "[corrected text]" because [reason]

SHOULD FIX (medium priority):
1. [Description] - Change "[original text]" to "[corrected text]" because [reason]

CONSIDER (low priority):
1. [Description] - Change "[original text]" to "[corrected text]" because [reason]

Blog Title: {title}

Blog Content:
{content}

Please analyze for:
- Factual errors
- Outdated information
- Grammar and spelling issues
- Clarity and readability improvements
- Style consistency"#,
        title = title,
        content = extract_text_content(content),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_title_and_plain_text() {
        let prompt = build_analysis_prompt("My Post", "<p>Hello <em>world</em></p>");
        assert!(prompt.contains("Blog Title: My Post"));
        assert!(prompt.contains("Hello world"));
        assert!(!prompt.contains("<p>"));
    }

    #[test]
    fn test_prompt_requests_the_correction_format() {
        let prompt = build_analysis_prompt("T", "<p>c</p>");
        assert!(prompt.contains("MUST FIX (high priority):"));
        assert!(prompt.contains("SHOULD FIX (medium priority):"));
        assert!(prompt.contains("CONSIDER (low priority):"));
    }
}
