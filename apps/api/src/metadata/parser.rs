//! Line-prefix parsing of `TITLE:` / `CATEGORY:` replies.

use crate::metadata::prompts::{CATEGORY_PREFIX, TITLE_PREFIX, UNTITLED};
use crate::metadata::{Category, PromptMetadata};

/// Parses a provider reply. Missing titles become "Untitled Prompt";
/// categories outside the whitelist leave the default `Other` in place.
/// Later lines override earlier ones.
pub fn parse_metadata(raw: &str) -> PromptMetadata {
    let mut title: Option<String> = None;
    let mut category = Category::default();

    for line in raw.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
            title = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(CATEGORY_PREFIX) {
            if let Some(parsed) = Category::from_name(&rest.trim().to_lowercase()) {
                category = parsed;
            }
        }
    }

    PromptMetadata {
        title: title.unwrap_or_else(|| UNTITLED.to_string()),
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_title_and_category() {
        let meta = parse_metadata("TITLE: Fix Login Bug\nCATEGORY: coding");
        assert_eq!(meta.title, "Fix Login Bug");
        assert_eq!(meta.category, Category::Coding);
    }

    #[test]
    fn test_unknown_category_stays_other() {
        let meta = parse_metadata("CATEGORY: nonsense");
        assert_eq!(meta.category, Category::Other);
        assert_eq!(meta.title, "Untitled Prompt");
    }

    #[test]
    fn test_category_is_case_insensitive_and_trimmed() {
        let meta = parse_metadata("  TITLE:   Poem About Rain  \n  CATEGORY:  Creative ");
        assert_eq!(meta.title, "Poem About Rain");
        assert_eq!(meta.category, Category::Creative);
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        let meta = parse_metadata("title: lower\ncategory: coding");
        assert_eq!(meta.title, "Untitled Prompt");
        assert_eq!(meta.category, Category::Other);
    }

    #[test]
    fn test_surrounding_prose_is_ignored() {
        let raw = "Sure! Here it is.\nTITLE: Quarterly Sales Review\nCATEGORY: analysis\nThanks.";
        let meta = parse_metadata(raw);
        assert_eq!(meta.title, "Quarterly Sales Review");
        assert_eq!(meta.category, Category::Analysis);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Writing).unwrap(), "\"writing\"");
    }
}
