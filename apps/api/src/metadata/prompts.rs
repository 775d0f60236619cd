// LLM prompt constants for metadata inference.

/// Replace `{prompt}` before sending.
pub const METADATA_PROMPT_TEMPLATE: &str = r#"Analyze this prompt and provide a title and category.

Prompt: "{prompt}"

Categories: coding, writing, analysis, creative, other

Respond in this exact format:
TITLE: [short descriptive title, max 5 words]
CATEGORY: [one of: coding, writing, analysis, creative, other]"#;

pub const TITLE_PREFIX: &str = "TITLE:";
pub const CATEGORY_PREFIX: &str = "CATEGORY:";

/// Used when the reply has no TITLE line.
pub const UNTITLED: &str = "Untitled Prompt";
