// LLM prompt constants for the rewrite orchestrator.

/// Rewrite prompt template. Replace `{text}` and `{goal}` before sending.
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"Rewrite this prompt to be more effective:

"{text}"

Goal: {goal}

Add role, output format, and constraints. Return the rewritten prompt directly with no preamble or explanation."#;

/// Boilerplate lead-ins the model sometimes emits despite instructions.
/// Compared case-insensitively against the start of the response, in order.
pub const PREAMBLES: &[&str] = &[
    "here is the rewritten prompt:",
    "here's the rewritten prompt:",
    "rewritten prompt:",
    "improved prompt:",
    "here is an improved version:",
    "here's an improved version:",
];
