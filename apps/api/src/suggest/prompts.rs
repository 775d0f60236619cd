// LLM prompt constants for follow-up suggestions.

/// Replace `{last_prompt}` and `{last_response}` before sending.
pub const SUGGEST_PROMPT_TEMPLATE: &str = r#"Based on this conversation, suggest TWO different follow-up prompts:

User's last prompt: "{last_prompt}"

AI's response: "{last_response}"

Suggest 2 distinct follow-up prompts that:
1. Build on the conversation naturally
2. Take different angles or directions
3. Are specific and actionable

Format as:
1. [first prompt]
2. [second prompt]

Return ONLY these two numbered prompts, no preamble."#;

/// Returned when no credential is available.
pub const NO_KEY_SUGGESTIONS: [&str; 2] = [
    "Continue exploring this topic in more depth.",
    "Can you provide a practical example?",
];

/// Returned when the call fails or the reply yields fewer than two items.
pub const FALLBACK_SUGGESTIONS: [&str; 2] = [
    "Can you elaborate on the key points you mentioned?",
    "What are some practical applications of this?",
];
