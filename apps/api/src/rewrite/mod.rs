// Prompt rewriting: scores the prompt, then asks the LLM for an improved
// version, falling back to a fixed template when no call can be made.
// All LLM calls go through llm_client, never directly to Anthropic.

pub mod handlers;
pub mod prompts;
pub mod rewriter;
pub mod template;
