//! Suggestion orchestrator.
//!
//! Flow: resolve credential → (none) static no-key list
//!                          → (some) one LLM call → parse numbered list.
//! Parse shortfalls and provider failures both yield the fallback list;
//! partial model output is never mixed with fallback text.

use tracing::{debug, warn};

use crate::credentials::resolve_api_key;
use crate::llm_client::prompts::render;
use crate::llm_client::{CompletionProvider, CompletionRequest};
use crate::suggest::parser::parse_suggestions;
use crate::suggest::prompts::{FALLBACK_SUGGESTIONS, NO_KEY_SUGGESTIONS, SUGGEST_PROMPT_TEMPLATE};

const SUGGEST_MAX_TOKENS: u32 = 400;

/// Only this many characters of the previous response are sent upstream.
const RESPONSE_CONTEXT_CHARS: usize = 1500;

/// Suggests exactly two follow-up prompts. Never returns an error.
pub async fn suggest_next(
    llm: &dyn CompletionProvider,
    last_prompt: &str,
    last_response: &str,
    request_key: Option<&str>,
    default_key: Option<&str>,
) -> [String; 2] {
    let Some(api_key) = resolve_api_key(request_key, default_key) else {
        return NO_KEY_SUGGESTIONS.map(str::to_string);
    };

    let prompt = render(
        SUGGEST_PROMPT_TEMPLATE,
        &[
            ("last_prompt", last_prompt),
            ("last_response", truncate_chars(last_response, RESPONSE_CONTEXT_CHARS)),
        ],
    );

    let raw = match llm
        .complete(CompletionRequest {
            api_key,
            prompt: &prompt,
            max_tokens: SUGGEST_MAX_TOKENS,
        })
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Suggestion call failed, using fallback: {e}");
            return FALLBACK_SUGGESTIONS.map(str::to_string);
        }
    };

    debug!("Suggestion raw response: {}", raw.trim());

    match parse_suggestions(raw.trim()) {
        Some(suggestions) => {
            debug!("Parsed suggestions: {suggestions:?}");
            suggestions
        }
        None => {
            warn!("Not enough suggestions in LLM reply, using fallback");
            FALLBACK_SUGGESTIONS.map(str::to_string)
        }
    }
}

/// Returns at most the first `max` characters of `text`.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubProvider;

    fn owned(items: [&str; 2]) -> [String; 2] {
        items.map(str::to_string)
    }

    #[tokio::test]
    async fn test_no_credential_returns_static_list() {
        let llm = StubProvider::replying("1. A\n2. B");
        let out = suggest_next(&llm, "p", "r", None, Some("")).await;
        assert_eq!(out, owned(NO_KEY_SUGGESTIONS));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_parsed_suggestions_are_returned() {
        let llm = StubProvider::replying("1. Explore X\n2. Try Y\n");
        let out = suggest_next(&llm, "p", "r", Some("sk"), None).await;
        assert_eq!(out, ["Explore X".to_string(), "Try Y".to_string()]);
    }

    #[tokio::test]
    async fn test_single_suggestion_falls_back_entirely() {
        let llm = StubProvider::replying("1. Only one idea");
        let out = suggest_next(&llm, "p", "r", Some("sk"), None).await;
        assert_eq!(out, owned(FALLBACK_SUGGESTIONS));
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back() {
        let llm = StubProvider::failing(500);
        let out = suggest_next(&llm, "p", "r", None, Some("sk-env")).await;
        assert_eq!(out, owned(FALLBACK_SUGGESTIONS));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_whitespace_key_is_sent_and_failure_uses_fallback() {
        let llm = StubProvider::failing(401);
        let out = suggest_next(&llm, "p", "r", Some("   "), None).await;
        assert_eq!(out, owned(FALLBACK_SUGGESTIONS));
        assert_eq!(llm.calls(), 1);
        assert_eq!(llm.last_request().unwrap().0, "   ");
    }

    #[tokio::test]
    async fn test_whitespace_key_outranks_default() {
        let llm = StubProvider::replying("1. A\n2. B");
        let out = suggest_next(&llm, "p", "r", Some("   "), Some("sk-env")).await;
        assert_eq!(out, ["A".to_string(), "B".to_string()]);
        assert_eq!(llm.last_request().unwrap().0, "   ");
    }

    #[tokio::test]
    async fn test_prompt_embeds_truncated_response() {
        let llm = StubProvider::replying("1. A\n2. B");
        let long_response = format!("{}{}", "a".repeat(1500), "TAIL");
        suggest_next(&llm, "my question", &long_response, Some("sk"), None).await;

        let (_, prompt, max_tokens) = llm.last_request().unwrap();
        assert_eq!(max_tokens, 400);
        assert!(prompt.contains("User's last prompt: \"my question\""));
        assert!(prompt.contains(&format!("AI's response: \"{}\"", "a".repeat(1500))));
        assert!(!prompt.contains("TAIL"));
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("", 3), "");
    }
}
