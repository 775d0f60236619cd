//! LLM rewrite orchestrator.
//!
//! Flow: resolve credential → (none) template rewrite
//!                          → (some) one LLM call → strip preamble → return.
//! Any provider failure degrades to the template rewrite; callers always get text.

use tracing::{debug, warn};

use crate::analysis::Goal;
use crate::credentials::resolve_api_key;
use crate::llm_client::prompts::render;
use crate::llm_client::{CompletionProvider, CompletionRequest};
use crate::rewrite::prompts::{PREAMBLES, REWRITE_PROMPT_TEMPLATE};
use crate::rewrite::template::rewrite_template;

/// Enough for a multi-line rewrite while keeping latency low.
const REWRITE_MAX_TOKENS: u32 = 500;

/// Rewrites `text` via the LLM, or via the template when no credential
/// resolves or the call fails. Never returns an error.
pub async fn rewrite_with_llm(
    llm: &dyn CompletionProvider,
    text: &str,
    goal: Goal,
    request_key: Option<&str>,
    default_key: Option<&str>,
) -> String {
    let Some(api_key) = resolve_api_key(request_key, default_key) else {
        return rewrite_template(text, goal);
    };

    let prompt = render(
        REWRITE_PROMPT_TEMPLATE,
        &[("text", text), ("goal", goal.label())],
    );

    match llm
        .complete(CompletionRequest {
            api_key,
            prompt: &prompt,
            max_tokens: REWRITE_MAX_TOKENS,
        })
        .await
    {
        Ok(raw) => {
            debug!("LLM rewrite raw response: {raw}");
            strip_preamble(raw.trim()).to_string()
        }
        Err(e) => {
            warn!("LLM rewrite failed, using template: {e}");
            rewrite_template(text, goal)
        }
    }
}

/// Removes the first known boilerplate lead-in (case-insensitive) and the
/// whitespace after it. Text without a known preamble is returned unchanged.
pub fn strip_preamble(text: &str) -> &str {
    for preamble in PREAMBLES {
        let matches = text
            .get(..preamble.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(preamble));
        if matches {
            return text[preamble.len()..].trim();
        }
    }
    text
}
