//! Metadata orchestrator.
//!
//! Flow: resolve credential → (none) local title + `Other`
//!                          → (some) one LLM call → parse TITLE/CATEGORY lines.
//! Provider failures use the same local heuristic as the no-credential path.

use tracing::{debug, warn};

use crate::credentials::resolve_api_key;
use crate::llm_client::prompts::render;
use crate::llm_client::{CompletionProvider, CompletionRequest};
use crate::metadata::parser::parse_metadata;
use crate::metadata::prompts::METADATA_PROMPT_TEMPLATE;
use crate::metadata::{Category, PromptMetadata};

const METADATA_MAX_TOKENS: u32 = 150;

/// Prompts longer than this many characters are truncated for the local title.
const LOCAL_TITLE_CHARS: usize = 50;
const ELLIPSIS: &str = "...";

/// Infers a title and category for `prompt`. Never returns an error.
pub async fn infer_metadata(
    llm: &dyn CompletionProvider,
    prompt: &str,
    request_key: Option<&str>,
    default_key: Option<&str>,
) -> PromptMetadata {
    let Some(api_key) = resolve_api_key(request_key, default_key) else {
        return local_metadata(prompt);
    };

    let instruction = render(METADATA_PROMPT_TEMPLATE, &[("prompt", prompt)]);

    match llm
        .complete(CompletionRequest {
            api_key,
            prompt: &instruction,
            max_tokens: METADATA_MAX_TOKENS,
        })
        .await
    {
        Ok(raw) => {
            debug!("Metadata inference result: {}", raw.trim());
            parse_metadata(raw.trim())
        }
        Err(e) => {
            warn!("Metadata inference failed, using local title: {e}");
            local_metadata(prompt)
        }
    }
}

/// Network-free metadata: the prompt itself as title, truncated when long.
pub fn local_metadata(prompt: &str) -> PromptMetadata {
    let title = match prompt.char_indices().nth(LOCAL_TITLE_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &prompt[..cut]),
        None => prompt.to_string(),
    };
    PromptMetadata {
        title,
        category: Category::Other,
    }
}
