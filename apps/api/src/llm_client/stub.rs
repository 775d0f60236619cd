//! Test double for `CompletionProvider`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionProvider, CompletionRequest, LlmError};

/// Replays a canned reply and records every request it sees.
pub struct StubProvider {
    reply: Result<String, u16>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String, u32)>>,
}

impl StubProvider {
    /// Succeeds with `text` on every call.
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    /// Fails every call with an API error of the given status.
    pub fn failing(status: u16) -> Self {
        Self::with_reply(Err(status))
    }

    fn with_reply(reply: Result<String, u16>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(api_key, prompt, max_tokens)` of the most recent call.
    pub fn last_request(&self) -> Option<(String, String, u32)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((
            request.api_key.to_string(),
            request.prompt.to_string(),
            request.max_tokens,
        ));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::Api {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
        }
    }
}
