//! Axum route handler for follow-up suggestions.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggest::suggester::suggest_next;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub last_prompt: String,
    pub last_response: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: [String; 2],
}

/// POST /suggest-next
pub async fn handle_suggest_next(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, AppError> {
    let Json(request) = payload?;

    let suggestions = suggest_next(
        state.llm.as_ref(),
        &request.last_prompt,
        &request.last_response,
        request.api_key.as_deref(),
        state.default_api_key(),
    )
    .await;

    Ok(Json(SuggestResponse { suggestions }))
}
