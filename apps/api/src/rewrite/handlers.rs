//! Axum route handler for prompt scoring and rewriting.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::{detect_goal, score_prompt, Goal};
use crate::errors::AppError;
use crate::rewrite::rewriter::rewrite_with_llm;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub text: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u32,
    pub rewrite: String,
    pub goal: Goal,
}

/// POST /score
///
/// Detects the goal and scores the prompt locally, then rewrites it.
/// Always 200 for a well-formed body, whether or not the LLM was reachable.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(request) = payload?;

    let goal = detect_goal(&request.text);
    let score = score_prompt(&request.text);
    let rewrite = rewrite_with_llm(
        state.llm.as_ref(),
        &request.text,
        goal,
        request.api_key.as_deref(),
        state.default_api_key(),
    )
    .await;

    Ok(Json(ScoreResponse {
        score,
        rewrite,
        goal,
    }))
}
