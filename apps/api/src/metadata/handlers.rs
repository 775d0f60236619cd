//! Axum route handler for metadata inference.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::metadata::inference::infer_metadata;
use crate::metadata::PromptMetadata;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MetadataRequest {
    pub prompt: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// POST /infer-metadata
///
/// Responds with `{title, category}`.
pub async fn handle_infer_metadata(
    State(state): State<AppState>,
    payload: Result<Json<MetadataRequest>, JsonRejection>,
) -> Result<Json<PromptMetadata>, AppError> {
    let Json(request) = payload?;

    let metadata = infer_metadata(
        state.llm.as_ref(),
        &request.prompt,
        request.api_key.as_deref(),
        state.default_api_key(),
    )
    .await;

    Ok(Json(metadata))
}
