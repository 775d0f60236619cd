pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::metadata::handlers::handle_infer_metadata;
use crate::rewrite::handlers::handle_score;
use crate::state::AppState;
use crate::suggest::handlers::handle_suggest_next;

/// Builds the service router. CORS is wide open (any origin, method and
/// header) since callers are local browser extensions.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/score", post(handle_score))
        .route("/suggest-next", post(handle_suggest_next))
        .route("/infer-metadata", post(handle_infer_metadata))
        .with_state(state)
        .layer(CorsLayer::permissive())
}
