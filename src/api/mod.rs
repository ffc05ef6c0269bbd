mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use handlers::{ask, compare, compare_batch, health, method_not_allowed, not_found};
pub use models::{
    AnswerResponse, BatchComparisonInput, BatchSimilarityScore, ErrorResponse, HealthResponse,
    QuestionRequest, SimilarityScore, TextComparisonInput,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask).fallback(method_not_allowed))
        .route("/compare", post(compare).fallback(method_not_allowed))
        .route("/compare/batch", post(compare_batch).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
