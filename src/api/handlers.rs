use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::AppError;
use crate::similarity::{cosine_similarity, score_pairs};
use crate::AppState;

use super::models::{
    AnswerResponse, BatchComparisonInput, BatchSimilarityScore, HealthResponse, QuestionRequest,
    SimilarityScore, TextComparisonInput,
};

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))
}

pub async fn ask(
    State(state): State<AppState>,
    raw: Bytes,
) -> Result<Json<AnswerResponse>, AppError> {
    let request = QuestionRequest::from_json(&raw)
        .inspect_err(|e| tracing::debug!(error = %e, "rejected /ask body"))?;
    let (question, context) = request
        .fields()
        .inspect_err(|e| tracing::debug!(error = %e, "rejected /ask fields"))?;

    let answer = state
        .answerer
        .answer(question, context)
        .await
        .inspect_err(|e| {
            tracing::warn!(answerer = state.answerer.name(), error = %e, "answering failed")
        })?;

    Ok(Json(AnswerResponse { answer }))
}

pub async fn compare(
    payload: Result<Json<TextComparisonInput>, JsonRejection>,
) -> Result<Json<SimilarityScore>, AppError> {
    let input = body(payload)?;
    Ok(Json(SimilarityScore {
        score: cosine_similarity(&input.text1, &input.text2),
    }))
}

pub async fn compare_batch(
    payload: Result<Json<BatchComparisonInput>, JsonRejection>,
) -> Result<Json<BatchSimilarityScore>, AppError> {
    let input = body(payload)?;
    if input.ground_truth.len() != input.generated_answers.len() {
        return Err(AppError::LengthMismatch);
    }
    Ok(Json(BatchSimilarityScore {
        scores: score_pairs(&input.ground_truth, &input.generated_answers),
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "qa-service",
        version: env!("CARGO_PKG_VERSION"),
        answerer: state.answerer.name(),
    })
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
